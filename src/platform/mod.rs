//! Window input
//!
//! Polls raylib once per frame and packs the result into a `FrameInput`,
//! so nothing past this module touches raylib key codes.

use glam::Vec2;
use raylib::prelude::*;

use crate::flow::{FrameInput, PressedKeys};
use crate::sim::{PaddleInput, TickInput};

/// Snapshot this frame's input
pub fn poll(rl: &RaylibHandle) -> FrameInput {
    let click = rl
        .is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        .then(|| {
            let pos = rl.get_mouse_position();
            Vec2::new(pos.x, pos.y)
        });

    FrameInput {
        dt: rl.get_frame_time(),
        close_requested: rl.window_should_close(),
        pressed: pressed_keys(rl),
        held: TickInput {
            left: paddle_keys(
                rl,
                [
                    KeyboardKey::KEY_W,
                    KeyboardKey::KEY_S,
                    KeyboardKey::KEY_A,
                    KeyboardKey::KEY_D,
                ],
            ),
            right: paddle_keys(
                rl,
                [
                    KeyboardKey::KEY_UP,
                    KeyboardKey::KEY_DOWN,
                    KeyboardKey::KEY_LEFT,
                    KeyboardKey::KEY_RIGHT,
                ],
            ),
        },
        click,
    }
}

fn pressed_keys(rl: &RaylibHandle) -> PressedKeys {
    let digit = [
        (KeyboardKey::KEY_ONE, 1),
        (KeyboardKey::KEY_TWO, 2),
        (KeyboardKey::KEY_THREE, 3),
    ]
    .into_iter()
    .find(|&(key, _)| rl.is_key_pressed(key))
    .map(|(_, digit)| digit);

    PressedKeys {
        digit,
        next_page: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
        previous_page: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
        confirm: rl.is_key_pressed(KeyboardKey::KEY_ENTER),
        toggle_pause: rl.is_key_pressed(KeyboardKey::KEY_P),
        quit: rl.is_key_pressed(KeyboardKey::KEY_Q),
    }
}

/// Held keys in up, down, left, right order
fn paddle_keys(rl: &RaylibHandle, [up, down, left, right]: [KeyboardKey; 4]) -> PaddleInput {
    PaddleInput {
        up: rl.is_key_down(up),
        down: rl.is_key_down(down),
        left: rl.is_key_down(left),
        right: rl.is_key_down(right),
    }
}
