//! raylib rendering
//!
//! Draws whatever screen the `App` is on. Nothing here mutates game state.

pub mod assets;

pub use assets::Assets;

use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::flow::{App, GameOverPanel, Screen};
use crate::mode::GameMode;
use crate::sim::{MatchState, Rect, Side};

const SCORE_FONT_SIZE: f32 = 80.0;
const LABEL_FONT_SIZE: f32 = 60.0;
const MODE_FONT_SIZE: i32 = 30;

pub fn draw(d: &mut RaylibDrawHandle, app: &App, assets: &Assets) {
    d.clear_background(Color::RAYWHITE);
    match app.screen() {
        Screen::Home => {
            d.draw_texture(assets.home(), 0, 0, Color::WHITE);
        }
        Screen::Instructions { page } => {
            if let Some(texture) = assets.instruction_page(page) {
                d.draw_texture(texture, 0, 0, Color::WHITE);
            }
        }
        Screen::Paused => draw_pause_menu(d, app.game()),
        Screen::Playing | Screen::GameOver => {
            draw_court(d, app, assets);
            draw_hud(d, app.game(), app.mode(), assets);
            if app.screen() == Screen::GameOver {
                draw_game_over(d, app.game_over_panel(), assets);
            }
        }
    }
}

fn draw_court(d: &mut RaylibDrawHandle, app: &App, assets: &Assets) {
    let game = app.game();
    let bundle = app.bundle();

    if let Some(background) = assets.texture(bundle.background) {
        // Stretch to the screen width
        let scale = game.config.screen_width / background.width as f32;
        d.draw_texture_ex(background, Vector2::new(0.0, 0.0), 0.0, scale, Color::WHITE);
    }

    if let Some(paddle) = assets.texture(bundle.paddle) {
        for side in [Side::Left, Side::Right] {
            let pos = game.paddle(side).pos;
            d.draw_texture(paddle, pos.x as i32, pos.y as i32, Color::WHITE);
        }
    }

    if game.ball_active() {
        if let Some(ball) = assets.texture(bundle.ball) {
            let pos = game.ball.pos;
            d.draw_texture(ball, pos.x as i32, pos.y as i32, Color::WHITE);
        }
    }
}

fn draw_hud(d: &mut RaylibDrawHandle, game: &MatchState, mode: GameMode, assets: &Assets) {
    let width = game.config.screen_width;
    let font = assets.font();

    d.draw_text_ex(
        font,
        &game.score.player1.to_string(),
        Vector2::new(width / 4.0, 15.0),
        SCORE_FONT_SIZE,
        2.0,
        Color::WHITE,
    );
    d.draw_text_ex(
        font,
        &game.score.player2.to_string(),
        Vector2::new(3.0 * width / 4.0, 15.0),
        SCORE_FONT_SIZE,
        2.0,
        Color::WHITE,
    );
    d.draw_text_ex(font, "Player 1", Vector2::new(50.0, 50.0), LABEL_FONT_SIZE, 2.0, Color::WHITE);
    d.draw_text_ex(
        font,
        "Player 2",
        Vector2::new(width - 220.0, 50.0),
        LABEL_FONT_SIZE,
        2.0,
        Color::WHITE,
    );

    let label = mode.label();
    let label_x = (width as i32 - measure_text(label, MODE_FONT_SIZE)) / 2;
    d.draw_text(
        label,
        label_x,
        game.config.screen_height as i32 - MODE_FONT_SIZE - 15,
        MODE_FONT_SIZE,
        Color::WHITE,
    );

    if let Some(winner) = game.winner() {
        let (text, x) = match winner {
            Side::Left => ("Player 1 Wins!", 360.0),
            Side::Right => ("Player 2 Wins!", 350.0),
        };
        d.draw_text_ex(font, text, Vector2::new(x, 250.0), SCORE_FONT_SIZE, 2.0, Color::WHITE);
    }
}

fn draw_game_over(d: &mut RaylibDrawHandle, panel: &GameOverPanel, assets: &Assets) {
    let font = assets.font();
    let bar = panel.panel;

    d.draw_rectangle_rec(to_raylib(&bar), Color::DARKBLUE);
    d.draw_text_ex(
        font,
        "Game Over",
        Vector2::new(bar.x + 100.0, bar.y + 15.0),
        50.0,
        1.0,
        Color::WHITE,
    );

    d.draw_rectangle_rec(to_raylib(&panel.restart), Color::LIGHTGRAY);
    d.draw_rectangle_rec(to_raylib(&panel.quit), Color::LIGHTGRAY);
    d.draw_text_ex(
        font,
        "Restart",
        Vector2::new(panel.restart.x + 6.0, panel.restart.y + 6.0),
        35.0,
        1.0,
        Color::DARKBLUE,
    );
    d.draw_text_ex(
        font,
        "Quit",
        Vector2::new(panel.quit.x + 28.0, panel.quit.y + 5.0),
        35.0,
        1.0,
        Color::DARKBLUE,
    );
}

fn draw_pause_menu(d: &mut RaylibDrawHandle, game: &MatchState) {
    let center_x = (game.config.screen_width / 2.0) as i32;
    let center_y = (game.config.screen_height / 2.0) as i32;
    let mut centered = |text: &str, y: i32, size: i32, color: Color| {
        let x = center_x - measure_text(text, size) / 2;
        d.draw_text(text, x, y, size, color);
    };

    centered("PAUSED", center_y - 40, 80, Color::RED);
    centered("Press P to Resume", center_y + 50, 40, Color::DARKGRAY);
    centered("Press Q to Quit", center_y + 100, 40, Color::DARKGRAY);
}

fn to_raylib(rect: &Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.w, rect.h)
}
