//! Per-frame simulation step
//!
//! One call to `tick` is one rendered frame. Paddles move a fixed distance per
//! frame; the ball moves by velocity * dt.

use glam::Vec2;

use super::collision::{hits_horizontal_wall, hits_left_paddle, hits_right_paddle};
use super::state::{GameEvent, MatchConfig, MatchPhase, MatchState, Paddle, Side};

/// Held direction keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player 1 (W/S/A/D)
    pub left: PaddleInput,
    /// Player 2 (arrow keys)
    pub right: PaddleInput,
}

/// Advance the match by one frame
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    state.frames += 1;

    // Paddles respond in every phase, including after the final point
    move_paddle(&mut state.left, &input.left, &state.config);
    move_paddle(&mut state.right, &input.right, &state.config);

    match state.phase {
        MatchPhase::Rally => advance_ball(state, dt),
        MatchPhase::ScoringPause { remaining } => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                serve(state);
            } else {
                state.phase = MatchPhase::ScoringPause { remaining };
            }
        }
        MatchPhase::GameOver { .. } => {}
    }

    check_match_end(state);
}

/// Apply each held key in turn, clamping after every step
fn move_paddle(paddle: &mut Paddle, input: &PaddleInput, config: &MatchConfig) {
    let speed = config.paddle_speed;
    if input.up {
        paddle.step(Vec2::NEG_Y, speed, config);
    }
    if input.down {
        paddle.step(Vec2::Y, speed, config);
    }
    if input.left {
        paddle.step(Vec2::NEG_X, speed, config);
    }
    if input.right {
        paddle.step(Vec2::X, speed, config);
    }
}

fn advance_ball(state: &mut MatchState, dt: f32) {
    let screen_width = state.config.screen_width;
    let screen_height = state.config.screen_height;

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    // No position correction: the ball may sink into the wall for a frame
    if hits_horizontal_wall(&ball.rect(), screen_height) {
        ball.vel.y = -ball.vel.y;
    }

    let left = state.left.rect();
    if hits_left_paddle(&ball.rect(), &left) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = left.right();
        state.emit(GameEvent::PaddleHit(Side::Left));
    }

    // Checked even after a left hit; overlapping both flips twice
    let right = state.right.rect();
    let ball = &mut state.ball;
    if hits_right_paddle(&ball.rect(), &right) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = right.x - ball.size;
        state.emit(GameEvent::PaddleHit(Side::Right));
    }

    if state.ball.pos.x < 0.0 {
        goal(state, Side::Right);
    }
    if state.ball.pos.x > screen_width {
        goal(state, Side::Left);
    }
}

fn goal(state: &mut MatchState, scorer: Side) {
    state.score.award(scorer);
    state.ball.pos = state.config.ball_center_position();
    state.phase = MatchPhase::ScoringPause {
        remaining: state.config.score_delay,
    };
    log::debug!(
        "Player {} scored ({} - {})",
        scorer.player_number(),
        state.score.player1,
        state.score.player2
    );
    state.emit(GameEvent::Goal { scorer });
}

/// Serve toward the trailing player; a tie serves to the left
fn serve(state: &mut MatchState) {
    let toward = if state.score.player1 > state.score.player2 {
        Side::Right
    } else {
        Side::Left
    };
    let speed = state.config.ball_speed;
    state.ball.vel.x = match toward {
        Side::Right => speed,
        Side::Left => -speed,
    };
    state.phase = MatchPhase::Rally;
    log::debug!("Serving toward player {}", toward.player_number());
    state.emit(GameEvent::Served { toward });
}

fn check_match_end(state: &mut MatchState) {
    if state.is_over() {
        return;
    }
    if let Some(winner) = state.score.winner(state.config.win_score) {
        state.phase = MatchPhase::GameOver { winner };
        log::info!(
            "Player {} wins {} - {}",
            winner.player_number(),
            state.score.player1,
            state.score.player2
        );
        state.emit(GameEvent::MatchOver { winner });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::consts::FRAME_DT;
    use proptest::prelude::*;

    fn paddle_input() -> impl Strategy<Value = PaddleInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| PaddleInput {
                up,
                down,
                left,
                right,
            },
        )
    }

    fn tick_input() -> impl Strategy<Value = TickInput> {
        (paddle_input(), paddle_input()).prop_map(|(left, right)| TickInput { left, right })
    }

    proptest! {
        #[test]
        fn paddles_stay_in_their_half(inputs in prop::collection::vec(tick_input(), 1..400)) {
            let mut state = MatchState::default();
            for input in &inputs {
                tick(&mut state, input, FRAME_DT);
                for side in [Side::Left, Side::Right] {
                    let (min, max) = Paddle::bounds(side, &state.config);
                    let pos = state.paddle(side).pos;
                    prop_assert!(pos.x >= min.x && pos.x <= max.x);
                    prop_assert!(pos.y >= min.y && pos.y <= max.y);
                }
            }
        }

        #[test]
        fn score_never_passes_win_score(frames in 1usize..3000, vx in prop::sample::select(vec![-600.0f32, 600.0])) {
            let mut state = MatchState::default();
            state.ball.vel.x = vx;
            for _ in 0..frames {
                tick(&mut state, &TickInput::default(), FRAME_DT);
            }
            let win = state.config.win_score;
            prop_assert!(state.score.player1 <= win && state.score.player2 <= win);
            prop_assert_eq!(state.is_over(), state.score.winner(win).is_some());
        }

        #[test]
        fn wall_contact_flips_vertical_velocity(y in -20.0f32..0.0, vy in 100.0f32..900.0) {
            let mut state = MatchState::default();
            state.ball.pos = Vec2::new(400.0, y);
            state.ball.vel = Vec2::new(600.0, -vy);
            tick(&mut state, &TickInput::default(), FRAME_DT);
            prop_assert_eq!(state.ball.vel.y, vy);
        }
    }
}
