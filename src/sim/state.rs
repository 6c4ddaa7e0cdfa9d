//! Match state and core simulation types
//!
//! Everything the per-frame update reads or writes lives in `MatchState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::mode::GameMode;

/// Court side / player. Player 1 defends the left, player 2 the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based player number shown on screen
    pub fn player_number(&self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchPhase {
    /// Ball in play
    Rally,
    /// Ball off the court after a goal, waiting to be served
    ScoringPause { remaining: f32 },
    /// Someone reached the win score
    GameOver { winner: Side },
}

/// Things that happened during a frame, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball left the court; `scorer` gets the point
    Goal { scorer: Side },
    /// Ball put back in play after the scoring pause
    Served { toward: Side },
    /// Win score reached (emitted once per match)
    MatchOver { winner: Side },
    ModeSelected(GameMode),
    MatchStarted,
    Paused,
    Resumed,
    Restarted,
}

/// Tunable match rules and court geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per frame
    pub paddle_speed: f32,
    pub right_paddle_inset: f32,
    pub ball_size: f32,
    /// Pixels per second
    pub ball_speed: f32,
    /// Seconds
    pub score_delay: f32,
    pub win_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            right_paddle_inset: RIGHT_PADDLE_INSET,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            score_delay: SCORE_DELAY,
            win_score: WIN_SCORE,
        }
    }
}

impl MatchConfig {
    pub fn half_width(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Top-left corner that centres the ball on screen
    pub fn ball_center_position(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0 - self.ball_size / 2.0,
            self.screen_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Kickoff velocity (down and to the right)
    pub fn initial_ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed, self.ball_speed)
    }

    /// Reject rules the simulation cannot play: paddles that do not fit
    /// their half, a ball larger than the court, or a match won at 0 points
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        let rates = [
            ("paddle_speed", self.paddle_speed),
            ("right_paddle_inset", self.right_paddle_inset),
            ("ball_speed", self.ball_speed),
            ("score_delay", self.score_delay),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be zero or more, got {value}"));
            }
        }

        if self.paddle_height > self.screen_height {
            return Err(format!(
                "paddle_height {} exceeds screen_height {}",
                self.paddle_height, self.screen_height
            ));
        }
        if self.paddle_width + self.right_paddle_inset > self.half_width() {
            return Err(format!(
                "paddle_width plus right_paddle_inset ({}) exceeds half the screen width ({})",
                self.paddle_width + self.right_paddle_inset,
                self.half_width()
            ));
        }
        if self.ball_size >= self.screen_height || self.ball_size >= self.half_width() {
            return Err(format!("ball_size {} does not fit the court", self.ball_size));
        }
        if self.win_score == 0 {
            return Err("win_score must be at least 1".to_string());
        }
        Ok(())
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle at its kickoff position
    pub fn new(side: Side, config: &MatchConfig) -> Self {
        let y = (config.screen_height - config.paddle_height) / 2.0;
        let x = match side {
            Side::Left => 0.0,
            Side::Right => config.screen_width - config.paddle_width - config.right_paddle_inset,
        };
        Self {
            side,
            pos: Vec2::new(x, y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    /// Allowed top-left range: own half horizontally, full height vertically
    pub fn bounds(side: Side, config: &MatchConfig) -> (Vec2, Vec2) {
        let max_y = config.screen_height - config.paddle_height;
        match side {
            Side::Left => (
                Vec2::ZERO,
                Vec2::new(config.half_width() - config.paddle_width, max_y),
            ),
            Side::Right => (
                Vec2::new(config.half_width(), 0.0),
                Vec2::new(config.screen_width - config.paddle_width, max_y),
            ),
        }
    }

    /// Move by a per-frame step and keep the paddle inside its bounds
    pub fn step(&mut self, direction: Vec2, speed: f32, config: &MatchConfig) {
        let (min, max) = Self::bounds(self.side, config);
        self.pos = (self.pos + direction * speed).clamp(min, max);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// The ball. Only moves while the match is in `MatchPhase::Rally`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            pos: config.ball_center_position(),
            vel: config.initial_ball_velocity(),
            size: config.ball_size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player1 += 1,
            Side::Right => self.player2 += 1,
        }
    }

    /// Side that has reached `win_score`, if any
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.player1 >= win_score {
            Some(Side::Left)
        } else if self.player2 >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Frames simulated since kickoff
    pub frames: u64,
    /// Events produced since the last `drain_events`
    events: Vec<GameEvent>,
}

impl MatchState {
    /// Fresh match at kickoff with the ball already in play
    pub fn new(config: MatchConfig) -> Self {
        Self {
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            score: Score::default(),
            phase: MatchPhase::Rally,
            frames: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Put everything back to kickoff, keeping the config
    pub fn restart(&mut self) {
        let config = self.config.clone();
        *self = Self::new(config);
        self.emit(GameEvent::Restarted);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn ball_active(&self) -> bool {
        matches!(self.phase, MatchPhase::Rally)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
