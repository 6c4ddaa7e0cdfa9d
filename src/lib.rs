//! Pongiverse - two-player Pong with three themed modes
//!
//! Core modules:
//! - `sim`: Per-frame match simulation (paddles, ball, scoring)
//! - `flow`: Screen state machine (home, instructions, play, pause, game over)
//! - `mode`: Game modes and the asset bundle each one selects
//! - `audio`: Sound effects triggered by game events
//! - `settings`: JSON configuration
//! - `renderer` / `platform`: raylib window, drawing and input (`window` feature)

pub mod audio;
pub mod error;
pub mod flow;
pub mod mode;
#[cfg(feature = "window")]
pub mod platform;
#[cfg(feature = "window")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use flow::{App, FrameInput, FrameOutcome, Screen};
pub use mode::{AssetBundle, AssetCatalog, GameMode};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame rate requested from the window
    pub const TARGET_FPS: u32 = 120;
    /// Frame time at the target frame rate
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    /// Pixels per frame, not scaled by frame time
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap between the right paddle and the right screen edge at kickoff
    pub const RIGHT_PADDLE_INSET: f32 = 90.0;

    /// Ball defaults (square sprite)
    pub const BALL_SIZE: f32 = 25.0;
    /// Pixels per second on each axis
    pub const BALL_SPEED: f32 = 600.0;

    /// Seconds the ball stays off the court after a goal
    pub const SCORE_DELAY: f32 = 2.0;
    /// First player to reach this wins
    pub const WIN_SCORE: u32 = 7;

    /// Number of instruction pages shown before a match
    pub const INSTRUCTION_PAGES: usize = 5;
}
