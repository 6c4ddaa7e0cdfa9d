//! Match simulation
//!
//! All gameplay logic lives here. This module is pure:
//! - No rendering, audio or platform dependencies
//! - Side effects are reported as `GameEvent`s
//! - Time only enters through the `dt` passed to `tick`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, hits_horizontal_wall, hits_left_paddle, hits_right_paddle};
pub use state::{Ball, GameEvent, MatchConfig, MatchPhase, MatchState, Paddle, Score, Side};
pub use tick::{PaddleInput, TickInput, tick};
