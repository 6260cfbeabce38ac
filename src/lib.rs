#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)] // board coordinates fit comfortably in every integer type involved

pub mod board;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod rules;
pub mod sight;
pub mod types;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::{GameEngine, Selection};
pub use crate::error::EngineError;
pub use crate::geometry::{line_cells, split_around_pivot};
pub use crate::rules::{game_outcome, is_fully_connected, travel_distance, valid_destinations};
pub use crate::sight::{all_line_of_sight, line_of_sight, SightLines};
pub use crate::types::{Direction, Orientation, Outcome, Player, Pos, Shape};
