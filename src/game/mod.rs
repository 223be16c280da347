//! Game module - the board screen
//!
//! Wraps a [`tapchess_core::BoardSession`] in a resource, routes taps from the
//! UI into it and announces accepted moves for the audio module.

pub mod assets;
pub mod board;
pub mod board_ui;
pub mod events;
pub mod plugin;

pub use assets::BoardAssets;
pub use board::{status_text, ActiveBoard};
pub use events::{MovePlayed, NewGameRequested, SquareTapped};
pub use plugin::{BoardAssetsPlugin, GamePlugin};
