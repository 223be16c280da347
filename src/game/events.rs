//! Messages exchanged between the board screen and the board session

use bevy::prelude::*;
use tapchess_core::{MoveRecord, Square};

/// A square on the board screen was tapped
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareTapped(pub Square);

/// The rules engine accepted a move
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct MovePlayed(pub MoveRecord);

/// Start over from the initial position
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewGameRequested;
