//! The board session behind the board screen
//!
//! [`ActiveBoard`] holds one [`BoardSession`]. A fresh session is created every
//! time the board screen is entered and the selection is dropped when it is
//! left, so a half-finished tap never survives navigation.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use tapchess_core::{BoardSession, GameStatus, PieceColor, TapOutcome};

use super::events::{MovePlayed, NewGameRequested, SquareTapped};
use crate::core::AppSettings;

#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ActiveBoard(pub BoardSession);

/// Banner text for the board screen
pub fn status_text(status: GameStatus, side_to_move: PieceColor) -> String {
    match status {
        GameStatus::Ongoing => format!("{} to move", side_to_move.name()),
        GameStatus::Checkmate { winner } => format!("Checkmate - {} wins", winner.name()),
        GameStatus::Draw => "Draw".to_string(),
    }
}

/// OnEnter(Board): new game with the configured pawn policy
pub fn start_board_session(mut board: ResMut<ActiveBoard>, settings: Res<AppSettings>) {
    board.0 = BoardSession::new(settings.pawn_policy);
    info!("[BOARD] New game, pawn policy {:?}", settings.pawn_policy);
}

/// OnExit(Board)
pub fn clear_board_selection(mut board: ResMut<ActiveBoard>) {
    board.clear_selection();
}

/// Feed taps into the session, one at a time and in order
pub fn handle_square_taps(
    mut taps: MessageReader<SquareTapped>,
    mut board: ResMut<ActiveBoard>,
    mut played: MessageWriter<MovePlayed>,
) {
    for SquareTapped(square) in taps.read().copied() {
        match board.on_tap(square) {
            TapOutcome::Moved(record) => {
                info!("[BOARD] {}{} -> {}", record.from, record.to, record.fen_after);
                let status = board.status();
                if status.is_over() {
                    info!("[BOARD] Game over: {:?}", status);
                }
                played.write(MovePlayed(record));
            }
            TapOutcome::Rejected(reason) => debug!("[BOARD] {}", reason),
            TapOutcome::Selected(_) | TapOutcome::Cleared | TapOutcome::Ignored => {}
        }
    }
}

pub fn handle_new_game(
    mut requests: MessageReader<NewGameRequested>,
    mut board: ResMut<ActiveBoard>,
) {
    if requests.read().last().is_some() {
        board.reset();
        info!("[BOARD] Board reset");
    }
}

/// Keep the live session on the policy from settings
pub fn sync_pawn_policy(settings: Res<AppSettings>, mut board: ResMut<ActiveBoard>) {
    if settings.is_changed() && board.policy() != settings.pawn_policy {
        board.set_policy(settings.pawn_policy);
        debug!("[BOARD] Pawn policy now {:?}", settings.pawn_policy);
    }
}
