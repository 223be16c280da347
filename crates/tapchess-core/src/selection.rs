//! Tap-to-move input state machine
//!
//! ```text
//!            tap occupied square
//!   [Empty] ---------------------> [Selected(origin)]
//!      ^                                  |
//!      |   any tap: attempt origin -> s   |
//!      +----------------------------------+
//! ```
//!
//! Tapping an empty square while nothing is selected does nothing. The second
//! tap always returns to `Empty`, whether the move was played or refused, so a
//! rejected move has to be started again from the origin tap.

use tracing::debug;

use crate::board::{BoardModel, MoveRecord};
use crate::engine::RulesEngine;
use crate::error::MoveError;
use crate::pawn_gate::PawnPolicy;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    Selected(Square),
}

impl SelectionState {
    pub fn selected(self) -> Option<Square> {
        match self {
            SelectionState::Empty => None,
            SelectionState::Selected(square) => Some(square),
        }
    }

    pub fn is_selected(self, square: Square) -> bool {
        self == SelectionState::Selected(square)
    }
}

/// What a single tap did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Empty square tapped with nothing selected
    Ignored,
    /// A piece was picked up
    Selected(Square),
    /// The selected square had become empty; selection dropped
    Cleared,
    /// The engine played the move
    Moved(MoveRecord),
    /// The attempt was refused; selection dropped
    Rejected(MoveError),
}

impl TapOutcome {
    pub fn moved(&self) -> Option<&MoveRecord> {
        match self {
            TapOutcome::Moved(record) => Some(record),
            _ => None,
        }
    }
}

/// Selection plus the pawn policy applied to move attempts
#[derive(Debug, Clone, Default)]
pub struct MoveInput {
    state: SelectionState,
    policy: PawnPolicy,
}

impl MoveInput {
    pub fn new(policy: PawnPolicy) -> Self {
        Self {
            state: SelectionState::Empty,
            policy,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn policy(&self) -> PawnPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PawnPolicy) {
        self.policy = policy;
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }

    /// Feed one tap into the machine
    pub fn on_tap<E: RulesEngine>(&mut self, board: &mut BoardModel<E>, square: Square) -> TapOutcome {
        match self.state {
            SelectionState::Empty => {
                if board.piece_at(square).is_some() {
                    self.state = SelectionState::Selected(square);
                    debug!(%square, "selected");
                    TapOutcome::Selected(square)
                } else {
                    TapOutcome::Ignored
                }
            }
            SelectionState::Selected(from) => {
                self.state = SelectionState::Empty;
                if board.piece_at(from).is_none() {
                    debug!(%from, "stale selection cleared");
                    return TapOutcome::Cleared;
                }
                match self.attempt(board, from, square) {
                    Ok(record) => {
                        debug!(from = %record.from, to = %record.to, fen = %record.fen_after, "move played");
                        TapOutcome::Moved(record)
                    }
                    Err(e) => {
                        debug!("move refused: {e}");
                        TapOutcome::Rejected(e)
                    }
                }
            }
        }
    }

    fn attempt<E: RulesEngine>(
        &self,
        board: &mut BoardModel<E>,
        from: Square,
        to: Square,
    ) -> Result<MoveRecord, MoveError> {
        self.policy
            .check(board, from, to)
            .map_err(|reason| MoveError::PreFilterRejected { from, to, reason })?;
        board.apply_move(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::STARTING_FEN;
    use crate::pawn_gate::PawnRejection;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn empty_square_tap_does_nothing() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        assert_eq!(input.on_tap(&mut board, sq("e4")), TapOutcome::Ignored);
        assert_eq!(input.state(), SelectionState::Empty);
    }

    #[test]
    fn occupied_tap_selects_and_next_tap_always_clears() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();

        assert_eq!(input.on_tap(&mut board, sq("b1")), TapOutcome::Selected(sq("b1")));
        assert_eq!(input.state(), SelectionState::Selected(sq("b1")));

        // Knight cannot go to b3's neighbour b4
        let outcome = input.on_tap(&mut board, sq("b4"));
        assert!(matches!(outcome, TapOutcome::Rejected(MoveError::IllegalMove { .. })));
        assert_eq!(input.state(), SelectionState::Empty);

        input.on_tap(&mut board, sq("b1"));
        let outcome = input.on_tap(&mut board, sq("c3"));
        assert!(outcome.moved().is_some());
        assert_eq!(input.state(), SelectionState::Empty);
    }

    #[test]
    fn opponent_piece_can_be_selected_but_not_moved() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        assert_eq!(input.on_tap(&mut board, sq("e7")), TapOutcome::Selected(sq("e7")));
        let outcome = input.on_tap(&mut board, sq("e6"));
        assert!(matches!(outcome, TapOutcome::Rejected(MoveError::IllegalMove { .. })));
        assert_eq!(board.serialize(), STARTING_FEN);
    }

    #[test]
    fn tapping_the_selected_square_again_deselects() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        input.on_tap(&mut board, sq("g1"));
        let outcome = input.on_tap(&mut board, sq("g1"));
        assert!(matches!(outcome, TapOutcome::Rejected(_)));
        assert_eq!(input.state(), SelectionState::Empty);
    }

    #[test]
    fn stale_selection_is_cleared_without_an_attempt() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        input.on_tap(&mut board, sq("e2"));
        // Position replaced underneath the selection
        board.load("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(input.on_tap(&mut board, sq("e3")), TapOutcome::Cleared);
        assert_eq!(input.state(), SelectionState::Empty);
    }

    #[test]
    fn pawn_gate_runs_before_the_engine() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        input.on_tap(&mut board, sq("e2"));
        let outcome = input.on_tap(&mut board, sq("e4"));
        assert_eq!(
            outcome,
            TapOutcome::Rejected(MoveError::PreFilterRejected {
                from: sq("e2"),
                to: sq("e4"),
                reason: PawnRejection::DoubleStep,
            })
        );

        input.set_policy(PawnPolicy::permissive());
        input.on_tap(&mut board, sq("e2"));
        assert!(input.on_tap(&mut board, sq("e4")).moved().is_some());
    }

    #[test]
    fn reset_drops_the_selection() {
        let mut board = BoardModel::new();
        let mut input = MoveInput::default();
        input.on_tap(&mut board, sq("d2"));
        input.reset();
        assert_eq!(input.state(), SelectionState::Empty);
    }
}
