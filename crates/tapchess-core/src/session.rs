//! One visit to the board screen: a board plus the tap machine driving it

use crate::board::{BoardModel, GameStatus};
use crate::engine::{RulesEngine, ShakmatyEngine};
use crate::pawn_gate::PawnPolicy;
use crate::render::{render, BoardView};
use crate::selection::{MoveInput, SelectionState, TapOutcome};
use crate::square::Square;

#[derive(Debug, Clone)]
pub struct BoardSession<E: RulesEngine = ShakmatyEngine> {
    board: BoardModel<E>,
    input: MoveInput,
}

impl BoardSession<ShakmatyEngine> {
    /// Fresh game in the starting position
    pub fn new(policy: PawnPolicy) -> Self {
        Self::with_board(BoardModel::new(), policy)
    }
}

impl Default for BoardSession<ShakmatyEngine> {
    fn default() -> Self {
        Self::new(PawnPolicy::default())
    }
}

impl<E: RulesEngine> BoardSession<E> {
    pub fn with_board(board: BoardModel<E>, policy: PawnPolicy) -> Self {
        Self {
            board,
            input: MoveInput::new(policy),
        }
    }

    pub fn on_tap(&mut self, square: Square) -> TapOutcome {
        self.input.on_tap(&mut self.board, square)
    }

    pub fn render(&self) -> BoardView {
        render(&self.board, self.input.state())
    }

    /// Starting position, nothing selected
    pub fn reset(&mut self) {
        self.board.reset();
        self.input.reset();
    }

    pub fn clear_selection(&mut self) {
        self.input.reset();
    }

    pub fn selection(&self) -> SelectionState {
        self.input.state()
    }

    pub fn board(&self) -> &BoardModel<E> {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn serialize(&self) -> String {
        self.board.serialize()
    }

    pub fn policy(&self) -> PawnPolicy {
        self.input.policy()
    }

    pub fn set_policy(&mut self, policy: PawnPolicy) {
        self.input.set_policy(policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn finished_game_still_selects_but_plays_nothing() {
        let mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        let mut board = BoardModel::new();
        board.load(mated).unwrap();
        let mut session = BoardSession::with_board(board, PawnPolicy::default());
        assert!(session.status().is_over());

        assert_eq!(session.on_tap(sq("a2")), TapOutcome::Selected(sq("a2")));
        assert_eq!(session.selection(), SelectionState::Selected(sq("a2")));

        assert!(matches!(
            session.on_tap(sq("a3")),
            TapOutcome::Rejected(MoveError::IllegalMove { .. })
        ));
        assert_eq!(session.selection(), SelectionState::Empty);
        assert_eq!(session.serialize(), mated);
    }

    #[test]
    fn reset_restores_start_and_clears_selection() {
        let mut session = BoardSession::new(PawnPolicy::default());
        session.on_tap(sq("e2"));
        session.on_tap(sq("e3"));
        session.on_tap(sq("e7"));
        session.reset();
        assert_eq!(session.selection(), SelectionState::Empty);
        assert_eq!(session.serialize(), crate::engine::STARTING_FEN);
    }
}
