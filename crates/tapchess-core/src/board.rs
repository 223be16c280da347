//! Board state model
//!
//! A thin holder around a [`RulesEngine`]: lookups and serialization are
//! forwarded, and the only mutation is an engine-approved move or a reload
//! from a position string.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::engine::{RulesEngine, ShakmatyEngine, STARTING_FEN};
use crate::error::{MoveError, MoveResult, PositionError};
use crate::piece::{Piece, PieceColor};
use crate::square::Square;

/// Whether the game can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: PieceColor },
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// A move the engine accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Position string after the move
    pub fen_after: String,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Current arrangement of pieces plus side to move
#[derive(Debug, Clone)]
pub struct BoardModel<E: RulesEngine = ShakmatyEngine> {
    engine: E,
}

impl BoardModel<ShakmatyEngine> {
    /// Board in the standard starting position
    pub fn new() -> Self {
        Self::with_engine(ShakmatyEngine::new())
    }
}

impl Default for BoardModel<ShakmatyEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RulesEngine> BoardModel<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.engine.piece_at(square)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.engine.side_to_move()
    }

    /// Play `from -> to` if the engine allows it.
    ///
    /// On any error the position is unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<MoveRecord> {
        let piece = self.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
        if !self.engine.is_move_legal(from, to) {
            debug!(%from, %to, "engine rejected move");
            return Err(MoveError::IllegalMove { from, to });
        }

        let captured = self.captured_by(piece, from, to);
        self.engine.apply_move(from, to)?;

        Ok(MoveRecord {
            from,
            to,
            piece,
            captured,
            fen_after: self.engine.encode_position(),
        })
    }

    /// Piece removed by a legal move, including the en-passant victim
    fn captured_by(&self, piece: Piece, from: Square, to: Square) -> Option<Piece> {
        if let Some(target) = self.piece_at(to) {
            return Some(target);
        }
        let diagonal_pawn_step = piece.is_pawn() && from.file() != to.file();
        if diagonal_pawn_step {
            let victim = Square::new(to.file().index(), from.rank().index())?;
            return self.piece_at(victim);
        }
        None
    }

    /// FEN of the current position
    pub fn serialize(&self) -> String {
        self.engine.encode_position()
    }

    /// Back to the standard starting position
    pub fn reset(&mut self) {
        if let Err(e) = self.engine.decode_position(STARTING_FEN) {
            error!("starting position failed to decode: {e}");
        }
    }

    /// Replace the position from a FEN string
    pub fn load(&mut self, fen: &str) -> Result<(), PositionError> {
        self.engine.decode_position(fen)
    }

    pub fn status(&self) -> GameStatus {
        if self.engine.is_checkmate() {
            GameStatus::Checkmate {
                winner: self.side_to_move().opposite(),
            }
        } else if self.engine.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn expected_start(square: Square) -> Option<Piece> {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let file = square.file().index() as usize;
        match square.rank().index() {
            0 => Some(Piece::new(back_rank[file], PieceColor::White)),
            1 => Some(Piece::new(PieceKind::Pawn, PieceColor::White)),
            6 => Some(Piece::new(PieceKind::Pawn, PieceColor::Black)),
            7 => Some(Piece::new(back_rank[file], PieceColor::Black)),
            _ => None,
        }
    }

    #[test]
    fn reset_restores_every_starting_square() {
        let mut board = BoardModel::new();
        board.apply_move(sq("g1"), sq("f3")).unwrap();
        board.reset();

        for square in Square::all() {
            assert_eq!(board.piece_at(square), expected_start(square), "{square}");
        }
        assert_eq!(board.serialize(), STARTING_FEN);
    }

    #[test]
    fn accepted_move_flips_side_to_move() {
        let mut board = BoardModel::new();
        let record = board.apply_move(sq("g1"), sq("f3")).unwrap();

        assert_eq!(record.piece, Piece::new(PieceKind::Knight, PieceColor::White));
        assert!(!record.is_capture());
        assert_eq!(board.side_to_move(), PieceColor::Black);
        assert_eq!(record.fen_after, board.serialize());
        assert!(board.is_empty(sq("g1")));
    }

    #[test]
    fn empty_origin_is_reported() {
        let mut board = BoardModel::new();
        assert_eq!(
            board.apply_move(sq("e4"), sq("e5")),
            Err(MoveError::EmptyOrigin(sq("e4")))
        );
    }

    #[test]
    fn wrong_turn_is_illegal() {
        let mut board = BoardModel::new();
        let err = board.apply_move(sq("e7"), sq("e6")).unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove { .. }));
        assert_eq!(board.serialize(), STARTING_FEN);
    }

    #[test]
    fn en_passant_reports_the_captured_pawn() {
        let mut board = BoardModel::new();
        board
            .load("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
        let record = board.apply_move(sq("e5"), sq("f6")).unwrap();
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black))
        );
        assert!(board.is_empty(sq("f5")));
    }

    #[test]
    fn status_reports_checkmate_winner() {
        let mut board = BoardModel::new();
        board
            .load("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert_eq!(
            board.status(),
            GameStatus::Checkmate {
                winner: PieceColor::Black
            }
        );
        assert!(board.status().is_over());
    }
}
