//! Rules engine seam
//!
//! Everything that needs chess knowledge goes through [`RulesEngine`]. The
//! default implementation wraps `shakmaty`, which owns legality, check, mate and
//! draw detection and FEN encoding. Nothing in this crate re-derives those rules
//! except the deliberately narrow pawn gate in [`crate::pawn_gate`].
//!
//! # Coordinate System
//!
//! Squares cross the seam as [`Square`] values and are converted with
//! `Square::to_engine`, so both sides agree on `index = rank * 8 + file`.

use std::collections::HashMap;

use shakmaty::fen::Fen;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position, Role};
use tracing::trace;

use crate::error::{MoveError, MoveResult, PositionError};
use crate::piece::{Piece, PieceColor};
use crate::square::Square;

/// Position string of the standard initial setup
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fifty full moves without capture or pawn move
const FIFTY_MOVE_HALFMOVES: u32 = 100;
const REPETITION_DRAW: u8 = 3;

/// Operations consumed from an authoritative chess rules implementation
pub trait RulesEngine {
    /// Whether moving whatever stands on `from` to `to` is legal for the side to move
    fn is_move_legal(&self, from: Square, to: Square) -> bool;

    /// Play the move, failing without mutation if it is not legal
    fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<()>;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn encode_position(&self) -> String;

    /// Replace the current position, leaving it untouched on error
    fn decode_position(&mut self, fen: &str) -> Result<(), PositionError>;

    fn is_checkmate(&self) -> bool;

    fn is_draw(&self) -> bool;

    fn side_to_move(&self) -> PieceColor;
}

/// [`RulesEngine`] backed by `shakmaty::Chess`
#[derive(Debug, Clone)]
pub struct ShakmatyEngine {
    position: Chess,
    /// Occurrences of each position since the last decode, for threefold repetition
    seen: HashMap<Zobrist64, u8>,
}

impl Default for ShakmatyEngine {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl ShakmatyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_position(position: Chess) -> Self {
        let mut engine = Self {
            position,
            seen: HashMap::new(),
        };
        engine.record_position();
        engine
    }

    fn record_position(&mut self) {
        let hash: Zobrist64 = self.position.zobrist_hash(EnPassantMode::Legal);
        let count = self.seen.entry(hash).or_insert(0);
        *count = count.saturating_add(1);
    }

    fn is_threefold_repetition(&self) -> bool {
        let hash: Zobrist64 = self.position.zobrist_hash(EnPassantMode::Legal);
        self.seen.get(&hash).is_some_and(|&n| n >= REPETITION_DRAW)
    }

    /// Find the legal move matching a tap pair.
    ///
    /// Castling is matched on the king's destination square (g- or c-file), and
    /// promotions only match the queen promotion.
    fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        let from = from.to_engine();
        let to = to.to_engine();
        let turn = self.position.turn();

        self.position.legal_moves().into_iter().find(|m| {
            let destination = match m {
                Move::Castle { .. } => m.castling_side().map(|side| side.king_to(turn)),
                _ => Some(m.to()),
            };
            m.from() == Some(from)
                && destination == Some(to)
                && matches!(m.promotion(), None | Some(Role::Queen))
        })
    }
}

impl RulesEngine for ShakmatyEngine {
    fn is_move_legal(&self, from: Square, to: Square) -> bool {
        self.find_move(from, to).is_some()
    }

    fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<()> {
        let m = self
            .find_move(from, to)
            .ok_or(MoveError::IllegalMove { from, to })?;
        trace!(?m, "playing engine move");
        self.position.play_unchecked(m);
        self.record_position();
        Ok(())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(square.to_engine())
            .map(Piece::from)
    }

    fn encode_position(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    fn decode_position(&mut self, fen: &str) -> Result<(), PositionError> {
        let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
            PositionError::Malformed {
                fen: fen.to_string(),
                message: e.to_string(),
            }
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| PositionError::Impossible {
                    fen: fen.to_string(),
                    message: e.to_string(),
                })?;
        *self = Self::from_position(position);
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.is_threefold_repetition()
            || self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    fn side_to_move(&self) -> PieceColor {
        self.position.turn().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn default_engine_encodes_starting_fen() {
        let engine = ShakmatyEngine::new();
        assert_eq!(engine.encode_position(), STARTING_FEN);
        assert_eq!(engine.side_to_move(), PieceColor::White);
    }

    #[test]
    fn illegal_move_leaves_position_untouched() {
        let mut engine = ShakmatyEngine::new();
        let err = engine.apply_move(sq("e2"), sq("e5")).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            }
        );
        assert_eq!(engine.encode_position(), STARTING_FEN);
    }

    #[test]
    fn castling_is_matched_on_king_destination() {
        let mut engine = ShakmatyEngine::new();
        engine
            .decode_position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .unwrap();
        assert!(engine.is_move_legal(sq("e1"), sq("g1")));
        engine.apply_move(sq("e1"), sq("c1")).unwrap();
        assert_eq!(
            engine.piece_at(sq("c1")),
            Some(Piece::new(PieceKind::King, PieceColor::White))
        );
        assert_eq!(
            engine.piece_at(sq("d1")),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut engine = ShakmatyEngine::new();
        engine.decode_position("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        engine.apply_move(sq("a7"), sq("a8")).unwrap();
        assert_eq!(
            engine.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
    }

    #[test]
    fn decode_rejects_garbage_without_mutation() {
        let mut engine = ShakmatyEngine::new();
        let err = engine.decode_position("not a fen").unwrap_err();
        assert!(matches!(err, PositionError::Malformed { .. }));
        assert_eq!(engine.encode_position(), STARTING_FEN);
    }

    #[test]
    fn decode_rejects_impossible_positions() {
        let mut engine = ShakmatyEngine::new();
        // No kings on the board
        let err = engine.decode_position("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(err, PositionError::Impossible { .. }));
    }

    #[test]
    fn detects_checkmate_and_draws() {
        let mut engine = ShakmatyEngine::new();
        // Fool's mate
        engine
            .decode_position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert!(engine.is_checkmate());
        assert!(!engine.is_draw());

        // Stalemate: black king cornered, black to move
        engine.decode_position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!engine.is_checkmate());
        assert!(engine.is_draw());

        // Bare kings
        engine.decode_position("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        assert!(engine.is_draw());
    }

    #[test]
    fn threefold_repetition_is_a_draw() {
        let mut engine = ShakmatyEngine::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];

        for (from, to) in shuffle {
            engine.apply_move(sq(from), sq(to)).unwrap();
        }
        // Start position seen twice
        assert!(!engine.is_draw());

        for (from, to) in shuffle {
            engine.apply_move(sq(from), sq(to)).unwrap();
        }
        assert!(engine.is_draw());
        assert!(!engine.is_checkmate());
    }

    #[test]
    fn decoding_forgets_earlier_repetitions() {
        let mut engine = ShakmatyEngine::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for _ in 0..2 {
            for (from, to) in shuffle {
                engine.apply_move(sq(from), sq(to)).unwrap();
            }
        }
        assert!(engine.is_draw());

        engine.decode_position(STARTING_FEN).unwrap();
        assert!(!engine.is_draw());
    }
}
