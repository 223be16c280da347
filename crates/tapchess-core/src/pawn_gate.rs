//! Pawn move-shape gate
//!
//! Before a pawn move reaches the rules engine it has to pass [`PawnPolicy`].
//! The restricted policy (the default) only lets through a one-rank advance
//! onto an empty square or a one-rank diagonal step onto an enemy piece; double
//! steps, en passant and promotion are refused even though the engine would
//! allow them. Each of those three shapes can be switched on individually, in
//! which case the engine alone decides.
//!
//! Pieces other than pawns are never inspected here.

use serde::{Deserialize, Serialize};

use crate::board::BoardModel;
use crate::engine::RulesEngine;
use crate::square::Square;

/// Why the gate refused a pawn move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PawnRejection {
    #[error("pawns move exactly one rank forward")]
    NotOneRankForward,

    #[error("two-square advance is disabled")]
    DoubleStep,

    #[error("straight advance is blocked")]
    StraightOntoOccupied,

    #[error("diagonal step needs an enemy piece on the target square")]
    DiagonalOntoEmpty,

    #[error("cannot capture own piece")]
    CaptureOwnPiece,

    #[error("promotion is disabled")]
    Promotion,
}

/// Which pawn move shapes may reach the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PawnPolicy {
    /// Let two-square advances through
    pub allow_double_step: bool,
    /// Let diagonal steps onto an empty square through (en passant)
    pub allow_en_passant: bool,
    /// Let moves onto the last rank through
    pub allow_promotion: bool,
}

impl PawnPolicy {
    /// Single-step advances and plain diagonal captures only
    pub fn restricted() -> Self {
        Self::default()
    }

    /// Every shape passes; the engine is the only judge
    pub fn permissive() -> Self {
        Self {
            allow_double_step: true,
            allow_en_passant: true,
            allow_promotion: true,
        }
    }

    /// Check a move attempt. Non-pawn origins always pass.
    pub fn check<E: RulesEngine>(
        &self,
        board: &BoardModel<E>,
        from: Square,
        to: Square,
    ) -> Result<(), PawnRejection> {
        let Some(pawn) = board.piece_at(from).filter(|p| p.is_pawn()) else {
            return Ok(());
        };

        let forward = pawn.color.forward();
        let file_delta = to.file().index() as i8 - from.file().index() as i8;
        let rank_delta = to.rank().index() as i8 - from.rank().index() as i8;
        let target = board.piece_at(to);

        if rank_delta == 2 * forward && file_delta == 0 {
            return if self.allow_double_step {
                Ok(())
            } else {
                Err(PawnRejection::DoubleStep)
            };
        }
        if rank_delta != forward {
            return Err(PawnRejection::NotOneRankForward);
        }

        match (file_delta, target) {
            (0, Some(_)) => return Err(PawnRejection::StraightOntoOccupied),
            (0, None) => {}
            (_, Some(piece)) if piece.color == pawn.color => {
                return Err(PawnRejection::CaptureOwnPiece)
            }
            (_, Some(_)) => {}
            (_, None) if self.allow_en_passant => {}
            (_, None) => return Err(PawnRejection::DiagonalOntoEmpty),
        }

        let last_rank = if forward > 0 { 7 } else { 0 };
        if to.rank().index() == last_rank && !self.allow_promotion {
            return Err(PawnRejection::Promotion);
        }
        Ok(())
    }
}
