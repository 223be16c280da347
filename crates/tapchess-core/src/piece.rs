//! Piece vocabulary
//!
//! An empty square is `None` wherever an `Option<Piece>` appears, which gives the
//! thirteen square contents (twelve pieces plus empty).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank direction this color's pawns advance in
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A chess unit of a given kind and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// FEN letter: uppercase for white, lowercase for black
    pub fn fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }

    /// All twelve pieces, white first
    pub fn all() -> impl Iterator<Item = Piece> {
        [PieceColor::White, PieceColor::Black]
            .into_iter()
            .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Piece::new(kind, color)))
    }
}

impl From<shakmaty::Color> for PieceColor {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => PieceColor::White,
            shakmaty::Color::Black => PieceColor::Black,
        }
    }
}

impl From<shakmaty::Role> for PieceKind {
    fn from(role: shakmaty::Role) -> Self {
        match role {
            shakmaty::Role::Pawn => PieceKind::Pawn,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::King => PieceKind::King,
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        Piece::new(piece.role.into(), piece.color.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_distinct_pieces() {
        let pieces: Vec<_> = Piece::all().collect();
        assert_eq!(pieces.len(), 12);
        let fen: std::collections::HashSet<_> = pieces.iter().map(|p| p.fen_char()).collect();
        assert_eq!(fen.len(), 12);
    }

    #[test]
    fn pawns_advance_towards_the_opponent() {
        assert_eq!(PieceColor::White.forward(), 1);
        assert_eq!(PieceColor::Black.forward(), -1);
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
    }

    #[test]
    fn converts_engine_pieces() {
        let black_knight = shakmaty::Piece {
            color: shakmaty::Color::Black,
            role: shakmaty::Role::Knight,
        };
        assert_eq!(
            Piece::from(black_knight),
            Piece::new(PieceKind::Knight, PieceColor::Black)
        );
    }
}
