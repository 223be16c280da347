//! Board view model
//!
//! Maps a board and the current selection to an 8x8 grid of cells. The grid is
//! row-major with row `r`, column `c` holding the square with index `r * 8 + c`,
//! so row 0 is rank 1 and the first cell drawn is a1.

use crate::board::BoardModel;
use crate::engine::RulesEngine;
use crate::piece::{Piece, PieceColor, PieceKind};
use crate::selection::SelectionState;
use crate::square::Square;

/// Square shading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    pub fn of(square: Square) -> Self {
        if (square.rank().index() + square.file().index()) % 2 == 0 {
            Tone::Light
        } else {
            Tone::Dark
        }
    }

    /// RGB used by the board screen
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Tone::Light => [0xF0, 0xD9, 0xB5],
            Tone::Dark => [0xB5, 0x88, 0x63],
        }
    }
}

/// Visual identity of one of the twelve pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceGlyph(Piece);

impl PieceGlyph {
    pub fn piece(self) -> Piece {
        self.0
    }

    /// Image asset for this piece, relative to the assets directory
    pub fn asset_path(self) -> String {
        let color = match self.0.color {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        };
        format!("pieces/{}_{}.png", self.0.kind.name(), color)
    }

    /// Kind letter drawn on the piece disc
    pub fn letter(self) -> char {
        self.0.fen_char().to_ascii_uppercase()
    }

    /// Unicode figurine, for text output
    pub fn symbol(self) -> char {
        use PieceKind::*;
        match (self.0.color, self.0.kind) {
            (PieceColor::White, King) => '\u{2654}',
            (PieceColor::White, Queen) => '\u{2655}',
            (PieceColor::White, Rook) => '\u{2656}',
            (PieceColor::White, Bishop) => '\u{2657}',
            (PieceColor::White, Knight) => '\u{2658}',
            (PieceColor::White, Pawn) => '\u{2659}',
            (PieceColor::Black, King) => '\u{265A}',
            (PieceColor::Black, Queen) => '\u{265B}',
            (PieceColor::Black, Rook) => '\u{265C}',
            (PieceColor::Black, Bishop) => '\u{265D}',
            (PieceColor::Black, Knight) => '\u{265E}',
            (PieceColor::Black, Pawn) => '\u{265F}',
        }
    }

    pub fn is_white(self) -> bool {
        self.0.color == PieceColor::White
    }
}

impl From<Piece> for PieceGlyph {
    fn from(piece: Piece) -> Self {
        Self(piece)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub square: Square,
    pub tone: Tone,
    pub highlighted: bool,
    pub glyph: Option<PieceGlyph>,
}

/// Eight rows of eight cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    rows: Vec<Vec<CellView>>,
}

impl BoardView {
    pub fn rows(&self) -> &[Vec<CellView>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellView> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }
}

/// Build the grid for the current board and selection
pub fn render<E: RulesEngine>(board: &BoardModel<E>, selection: SelectionState) -> BoardView {
    let cells: Vec<CellView> = Square::all()
        .map(|square| CellView {
            square,
            tone: Tone::of(square),
            highlighted: selection.is_selected(square),
            glyph: board.piece_at(square).map(PieceGlyph::from),
        })
        .collect();
    let rows = cells.chunks(8).map(<[CellView]>::to_vec).collect();
    BoardView { rows }
}
