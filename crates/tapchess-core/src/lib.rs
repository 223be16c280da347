//! TapChess board core
//!
//! Board model, tap-to-move input, pawn gate and board view model. Everything
//! here is engine-agnostic behind [`RulesEngine`] and free of any UI framework,
//! so the Bevy app and the tests drive it the same way.
//!
//! ```
//! use tapchess_core::{BoardSession, PawnPolicy, Square, TapOutcome};
//!
//! let mut session = BoardSession::new(PawnPolicy::default());
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e3 = Square::from_algebraic("e3").unwrap();
//! assert_eq!(session.on_tap(e2), TapOutcome::Selected(e2));
//! assert!(session.on_tap(e3).moved().is_some());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod pawn_gate;
pub mod piece;
pub mod render;
pub mod selection;
pub mod session;
pub mod square;

pub use board::{BoardModel, GameStatus, MoveRecord};
pub use engine::{RulesEngine, ShakmatyEngine, STARTING_FEN};
pub use error::{MoveError, MoveResult, ParseSquareError, PositionError};
pub use pawn_gate::{PawnPolicy, PawnRejection};
pub use piece::{Piece, PieceColor, PieceKind};
pub use render::{render, BoardView, CellView, PieceGlyph, Tone};
pub use selection::{MoveInput, SelectionState, TapOutcome};
pub use session::BoardSession;
pub use square::{File, Rank, Square};
