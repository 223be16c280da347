//! UI module - egui screens that are not tied to a single state plugin
//!
//! - **auth**: login and registration forms plus the background auth task
//! - **theme**: colors and widget helpers shared by every screen
//!
//! All drawing happens in `EguiPrimaryContextPass` via `EguiContexts`.

pub mod auth;
pub mod theme;

pub use auth::{AuthRequest, AuthState, AuthUiPlugin};
