//! Core module - screen state machine and application infrastructure
//!
//! - [`Screen`] - one state per screen, starting at the splash
//! - [`FlowTrigger`] / [`next_screen`] - the navigation graph
//! - [`AppSettings`] - persisted user preferences
//! - [`CorePlugin`] - registers all of the above

pub mod error;
pub mod flow;
pub mod plugin;
pub mod settings;
pub mod states;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use flow::{next_screen, FlowTrigger};
pub use plugin::CorePlugin;
pub use settings::AppSettings;
pub use states::Screen;
