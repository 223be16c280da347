//! Screen plugins
//!
//! One plugin per screen that is not the board or the auth forms:
//!
//! - `splash` - SplashPlugin: timed title card
//! - `start` - StartPlugin: play button
//! - `mode_select` - ModeSelectPlugin: online / bots / chessboard
//! - `coming_soon` - ComingSoonPlugin: placeholders for online and bots
//!
//! Screens only emit [`FlowTrigger`](crate::core::FlowTrigger)s; the flow
//! controller in `core` decides where that leads.

pub mod coming_soon;
pub mod mode_select;
pub mod splash;
pub mod start;

pub use coming_soon::ComingSoonPlugin;
pub use mode_select::ModeSelectPlugin;
pub use splash::{SplashPlugin, SplashTimer};
pub use start::StartPlugin;
