//! Core plugin for TapChess
//!
//! Sets up the screen state machine, the flow controller and settings
//! persistence. Add it before any screen plugin; they all schedule against
//! [`Screen`].

use bevy::prelude::*;

use super::{
    flow::{apply_flow_triggers, FlowTrigger},
    settings::{save_settings_system, AppSettings},
    states::{validate_and_log_screen_transitions, Screen},
};

/// Core plugin for the TapChess application
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(CorePlugin::default())
///     // ... screen plugins
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin {
    /// Screen the app opens on
    pub initial_screen: Screen,
}

impl CorePlugin {
    pub fn starting_at(initial_screen: Screen) -> Self {
        Self { initial_screen }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Settings are normally inserted by main after reading the file
        app.init_resource::<AppSettings>();

        app.insert_state(self.initial_screen)
            .register_type::<Screen>()
            .add_message::<FlowTrigger>();

        app.add_systems(
            Update,
            (
                apply_flow_triggers,
                validate_and_log_screen_transitions,
                save_settings_system,
            ),
        );
    }
}
