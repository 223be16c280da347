//! Headless app helpers shared by the integration tests

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use tapchess::core::{CorePlugin, Screen};

/// MinimalPlugins + states + core, opened on `screen`.
///
/// Runs one update so the initial `OnEnter` has fired.
pub fn headless_app(screen: Screen, configure: impl FnOnce(&mut App)) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    configure(&mut app);
    app.add_plugins(CorePlugin::starting_at(screen));
    app.update();
    app
}

pub fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

/// Update until `done` holds or `max_updates` frames have run
pub fn update_until(app: &mut App, max_updates: usize, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..max_updates {
        if done(app) {
            return true;
        }
        app.update();
    }
    done(app)
}
