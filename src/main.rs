use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use tapchess::audio::AudioFeedbackPlugin;
use tapchess::cli::Cli;
use tapchess::core::{settings::load_settings, CorePlugin};
use tapchess::game::{BoardAssetsPlugin, GamePlugin};
use tapchess::states::{ComingSoonPlugin, ModeSelectPlugin, SplashPlugin, StartPlugin};
use tapchess::ui::AuthUiPlugin;

const WINDOW_WIDTH: u32 = 480;
const WINDOW_HEIGHT: u32 = 800;

fn main() {
    let cli = Cli::parse();

    let window = Window {
        title: "TapChess".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window),
                ..default()
            })
            .set(LogPlugin {
                filter: cli.log_filter(),
                ..default()
            }),
    )
    .add_plugins(EguiPlugin::default());

    // Logging is up from here on
    let settings = load_settings();
    let services = cli.auth_services(&settings);

    app.insert_resource(settings)
        .insert_resource(services)
        .add_plugins(CorePlugin::starting_at(cli.initial_screen()))
        // Screens
        .add_plugins((
            SplashPlugin,
            StartPlugin,
            AuthUiPlugin,
            ModeSelectPlugin,
            ComingSoonPlugin,
            GamePlugin,
        ))
        .add_plugins((BoardAssetsPlugin, AudioFeedbackPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
