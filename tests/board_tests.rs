//! Board screen systems in a headless app

mod common;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use common::{headless_app, screen};
use tapchess::audio::AudioFeedbackPlugin;
use tapchess::core::{AppSettings, FlowTrigger, Screen};
use tapchess::game::{ActiveBoard, GamePlugin, MovePlayed, NewGameRequested, SquareTapped};
use tapchess_core::{PawnPolicy, PieceColor, SelectionState, Square, STARTING_FEN};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn board_app() -> App {
    let mut app = headless_app(Screen::ModeSelect, |app| {
        app.add_plugins((GamePlugin, AudioFeedbackPlugin));
    });
    app.world_mut().write_message(FlowTrigger::ChooseBoard);
    app.update();
    app.update();
    assert_eq!(screen(&app), Screen::Board);
    app
}

fn tap(app: &mut App, squares: &[&str]) {
    for name in squares {
        app.world_mut().write_message(SquareTapped(sq(name)));
    }
    app.update();
}

fn moves_played(app: &App) -> Vec<MovePlayed> {
    let messages = app.world().resource::<Messages<MovePlayed>>();
    messages.get_cursor().read(messages).cloned().collect()
}

fn board(app: &App) -> &ActiveBoard {
    app.world().resource::<ActiveBoard>()
}

#[test]
fn test_entering_board_starts_fresh_game() {
    let app = board_app();
    assert_eq!(board(&app).serialize(), STARTING_FEN);
    assert_eq!(board(&app).selection(), SelectionState::Empty);
}

#[test]
fn test_single_step_is_played() {
    let mut app = board_app();
    tap(&mut app, &["e2", "e3"]);

    let played = moves_played(&app);
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].0.from, sq("e2"));
    assert_eq!(played[0].0.to, sq("e3"));
    assert_eq!(board(&app).board().side_to_move(), PieceColor::Black);
    assert_eq!(board(&app).selection(), SelectionState::Empty);
}

#[test]
fn test_double_step_is_refused_silently() {
    let mut app = board_app();
    tap(&mut app, &["e2", "e4"]);

    assert!(moves_played(&app).is_empty());
    assert_eq!(board(&app).serialize(), STARTING_FEN);
    assert_eq!(board(&app).selection(), SelectionState::Empty);
}

#[test]
fn test_permissive_policy_from_settings() {
    let mut app = headless_app(Screen::ModeSelect, |app| {
        app.insert_resource(AppSettings {
            pawn_policy: PawnPolicy::permissive(),
            ..default()
        })
        .add_plugins(GamePlugin);
    });
    app.world_mut().write_message(FlowTrigger::ChooseBoard);
    app.update();
    app.update();

    tap(&mut app, &["e2", "e4"]);
    assert_eq!(moves_played(&app).len(), 1);
}

#[test]
fn test_leaving_clears_selection_and_return_starts_over() {
    let mut app = board_app();
    tap(&mut app, &["e2", "e3"]);
    tap(&mut app, &["e7"]);
    assert_eq!(board(&app).selection(), SelectionState::Selected(sq("e7")));

    app.world_mut().write_message(FlowTrigger::Back);
    app.update();
    app.update();
    assert_eq!(screen(&app), Screen::ModeSelect);
    assert_eq!(board(&app).selection(), SelectionState::Empty);

    app.world_mut().write_message(FlowTrigger::ChooseBoard);
    app.update();
    app.update();
    assert_eq!(board(&app).serialize(), STARTING_FEN);
}

#[test]
fn test_taps_ignored_off_the_board_screen() {
    let mut app = board_app();
    app.world_mut().write_message(FlowTrigger::Back);
    app.update();
    app.update();

    tap(&mut app, &["e2", "e3"]);
    assert_eq!(board(&app).serialize(), STARTING_FEN);
}

#[test]
fn test_new_game_resets_position() {
    let mut app = board_app();
    tap(&mut app, &["e2", "e3"]);
    assert_ne!(board(&app).serialize(), STARTING_FEN);

    app.world_mut().write_message(NewGameRequested);
    app.update();
    assert_eq!(board(&app).serialize(), STARTING_FEN);
}
