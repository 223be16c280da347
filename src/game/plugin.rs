//! Game plugin - the local two-player board screen
//!
//! # System Organization
//!
//! - `OnEnter(Screen::Board)` - fresh [`ActiveBoard`] session
//! - `OnExit(Screen::Board)` - selection dropped
//! - `Update` - taps, new-game requests and pawn policy sync, chained so a
//!   tap never sees a half-applied reset
//! - `EguiPrimaryContextPass` - the board UI
//!
//! Loading sounds and piece images needs an asset server, so that lives in
//! [`BoardAssetsPlugin`] and headless apps can leave it out.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use super::assets::load_board_assets;
use super::board::{
    clear_board_selection, handle_new_game, handle_square_taps, start_board_session,
    sync_pawn_policy, ActiveBoard,
};
use super::board_ui::board_ui_system;
use super::events::{MovePlayed, NewGameRequested, SquareTapped};
use crate::core::Screen;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveBoard>()
            .add_message::<SquareTapped>()
            .add_message::<MovePlayed>()
            .add_message::<NewGameRequested>();

        app.add_systems(OnEnter(Screen::Board), start_board_session)
            .add_systems(OnExit(Screen::Board), clear_board_selection)
            .add_systems(
                Update,
                (sync_pawn_policy, handle_new_game, handle_square_taps)
                    .chain()
                    .run_if(in_state(Screen::Board)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                board_ui_system.run_if(in_state(Screen::Board)),
            );
    }
}

/// Sound and piece image handles for the board screen
pub struct BoardAssetsPlugin;

impl Plugin for BoardAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_board_assets);
    }
}
