//! Handles to the board screen's sound and piece images
//!
//! Loaded once at startup. Missing files only cost the asset server a warning:
//! the board falls back to drawn discs and moves stay silent.

use bevy::audio::AudioSource;
use bevy::prelude::*;
use std::collections::HashMap;
use tapchess_core::{Piece, PieceGlyph};

/// Sound played after every accepted move
pub const MOVE_SOUND_PATH: &str = "game_sounds/move_self.mp3";

#[derive(Resource)]
pub struct BoardAssets {
    pub move_sound: Handle<AudioSource>,
    pub piece_images: HashMap<Piece, Handle<Image>>,
}

impl BoardAssets {
    pub fn load(asset_server: &AssetServer) -> Self {
        let piece_images = Piece::all()
            .map(|piece| (piece, asset_server.load(PieceGlyph::from(piece).asset_path())))
            .collect();
        Self {
            move_sound: asset_server.load(MOVE_SOUND_PATH),
            piece_images,
        }
    }

    pub fn piece_image(&self, piece: Piece) -> Option<&Handle<Image>> {
        self.piece_images.get(&piece)
    }
}

pub fn load_board_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(BoardAssets::load(&asset_server));
    info!("[ASSETS] Board sound and piece images requested");
}
