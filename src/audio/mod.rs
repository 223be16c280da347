//! Move sound and master volume
//!
//! Every [`MovePlayed`] spawns a one-shot player that despawns itself when the
//! clip ends. Playback is fire-and-forget; nothing waits on it.

use bevy::audio::Volume;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::AppSettings;
use crate::game::{BoardAssets, MovePlayed};

pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (play_move_sound, apply_master_volume_system));
    }
}

pub fn play_move_sound(
    mut commands: Commands,
    mut moves: MessageReader<MovePlayed>,
    assets: Option<Res<BoardAssets>>,
    settings: Res<AppSettings>,
) {
    let Some(assets) = assets else {
        moves.clear();
        return;
    };
    for MovePlayed(record) in moves.read() {
        debug!("[AUDIO] move sound for {}{}", record.from, record.to);
        commands.spawn((
            AudioPlayer::new(assets.move_sound.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(settings.master_volume)),
        ));
    }
}

/// Applies master volume to sounds already playing when the setting changes
pub fn apply_master_volume_system(
    settings: Res<AppSettings>,
    mut audio_sinks: Query<&mut AudioSink>,
    mut last_volume: Local<Option<f32>>,
) {
    let current_volume = settings.master_volume;
    if let Some(prev_volume) = *last_volume {
        if (prev_volume - current_volume).abs() < 0.001 {
            return;
        }
    }
    *last_volume = Some(current_volume);

    for mut sink in audio_sinks.iter_mut() {
        sink.set_volume(Volume::Linear(current_volume));
    }

    if !audio_sinks.is_empty() {
        info!(
            "[AUDIO] Applied master volume: {:.0}%",
            current_volume * 100.0
        );
    }
}
