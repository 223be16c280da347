//! Splash screen
//!
//! Shows the title for [`AppSettings::splash_millis`] and then fires
//! [`FlowTrigger::SplashElapsed`]. The timer is one-shot, so the trigger is
//! written exactly once per visit.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use std::time::Duration;

use crate::core::{AppSettings, FlowTrigger, Screen};
use crate::ui::theme;

pub struct SplashPlugin;

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SplashTimer>()
            .add_systems(OnEnter(Screen::Splash), start_splash_timer)
            .add_systems(
                Update,
                check_splash_timer.run_if(in_state(Screen::Splash)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                splash_ui_system.run_if(in_state(Screen::Splash)),
            );
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct SplashTimer(pub Timer);

impl Default for SplashTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(2.0, TimerMode::Once))
    }
}

fn start_splash_timer(mut timer: ResMut<SplashTimer>, settings: Res<AppSettings>) {
    timer.0 = Timer::new(Duration::from_millis(settings.splash_millis), TimerMode::Once);
    info!("[SPLASH] Showing splash for {} ms", settings.splash_millis);
}

fn check_splash_timer(
    mut timer: ResMut<SplashTimer>,
    time: Res<Time>,
    mut flow: MessageWriter<FlowTrigger>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!("[SPLASH] Timer finished");
        flow.write(FlowTrigger::SplashElapsed);
    }
}

fn splash_ui_system(mut contexts: EguiContexts) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                theme::title(ui, "TapChess");
            });
        });
    Ok(())
}
