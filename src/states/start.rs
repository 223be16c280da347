//! Start screen: title and a play button

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::core::{FlowTrigger, Screen};
use crate::ui::theme;

pub struct StartPlugin;

impl Plugin for StartPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            start_ui_system.run_if(in_state(Screen::Start)),
        );
    }
}

fn start_ui_system(mut contexts: EguiContexts, mut flow: MessageWriter<FlowTrigger>) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 4.0);
                theme::title(ui, "TapChess");
                ui.add_space(60.0);
                if theme::primary_button(ui, "PLAY").clicked() {
                    flow.write(FlowTrigger::Play);
                }
            });
        });
    Ok(())
}
