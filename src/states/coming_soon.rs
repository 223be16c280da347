//! Placeholder screens for online play and bots

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::core::{FlowTrigger, Screen};
use crate::ui::theme;

pub struct ComingSoonPlugin;

impl Plugin for ComingSoonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            coming_soon_ui_system
                .run_if(in_state(Screen::OnlineStub).or(in_state(Screen::BotsStub))),
        );
    }
}

fn title_for(screen: Screen) -> &'static str {
    match screen {
        Screen::OnlineStub => "Online play",
        Screen::BotsStub => "Play against bots",
        _ => "",
    }
}

fn coming_soon_ui_system(
    mut contexts: EguiContexts,
    screen: Res<State<Screen>>,
    mut flow: MessageWriter<FlowTrigger>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                theme::heading(ui, title_for(*screen.get()));
                ui.add_space(20.0);
                ui.label(egui::RichText::new("Coming soon").color(theme::TEXT_DIM));
                ui.add_space(40.0);
                if theme::secondary_button(ui, "BACK").clicked() {
                    flow.write(FlowTrigger::Back);
                }
            });
        });
    Ok(())
}
