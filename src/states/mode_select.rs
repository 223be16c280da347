//! Game mode selection

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::auth::CurrentSession;
use crate::core::{FlowTrigger, Screen};
use crate::ui::theme;

pub struct ModeSelectPlugin;

impl Plugin for ModeSelectPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            mode_select_ui_system.run_if(in_state(Screen::ModeSelect)),
        );
    }
}

/// Button label and trigger for each mode, top to bottom
const MODES: [(&str, FlowTrigger); 3] = [
    ("PLAY ONLINE", FlowTrigger::ChooseOnline),
    ("PLAY BOTS", FlowTrigger::ChooseBots),
    ("CHESSBOARD", FlowTrigger::ChooseBoard),
];

fn mode_select_ui_system(
    mut contexts: EguiContexts,
    session: Res<CurrentSession>,
    mut flow: MessageWriter<FlowTrigger>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                theme::heading(ui, "Choose a game mode");
                if let Some(session) = &session.0 {
                    ui.label(
                        egui::RichText::new(format!("Signed in as {}", session.email))
                            .color(theme::TEXT_DIM),
                    );
                }
                ui.add_space(40.0);
                for (label, trigger) in MODES {
                    if theme::primary_button(ui, label).clicked() {
                        flow.write(trigger);
                    }
                    ui.add_space(20.0);
                }
            });
        });
    Ok(())
}
