//! Board screen UI
//!
//! Draws the grid produced by [`BoardSession::render`](tapchess_core::BoardSession::render)
//! and turns clicks into [`SquareTapped`] messages. The first row drawn at the
//! top is rank 1, as in the board's view model.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiTextureHandle};
use tapchess_core::{CellView, PawnPolicy};

use super::assets::BoardAssets;
use super::board::{status_text, ActiveBoard};
use super::events::{NewGameRequested, SquareTapped};
use crate::core::{AppSettings, FlowTrigger};

const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0x3A, 0x7B, 0xD5);
const MAX_BOARD_SIDE: f32 = 640.0;

fn tone_color(cell: &CellView) -> egui::Color32 {
    if cell.highlighted {
        return SELECTED_FILL;
    }
    let [r, g, b] = cell.tone.rgb();
    egui::Color32::from_rgb(r, g, b)
}

pub fn board_ui_system(
    mut contexts: EguiContexts,
    board: Res<ActiveBoard>,
    mut settings: ResMut<AppSettings>,
    assets: Option<Res<BoardAssets>>,
    asset_server: Option<Res<AssetServer>>,
    mut taps: MessageWriter<SquareTapped>,
    mut new_game: MessageWriter<NewGameRequested>,
    mut flow: MessageWriter<FlowTrigger>,
) -> Result {
    // Piece textures that finished loading, registered with egui on first use
    let mut textures = Vec::new();
    if let (Some(assets), Some(asset_server)) = (assets.as_deref(), asset_server.as_deref()) {
        for (piece, handle) in &assets.piece_images {
            if asset_server.is_loaded(handle.id()) {
                let id = contexts.add_image(EguiTextureHandle::Strong(handle.clone()));
                textures.push((*piece, id));
            }
        }
    }

    let ctx = contexts.ctx_mut()?;
    let view = board.render();
    let banner = status_text(board.status(), board.board().side_to_move());

    egui::TopBottomPanel::top("board_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                flow.write(FlowTrigger::Back);
            }
            if ui.button("New game").clicked() {
                new_game.write(NewGameRequested);
            }
            ui.separator();
            ui.label(egui::RichText::new(banner).strong().size(18.0));
        });
    });

    egui::TopBottomPanel::bottom("board_rules").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Pawn rules:");
            let mut policy = settings.pawn_policy;
            ui.checkbox(&mut policy.allow_double_step, "Double step");
            ui.checkbox(&mut policy.allow_en_passant, "En passant");
            ui.checkbox(&mut policy.allow_promotion, "Promotion");
            if ui.button("Restrict").clicked() {
                policy = PawnPolicy::restricted();
            }
            if policy != settings.pawn_policy {
                settings.pawn_policy = policy;
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let side = available.x.min(available.y).min(MAX_BOARD_SIDE);
        let cell_side = (side / 8.0).floor();

        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
            for row in view.rows() {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
                    ui.add_space(((ui.available_width() - cell_side * 8.0) / 2.0).max(0.0));
                    for cell in row {
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(cell_side, cell_side),
                            egui::Sense::click(),
                        );
                        let painter = ui.painter();
                        painter.rect_filled(rect, 0.0, tone_color(cell));

                        if let Some(glyph) = cell.glyph {
                            let texture = textures
                                .iter()
                                .find(|(piece, _)| *piece == glyph.piece())
                                .map(|(_, id)| *id);
                            match texture {
                                Some(id) => {
                                    egui::Image::new((id, rect.size())).paint_at(ui, rect);
                                }
                                None => {
                                    let (fill, text) = if glyph.is_white() {
                                        (egui::Color32::WHITE, egui::Color32::BLACK)
                                    } else {
                                        (egui::Color32::BLACK, egui::Color32::WHITE)
                                    };
                                    let radius = cell_side * 0.38;
                                    painter.circle_filled(rect.center(), radius, fill);
                                    painter.circle_stroke(
                                        rect.center(),
                                        radius,
                                        egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                                    );
                                    painter.text(
                                        rect.center(),
                                        egui::Align2::CENTER_CENTER,
                                        glyph.letter(),
                                        egui::FontId::proportional(cell_side * 0.45),
                                        text,
                                    );
                                }
                            }
                        }

                        let response = match cell.glyph {
                            Some(glyph) => response
                                .on_hover_text(format!("{} {}", glyph.symbol(), cell.square)),
                            None => response,
                        };
                        if response.clicked() {
                            taps.write(SquareTapped(cell.square));
                        }
                    }
                });
            }
        });
    });

    Ok(())
}
