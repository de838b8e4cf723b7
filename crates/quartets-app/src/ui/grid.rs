use std::sync::Arc;

use eframe::egui::{self, Button, Color32, RichText, Ui, Vec2};
use quartets_core::{Difficulty, GROUP_COUNT, GROUP_SIZE, TileRow};
use quartets_game::Game;

use crate::ui::Action;

const PADDING: f32 = 8.0;

#[must_use]
pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Yellow => Color32::from_rgb(0xf9, 0xdf, 0x6d),
        Difficulty::Green => Color32::from_rgb(0xa0, 0xc3, 0x5a),
        Difficulty::Blue => Color32::from_rgb(0xb0, 0xc4, 0xef),
        Difficulty::Purple => Color32::from_rgb(0xba, 0x81, 0xc5),
    }
}

pub fn show(ui: &mut Ui, game: &Game) -> Vec<Action> {
    let mut actions = vec![];

    #[expect(clippy::cast_precision_loss)]
    let (rows, cols) = (GROUP_COUNT as f32, GROUP_SIZE as f32);
    let avail = ui.available_size();
    let tile_size = Vec2::new(
        (avail.x - (cols - 1.0) * PADDING) / cols,
        (avail.y - (rows - 1.0) * PADDING) / rows,
    );

    ui.spacing_mut().item_spacing = Vec2::splat(PADDING);
    ui.vertical(|ui| {
        for row in game.grid().rows() {
            if row.is_solved() {
                show_solved_row(ui, game, row, tile_size);
            } else {
                actions.extend(show_unsolved_row(ui, game, row, tile_size));
            }
        }
    });

    actions
}

fn show_solved_row(ui: &mut Ui, game: &Game, row: &TileRow, tile_size: Vec2) {
    let Some(group) = game.solved_group(row) else {
        return;
    };
    let width = tile_size.x * 4.0 + PADDING * 3.0;
    egui::Frame::new()
        .fill(difficulty_color(group.difficulty()))
        .corner_radius(6.0)
        .inner_margin(PADDING)
        .show(ui, |ui| {
            ui.set_min_size(Vec2::new(width, tile_size.y) - Vec2::splat(PADDING * 2.0));
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(group.name())
                        .strong()
                        .size(tile_size.y * 0.22)
                        .color(Color32::BLACK),
                );
                ui.label(
                    RichText::new(group.words().join(", "))
                        .size(tile_size.y * 0.18)
                        .color(Color32::BLACK),
                );
            });
        });
}

fn show_unsolved_row(ui: &mut Ui, game: &Game, row: &TileRow, tile_size: Vec2) -> Vec<Action> {
    let mut actions = vec![];

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let selected_bg_color = visuals.selection.bg_fill;
    let selected_text_color = visuals.selection.stroke.color;
    let bg_color = visuals.widgets.inactive.weak_bg_fill;
    let text_color = visuals.strong_text_color();

    ui.horizontal(|ui| {
        for &tile in row.tiles() {
            let selected = game.is_selected(tile);
            let text = RichText::new(game.puzzle().word(tile))
                .strong()
                .size(tile_size.y * 0.22)
                .color(if selected {
                    selected_text_color
                } else {
                    text_color
                });
            let button = Button::new(text)
                .min_size(tile_size)
                .corner_radius(6.0)
                .fill(if selected { selected_bg_color } else { bg_color });
            let enabled = game.toggle_tile_capability(tile).is_ok();
            if ui.add_enabled(enabled, button).clicked() {
                actions.push(Action::ToggleTile(tile));
            }
        }
    });

    actions
}
