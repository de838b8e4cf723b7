use std::time::Instant;

use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use quartets_game::Game;

use crate::ui::{self, Action, Feedback};

pub fn show(ui: &mut Ui, game: &Game, feedback: Option<Feedback>, now: Instant) -> Vec<Action> {
    let mut actions = vec![];
    StripBuilder::new(ui)
        .size(Size::relative(0.8))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                actions.extend(ui::grid::show(ui, game));
            });
            strip.cell(|ui| {
                actions.extend(ui::controls::show(ui, game, feedback, now));
            });
        });
    actions
}
