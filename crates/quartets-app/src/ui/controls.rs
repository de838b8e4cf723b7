use std::time::Instant;

use eframe::egui::{Button, RichText, Ui};
use quartets_game::Game;

use crate::ui::{Action, Feedback};

const TEXT_SIZE: f32 = 20.0;

pub fn show(ui: &mut Ui, game: &Game, feedback: Option<Feedback>, now: Instant) -> Vec<Action> {
    let mut actions = vec![];

    ui.vertical_centered(|ui| {
        if game.is_won() {
            ui.label(RichText::new("Congratulations! You found every group!").size(TEXT_SIZE));
            ui.label(format!(
                "Wrong guesses: {}",
                game.lockout().failure_count()
            ));
            return;
        }

        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("Shuffle").size(TEXT_SIZE))
                .on_hover_text("Space")
                .clicked()
            {
                actions.push(Action::Shuffle);
            }

            let has_selection = !game.selection().is_empty();
            let button = Button::new(RichText::new("Deselect all").size(TEXT_SIZE));
            if ui
                .add_enabled(has_selection, button)
                .on_hover_text("Escape")
                .clicked()
            {
                actions.push(Action::ClearSelection);
            }

            let can_submit = game.submit_capability(now).is_ok();
            let button = Button::new(RichText::new("Submit").size(TEXT_SIZE));
            if ui
                .add_enabled(can_submit, button)
                .on_hover_text("Enter")
                .clicked()
            {
                actions.push(Action::Submit);
            }
        });

        if let Some(text) = feedback.map(feedback_text) {
            ui.label(RichText::new(text).size(TEXT_SIZE));
        }
        if game.is_locked(now) {
            let minutes = game.remaining_minutes(now);
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            ui.label(format!("Try again in {minutes} {unit}."));
        }
    });

    actions
}

fn feedback_text(feedback: Feedback) -> String {
    match feedback {
        Feedback::Found(difficulty) => format!("Found the {difficulty} group!"),
        Feedback::OneAway => "One away...".to_owned(),
        Feedback::NotAGroup => "Not a group.".to_owned(),
    }
}
