//! Quartets desktop application UI.
//!
//! # Design Notes
//! - Four rows of word tiles; solved rows turn into coloured bars at the top.
//! - Mouse selection with keyboard shortcuts for shuffle, deselect and submit.
//! - The lockout is polled every frame; a repaint is scheduled while locked so
//!   the submit button re-enables on its own.

use std::time::{Duration, Instant};

use eframe::{
    App, Frame,
    egui::{CentralPanel, Context},
};
use quartets_game::{Game, SubmitOutcome};

use crate::ui::{self, Action, Feedback};

const LOCKED_REPAINT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct QuartetsApp {
    game: Game,
    feedback: Option<Feedback>,
}

impl QuartetsApp {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            feedback: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::ToggleTile(tile) => {
                if self.game.toggle_tile(tile).is_ok() {
                    self.feedback = None;
                }
            }
            Action::Shuffle => {
                self.game.shuffle();
            }
            Action::ClearSelection => {
                self.game.clear_selection();
                self.feedback = None;
            }
            Action::Submit => {
                self.feedback = match self.game.submit(now) {
                    Ok(SubmitOutcome::Solved { difficulty, .. }) => {
                        Some(Feedback::Found(difficulty))
                    }
                    Ok(SubmitOutcome::Mismatch { one_away: true, .. }) => Some(Feedback::OneAway),
                    Ok(SubmitOutcome::Mismatch { .. }) => Some(Feedback::NotAGroup),
                    Err(_) => self.feedback,
                };
            }
        }
    }

    pub fn handle_all(&mut self, actions: impl IntoIterator<Item = Action>, now: Instant) {
        for action in actions {
            self.handle_action(action, now);
        }
    }
}

impl App for QuartetsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();

        let actions = ctx.input(ui::input::handle_input);
        self.handle_all(actions, now);

        let actions = CentralPanel::default()
            .show(ctx, |ui| {
                ui::game_screen::show(ui, &self.game, self.feedback, now)
            })
            .inner;
        self.handle_all(actions, now);

        if self.game.is_locked(now) {
            let remaining = self.game.lockout().remaining(now);
            ctx.request_repaint_after(remaining.min(LOCKED_REPAINT_INTERVAL));
        }
    }
}
