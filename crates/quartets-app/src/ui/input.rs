use eframe::egui::{InputState, Key};

use crate::ui::Action;

pub fn handle_input(i: &InputState) -> Vec<Action> {
    let pairs = [
        (Key::Space, Action::Shuffle),
        (Key::Escape, Action::ClearSelection),
        (Key::Enter, Action::Submit),
    ];
    pairs
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, action)| action)
        .collect()
}
