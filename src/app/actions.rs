use log::debug;

use super::App;
use crate::controller::{DisplayUpdate, Submission};

/// Operations reachable from both the keyboard and the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Translate,
    Cancel,
    FocusNext,
    FocusPrevious,
    Quit,
}

impl App {
    /// The single place where an `AppAction` is carried out.
    pub fn execute_action(&mut self, action: AppAction) {
        debug!("Executing action {:?}", action);
        match action {
            AppAction::Translate => self.trigger_translate(),
            AppAction::Cancel => self.cancel_translation(),
            AppAction::FocusNext => {
                self.picker.close();
                self.focus = self.focus.next();
            }
            AppAction::FocusPrevious => {
                self.picker.close();
                self.focus = self.focus.previous();
            }
            AppAction::Quit => {
                self.controller.cancel();
                self.should_quit = true;
            }
        }
    }

    /// Whether a translation is currently running.
    pub fn is_translating(&self) -> bool {
        self.controller.is_busy()
    }

    fn trigger_translate(&mut self) {
        let selection = self.picker.selection_text().to_string();
        match self.controller.submit(self.input.buffer(), &selection) {
            Submission::Dispatched(request) => {
                self.status_message = format!(
                    "Translating to {} via {}... (Esc to cancel)",
                    selection,
                    self.controller.backend_name()
                );
                debug!("Request dispatched for '{}'", request.target_code);
            }
            Submission::Rejected(update) => self.apply_update(update),
            Submission::Busy => {
                self.status_message = String::from("A translation is already running");
            }
        }
    }

    fn cancel_translation(&mut self) {
        if self.controller.cancel() {
            self.status_message = String::from("Translation cancelled");
        }
    }

    /// Shows a controller result in the output panel.
    pub(crate) fn apply_update(&mut self, update: DisplayUpdate) {
        if let Some(font) = update.font {
            self.output.font = font;
            let face = self.fonts.face(font);
            self.status_message = format!("Rendered with {}", face.choice.family());
        }
        self.output.text = update.text;
    }
}
