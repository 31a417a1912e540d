use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, AppAction, FocusArea};

const PAGE: isize = 10;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Global shortcuts are checked before the key reaches the focused
    /// widget. An open language list captures everything except quit and
    /// translate.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let shortcut = global_shortcut(key, self.is_translating());
        if self.picker.is_open() {
            match shortcut {
                Some(action @ (AppAction::Quit | AppAction::Translate)) => {
                    self.picker.close();
                    self.execute_action(action);
                }
                _ => self.handle_picker_key(key),
            }
            return;
        }

        if let Some(action) = shortcut {
            self.execute_action(action);
            return;
        }

        match self.focus {
            FocusArea::Input => self.handle_input_key(key),
            FocusArea::Language => self.handle_language_key(key),
            FocusArea::Button => self.handle_button_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => self.input.clear(),
            (KeyCode::Char(ch), m) if !m.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(ch)
            }
            (KeyCode::Enter, _) => self.input.insert_newline(),
            (KeyCode::Backspace, _) => self.input.backspace(),
            (KeyCode::Delete, _) => self.input.delete(),
            (KeyCode::Left, _) => self.input.move_left(),
            (KeyCode::Right, _) => self.input.move_right(),
            (KeyCode::Home, _) => self.input.move_to_line_start(),
            (KeyCode::End, _) => self.input.move_to_line_end(),
            _ => {}
        }
    }

    fn handle_language_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.picker.open(),
            KeyCode::Char(ch) if ch.is_alphabetic() => {
                self.picker.open();
                self.picker.jump_to_initial(ch);
            }
            _ => {}
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.execute_action(AppAction::Translate);
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.picker.close(),
            KeyCode::Up => self.picker.move_highlight(-1),
            KeyCode::Down => self.picker.move_highlight(1),
            KeyCode::PageUp => self.picker.move_highlight(-PAGE),
            KeyCode::PageDown => self.picker.move_highlight(PAGE),
            KeyCode::Home => self.picker.highlight_first(),
            KeyCode::End => self.picker.highlight_last(),
            KeyCode::Enter => {
                self.picker.commit();
                self.status_message = format!("Target language: {}", self.picker.selection_text());
                self.focus = FocusArea::Button;
            }
            KeyCode::Tab => self.execute_action(AppAction::FocusNext),
            KeyCode::BackTab => self.execute_action(AppAction::FocusPrevious),
            KeyCode::Char(ch) if ch.is_alphabetic() => {
                self.picker.jump_to_initial(ch);
            }
            _ => {}
        }
    }
}

/// Maps keys that work regardless of focus.
fn global_shortcut(key: KeyEvent, translating: bool) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(AppAction::Quit),
        KeyCode::Char('t') if ctrl => Some(AppAction::Translate),
        KeyCode::F(5) => Some(AppAction::Translate),
        KeyCode::Tab => Some(AppAction::FocusNext),
        KeyCode::BackTab => Some(AppAction::FocusPrevious),
        KeyCode::Esc if translating => Some(AppAction::Cancel),
        _ => None,
    }
}
