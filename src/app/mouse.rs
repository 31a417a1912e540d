use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::{App, AppAction, FocusArea};

impl App {
    /// Routes a mouse event using the regions registered by the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(col, row),
            MouseEventKind::ScrollDown if self.picker.is_open() => self.picker.move_highlight(1),
            MouseEventKind::ScrollUp if self.picker.is_open() => self.picker.move_highlight(-1),
            _ => {}
        }
    }

    fn handle_click(&mut self, col: u16, row: u16) {
        if self.picker.is_open() {
            if let Some(popup) = self.areas.popup
                && contains(popup, col, row)
            {
                let index = self.areas.popup_offset + (row - popup.y) as usize;
                self.picker.select(index);
                self.status_message = format!("Target language: {}", self.picker.selection_text());
                self.focus = FocusArea::Button;
                return;
            }
            self.picker.close();
            return;
        }

        if contains(self.areas.button, col, row) {
            self.focus = FocusArea::Button;
            self.execute_action(AppAction::Translate);
        } else if contains(self.areas.picker, col, row) {
            self.focus = FocusArea::Language;
            self.picker.open();
        } else if contains(self.areas.input, col, row) {
            self.focus = FocusArea::Input;
        }
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
