//! Core state structures for the translator window.
//!
//! `App` holds everything the renderer needs: the text being edited, the
//! language selector, the output panel and the controller that runs
//! translations. The smaller widgets keep their own state here too.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::catalog::PLACEHOLDER;
use crate::controller::TranslationController;
use crate::fonts::{FontChoice, FontRegistry};

/// Text shown in the output panel before the first translation.
pub const OUTPUT_PLACEHOLDER: &str = "Translation appears here";
/// Hint shown in the empty input box.
pub const INPUT_HINT: &str = "Enter text for Translation";

/// The main application state.
pub struct App {
    // --- Core State ---
    /// Set when the main loop should exit.
    pub should_quit: bool,
    /// The widget receiving keyboard input.
    pub focus: FocusArea,
    /// The multi-line source text.
    pub input: InputComposer,
    /// The target language selector.
    pub picker: LanguagePicker,
    /// The translated text and the font it should render with.
    pub output: OutputPanel,

    // --- UI & Layout ---
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Screen regions from the last frame, used for mouse hit-testing.
    pub areas: HitAreas,
    /// Font resources resolved at startup.
    pub fonts: FontRegistry,

    // --- Internal State ---
    pub(crate) controller: TranslationController,
    pub(crate) last_tick: Instant,
    pub(crate) tick_rate: Duration,
    /// Advances once per tick while a translation is running.
    pub(crate) spinner: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Input,
    Language,
    Button,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Input => FocusArea::Language,
            FocusArea::Language => FocusArea::Button,
            FocusArea::Button => FocusArea::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusArea::Input => FocusArea::Button,
            FocusArea::Language => FocusArea::Input,
            FocusArea::Button => FocusArea::Language,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::Input => "Input",
            FocusArea::Language => "Language",
            FocusArea::Button => "Translate",
        }
    }
}

/// Regions registered by the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub picker: Rect,
    pub button: Rect,
    pub output: Rect,
    /// Inner area of the open language list, if shown.
    pub popup: Option<Rect>,
    /// Index of the first list entry visible in `popup`.
    pub popup_offset: usize,
}

/// State for the multi-line text input.
///
/// The cursor is a byte offset into `buffer` and always sits on a char
/// boundary.
#[derive(Clone, Default)]
pub struct InputComposer {
    buffer: String,
    cursor: usize,
}

impl InputComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Inserts a string at the cursor, e.g. from a paste.
    pub fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    /// Deletes the character at the cursor (delete).
    pub fn delete(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Moves the cursor to the start of the current line.
    pub fn move_to_line_start(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
    }

    /// Moves the cursor to the end of the current line.
    pub fn move_to_line_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|pos| self.cursor + pos)
            .unwrap_or(self.buffer.len());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Calculates the (col, row) position of the cursor for rendering inside
    /// a box `width` cells wide.
    ///
    /// A row only breaks when the next character does not fit, so after a
    /// line that fills the box exactly the cursor stays on that row with
    /// `col == width`. The input paragraph wraps the same way.
    pub fn cursor_display_position(&self, width: usize) -> (u16, u16) {
        if width == 0 {
            return (0, 0);
        }
        let mut col = 0usize;
        let mut row = 0usize;
        for ch in self.buffer[..self.cursor].chars() {
            if ch == '\n' {
                row += 1;
                col = 0;
                continue;
            }
            let char_width = display_width(ch);
            if col + char_width > width && col > 0 {
                row += 1;
                col = 0;
            }
            col += char_width;
        }
        (col as u16, row as u16)
    }
}

/// Cells a character takes in the input box. Zero-width and control
/// characters still take one cell.
pub(crate) fn display_width(ch: char) -> usize {
    unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1).max(1)
}

/// State for the language selector.
///
/// Until the user commits a choice the selector shows `PLACEHOLDER`.
#[derive(Debug, Clone)]
pub struct LanguagePicker {
    names: Vec<String>,
    selected: Option<usize>,
    highlighted: usize,
    open: bool,
}

impl LanguagePicker {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            selected: None,
            highlighted: 0,
            open: false,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The text the selector currently shows.
    pub fn selection_text(&self) -> &str {
        self.selected
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the list with the current selection highlighted.
    pub fn open(&mut self) {
        if self.names.is_empty() {
            return;
        }
        self.highlighted = self.selected.unwrap_or(0);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Selects the highlighted entry and closes the list.
    pub fn commit(&mut self) {
        if self.open && self.highlighted < self.names.len() {
            self.selected = Some(self.highlighted);
        }
        self.open = false;
    }

    /// Selects an entry by index, as a mouse click does.
    pub fn select(&mut self, index: usize) {
        if index < self.names.len() {
            self.highlighted = index;
            self.selected = Some(index);
            self.open = false;
        }
    }

    /// Moves the highlight, clamping at both ends.
    pub fn move_highlight(&mut self, delta: isize) {
        if self.names.is_empty() {
            self.highlighted = 0;
            return;
        }
        let last = self.names.len() as isize - 1;
        self.highlighted = (self.highlighted as isize + delta).clamp(0, last) as usize;
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = 0;
    }

    pub fn highlight_last(&mut self) {
        self.highlighted = self.names.len().saturating_sub(1);
    }

    /// Highlights the next name starting with `initial`, wrapping around, so
    /// repeated presses cycle through every match.
    pub fn jump_to_initial(&mut self, initial: char) -> bool {
        let wanted: String = initial.to_lowercase().collect();
        let len = self.names.len();
        let hit = (1..=len)
            .map(|step| (self.highlighted + step) % len.max(1))
            .find(|idx| self.names[*idx].to_lowercase().starts_with(&wanted));
        match hit {
            Some(idx) => {
                self.highlighted = idx;
                true
            }
            None => false,
        }
    }
}

/// The result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPanel {
    pub text: String,
    pub font: FontChoice,
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self {
            text: OUTPUT_PLACEHOLDER.to_string(),
            font: FontChoice::Default,
        }
    }
}
