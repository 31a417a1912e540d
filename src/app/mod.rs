//! The `app` module holds the translator window's state and input handling.
//!
//! This `mod.rs` declares the submodules and re-exports the key types so the
//! rest of the crate can write `crate::app::App`.

// --- Submodules ---

/// `actions`: the operations triggered from keys and clicks (translate, cancel, quit).
mod actions;
/// `init`: construction of `App`.
mod init;
/// `keyboard`: keyboard event routing.
mod keyboard;
/// `mouse`: mouse event routing and hit-testing.
mod mouse;
/// `state`: `App` and the widget state types.
mod state;
/// `tick`: periodic work, chiefly draining translation results.
mod tick;

// --- Re-exports ---
pub use actions::AppAction;
pub use state::{
    App, FocusArea, HitAreas, INPUT_HINT, InputComposer, LanguagePicker, OUTPUT_PLACEHOLDER,
    OutputPanel,
};
pub(crate) use state::display_width;

use crate::event::Event;

impl App {
    /// Dispatches one event from the main loop.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize => {}
        }
    }
}
