use std::time::Instant;

use log::{debug, warn};

use super::{App, FocusArea, InputComposer, LanguagePicker, OutputPanel};
use crate::config::Settings;
use crate::controller::TranslationController;
use crate::fonts::FontRegistry;

impl App {
    /// Creates a new instance of the `App` state.
    ///
    /// # Arguments
    ///
    /// * `settings` - Loaded settings; only the UI section is read here.
    /// * `controller` - The controller that runs translations.
    /// * `fonts` - Font resources resolved at startup.
    pub fn new(settings: &Settings, controller: TranslationController, fonts: FontRegistry) -> Self {
        let catalog = controller.catalog();
        debug!("Initializing App with {} languages", catalog.len());
        for collision in catalog.collisions() {
            warn!(
                "Language name '{}' is listed under '{}' and '{}'; only '{}' is selectable",
                collision.name, collision.winner, collision.shadowed, collision.winner
            );
        }

        let picker = LanguagePicker::new(catalog.display_names());
        let status_message = format!(
            "Backend: {} | Tab to move, Ctrl+T to translate, Ctrl+Q to quit",
            controller.backend_name()
        );

        Self {
            should_quit: false,
            focus: FocusArea::Input,
            input: InputComposer::new(),
            picker,
            output: OutputPanel::default(),
            status_message,
            areas: Default::default(),
            fonts,
            controller,
            last_tick: Instant::now(),
            tick_rate: settings.ui.tick_rate(),
            spinner: 0,
        }
    }
}
