use super::App;

impl App {
    /// Called on every tick of the main loop.
    ///
    /// Picks up finished translations from the controller and shows them.
    pub(crate) fn on_tick(&mut self) {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = std::time::Instant::now();
            if self.is_translating() {
                self.spinner = self.spinner.wrapping_add(1);
            }
        }

        while let Some(update) = self.controller.poll() {
            self.apply_update(update);
            self.controller.displayed();
        }
    }
}
