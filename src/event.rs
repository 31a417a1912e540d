use crossterm::event::{KeyEvent, MouseEvent};

/// Events driving the UI loop.
#[derive(Debug)]
pub enum Event {
    /// Sent at the configured tick rate; used to drain translation results.
    Tick,
    /// A key press event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize,
}
