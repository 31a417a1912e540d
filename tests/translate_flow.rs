use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use lingo::app::{App, FocusArea, OUTPUT_PLACEHOLDER};
use lingo::catalog::{LanguageCatalog, PLACEHOLDER};
use lingo::config::Settings;
use lingo::controller::TranslationController;
use lingo::event::Event;
use lingo::fonts::{FontChoice, FontRegistry};
use lingo::translation::{TranslationBackend, TranslationError};
use lingo::ui;

/// Tags the text with the target code, or fails, after an optional delay.
struct MockBackend {
    fail: Option<&'static str>,
    delay: Duration,
}

impl MockBackend {
    fn echo() -> Self {
        Self {
            fail: None,
            delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError> {
        tokio::time::sleep(self.delay).await;
        match self.fail {
            Some(message) => Err(TranslationError::Backend(message.to_string())),
            None => Ok(format!("[{target_code}] {text}")),
        }
    }
}

fn app_with(backend: MockBackend) -> App {
    let settings = Settings::default();
    let controller =
        TranslationController::new(Arc::new(LanguageCatalog::builtin()), Arc::new(backend));
    App::new(&settings, controller, FontRegistry::load(&settings.fonts))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn ctrl(app: &mut App, ch: char) {
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Moves focus to the selector and picks `name` by jumping on its initial.
fn choose_language(app: &mut App, name: &str) {
    while app.focus != FocusArea::Language {
        press(app, KeyCode::Tab);
    }
    let initial = name.chars().next().unwrap_or('a');
    for _ in 0..app.picker.names().len() {
        press(app, KeyCode::Char(initial));
        if app.picker.names()[app.picker.highlighted()] == name {
            break;
        }
    }
    press(app, KeyCode::Enter);
    assert_eq!(app.picker.selection_text(), name);
}

async fn wait_for_result(app: &mut App) {
    for _ in 0..200 {
        app.handle_event(Event::Tick);
        if !app.is_translating() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("translation did not finish");
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn keyboard_flow_translates_to_french() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "good morning");
    choose_language(&mut app, "French");
    assert_eq!(app.focus, FocusArea::Button);

    press(&mut app, KeyCode::Enter);
    assert!(app.is_translating());
    wait_for_result(&mut app).await;

    assert_eq!(app.output.text, "[fr] good morning");
    assert_eq!(app.output.font, FontChoice::Default);
}

#[tokio::test]
async fn korean_result_switches_font() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "thank you");
    choose_language(&mut app, "Korean");
    ctrl(&mut app, 't');
    wait_for_result(&mut app).await;

    assert_eq!(app.output.text, "[ko] thank you");
    assert_eq!(app.output.font, FontChoice::Korean);
}

#[tokio::test]
async fn empty_input_is_rejected_without_a_request() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "   ");
    ctrl(&mut app, 't');

    assert!(!app.is_translating());
    assert_eq!(
        app.output.text,
        "Input text is empty, please enter text for translation."
    );
    assert_eq!(app.output.font, FontChoice::Default);
}

#[tokio::test]
async fn missing_language_is_rejected() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "hello");
    assert_eq!(app.picker.selection_text(), PLACEHOLDER);
    ctrl(&mut app, 't');

    assert!(!app.is_translating());
    assert_eq!(app.output.text, "Please select a target language.");
}

#[tokio::test]
async fn backend_failure_is_shown_with_the_chosen_font() {
    let mut app = app_with(MockBackend {
        fail: Some("service unavailable"),
        delay: Duration::ZERO,
    });
    type_text(&mut app, "hello");
    choose_language(&mut app, "Arabic");
    ctrl(&mut app, 't');
    wait_for_result(&mut app).await;

    assert_eq!(app.output.text, "Translation error: service unavailable");
    assert_eq!(app.output.font, FontChoice::Arabic);
}

#[tokio::test]
async fn second_trigger_is_ignored_and_escape_cancels() {
    let mut app = app_with(MockBackend {
        fail: None,
        delay: Duration::from_secs(30),
    });
    type_text(&mut app, "hello");
    choose_language(&mut app, "German");
    ctrl(&mut app, 't');
    assert!(app.is_translating());

    ctrl(&mut app, 't');
    assert_eq!(app.status_message, "A translation is already running");

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_translating());
    assert_eq!(app.status_message, "Translation cancelled");
    app.handle_event(Event::Tick);
    assert_eq!(app.output.text, OUTPUT_PLACEHOLDER);
}

#[tokio::test]
async fn shortcuts_reach_past_an_open_list() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "hello");
    choose_language(&mut app, "Italian");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, FocusArea::Language);
    assert!(app.picker.is_open());

    press(&mut app, KeyCode::F(5));
    assert!(!app.picker.is_open());
    assert!(app.is_translating());
    wait_for_result(&mut app).await;
    assert_eq!(app.output.text, "[it] hello");

    press(&mut app, KeyCode::Enter);
    assert!(app.picker.is_open());
    ctrl(&mut app, 'q');
    assert!(app.should_quit);
}

#[tokio::test]
async fn first_frame_shows_placeholders() {
    let mut app = app_with(MockBackend::echo());
    let screen = draw(&mut app);
    assert!(screen.contains(PLACEHOLDER));
    assert!(screen.contains(OUTPUT_PLACEHOLDER));
    assert!(screen.contains("Translate"));
}

#[tokio::test]
async fn clicking_the_button_translates() {
    let mut app = app_with(MockBackend::echo());
    type_text(&mut app, "hello");
    choose_language(&mut app, "Spanish");
    draw(&mut app);

    let button = app.areas.button;
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: button.x + 1,
        row: button.y + 1,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(app.is_translating());
    wait_for_result(&mut app).await;
    assert_eq!(app.output.text, "[es] hello");
}

#[tokio::test]
async fn clicking_a_list_entry_selects_it() {
    let mut app = app_with(MockBackend::echo());
    draw(&mut app);
    let picker = app.areas.picker;
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: picker.x + 2,
        row: picker.y + 1,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(app.picker.is_open());

    draw(&mut app);
    let popup = app.areas.popup.expect("list should be on screen");
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: popup.x,
        row: popup.y + 1,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(!app.picker.is_open());
    assert_eq!(app.picker.selection_text(), app.picker.names()[1]);
}
