use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;
use log::{error, info};

use lingo::app::App;
use lingo::catalog::{LanguageCatalog, capitalize};
use lingo::cli::{Cli, Command, exit_code};
use lingo::config::Settings;
use lingo::controller::TranslationController;
use lingo::event::Event;
use lingo::fonts::FontRegistry;
use lingo::translation::build_backend;
use lingo::{logging, tui, ui};

const LOG4RS_FILE: &str = "log4rs.yaml";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("failed to read the working directory")?;
    let settings = Settings::load(&cli.config, &root)?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            run_ui(&settings, &cli.config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Translate {
            to,
            show_font,
            text,
        } => translate_once(&settings, &to, &text.join(" "), show_font).await,
        Command::Languages => {
            for (code, name) in LanguageCatalog::builtin().iter() {
                println!("{code}\t{}", capitalize(name));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::InitConfig { force } => {
            if cli.config.exists() && !force {
                bail!(
                    "{} already exists, pass --force to overwrite it",
                    cli.config.display()
                );
            }
            Settings::default().save_to_file(&cli.config)?;
            println!("Wrote {}", cli.config.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn controller_for(settings: &Settings) -> Result<TranslationController> {
    let backend = build_backend(&settings.backend)?;
    Ok(TranslationController::new(
        Arc::new(LanguageCatalog::builtin()),
        backend,
    ))
}

/// One translate cycle without the terminal UI. Validation messages and
/// backend failures go to stderr with a non-zero exit code.
async fn translate_once(
    settings: &Settings,
    selection: &str,
    text: &str,
    show_font: bool,
) -> Result<ExitCode> {
    logging::init_stderr_logging();
    let mut controller = controller_for(settings)?;
    let update = controller.run(text, selection).await;

    let code = exit_code(update.outcome);
    let Some(font) = update.font.filter(|_| code == 0) else {
        eprintln!("{}", update.text);
        return Ok(ExitCode::from(code));
    };

    println!("{}", update.text);
    if show_font {
        let fonts = FontRegistry::load(&settings.fonts);
        let face = fonts.face(font);
        eprintln!("font: {} ({})", face.choice.family(), face.path.display());
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_ui(settings: &Settings, config_path: &Path) -> Result<()> {
    if let Some(dir) = settings.logging.file.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory: {}", dir.display()))?;
    }
    let log4rs_file = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(LOG4RS_FILE);
    logging::init_file_logging(&settings.logging, &log4rs_file)?;
    info!("Starting lingo UI");

    let controller = controller_for(settings)?;
    let fonts = FontRegistry::load(&settings.fonts);
    let mut app = App::new(settings, controller, fonts);

    tui::install_panic_hook();
    let mut terminal = tui::init().context("failed to initialize the terminal")?;
    let result = event_loop(&mut terminal, &mut app, settings).await;
    tui::restore().context("failed to restore the terminal")?;
    if let Err(err) = &result {
        error!("UI loop stopped: {err:#}");
    }
    info!("lingo UI closed");
    result
}

async fn event_loop(terminal: &mut tui::Tui, app: &mut App, settings: &Settings) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(settings.ui.tick_rate());

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(_, _))) => Event::Resize,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err).context("terminal event stream failed"),
                    None => break,
                }
            }
        };

        app.handle_event(event);
    }
    Ok(())
}
