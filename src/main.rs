mod app;
mod config;
mod contact;
mod error;
mod events;
mod log;
mod selector;
mod tui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use contact::Roster;
use events::EventHandler;
use selector::Selector;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut roster_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--roster" | "-r" => {
                if i + 1 < args.len() {
                    roster_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --roster requires a path argument");
                    i += 1;
                }
            }
            arg if !arg.starts_with('-') => {
                roster_override = Some(PathBuf::from(arg));
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    // Resolve and load the roster before touching the terminal so errors
    // print normally
    let config = Config::load();
    let contacts = load_contacts(&config, roster_override)?;
    log::log(&format!("Loaded {} contacts", contacts.len()));

    let selector = Selector::new(contacts)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(selector);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Load contacts with precedence: CLI > `ROLO_ROSTER` env var > config file >
/// built-in sample roster.
fn load_contacts(
    config: &Config,
    roster_override: Option<PathBuf>,
) -> error::Result<Vec<contact::Contact>> {
    match config.roster_path(roster_override) {
        Some(path) => Ok(Roster::load(&path)?),
        None => Ok(Roster::sample()),
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        // Wait for the next terminal event; each action is applied fully
        // before the next event is read
        match event_stream.next().await {
            Some(Ok(event)) => {
                let action = EventHandler::handle_event(app, &event);
                app.apply(action);
            }
            Some(Err(e)) => {
                log::log(&format!("Event stream error: {}", e));
            }
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
