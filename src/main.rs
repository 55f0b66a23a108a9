// plugrope - Plug sockets demo
// Drag a rope from an input socket to an output socket in the terminal

mod app;
mod rope;
mod sockets;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    config::UI_POLL_INTERVAL,
    event::{handle_key_event, handle_mouse_event},
    AppState, ThemeMode, UnitCatalog,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, sync::Mutex};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Stdout belongs to the TUI, so logs only go to a file when asked for
    init_logging()?;

    let app = AppState::new(UnitCatalog::default()).with_theme(ThemeMode::from_env());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("PLUGROPE_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PLUGROPE_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path, "plugrope starting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Second measurement phase: read back where the sockets landed
        app.resolve_positions();

        if !app.running {
            return Ok(());
        }

        if event::poll(UI_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
                // Layout changes are picked up by the next draw
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }
}
