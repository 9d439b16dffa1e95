//! pmidash TUI: India Manufacturing PMI on a single terminal page.
//!
//! The fetch runs once, before the terminal is taken over; the page then
//! only reacts to keys:
//! - `e` expand/collapse the export panel
//! - `d` / `Enter` write the CSV (panel expanded)
//! - `q` / `Esc` quit

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pmidash_core::{DashboardConfig, FallbackResolver};
use pmidash_report::{load_history, LoadOptions};
use pmidash_tui::app::AppState;
use pmidash_tui::{input, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let (config, config_warning) = match DashboardConfig::resolve(None) {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(format!("{e}; using defaults"))),
    };

    // Fetch before entering raw mode so a slow source never leaves a blank screen.
    let resolver = FallbackResolver::with_default_sources(&config.fetch);
    let loaded = load_history(&resolver, &LoadOptions::default());

    let mut app = AppState::new(loaded, PathBuf::from(&config.export.file_name));
    if let Some(msg) = config_warning {
        app.set_warning(msg);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }
    }
    Ok(())
}
