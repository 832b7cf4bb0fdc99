//! TUI module for editing a variable list interactively.

mod app;
mod event;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{Event, poll, read},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::prelude::*;

use vaultclip_core::config::ConfigLoader;

use crate::ListSelector;
use crate::cmd::vars::{kind_for, owner_for};
use app::App;
use event::map_key_event;

/// Run the TUI application.
pub fn run(config_path: Option<&Path>, selector: &ListSelector) -> Result<()> {
    color_eyre::install()?;

    // Load config (fail fast if config broken)
    let settings = ConfigLoader::load(config_path).map_err(|e| {
        color_eyre::eyre::eyre!("Configuration error: {e}\nRun 'vclip doctor' to diagnose.")
    })?;

    if let Some(name) = &selector.template {
        if settings.template(name).is_none() {
            return Err(color_eyre::eyre::eyre!("Template not found: {name}"));
        }
    }

    let app = App::new(
        settings,
        config_path.map(Path::to_path_buf),
        kind_for(selector),
        owner_for(selector),
    );

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(color_eyre::eyre::eyre!("Application panicked")),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        // 1. Render current state
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // 2. Poll for events (with timeout for responsiveness)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // 3. Map key event to message
                if let Some(msg) = map_key_event(&app, key) {
                    // 4. Process message
                    app.update(msg);
                }
            }
        }

        // 5. Check quit condition
        if app.should_quit {
            return Ok(());
        }
    }
}
