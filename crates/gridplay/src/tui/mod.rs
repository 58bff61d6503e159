//! Terminal front end: one board, driven by mouse and keyboard.

mod app;
mod layout;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::Config;
use app::App;
use layout::ScreenLayout;

/// Runs the terminal UI until the user quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit even when the loop fails.
#[instrument(skip(config))]
pub fn run(config: &Config) -> Result<()> {
    info!(game = %config.default_game(), "Starting gridplay TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.default_game());
    let res = event_loop(&mut terminal, &mut app, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Gridplay TUI exited");
    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (cell_width, cell_height) = (*config.cell_width(), *config.cell_height());

    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|f| {
            let grid = app.game().grid();
            let computed = ScreenLayout::compute(
                f.area(),
                grid.width(),
                grid.height(),
                cell_width,
                cell_height,
            );
            ui::draw(f, app.game(), &computed);
            layout = Some(computed);
        })?;

        // Short timeout keeps the loop responsive to resizes.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind == KeyEventKind::Release => {}
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(layout) = &layout {
                    app.handle_mouse(mouse, layout);
                }
            }
            _ => {}
        }
    }
    Ok(())
}
