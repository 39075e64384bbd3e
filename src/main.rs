mod app;
mod config;
mod form;
mod logging;
mod storage;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, Controller};
use crate::form::{RevealScheduler, SubmissionController, TokioRevealScheduler};
use crate::storage::{FileStorage, Storage};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "signcard starting");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "signcard exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Reveal timer expiries come back through the event loop
    let timer_tx = event_tx.clone();
    let scheduler = TokioRevealScheduler::new(move |ticket| {
        let _ = timer_tx.send(AppEvent::RevealExpired(ticket));
    });

    let storage = FileStorage::new(config::storage_path(&cfg));
    info!(path = %storage.path().display(), "using storage file");

    let controller: Controller = SubmissionController::restore(
        Box::new(storage) as Box<dyn Storage>,
        Box::new(scheduler) as Box<dyn RevealScheduler>,
    );
    let mut state = AppState::new(controller);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            handler::apply_action(&mut state, action);
        }

        if state.should_quit {
            info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
