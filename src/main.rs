use headlines::app::App;
use headlines::cli::{parse_args, run_cli_command, RunOptions};
use headlines::client::NewsClient;
use headlines::config::FeedConfig;
use headlines::events::FeedEvent;
use headlines::input::{apply_command, resolve, InputEffect};
use headlines::terminal::{setup_panic_hook, TerminalManager};
use headlines::{logging, ui};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle --version / --help before touching the terminal
    let options = run_cli_command(parse_args(std::env::args())?);

    color_eyre::install()?;

    if let Some(path) = logging::init_from_env()? {
        tracing::info!(path = %path.display(), "Logging enabled");
    }

    let config = FeedConfig::from_env();
    config.validate()?;

    // Single-threaded runtime: all state lives on this thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config, options))
}

async fn run(config: FeedConfig, options: RunOptions) -> Result<()> {
    let client = NewsClient::new(&config)?;
    tracing::info!(base_url = %client.base_url, region = %options.region, "Starting");

    let mut app = App::new(&config, Arc::new(client), options.region);
    app.start();
    if let Some(query) = options.query {
        app.on_raw_input(query);
    }

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;
    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;

    tracing::info!("Exiting");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the receiver out of the app so select! can own it
    let mut events_rx: mpsc::UnboundedReceiver<FeedEvent> = app
        .events_rx
        .take()
        .ok_or_else(|| eyre!("event receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view()))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            Some(event) = events_rx.recv() => {
                app.handle_event(event);
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let Some(command) = resolve(key) else {
                            continue;
                        };
                        match apply_command(app, command) {
                            InputEffect::OpenUrl(url) => {
                                if let Err(e) = open::that(&url) {
                                    tracing::warn!(url = %url, error = %e, "Failed to open article");
                                }
                            }
                            InputEffect::Quit => return Ok(()),
                            InputEffect::None => {}
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}
