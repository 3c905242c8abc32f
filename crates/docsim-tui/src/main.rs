use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use docsim_core::config_file::{self, SERVER_ENV};
use docsim_core::{Config, HttpBackend, LinkSet, Locale, SearchBackend, SelectedFile};

mod action;
mod app;
mod backend;
mod input;
mod theme;
mod tui_event;
mod view;

use app::App;

/// Similar Document Search TUI - upload a PDF and browse similar legal documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// PDF to preselect
    file: Option<PathBuf>,

    /// Base URL of the search service (default: http://localhost:8000)
    #[arg(long)]
    server: Option<String>,

    /// Display language: en or bg
    #[arg(long)]
    locale: Option<Locale>,

    /// Links per result: open-and-download or download-only
    #[arg(long)]
    links: Option<LinkSet>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    if let Some(path) = &args.file
        && !path.exists()
    {
        anyhow::bail!("PDF file not found: {}", path.display());
    }

    let config = resolve_config(&args);
    let search_backend: Arc<dyn SearchBackend> = Arc::new(HttpBackend::new(&config.base_url));
    tracing::info!(server = %config.base_url, locale = config.locale.code(), "starting");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(&config);
    if let Some(path) = args.file {
        app.select_file(Some(SelectedFile::from_path(path)));
    }
    if let Ok(size) = terminal.size() {
        app.update(action::Action::Resize(size.width, size.height));
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<tui_event::BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);

    // Spawn backend command listener
    let event_tx_for_backend = event_tx.clone();
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                tui_event::BackendCommand::Search { ticket } => {
                    tracing::info!(
                        generation = ticket.generation,
                        file = %ticket.file.name,
                        "search requested"
                    );
                    let tx = event_tx_for_backend.clone();
                    let backend = Arc::clone(&search_backend);
                    // Own task so a slow upload never blocks the next command
                    tokio::spawn(async move {
                        backend::run_search(backend, ticket, tx).await;
                    });
                }
            }
        }
    });

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    app.update(input::map_event(&evt));
                }
            } => {}
            _ = cancel.cancelled() => {
                app.should_quit = true;
            }
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    tracing::info!("exiting");
    Ok(())
}

/// Log to a daily file under the cache dir; the terminal belongs to the UI.
fn init_logging() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join("docsim").join("logs");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(&dir, "docsim-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("DOCSIM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Resolve configuration: CLI flags > env vars > config file > defaults.
fn resolve_config(args: &Args) -> Config {
    let mut config = Config::default();
    config_file::apply_to_config(&config_file::load_config(), &mut config);

    if let Some(url) = args
        .server
        .clone()
        .or_else(|| std::env::var(SERVER_ENV).ok())
        && !url.trim().is_empty()
    {
        config.base_url = url.trim().to_string();
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(links) = args.links {
        config.link_set = links;
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    config
}
