use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docsim_core::config_file::{self, SERVER_ENV};
use docsim_core::{Config, HttpBackend, LinkSet, Locale, SearchWidget, SelectedFile};

mod output;

use output::ColorMode;

/// Similar Document Search - find legal documents similar to a PDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a PDF and list similar documents
    Search {
        /// Path to the PDF to search with
        file_path: PathBuf,

        /// Base URL of the search service (default: http://localhost:8000)
        #[arg(long)]
        server: Option<String>,

        /// Display language: en or bg
        #[arg(long)]
        locale: Option<Locale>,

        /// Links per result: open-and-download or download-only
        #[arg(long)]
        links: Option<LinkSet>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print the raw result list as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            file_path,
            server,
            locale,
            links,
            no_color,
            json,
        } => {
            let config = resolve_config(server, locale, links);
            let ok = search(file_path, &config, ColorMode(!no_color), json).await?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCSIM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve configuration: CLI flags > env vars > config file > defaults.
fn resolve_config(
    server: Option<String>,
    locale: Option<Locale>,
    links: Option<LinkSet>,
) -> Config {
    let mut config = Config::default();
    config_file::apply_to_config(&config_file::load_config(), &mut config);

    if let Some(url) = server.or_else(|| std::env::var(SERVER_ENV).ok())
        && !url.trim().is_empty()
    {
        config.base_url = url.trim().to_string();
    }
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if let Some(links) = links {
        config.link_set = links;
    }
    config
}

/// Run one search. Returns `false` when the widget ended up showing an error.
async fn search(
    file_path: PathBuf,
    config: &Config,
    color: ColorMode,
    json: bool,
) -> anyhow::Result<bool> {
    if !file_path.exists() {
        anyhow::bail!("File not found: {}", file_path.display());
    }

    let backend = HttpBackend::new(&config.base_url);
    tracing::info!(endpoint = backend.endpoint(), "using search service");

    let mut widget = SearchWidget::new(config.locale, config.link_set);
    widget.select_file(Some(SelectedFile::from_path(file_path)));
    widget.submit_search(&backend).await;

    let stdout = std::io::stdout();
    let mut w = stdout.lock();

    if json {
        if widget.error().is_empty() {
            serde_json::to_writer_pretty(&mut w, widget.results())?;
            writeln!(w)?;
        } else {
            eprintln!("{}", widget.error());
        }
    } else {
        output::print_view(&mut w, &widget.view(), color)?;
    }

    Ok(widget.error().is_empty())
}
