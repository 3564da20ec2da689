/// Cricket Khelega — terminal client
///
/// What it does:
///   1. Shows live matches with one featured "hero" match on top
///   2. Re-polls /live every LIVE_REFRESH_INTERVAL_SECS while on the live page
///   3. Schedule, rankings, news, player profiles, ball-by-ball commentary
///
/// Run:
///   CRICKET_API_BASE=https://... cargo run --bin khelega

use anyhow::{Context, Result};
use app::{App, Page, Region, Surface};
use command::{Command, HELP};
use config::Config;
use cricket_api::CricketApi;
use dotenv::dotenv;
use logger::EventLogger;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod app;
mod command;
mod config;
mod pages;

/// Prints each mounted region as a titled block on stdout.
struct Terminal;

impl Surface for Terminal {
    fn mount(&self, region: Region, content: String) {
        let title = match region {
            Region::Hero => "FEATURED",
            Region::Main => "PAGE",
            Region::Sidebar => "TRENDING",
            Region::Modal => "COMMENTARY",
        };
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "\n── {title} ──────────────────────────────\n{content}");
        let _ = out.flush();
    }

    fn hide(&self, region: Region) {
        tracing::debug!("{region:?} hidden");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("=== Cricket Khelega ===");
    info!("API: {}", config.api_base);
    info!("Live refresh: {}s", config.refresh_interval.as_secs());
    info!("Logs: {}", config.log_dir.display());

    let api = CricketApi::new(&config.api_base, config.api_timeout)
        .context("configuring API client")?;
    let events = EventLogger::new(&config.log_dir);
    let mut app = App::new(api, Arc::new(Terminal), events, config.refresh_interval);

    app.navigate(Page::Live).await;
    app.load_sidebar_news().await;
    println!("\n{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let Some(cmd) = Command::parse(&line) else { continue };
        match cmd {
            Command::Go(page) => app.navigate(page).await,
            Command::Rank(tab) => app.filter_rankings(&tab).await,
            Command::Format(format) => app.filter_ranking_format(&format).await,
            Command::Player(name) => app.search_player(&name).await,
            Command::Commentary(id) => app.open_commentary(&id).await,
            Command::CloseCommentary => app.close_commentary(),
            Command::Refresh => app.refresh_live().await,
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(raw) => warn!("unknown command: {raw} (try `help`)"),
        }
    }

    app.shutdown();
    info!("bye");
    Ok(())
}
