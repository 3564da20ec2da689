//! Application state + navigation controller.
//!
//! One `App` owns the page state and the live refresh task. Rendering goes
//! through a `Surface` so the controller never touches the terminal itself.

use crate::pages;
use anyhow::{bail, Result};
use cricket_api::{CricketApi, PlayerLookup, RankingTable};
use logger::{now_iso, ApiStatusEvent, EventLogger, HeroSelectedEvent, LiveRefreshEvent};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub const DEFAULT_CATEGORY: &str = "Batsmen";
pub const DEFAULT_FORMAT: &str = "TEST";

// ── Display surface ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Hero,
    Main,
    Sidebar,
    Modal,
}

/// Where rendered text ends up.
pub trait Surface: Send + Sync + 'static {
    fn mount(&self, region: Region, content: String);
    fn hide(&self, region: Region);
}

// ── Pages ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Live,
    Schedule,
    Rankings,
    News,
    Players,
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_lowercase().as_str() {
            "live" => Page::Live,
            "schedule" => Page::Schedule,
            "rankings" => Page::Rankings,
            "news" => Page::News,
            "players" => Page::Players,
            other => bail!("unknown page {other:?}"),
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Live => "live",
            Page::Schedule => "schedule",
            Page::Rankings => "rankings",
            Page::News => "news",
            Page::Players => "players",
        })
    }
}

// ── Refresh task ─────────────────────────────────────────────────────────────

/// Periodic job. Aborted on `cancel` or drop, so at most one tick runs after.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// First tick fires one `period` after spawning.
    pub fn spawn<F, Fut>(period: Duration, tick: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                sleep(period).await;
                tick().await;
            }
        });
        Self { handle }
    }

    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ── State ────────────────────────────────────────────────────────────────────

pub struct AppState {
    pub current_page:     Page,
    pub rankings:         Vec<RankingTable>,
    pub ranking_category: String,
    pub ranking_format:   String,
    refresh:              Option<RefreshTask>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: Page::Live,
            rankings: Vec::new(),
            ranking_category: DEFAULT_CATEGORY.to_string(),
            ranking_format: DEFAULT_FORMAT.to_string(),
            refresh: None,
        }
    }
}

impl AppState {
    pub fn is_refreshing(&self) -> bool {
        self.refresh.as_ref().is_some_and(RefreshTask::is_running)
    }
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Navigate,
    Timer,
}

impl Trigger {
    fn as_str(self) -> &'static str {
        match self {
            Trigger::Navigate => "navigate",
            Trigger::Timer => "timer",
        }
    }
}

/// Everything a load needs; cheap to clone into the refresh task.
struct Backend<S> {
    api:     CricketApi,
    surface: Arc<S>,
    events:  Arc<EventLogger>,
}

impl<S> Clone for Backend<S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            surface: Arc::clone(&self.surface),
            events: Arc::clone(&self.events),
        }
    }
}

impl<S: Surface> Backend<S> {
    /// Audit log failures never stop a page from rendering.
    fn log_event<T: Serialize>(&self, event: &T) {
        if let Err(e) = self.events.log(event) {
            warn!("event log write failed ({}): {e:#}", self.events.log_dir().display());
        }
    }

    fn record(&self, endpoint: &str, outcome: Result<usize, &anyhow::Error>) {
        let (ok, message, items) = match outcome {
            Ok(n) => (true, "ok".to_string(), n),
            Err(e) => (false, format!("{e:#}"), 0),
        };
        self.log_event(&ApiStatusEvent {
            ts: now_iso(),
            event: "API_STATUS",
            endpoint: endpoint.to_string(),
            ok,
            message,
            items,
        });
    }

    async fn load_live(&self, trigger: Trigger) {
        let matches = match self.api.live_matches().await {
            Ok(m) => m,
            Err(e) => {
                self.record("/live", Err(&e));
                self.surface.mount(Region::Main, pages::LIVE_ERROR.to_string());
                return;
            }
        };
        self.record("/live", Ok(matches.len()));

        let featured = hero::select_featured(&matches);
        let hero_shown = match hero::render_featured(featured) {
            Some(view) => {
                self.surface.mount(Region::Hero, pages::render_hero(&view));
                true
            }
            None => {
                self.surface.hide(Region::Hero);
                false
            }
        };

        if let Some(m) = featured {
            self.log_event(&HeroSelectedEvent {
                ts: now_iso(),
                event: "HERO_SELECTED",
                name: m.name().to_string(),
                status: m.status().to_string(),
                priority: hero::score(m),
                is_premium: m.is_premium(),
            });
        }

        let body = if matches.is_empty() {
            pages::LIVE_EMPTY.to_string()
        } else {
            pages::render_match_list(&matches)
        };
        self.surface.mount(Region::Main, body);

        self.log_event(&LiveRefreshEvent {
            ts: now_iso(),
            event: "LIVE_REFRESH",
            trigger: trigger.as_str().to_string(),
            matches: matches.len(),
            hero_shown,
        });
        debug!(matches = matches.len(), hero_shown, "live refreshed ({})", trigger.as_str());
    }
}

// ── Controller ───────────────────────────────────────────────────────────────

pub struct App<S: Surface> {
    backend:          Backend<S>,
    state:            AppState,
    refresh_interval: Duration,
}

impl<S: Surface> App<S> {
    pub fn new(api: CricketApi, surface: Arc<S>, events: EventLogger, refresh_interval: Duration) -> Self {
        Self {
            backend: Backend { api, surface, events: Arc::new(events) },
            state: AppState::default(),
            refresh_interval,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Switch page, load its data, and restart the live timer when on Live.
    pub async fn navigate(&mut self, page: Page) {
        info!("navigate → {page}");
        self.state.current_page = page;

        if let Some(task) = self.state.refresh.take() {
            task.cancel();
        }

        match page {
            Page::Live => self.backend.load_live(Trigger::Navigate).await,
            Page::Schedule => self.load_schedule().await,
            Page::Rankings => self.load_rankings().await,
            Page::News => self.load_news().await,
            Page::Players => {}
        }

        if page == Page::Live {
            let backend = self.backend.clone();
            self.state.refresh = Some(RefreshTask::spawn(self.refresh_interval, move || {
                let backend = backend.clone();
                async move { backend.load_live(Trigger::Timer).await }
            }));
        }
    }

    /// Manual reload; only the live page owns the live regions.
    pub async fn refresh_live(&self) {
        if self.state.current_page != Page::Live {
            warn!("refresh ignored on {} page (go live first)", self.state.current_page);
            return;
        }
        self.backend.load_live(Trigger::Navigate).await;
    }

    async fn load_schedule(&self) {
        let body = match self.backend.api.schedule().await {
            Ok(entries) => {
                self.backend.record("/schedule", Ok(entries.len()));
                pages::render_schedule(&entries)
            }
            Err(e) => {
                self.backend.record("/schedule", Err(&e));
                pages::SCHEDULE_ERROR.to_string()
            }
        };
        self.backend.surface.mount(Region::Main, body);
    }

    async fn load_rankings(&mut self) {
        match self.backend.api.rankings().await {
            Ok(tables) => {
                self.backend.record("/rankings", Ok(tables.len()));
                self.state.rankings = tables;
                self.render_rankings_table();
            }
            Err(e) => {
                self.backend.record("/rankings", Err(&e));
                self.backend.surface.mount(Region::Main, pages::RANKINGS_ERROR.to_string());
            }
        }
    }

    /// Tab names like "batting" or "teams"; re-renders from the cached tables.
    /// From any other page this switches to rankings with the tab applied.
    pub async fn filter_rankings(&mut self, tab: &str) {
        self.state.ranking_category = pages::ranking_category(tab.trim());
        self.show_rankings().await;
    }

    pub async fn filter_ranking_format(&mut self, format: &str) {
        self.state.ranking_format = format.trim().to_uppercase();
        self.show_rankings().await;
    }

    async fn show_rankings(&mut self) {
        if self.state.current_page == Page::Rankings {
            self.render_rankings_table();
        } else {
            self.navigate(Page::Rankings).await;
        }
    }

    fn render_rankings_table(&self) {
        let body = pages::render_rankings(
            &self.state.rankings,
            &self.state.ranking_category,
            &self.state.ranking_format,
        );
        self.backend.surface.mount(Region::Main, body);
    }

    async fn load_news(&self) {
        let body = match self.backend.api.news().await {
            Ok(items) => {
                self.backend.record("/news", Ok(items.len()));
                pages::render_news(&items)
            }
            Err(e) => {
                self.backend.record("/news", Err(&e));
                pages::NEWS_ERROR.to_string()
            }
        };
        self.backend.surface.mount(Region::Main, body);
    }

    pub async fn load_sidebar_news(&self) {
        let body = match self.backend.api.news().await {
            Ok(items) => pages::render_sidebar_news(&items),
            Err(e) => {
                warn!("sidebar news failed: {e:#}");
                pages::SIDEBAR_ERROR.to_string()
            }
        };
        self.backend.surface.mount(Region::Sidebar, body);
    }

    /// Searching from another page moves to the players page first, which
    /// also stops the live timer from overwriting the result.
    pub async fn search_player(&mut self, name: &str) {
        if self.state.current_page != Page::Players {
            self.navigate(Page::Players).await;
        }
        let name = name.trim();
        let surface = &self.backend.surface;
        if name.is_empty() {
            surface.mount(Region::Main, pages::PLAYER_PROMPT.to_string());
            return;
        }

        surface.mount(Region::Main, format!("Searching for {name}..."));
        let body = match self.backend.api.player(name).await {
            Ok(PlayerLookup::Missing { error }) => format!("❌ {error}"),
            Ok(PlayerLookup::Found(profile)) => pages::render_player(&profile),
            Err(e) => {
                self.backend.record("/players", Err(&e));
                pages::PLAYER_ERROR.to_string()
            }
        };
        surface.mount(Region::Main, body);
    }

    pub async fn open_commentary(&self, match_id: &str) {
        let surface = &self.backend.surface;
        surface.mount(Region::Modal, pages::COMMENTARY_LOADING.to_string());

        let body = match self.backend.api.commentary(match_id.trim()).await {
            Ok(resp) => match resp.lines() {
                Some(lines) => pages::render_commentary(&lines),
                None => pages::COMMENTARY_FAILED.to_string(),
            },
            Err(e) => {
                self.backend.record("/commentary", Err(&e));
                pages::COMMENTARY_ERROR.to_string()
            }
        };
        surface.mount(Region::Modal, body);
    }

    pub fn close_commentary(&self) {
        self.backend.surface.hide(Region::Modal);
    }

    pub fn shutdown(&mut self) {
        if let Some(task) = self.state.refresh.take() {
            task.cancel();
        }
    }
}
