/// Cricket Khelega — Logger
/// JSONL event stream, one file per UTC day

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct EventLogger {
    log_dir: PathBuf,
}

impl EventLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let dir = log_dir.into();
        fs::create_dir_all(&dir).ok();
        Self { log_dir: dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Today's file, `<log_dir>/<YYYY-MM-DD>.jsonl`.
    pub fn current_path(&self) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        self.log_dir.join(format!("{date}.jsonl"))
    }

    pub fn log<T: Serialize>(&self, event: &T) -> Result<()> {
        let line  = serde_json::to_string(event)?;
        let mut f = OpenOptions::new().create(true).append(true).open(self.current_path())?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

// ── Event types ──────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct ApiStatusEvent {
    pub ts:          String,
    pub event:       &'static str,   // "API_STATUS"
    pub endpoint:    String,
    pub ok:          bool,
    pub message:     String,
    pub items:       usize,
}

#[derive(Serialize, Debug)]
pub struct LiveRefreshEvent {
    pub ts:          String,
    pub event:       &'static str,   // "LIVE_REFRESH"
    pub trigger:     String,         // "navigate" | "timer"
    pub matches:     usize,
    pub hero_shown:  bool,
}

#[derive(Serialize, Debug)]
pub struct HeroSelectedEvent {
    pub ts:          String,
    pub event:       &'static str,   // "HERO_SELECTED"
    pub name:        String,
    pub status:      String,
    pub priority:    i64,
    pub is_premium:  bool,
}
