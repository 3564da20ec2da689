//! Plain-text rendering of every page. Pure: data in, text out.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use cricket_api::{NewsItem, PlayerProfile, RankingTable, ScheduleEntry};
use hero::{FeaturedMatchView, HeroAction, MatchCandidate, Tally};

pub const LIVE_EMPTY: &str = "🏏 No Live Matches Right Now\n   Check back later or view the upcoming schedule";
pub const LIVE_ERROR: &str = "⚠️ Could not load live matches. Backend may be starting up, try again in a moment.";
pub const SCHEDULE_EMPTY: &str = "📅 No Upcoming Matches\n   Check back later for the latest schedule";
pub const SCHEDULE_ERROR: &str = "⚠️ Could not load schedule. Please try again.";
pub const RANKINGS_EMPTY: &str = "🏆 No rankings data available\n   Try a different category or format";
pub const RANKINGS_ERROR: &str = "⚠️ Could not load rankings. Please try again.";
pub const NEWS_EMPTY: &str = "📰 No News Available\n   Check back later for the latest cricket news";
pub const NEWS_ERROR: &str = "⚠️ Could not load news. Please try again.";
pub const SIDEBAR_EMPTY: &str = "No trending news";
pub const SIDEBAR_ERROR: &str = "Could not load news";
pub const PLAYER_PROMPT: &str = "Please enter a player name";
pub const PLAYER_ERROR: &str = "⚠️ Could not find player. Please check the name and try again.";
pub const COMMENTARY_LOADING: &str = "Loading live commentary...";
pub const COMMENTARY_EMPTY: &str = "No commentary available yet.";
pub const COMMENTARY_FAILED: &str = "Failed to load commentary.";
pub const COMMENTARY_ERROR: &str = "Error loading commentary. Check connection.";

const SIDEBAR_ITEMS: usize = 4;

// ── Hero ─────────────────────────────────────────────────────────────────────

pub fn render_hero(view: &FeaturedMatchView) -> String {
    let mut out = format!(
        "{}\n  {}  VS  {}\n  [ {} ]\n  {}",
        view.series, view.team1, view.team2, view.score_summary, view.status_line
    );
    for action in &view.actions {
        match action {
            HeroAction::Commentary { match_id: Some(id) } => {
                out.push_str(&format!("\n  🎙️ Live Commentary  → commentary {id}"));
            }
            HeroAction::Commentary { match_id: None } => {
                out.push_str("\n  🎙️ Live Commentary");
            }
            HeroAction::ExternalLink { url } => {
                out.push_str(&format!("\n  More Info  → {url}"));
            }
        }
    }
    out
}

// ── Live match cards ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Live,
    Completed,
    Upcoming,
}

impl CardStatus {
    /// Exact status text; anything unrecognised reads as upcoming.
    pub fn of(status: Option<&str>) -> Self {
        match status {
            Some("Live") => CardStatus::Live,
            Some("Completed") => CardStatus::Completed,
            _ => CardStatus::Upcoming,
        }
    }

    fn badge(self) -> &'static str {
        match self {
            CardStatus::Live => "LIVE",
            CardStatus::Completed => "DONE",
            CardStatus::Upcoming => "SOON",
        }
    }
}

pub fn render_match_card(m: &MatchCandidate) -> String {
    let name = m.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Match");
    let status = m.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Live");
    let badge = CardStatus::of(m.status.as_deref()).badge();

    let mut out = format!("┌ {name}  [{badge}] {status}");

    match m.innings() {
        Some(innings) => {
            for (i, entry) in innings.iter().enumerate() {
                let team = entry
                    .title
                    .clone()
                    .or_else(|| m.teams.as_ref().and_then(|t| t.get(i).cloned()))
                    .unwrap_or_else(|| format!("Team {}", i + 1));
                let score = match real(&entry.runs) {
                    Some(r) => match real(&entry.wickets) {
                        Some(w) => format!("{r}/{w}"),
                        None => r.to_string(),
                    },
                    None => "-".to_string(),
                };
                let overs = real(&entry.overs).map(|o| format!(" ({o} ov)")).unwrap_or_default();
                out.push_str(&format!("\n│ {team:<28} {score}{overs}"));
            }
        }
        None => {
            for team in m.teams.iter().flatten() {
                out.push_str(&format!("\n│ {team:<28} -"));
            }
        }
    }

    if m.is_premium() {
        let id = m.commentary_ref().unwrap_or_default();
        out.push_str(&format!("\n└ View Commentary 🎙️  → commentary {id}"));
    } else if let Some(url) = m.details_url.as_ref().or(m.url.as_ref()) {
        out.push_str(&format!("\n└ View Scorecard → {url}"));
    } else {
        out.push_str("\n└");
    }
    out
}

pub fn render_match_list(matches: &[MatchCandidate]) -> String {
    matches.iter().map(render_match_card).collect::<Vec<_>>().join("\n\n")
}

fn real(t: &Option<Tally>) -> Option<&Tally> {
    t.as_ref().filter(|t| !t.is_placeholder())
}

// ── Schedule ─────────────────────────────────────────────────────────────────

/// (day, month) for the date badge.
pub fn parse_date_str(date: Option<&str>) -> (String, String) {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return ("?".to_string(), String::new());
    };

    if let Some(d) = parse_date(raw) {
        return (d.format("%-d").to_string(), d.format("%b").to_string());
    }

    let mut parts = raw.split(' ');
    let day = parts.next().filter(|p| !p.is_empty()).unwrap_or(raw);
    let month = parts.next().unwrap_or_default();
    (day.to_string(), month.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

pub fn render_schedule(entries: &[ScheduleEntry]) -> String {
    if entries.is_empty() {
        return SCHEDULE_EMPTY.to_string();
    }
    entries
        .iter()
        .map(|s| {
            let (day, month) = parse_date_str(s.date.as_deref());
            format!(
                "{day:>3} {month:<4} │ {}\n         │ 📍 {}",
                or_default(&s.name, "TBA"),
                or_default(&s.venue, "TBA")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Rankings ─────────────────────────────────────────────────────────────────

/// UI tab name → ranking `type` as the API spells it.
pub fn ranking_category(tab: &str) -> String {
    match tab {
        "batting" => "Batsmen",
        "bowling" => "Bowlers",
        "all-rounder" => "All-Rounders",
        "teams" => "Teams",
        other => other,
    }
    .to_string()
}

pub fn render_rankings(tables: &[RankingTable], category: &str, format: &str) -> String {
    let table = tables
        .iter()
        .find(|t| t.category.as_deref() == Some(category) && t.format.as_deref() == Some(format));
    let Some(rows) = table.and_then(|t| t.rank.as_ref()).filter(|r| !r.is_empty()) else {
        return RANKINGS_EMPTY.to_string();
    };

    let is_teams = category == "Teams";
    let mut out = format!("{category} / {format}\n");
    out.push_str(if is_teams {
        "  #   Team                       Rating   Points"
    } else {
        "  #   Player                     Country          Rating"
    });

    for (i, row) in rows.iter().enumerate() {
        let pos = row
            .rank
            .as_ref()
            .filter(|r| !r.is_placeholder())
            .map(Tally::to_string)
            .unwrap_or_else(|| (i + 1).to_string());
        let marker = if i < 3 { '★' } else { ' ' };
        let rating = tally_or_dash(&row.rating);

        let line = if is_teams {
            let team = row.team.as_deref().or(row.player.as_deref()).unwrap_or("-");
            format!("{marker} {pos:<3} {team:<26} {rating:<8} {}", tally_or_dash(&row.points))
        } else {
            let player = row.name.as_deref().or(row.player.as_deref()).unwrap_or("-");
            let country = row.country.as_deref().unwrap_or("-");
            format!("{marker} {pos:<3} {player:<26} {country:<16} {rating}")
        };
        out.push('\n');
        out.push_str(&line);
    }
    out
}

fn tally_or_dash(t: &Option<Tally>) -> String {
    t.as_ref().map(Tally::to_string).unwrap_or_else(|| "-".to_string())
}

// ── News ─────────────────────────────────────────────────────────────────────

pub fn render_news(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return NEWS_EMPTY.to_string();
    }
    items
        .iter()
        .map(|n| {
            let mut card = format!(
                "[{}] {}",
                or_default(&n.category, "Cricket"),
                or_default(&n.title, "Untitled")
            );
            if let Some(desc) = n.description.as_deref().filter(|d| !d.is_empty()) {
                card.push_str(&format!("\n  {desc}"));
            }
            if let Some(ts) = n.timestamp.as_deref().filter(|t| !t.is_empty()) {
                card.push_str(&format!("\n  🕐 {ts}"));
            }
            if let Some(url) = n.url.as_deref().filter(|u| !u.is_empty()) {
                card.push_str(&format!("\n  Read more → {url}"));
            }
            card
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_sidebar_news(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return SIDEBAR_EMPTY.to_string();
    }
    items
        .iter()
        .take(SIDEBAR_ITEMS)
        .map(|n| format!("• {}", or_default(&n.title, "Untitled")))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Player ───────────────────────────────────────────────────────────────────

/// `None` when there is nothing worth showing: absent or empty text.
/// Numbers, zero included, always show.
fn stat_item(label: &str, value: Option<&Tally>) -> Option<String> {
    match value? {
        Tally::Text(s) if s.is_empty() => None,
        v => Some(format!("{label}: {v}")),
    }
}

fn stat_grid(items: impl IntoIterator<Item = Option<String>>) -> String {
    items.into_iter().flatten().collect::<Vec<_>>().join("  │  ")
}

pub fn render_player(p: &PlayerProfile) -> String {
    let mut out = format!("👤 {}", or_default(&p.name, "Unknown"));
    for extra in [&p.country, &p.role] {
        if let Some(v) = extra.as_deref().filter(|v| !v.is_empty()) {
            out.push_str(&format!("\n   {v}"));
        }
    }

    if let Some(r) = &p.rankings {
        let bat = r.batting.clone().unwrap_or_default();
        let bowl = r.bowling.clone().unwrap_or_default();
        let dash = Tally::from("-");
        let rank = |t: &Option<Tally>| t.clone().unwrap_or_else(|| dash.clone());
        out.push_str("\n\n🏆 ICC Rankings\n  ");
        out.push_str(&stat_grid([
            stat_item("Test Bat", Some(&rank(&bat.test))),
            stat_item("ODI Bat", Some(&rank(&bat.odi))),
            stat_item("T20 Bat", Some(&rank(&bat.t20))),
            stat_item("Test Bowl", Some(&rank(&bowl.test))),
            stat_item("ODI Bowl", Some(&rank(&bowl.odi))),
            stat_item("T20 Bowl", Some(&rank(&bowl.t20))),
        ]));
    }

    if let Some(batting) = p.batting_stats.as_ref().filter(|b| !b.is_empty()) {
        out.push_str("\n\n🏏 Batting Statistics");
        for (format, s) in batting {
            out.push_str(&format!("\n  {}\n  ", format.to_uppercase()));
            out.push_str(&stat_grid([
                stat_item("Matches", s.matches.as_ref()),
                stat_item("Runs", s.runs.as_ref()),
                stat_item("Average", s.average()),
                stat_item("Strike Rate", s.strike_rate()),
                stat_item("Highest", s.highest_score.as_ref()),
                stat_item("100s", s.hundreds.as_ref()),
                stat_item("50s", s.fifties.as_ref()),
            ]));
        }
    }

    if let Some(bowling) = p.bowling_stats.as_ref().filter(|b| !b.is_empty()) {
        out.push_str("\n\n🎳 Bowling Statistics");
        for (format, s) in bowling {
            out.push_str(&format!("\n  {}\n  ", format.to_uppercase()));
            out.push_str(&stat_grid([
                stat_item("Wickets", s.wickets.as_ref()),
                stat_item("Economy", s.economy.as_ref()),
                stat_item("Best", s.best_bowling_innings.as_ref()),
                stat_item("5W", s.five_wickets.as_ref()),
                stat_item("Balls", s.balls.as_ref()),
                stat_item("Runs", s.runs.as_ref()),
            ]));
        }
    }
    out
}

// ── Commentary ───────────────────────────────────────────────────────────────

pub fn render_commentary(lines: &[String]) -> String {
    if lines.is_empty() {
        return COMMENTARY_EMPTY.to_string();
    }
    lines.iter().map(|l| format!("› {l}")).collect::<Vec<_>>().join("\n")
}

fn or_default<'a>(v: &'a Option<String>, fallback: &'a str) -> &'a str {
    v.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback)
}
