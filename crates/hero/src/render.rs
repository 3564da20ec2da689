use crate::{InningsScore, MatchCandidate};
use serde::Serialize;

/// Between two innings in the hero score line.
pub const INNINGS_SEPARATOR: &str = "  vs  ";
pub const LIVE_BADGE: &str = "🔴 LIVE";
pub const VENUE_FALLBACK: &str = "Venue TBA";
pub const SERIES_FALLBACK: &str = "Trending Match";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroAction {
    /// Opens ball-by-ball commentary; `match_id` is None when the record carries no id at all.
    Commentary { match_id: Option<String> },
    ExternalLink { url: String },
}

/// Display-ready hero record. Fresh on every render, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedMatchView {
    pub series:        String,
    pub team1:         String,
    pub team2:         String,
    pub score_summary: String,
    pub is_live:       bool,
    pub status_line:   String,
    pub actions:       Vec<HeroAction>,
}

/// `None` means there is nothing to feature: hide the hero area.
pub fn render_featured(candidate: Option<&MatchCandidate>) -> Option<FeaturedMatchView> {
    let m = candidate?;
    let (team1, team2) = split_teams(m.name());
    let is_live = m.is_live();

    let status_text = if is_live { LIVE_BADGE } else { m.status() };
    let venue = m
        .venue
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(VENUE_FALLBACK);

    let mut actions = Vec::new();
    if m.is_premium() {
        actions.push(HeroAction::Commentary {
            match_id: m.commentary_ref().map(str::to_string),
        });
    }
    if let Some(url) = &m.details_url {
        actions.push(HeroAction::ExternalLink { url: url.clone() });
    }

    Some(FeaturedMatchView {
        series: m
            .match_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(SERIES_FALLBACK)
            .to_string(),
        team1,
        team2,
        score_summary: summarize_score(m),
        is_live,
        status_line: format!("{status_text} • {venue}"),
        actions,
    })
}

/// "TeamA vs TeamB, context" → ("TeamA", "TeamB").
/// Falls back to " v ", then to (whole name, "").
pub fn split_teams(name: &str) -> (String, String) {
    let mut parts: Vec<&str> = name.split(" vs ").collect();
    if parts.len() < 2 {
        parts = name.split(" v ").collect();
    }
    if parts.len() < 2 {
        return (name.trim().to_string(), String::new());
    }

    let team2 = parts[1].split(',').next().unwrap_or_default();
    (parts[0].trim().to_string(), team2.trim().to_string())
}

/// Innings joined by `INNINGS_SEPARATOR`; blank innings dropped.
/// Anything that leaves nothing to show falls back to the status text.
pub fn summarize_score(m: &MatchCandidate) -> String {
    let Some(innings) = m.innings() else {
        return m.status().to_string();
    };

    let summary = innings
        .iter()
        .filter(|entry| !entry.is_blank())
        .map(format_innings)
        .collect::<Vec<_>>()
        .join(INNINGS_SEPARATOR);

    if summary.trim().is_empty() || summary == INNINGS_SEPARATOR {
        m.status().to_string()
    } else {
        summary
    }
}

fn format_innings(entry: &InningsScore) -> String {
    let mut out = entry.runs.as_ref().map(|r| r.to_string()).unwrap_or_default();
    if let Some(w) = &entry.wickets {
        out.push_str(&format!("/{w}"));
    }
    if let Some(o) = &entry.overs {
        out.push_str(&format!(" ({o})"));
    }
    out
}
