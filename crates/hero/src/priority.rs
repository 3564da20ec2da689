//! Priority scoring + featured match selection.
//! Additive rules over lower-cased free text; every rule is evaluated.

use crate::MatchCandidate;
use tracing::debug;

const PREMIUM: i64 = 2000;
const LIVE: i64 = 1000;
const UPCOMING: i64 = 200;
const WORLD_CUP: i64 = 500;
const WOMEN_TRACK: i64 = 500;
const MEN_TRACK: i64 = 1500;
const FINAL: i64 = 500;
const SEMI_FINAL: i64 = 500;
const LEAGUE: i64 = 200;
const INTERNATIONAL_FORMAT: i64 = 100;

/// Format keywords, each one independent (+100 apiece).
const FORMATS: [&str; 3] = ["test", "odi", "t20i"];

/// Big-team markers. Full name and abbreviation are separate checks,
/// so "india vs ind xi" collects both.
const BIG_TEAMS: [(&str, i64); 8] = [
    ("india", 100),
    ("ind ", 100),
    ("australia", 80),
    ("aus ", 80),
    ("england", 80),
    ("eng ", 80),
    ("pakistan", 80),
    ("pak ", 80),
];

/// Desirability of a match as the hero. Total: missing fields count as empty.
pub fn score(candidate: &MatchCandidate) -> i64 {
    let mut total = 0;

    if candidate.is_premium() {
        total += PREMIUM;
    }

    let status = candidate.status().to_lowercase();
    if status.contains("live") {
        total += LIVE;
    } else if status.contains("common") || status.contains("upcoming") {
        total += UPCOMING;
    }

    let name = candidate.name().to_lowercase();
    if name.contains("world cup") {
        total += WORLD_CUP;
    }

    // exactly one gender track
    total += if name.contains("women") { WOMEN_TRACK } else { MEN_TRACK };

    // "semi-final" also contains "final": both fire
    if name.contains("final") {
        total += FINAL;
    }
    if name.contains("semi-final") {
        total += SEMI_FINAL;
    }

    if name.contains("ipl") || name.contains("league") {
        total += LEAGUE;
    }

    let match_type = candidate.match_type().to_lowercase();
    total += FORMATS
        .iter()
        .filter(|kw| match_type.contains(*kw))
        .count() as i64
        * INTERNATIONAL_FORMAT;

    total += BIG_TEAMS
        .iter()
        .filter(|(marker, _)| name.contains(marker))
        .map(|(_, bonus)| bonus)
        .sum::<i64>();

    total
}

/// A candidate paired with its priority for one selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a MatchCandidate,
    pub priority:  i64,
}

/// All candidates, highest priority first. Stable: equal scores keep input order.
pub fn rank_candidates(matches: &[MatchCandidate]) -> Vec<ScoredCandidate<'_>> {
    let mut scored: Vec<ScoredCandidate<'_>> = matches
        .iter()
        .map(|candidate| ScoredCandidate { candidate, priority: score(candidate) })
        .collect();
    scored.sort_by(|a, b| b.priority.cmp(&a.priority));
    scored
}

/// The match to feature, or `None` when there is nothing to pick from.
pub fn select_featured(matches: &[MatchCandidate]) -> Option<&MatchCandidate> {
    let top = rank_candidates(matches).into_iter().next()?;
    debug!(priority = top.priority, name = top.candidate.name(), "hero candidate chosen");
    Some(top.candidate)
}
