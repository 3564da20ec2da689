//! Wire shapes for the cricket API. Everything optional, nothing trusted.

use hero::Tally;
use serde::Deserialize;
use std::collections::BTreeMap;

// ── /schedule ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub name:  Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date:  Option<String>,
}

// ── /rankings ────────────────────────────────────────────────────────────────

/// One (category, format) table, e.g. ("Batsmen", "TEST").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingTable {
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub format:   Option<String>,
    #[serde(default)]
    pub rank:     Option<Vec<RankingRow>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingRow {
    #[serde(default)]
    pub rank:    Option<Tally>,
    #[serde(default)]
    pub name:    Option<String>,
    #[serde(default)]
    pub player:  Option<String>,
    #[serde(default)]
    pub team:    Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub rating:  Option<Tally>,
    #[serde(default)]
    pub points:  Option<Tally>,
}

// ── /news ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub category:    Option<String>,
    #[serde(default)]
    pub title:       Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timestamp:   Option<String>,
    #[serde(default)]
    pub url:         Option<String>,
}

// ── /players/<name> ──────────────────────────────────────────────────────────

/// The API answers a lookup with either a profile or `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlayerLookup {
    Missing { error: String },
    Found(PlayerProfile),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub name:          Option<String>,
    #[serde(default)]
    pub country:       Option<String>,
    #[serde(default)]
    pub role:          Option<String>,
    #[serde(default)]
    pub image:         Option<String>,
    #[serde(default)]
    pub batting_stats: Option<BTreeMap<String, BattingStats>>,
    #[serde(default)]
    pub bowling_stats: Option<BTreeMap<String, BowlingStats>>,
    #[serde(default)]
    pub rankings:      Option<PlayerRankings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BattingStats {
    #[serde(default)]
    pub matches:       Option<Tally>,
    #[serde(default)]
    pub runs:          Option<Tally>,
    #[serde(default)]
    pub average:       Option<Tally>,
    #[serde(default)]
    pub avg:           Option<Tally>,
    #[serde(default)]
    pub strike_rate:   Option<Tally>,
    #[serde(default)]
    pub sr:            Option<Tally>,
    #[serde(default)]
    pub highest_score: Option<Tally>,
    #[serde(default)]
    pub hundreds:      Option<Tally>,
    #[serde(default)]
    pub fifties:       Option<Tally>,
}

impl BattingStats {
    pub fn average(&self) -> Option<&Tally> {
        self.average.as_ref().or(self.avg.as_ref())
    }

    pub fn strike_rate(&self) -> Option<&Tally> {
        self.strike_rate.as_ref().or(self.sr.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BowlingStats {
    #[serde(default)]
    pub wickets:              Option<Tally>,
    #[serde(default)]
    pub economy:              Option<Tally>,
    #[serde(default)]
    pub best_bowling_innings: Option<Tally>,
    #[serde(default)]
    pub five_wickets:         Option<Tally>,
    #[serde(default)]
    pub balls:                Option<Tally>,
    #[serde(default)]
    pub runs:                 Option<Tally>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRankings {
    #[serde(default)]
    pub batting: Option<FormatRanks>,
    #[serde(default)]
    pub bowling: Option<FormatRanks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatRanks {
    #[serde(default)]
    pub test: Option<Tally>,
    #[serde(default)]
    pub odi:  Option<Tally>,
    #[serde(default)]
    pub t20:  Option<Tally>,
}

// ── /commentary/<id> ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentaryResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data:   Option<serde_json::Value>,
}

impl CommentaryResponse {
    /// Commentary lines, only for a `"success"` response carrying a list.
    pub fn lines(&self) -> Option<Vec<String>> {
        if self.status.as_deref() != Some("success") {
            return None;
        }
        let items = self.data.as_ref()?.as_array()?;
        Some(
            items
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_error_payload_is_missing() {
        let p: PlayerLookup = serde_json::from_value(json!({"error": "Player not found"})).unwrap();
        assert!(matches!(p, PlayerLookup::Missing { ref error } if error == "Player not found"));
    }

    #[test]
    fn player_profile_with_alias_stats() {
        let p: PlayerLookup = serde_json::from_value(json!({
            "name": "Virat Kohli",
            "country": "India",
            "batting_stats": {"odi": {"matches": 295, "runs": "13906", "avg": 58.18, "sr": 93.5}},
            "rankings": {"batting": {"odi": 4}}
        }))
        .unwrap();
        let PlayerLookup::Found(profile) = p else { panic!("expected profile") };
        let odi = &profile.batting_stats.as_ref().unwrap()["odi"];
        assert_eq!(odi.average().unwrap().to_string(), "58.18");
        assert_eq!(odi.strike_rate().unwrap().to_string(), "93.5");
        assert_eq!(odi.runs.as_ref().unwrap().to_string(), "13906");
        let bat = profile.rankings.unwrap().batting.unwrap();
        assert_eq!(bat.odi.unwrap().to_string(), "4");
        assert!(bat.test.is_none());
    }

    #[test]
    fn ranking_table_uses_type_key() {
        let t: RankingTable = serde_json::from_value(json!({
            "type": "Teams", "format": "ODI",
            "rank": [{"rank": 1, "team": "India", "rating": 122, "points": "5000"}]
        }))
        .unwrap();
        assert_eq!(t.category.as_deref(), Some("Teams"));
        assert_eq!(t.rank.unwrap()[0].team.as_deref(), Some("India"));
    }

    #[test]
    fn commentary_lines_only_on_success() {
        let ok: CommentaryResponse =
            serde_json::from_value(json!({"status": "success", "data": ["4! driven", 6]})).unwrap();
        assert_eq!(ok.lines().unwrap(), vec!["4! driven".to_string(), "6".to_string()]);

        let failed: CommentaryResponse =
            serde_json::from_value(json!({"status": "error", "data": []})).unwrap();
        assert!(failed.lines().is_none());

        let not_list: CommentaryResponse =
            serde_json::from_value(json!({"status": "success", "data": "nope"})).unwrap();
        assert!(not_list.lines().is_none());
    }
}
