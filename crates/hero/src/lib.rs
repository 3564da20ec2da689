//! Cricket Khelega — Hero
//!
//! Picks one match out of the live list to feature above everything else and
//! turns it into a display-ready summary.
//!   1. `score`           : static weighted rules → priority
//!   2. `select_featured` : highest priority wins, ties keep input order
//!   3. `render_featured` : teams, score line, status line, actions
//!
//! Everything here is pure: no I/O, never mutates input, never fails on
//! half-filled records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

mod priority;
mod render;

pub use priority::{rank_candidates, score, select_featured, ScoredCandidate};
pub use render::{render_featured, split_teams, summarize_score, FeaturedMatchView, HeroAction};

/// Placeholder the API uses for "no value yet".
pub const PLACEHOLDER: &str = "-";

// ── Match payload ────────────────────────────────────────────────────────────

/// One entry of the `/live` listing. Every field is optional on the wire and
/// a wrongly typed value reads as absent rather than failing the record;
/// use the accessors to read text fields as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id:          Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name:        Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status:      Option<String>,
    #[serde(default, rename = "matchType", deserialize_with = "lenient_string")]
    pub match_type:  Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_premium:  Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub venue:       Option<String>,
    #[serde(default)]
    pub score:       Option<Score>,
    #[serde(default, deserialize_with = "lenient_teams")]
    pub teams:       Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub details_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url:         Option<String>,
    /// Commentary id of the premium (scraped) provider.
    #[serde(default, rename = "cricbuzz_id", deserialize_with = "lenient_string")]
    pub commentary_id: Option<String>,
}

impl MatchCandidate {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn match_type(&self) -> &str {
        self.match_type.as_deref().unwrap_or("")
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    pub fn is_live(&self) -> bool {
        self.status().to_lowercase().contains("live")
    }

    /// Innings entries when `score` is a proper sequence.
    pub fn innings(&self) -> Option<&[InningsScore]> {
        match &self.score {
            Some(Score::Innings(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Id to open commentary with: the provider id, else the match's own id.
    /// Blank ids count as missing.
    pub fn commentary_ref(&self) -> Option<&str> {
        let present = |id: &&str| !id.trim().is_empty();
        self.commentary_id
            .as_deref()
            .filter(present)
            .or_else(|| self.id.as_deref().filter(present))
    }
}

/// `score` is either a list of innings or whatever else the provider sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Innings(Vec<InningsScore>),
    Other(serde_json::Value),
}

/// One team's line within a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InningsScore {
    #[serde(default, rename = "r")]
    pub runs:    Option<Tally>,
    #[serde(default, rename = "w")]
    pub wickets: Option<Tally>,
    #[serde(default, rename = "o")]
    pub overs:   Option<Tally>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub inning:  Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title:   Option<String>,
}

impl InningsScore {
    pub fn new(runs: impl Into<Tally>, wickets: impl Into<Tally>, overs: impl Into<Tally>) -> Self {
        Self {
            runs: Some(runs.into()),
            wickets: Some(wickets.into()),
            overs: Some(overs.into()),
            ..Self::default()
        }
    }

    /// True when no field carries a real value.
    pub fn is_blank(&self) -> bool {
        [&self.runs, &self.wickets, &self.overs]
            .into_iter()
            .all(|t| t.as_ref().map_or(true, Tally::is_placeholder))
    }
}

/// Number-like value: the API sends runs/wickets/overs as numbers or strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tally {
    Number(f64),
    Text(String),
}

impl Tally {
    pub fn is_placeholder(&self) -> bool {
        match self {
            Tally::Number(_) => false,
            Tally::Text(s) => {
                let s = s.trim();
                s.is_empty() || s == PLACEHOLDER
            }
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tally::Number(n) => write!(f, "{n}"),
            Tally::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Tally {
    fn from(n: f64) -> Self {
        Tally::Number(n)
    }
}

impl From<u32> for Tally {
    fn from(n: u32) -> Self {
        Tally::Number(n.into())
    }
}

impl From<&str> for Tally {
    fn from(s: &str) -> Self {
        Tally::Text(s.to_string())
    }
}

/// Text that may arrive as a string or a number; anything else is absent.
fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Premium flag as sent by either provider: `true`, `"true"`, `"yes"`, `1`.
fn lenient_flag<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    let raw = Option::<Value>::deserialize(de)?;
    Ok(match raw {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_f64().map_or(false, |n| n != 0.0)),
        Some(Value::String(s)) => {
            let s = s.trim().to_ascii_lowercase();
            Some(matches!(s.as_str(), "true" | "1" | "yes"))
        }
        _ => None,
    })
}

/// Team list; entries that are not strings are skipped.
fn lenient_teams<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    let raw = Option::<Value>::deserialize(de)?;
    Ok(match raw {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_loose_live_payload() {
        let raw = json!({
            "id": 9981,
            "name": "India vs Pakistan, Final",
            "status": "Live",
            "matchType": "T20I",
            "is_premium": true,
            "score": [{"r": 150, "w": 4, "o": 20, "inning": "India Inning 1"}, {"r": "-", "w": "-", "o": "-"}],
            "cricbuzz_id": "87654"
        });
        let m: MatchCandidate = serde_json::from_value(raw).unwrap();
        assert_eq!(m.id.as_deref(), Some("9981"));
        assert_eq!(m.match_type(), "T20I");
        assert!(m.is_premium());
        let innings = m.innings().unwrap();
        assert_eq!(innings.len(), 2);
        assert_eq!(innings[0].runs, Some(Tally::Number(150.0)));
        assert!(innings[1].is_blank());
        assert_eq!(m.commentary_ref(), Some("87654"));
    }

    #[test]
    fn missing_and_null_fields_read_as_empty() {
        let m: MatchCandidate =
            serde_json::from_value(json!({"status": null, "is_premium": null, "score": "n/a"})).unwrap();
        assert_eq!(m.name(), "");
        assert_eq!(m.status(), "");
        assert!(!m.is_premium());
        assert!(m.innings().is_none());
        assert!(matches!(m.score, Some(Score::Other(_))));
    }

    #[test]
    fn commentary_ref_falls_back_to_match_id() {
        let m = MatchCandidate { id: Some("m-1".into()), ..Default::default() };
        assert_eq!(m.commentary_ref(), Some("m-1"));
    }

    #[test]
    fn commentary_ref_skips_blank_provider_id() {
        let m: MatchCandidate =
            serde_json::from_value(json!({"id": 42, "cricbuzz_id": "", "is_premium": true})).unwrap();
        assert_eq!(m.commentary_ref(), Some("42"));

        let m: MatchCandidate =
            serde_json::from_value(json!({"id": " ", "cricbuzz_id": "  "})).unwrap();
        assert_eq!(m.commentary_ref(), None);
    }

    #[test]
    fn wrongly_typed_fields_do_not_sink_the_list() {
        let raw = json!([
            {"name": "India vs Pakistan, Final", "status": "Live", "is_premium": true},
            {"name": "Kenya vs Oman", "status": "Live", "is_premium": "true"},
            {"name": 42, "status": ["Live"], "teams": [null, "Oman", 7], "venue": {"city": "Muscat"}},
            {"is_premium": 0, "matchType": null, "url": false, "score": [{"r": 10, "inning": 3}]}
        ]);
        let list: Vec<MatchCandidate> = serde_json::from_value(raw).unwrap();
        assert_eq!(list.len(), 4);

        assert!(list[1].is_premium());
        assert_eq!(list[1].name(), "Kenya vs Oman");

        assert_eq!(list[2].name(), "42");
        assert_eq!(list[2].status(), "");
        assert_eq!(list[2].teams.as_deref(), Some(&["Oman".to_string()][..]));
        assert_eq!(list[2].venue, None);

        assert!(!list[3].is_premium());
        assert_eq!(list[3].url, None);
        assert_eq!(list[3].innings().unwrap()[0].inning.as_deref(), Some("3"));
    }

    #[test]
    fn premium_flag_accepts_truthy_spellings() {
        for (raw, want) in [
            (json!(true), true),
            (json!("TRUE"), true),
            (json!("yes"), true),
            (json!(1), true),
            (json!("false"), false),
            (json!(0), false),
            (json!("premium?"), false),
        ] {
            let m: MatchCandidate = serde_json::from_value(json!({ "is_premium": raw })).unwrap();
            assert_eq!(m.is_premium(), want, "{raw}");
        }
    }

    #[test]
    fn tally_display_keeps_integers_clean() {
        assert_eq!(Tally::Number(150.0).to_string(), "150");
        assert_eq!(Tally::Number(19.4).to_string(), "19.4");
        assert_eq!(Tally::from("-").to_string(), "-");
        assert!(Tally::from(" - ").is_placeholder());
        assert!(!Tally::Number(0.0).is_placeholder());
    }
}
