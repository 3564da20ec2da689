/// Cricket Khelega — API client
///
/// Talks to the cricket backend (live, schedule, rankings, news, players,
/// commentary). JSON only, one timeout for every request.
/// Errors are logged here and handed back to the caller, who decides what
/// the user sees.

use anyhow::{anyhow, bail, Context, Result};
use hero::MatchCandidate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

mod types;

pub use types::{
    BattingStats, BowlingStats, CommentaryResponse, FormatRanks, NewsItem, PlayerLookup,
    PlayerProfile, PlayerRankings, RankingRow, RankingTable, ScheduleEntry,
};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct CricketApi {
    client: reqwest::Client,
    base:   Url,
}

impl CricketApi {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid API base {base}"))?;
        if base.cannot_be_a_base() {
            bail!("API base {base} cannot carry a path");
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `/live`; a null body counts as no matches. Records that are not match
    /// objects are skipped so one bad entry does not hide the others.
    pub async fn live_matches(&self) -> Result<Vec<MatchCandidate>> {
        let records: Vec<serde_json::Value> = self.fetch_list(&["live"]).await?;
        Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| match serde_json::from_value(record) {
                Ok(m) => Some(m),
                Err(e) => {
                    warn!("skipping /live record #{i}: {e}");
                    None
                }
            })
            .collect())
    }

    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>> {
        self.fetch_list(&["schedule"]).await
    }

    pub async fn rankings(&self) -> Result<Vec<RankingTable>> {
        self.fetch_list(&["rankings"]).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>> {
        self.fetch_list(&["news"]).await
    }

    /// Name goes in as a single path segment, percent-encoded.
    pub async fn player(&self, name: &str) -> Result<PlayerLookup> {
        self.fetch(&["players", name]).await
    }

    pub async fn commentary(&self, match_id: &str) -> Result<CommentaryResponse> {
        self.fetch(&["commentary", match_id]).await
    }

    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base {} cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.fetch(segments).await?;
        Ok(items.unwrap_or_default())
    }

    async fn fetch<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let endpoint = format!("/{}", segments.join("/"));
        match self.fetch_inner(segments).await {
            Ok(v) => Ok(v),
            Err(e) => {
                warn!("API error [{endpoint}]: {e:#}");
                Err(e.context(format!("GET {endpoint}")))
            }
        }
    }

    async fn fetch_inner<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint_url(segments)?;
        debug!("GET {url}");

        let resp = self.client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("HTTP {}", status.as_u16());
        }

        let raw = resp.text().await.context("reading body")?;
        serde_json::from_str(&raw).context("malformed payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One-shot HTTP server; resolves to the request head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8_lossy(&buf).to_string()
        });
        (format!("http://{addr}"), handle)
    }

    fn api(base: &str) -> CricketApi {
        CricketApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_urls_encode_segments() {
        let a = api("https://cricket.example.com/api/");
        assert_eq!(a.endpoint_url(&["live"]).unwrap().as_str(), "https://cricket.example.com/api/live");
        assert_eq!(
            a.endpoint_url(&["players", "MS Dhoni"]).unwrap().as_str(),
            "https://cricket.example.com/api/players/MS%20Dhoni"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(CricketApi::new("not a url", DEFAULT_TIMEOUT).is_err());
        assert!(CricketApi::new("mailto:someone@example.com", DEFAULT_TIMEOUT).is_err());
    }

    #[tokio::test]
    async fn live_matches_parse_and_send_accept_header() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"name":"India vs Pakistan, Final","status":"Live","is_premium":true}]"#,
        )
        .await;
        let matches = api(&base).live_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches[0].is_premium());

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /live "));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn live_matches_skip_records_that_are_not_matches() {
        let (base, _server) = serve_once(
            "200 OK",
            r#"[{"name":"India vs Pakistan","status":"Live"},"oops",7,null,
                {"name":"Kenya vs Oman","status":"Live","is_premium":"true","teams":[null,"Oman"]}]"#,
        )
        .await;
        let matches = api(&base).live_matches().await.unwrap();
        let names: Vec<_> = matches.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["India vs Pakistan", "Kenya vs Oman"]);
        assert!(matches[1].is_premium());
    }

    #[tokio::test]
    async fn null_list_is_empty() {
        let (base, _server) = serve_once("200 OK", "null").await;
        assert!(api(&base).news().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base, _server) = serve_once("503 Service Unavailable", "{}").await;
        let err = api(&base).schedule().await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("GET /schedule"), "{msg}");
        assert!(msg.contains("HTTP 503"), "{msg}");
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let (base, _server) = serve_once("200 OK", "<html>").await;
        let err = api(&base).rankings().await.unwrap_err();
        assert!(format!("{err:#}").contains("malformed payload"));
    }

    #[tokio::test]
    async fn player_name_is_path_encoded() {
        let (base, server) = serve_once("200 OK", r#"{"error":"Player not found"}"#).await;
        let lookup = api(&base).player("Babar Azam").await.unwrap();
        assert!(matches!(lookup, PlayerLookup::Missing { .. }));
        let head = server.await.unwrap();
        assert!(head.starts_with("GET /players/Babar%20Azam "), "{head}");
    }
}
