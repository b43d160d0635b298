//! External job ingester
//!
//! Fetches a remote-jobs RSS feed and maps its items into lightweight
//! records shaped like local postings. Not wired into a route; exported for
//! future use. Failures degrade to an empty list so local listings are
//! never broken by a flaky feed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{instrument, warn};

use super::error::{ServiceError, ServiceResult};

/// Default feed when none is configured
pub const DEFAULT_FEED_URL: &str = "https://weworkremotely.com/remote-jobs.rss";

/// A job posting sourced from an external feed
#[derive(Debug, Clone, Serialize)]
pub struct ExternalJob {
    /// Feed GUID prefixed with "ext-" so it cannot collide with local ids
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub external_link: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// External job feed client
pub struct ExternalJobService {
    client: reqwest::Client,
}

impl ExternalJobService {
    /// Create a new ExternalJobService
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch and map a feed; network or parse failures yield an empty list
    #[instrument(skip(self))]
    pub async fn fetch(&self, feed_url: &str) -> Vec<ExternalJob> {
        match self.try_fetch(feed_url).await {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(error = %e, "External feed fetch failed");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, feed_url: &str) -> ServiceResult<Vec<ExternalJob>> {
        let body = self
            .client
            .get(feed_url)
            .send()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let channel = rss::Channel::read_from(&body[..])
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(channel.items().iter().map(map_item).collect())
    }
}

impl Default for ExternalJobService {
    fn default() -> Self {
        Self::new()
    }
}

fn map_item(item: &rss::Item) -> ExternalJob {
    let raw_title = item.title().unwrap_or("Untitled").to_string();

    // Feed titles are commonly "Company Name: Job Title".
    let (company, title) = match raw_title.split_once(": ") {
        Some((company, title)) => (company.to_string(), title.to_string()),
        None => ("External Company".to_string(), raw_title),
    };

    let published_at = item
        .pub_date()
        .and_then(|d| DateTime::parse_from_rfc2822(d).ok())
        .map(|d| d.with_timezone(&Utc));

    ExternalJob {
        id: format!("ext-{}", item.guid().map_or("unknown", |g| g.value())),
        title,
        company,
        location: "Remote".to_string(),
        description: item
            .description()
            .map(strip_html)
            .unwrap_or_default(),
        external_link: item.link().map(String::from),
        published_at,
    }
}

/// Reduce an HTML description to a plain-text snippet
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
