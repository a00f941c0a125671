use crate::shared::Result;
use anyhow::Context;
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// One page of a Snyk REST listing response.
///
/// Every listing endpoint wraps its results in a `data` array plus a
/// `links` object whose `next` member is a relative URL pointing at the
/// next page. The last page omits `next` or sets it to an empty string.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

/// Outcome of fetching one page URL
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with the raw response body
    Success(String),
    /// HTTP 429 - the caller waits and retries the same URL
    RateLimited,
    /// Any other status - terminal for the walk
    Failed { status: u16 },
}

/// PageFetcher seam between the pagination loop and the HTTP transport
///
/// Transport-level failures (timeouts, connection errors) surface as
/// errors; status-level results come back as `FetchOutcome` so the loop
/// can apply the retry policy.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchOutcome>;
}

/// Fixed-delay retry policy for rate-limited requests.
///
/// A 429 response waits out the delay and retries the same URL, with no
/// backoff growth and no attempt cap. Injected into the pagination loop
/// so tests can script rate-limit responses without real delays.
#[derive(Debug, Clone)]
pub struct RateLimitPolicy {
    delay: Duration,
}

impl RateLimitPolicy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Policy that retries immediately. For tests.
    pub fn no_delay() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Blocks for the configured delay. Nothing else runs during the
    /// wait; the whole tool is single-threaded.
    pub fn wait(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Walks a paged listing endpoint, concatenating every page's `data`
/// array in response order until a page has no usable `next` link.
///
/// Relative `next` URLs are joined to `base_url`. On a rate-limit
/// response the policy delay is waited out and the same URL retried
/// indefinitely. Any other non-success status aborts the walk with an
/// error; pages accumulated so far are discarded rather than returned
/// as a partial result.
pub fn collect_pages<T, F>(
    fetcher: &F,
    base_url: &str,
    first_url: &str,
    policy: &RateLimitPolicy,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: PageFetcher + ?Sized,
{
    let mut items: Vec<T> = Vec::new();
    let mut url = first_url.to_string();

    loop {
        match fetcher.fetch(&url)? {
            FetchOutcome::Success(body) => {
                let page: PageEnvelope<T> = serde_json::from_str(&body)
                    .with_context(|| format!("Failed to parse listing response from {}", url))?;
                items.extend(page.data);

                match page.links.next {
                    Some(next) if !next.is_empty() => url = format!("{}{}", base_url, next),
                    _ => return Ok(items),
                }
            }
            FetchOutcome::RateLimited => {
                eprintln!(
                    "{}",
                    format!(
                        "WARNING - Snyk rate limit hit, waiting {} seconds then retrying call",
                        policy.delay().as_secs()
                    )
                    .yellow()
                );
                policy.wait();
            }
            FetchOutcome::Failed { status } => {
                return Err(crate::shared::error::TaggerError::ApiStatus {
                    status,
                    url: url.clone(),
                }
                .into());
            }
        }
    }
}
