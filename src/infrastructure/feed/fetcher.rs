//! HTTP feed fetcher
//!
//! One GET per attempt with a fixed timeout. Failures are logged and reported as `None`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::OnceCell;

use super::cache::FeedCache;
use crate::domain::config::FeedConfig;
use crate::domain::traits::FeedSource;
use crate::strings::logs;

/// Why a single fetch attempt failed.
#[derive(Debug)]
pub enum FeedError {
    /// The HTTP client could not be constructed.
    Client(String),
    Timeout,
    /// Connection or protocol error.
    Request(String),
    Status(u16),
    /// The body could not be read as text.
    Body(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FeedError::Timeout
        } else if let Some(status) = e.status() {
            FeedError::Status(status.as_u16())
        } else {
            FeedError::Request(e.to_string())
        }
    }
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Client(msg) => write!(f, "failed to build HTTP client: {}", msg),
            FeedError::Timeout => write!(f, "request timed out"),
            FeedError::Request(msg) => write!(f, "request failed: {}", msg),
            FeedError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            FeedError::Body(msg) => write!(f, "failed to read body: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// Fetches feed documents over HTTP.
///
/// The HTTP client is built on first use and owned by the fetcher.
pub struct FeedFetcher {
    client: OnceCell<Client>,
    timeout: Duration,
    retries: u32,
    cache: FeedCache,
}

impl FeedFetcher {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            client: OnceCell::new(),
            timeout: Duration::from_secs(config.timeout_secs),
            retries: config.retries,
            cache: FeedCache::new(Duration::from_secs(config.cache_ttl_secs)),
        }
    }

    async fn client(&self) -> Result<&Client, FeedError> {
        self.client
            .get_or_try_init(|| async {
                Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(|e| FeedError::Client(e.to_string()))
            })
            .await
    }

    /// A single GET. Non-2xx statuses are errors.
    pub async fn fetch_once(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client().await?.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout
            } else {
                FeedError::Body(e.to_string())
            }
        })
    }
}

#[async_trait]
impl FeedSource for FeedFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        if let Some(body) = self.cache.get(url).await {
            tracing::debug!("{}", logs::cache_hit(url));
            return Some(body);
        }

        let attempts = self.retries + 1;
        for attempt in 1..=attempts {
            if attempt > 1 {
                tracing::info!("{}", logs::fetch_retry(url, attempt, attempts));
            }

            match self.fetch_once(url).await {
                Ok(body) => {
                    self.cache.put(url, &body).await;
                    return Some(body);
                }
                Err(e) => tracing::error!("{}", logs::fetch_failed(url, &e.to_string())),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config(timeout_secs: u64, retries: u32, cache_ttl_secs: u64) -> FeedConfig {
        FeedConfig {
            timeout_secs,
            retries,
            cache_ttl_secs,
        }
    }

    /// Serves `responses` in order, one per connection, and returns the base URL.
    async fn serve(responses: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            for response in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/feed", addr)
    }

    const OK_RESPONSE: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/rss+xml\r\nContent-Length: 6\r\nConnection: close\r\n\r\n<rss/>";
    const ERROR_RESPONSE: &str = "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    #[test]
    fn test_error_display() {
        assert_eq!(FeedError::Status(404).to_string(), "unexpected HTTP status 404");
        assert_eq!(FeedError::Timeout.to_string(), "request timed out");
    }

    #[tokio::test]
    async fn test_unreachable_host_returns_none() {
        let fetcher = FeedFetcher::new(&config(2, 0, 0));
        assert!(fetcher.fetch("http://127.0.0.1:1/feed").await.is_none());
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let url = serve(vec![OK_RESPONSE]).await;
        let fetcher = FeedFetcher::new(&config(5, 0, 0));
        assert_eq!(fetcher.fetch(&url).await.as_deref(), Some("<rss/>"));
    }

    #[tokio::test]
    async fn test_non_success_status_returns_none() {
        let url = serve(vec![ERROR_RESPONSE]).await;
        let fetcher = FeedFetcher::new(&config(5, 0, 0));
        assert!(matches!(fetcher.fetch_once(&url).await, Err(FeedError::Status(503))));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let url = serve(vec![ERROR_RESPONSE, OK_RESPONSE]).await;

        let fetcher = FeedFetcher::new(&config(5, 1, 0));
        assert_eq!(fetcher.fetch(&url).await.as_deref(), Some("<rss/>"));
    }

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let url = serve(vec![ERROR_RESPONSE, OK_RESPONSE]).await;

        let fetcher = FeedFetcher::new(&config(5, 0, 0));
        assert!(fetcher.fetch(&url).await.is_none());
    }

    #[tokio::test]
    async fn test_cached_body_survives_server_going_away() {
        // Only one response is served; the second fetch must come from the cache.
        let url = serve(vec![OK_RESPONSE]).await;

        let fetcher = FeedFetcher::new(&config(5, 0, 60));
        assert_eq!(fetcher.fetch(&url).await.as_deref(), Some("<rss/>"));
        assert_eq!(fetcher.fetch(&url).await.as_deref(), Some("<rss/>"));
    }

    #[tokio::test]
    async fn test_timeout_returns_none() {
        // Accepts the connection but never answers.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let accepted = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(accepted);
        });

        let fetcher = FeedFetcher::new(&config(1, 0, 0));
        let result = fetcher.fetch_once(&format!("http://{}/feed", addr)).await;
        assert!(matches!(result, Err(FeedError::Timeout)));
    }
}
