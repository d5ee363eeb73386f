//! HTTP transport boundary for catalog sources.

use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::CatalogError;

/// Raw response for one catalog URL, before any status or JSON handling.
#[derive(Clone, Debug)]
pub struct FetchedDocument {
    /// HTTP status code as answered by the server.
    pub status: u16,
    /// `ETag` response header, when the server sent one.
    pub etag: Option<String>,
    /// Response body as text.
    pub body: String,
}

/// Async byte fetch over HTTP, narrowed to what the loader needs: status,
/// `ETag`, body.
///
/// Implementations report transport-level failures (DNS, connect, read) as
/// [`CatalogError::Network`]; status handling stays with the loader so that
/// HTTP failures and network failures remain distinguishable diagnostics.
pub trait CatalogFetcher: Send + Sync {
    /// Fetch `url` and return the raw document.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedDocument, CatalogError>>;
}

/// [`CatalogFetcher`] backed by a pooled [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    /// Shared client; reqwest pools connections internally.
    client: reqwest::Client,
}

impl HttpFetcher {
    /// What: Build a fetcher with catalog-appropriate defaults.
    ///
    /// Details:
    /// - 15s connect timeout, 30s request timeout, crate-identifying
    ///   User-Agent.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("owopick/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");
        Self::with_client(client)
    }

    /// Wrap an existing client (custom proxies, headers, TLS policy).
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedDocument, CatalogError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await.map_err(|e| {
                CatalogError::Network {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;
            let status = response.status().as_u16();
            let etag = response
                .headers()
                .get(reqwest::header::ETAG)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.map_err(|e| CatalogError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            Ok(FetchedDocument { status, etag, body })
        })
    }
}
