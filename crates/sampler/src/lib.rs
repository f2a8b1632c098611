//! Light-sensor sampling: one HTTP GET per fetch, decoded into a [`Reading`].

pub mod payload;
pub mod poller;

pub use payload::decode_payload;
pub use poller::spawn_poller;

use lux_core::{FetchError, Reading, Sample};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Address of the sensor board.  Compiled in; not user-configurable.
pub const DEFAULT_HOST: &str = "172.20.10.2";

/// Path of the light endpoint on the sensor board.
pub const LIGHT_PATH: &str = "/light";

/// HTTP client for the light endpoint.
///
/// Cheap to clone; clones share the connection pool and the issuance counter,
/// so sequence numbers stay unique across the periodic trigger and manual
/// refreshes.
#[derive(Clone)]
pub struct Sampler {
    agent:  ureq::Agent,
    url:    Arc<str>,
    issued: Arc<AtomicU64>,
}

impl Sampler {
    /// Sampler for the compiled-in sensor host.
    pub fn new() -> Self {
        Self::build(format!("http://{DEFAULT_HOST}{LIGHT_PATH}"))
    }

    /// Sampler for an explicit endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self, FetchError> {
        let url = url.into();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FetchError::InvalidUrl(url));
        }
        Ok(Self::build(url))
    }

    fn build(url: String) -> Self {
        // Transport defaults only: no explicit timeouts, no retries.
        let agent = ureq::AgentBuilder::new()
            .user_agent(&format!("luxmeter/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            url: url.into(),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one GET and decode the body.  Blocks the calling thread.
    pub fn fetch_blocking(&self) -> Result<Reading, FetchError> {
        let response = self.agent.get(&self.url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => FetchError::Network(format!("HTTP status {code}")),
            ureq::Error::Transport(t) => FetchError::Network(t.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|e| FetchError::Network(format!("read body: {e}")))?;

        let lux = decode_payload(&body)?;
        Ok(Reading::now(lux))
    }

    /// Fetch one reading on Tokio's blocking pool.
    pub async fn fetch(&self) -> Result<Reading, FetchError> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.fetch_blocking())
            .await
            .map_err(|e| FetchError::Network(format!("fetch task aborted: {e}")))?
    }

    /// Allocate the next sequence number now and return a future that fetches.
    ///
    /// The number is taken at call time, not when the future is first polled,
    /// so it reflects issuance order.
    pub fn sample(&self) -> impl Future<Output = Sample> + Send + 'static {
        let seq = self.issued.fetch_add(1, Ordering::Relaxed);
        let this = self.clone();

        async move {
            let result = this.fetch().await;
            if let Err(e) = &result {
                debug!(seq, "fetch from {} failed: {e}", this.url);
            }
            Sample { seq, result }
        }
    }

    /// Number of fetches issued through [`Sampler::sample`] so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler")
            .field("url", &self.url)
            .field("issued", &self.issued())
            .finish()
    }
}
