//! Reachability probe backed by an outbound HEAD request.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::domain::probe::UrlProbe;

/// Probes full URLs with a single HEAD request.
///
/// A URL is reachable iff the response status is 2xx. Redirects are not
/// followed, so a 3xx answer counts as unreachable. Transport failures
/// (DNS, refused connections, TLS, unparsable URLs) count as unreachable too.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Creates a probe with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProbe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let reachable = response.status().is_success();
                debug!(url, status = %response.status(), reachable, "Reachability probe answered");
                reachable
            }
            Err(e) => {
                debug!(url, error = %e, "Reachability probe failed");
                false
            }
        }
    }
}
