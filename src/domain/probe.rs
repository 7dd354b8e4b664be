//! Reachability contract for full URLs.

use async_trait::async_trait;

/// Decides whether a full URL currently answers.
///
/// The answer is a plain boolean: implementations swallow transport errors
/// and report them as unreachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlProbe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}
