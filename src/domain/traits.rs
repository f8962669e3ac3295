//! # Domain Traits
//!
//! Abstract interfaces for core system components.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for something that can deliver raw feed documents.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the document at `url`.
    ///
    /// Returns `None` on any failure. Implementations log the failure themselves
    /// and never surface it as an error.
    async fn fetch(&self, url: &str) -> Option<String>;
}
