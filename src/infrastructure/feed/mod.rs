//! # Feed Module
//!
//! Retrieval of the restaurant RSS feeds over HTTP, with an optional short-lived cache.

pub mod cache;
pub mod fetcher;

pub use fetcher::FeedFetcher;
