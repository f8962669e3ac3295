//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., FeedSource).

pub mod feed;
pub mod mcp;
