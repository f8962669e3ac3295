//! # Application Layer
//!
//! Contains the menu logic of the server: feed parsing, date context,
//! and assembly of the text returned to MCP clients.

pub mod date;
pub mod menu;
pub mod parsing;
