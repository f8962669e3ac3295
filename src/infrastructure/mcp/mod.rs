//! # MCP Module
//!
//! Model Context Protocol server: tool and prompt registration plus transport startup.

pub mod server;
pub mod transport;

pub use server::MenuServer;
