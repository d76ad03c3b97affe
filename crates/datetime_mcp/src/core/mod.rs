//! # DateTime MCP Server Core
//!
//! Timezone resolution and date/time snapshots behind the
//! `get_current_datetime` tool.
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `invoker`: The tool contract, including the invalid-timezone fallback
//! - `models`: Tool request and response types
//! - `resolver`: Timezone validity probe and resolution order
//! - `snapshot`: Multi-format rendering of a single instant
//! - `utils`: Format strings and input normalization

pub mod error;
pub mod invoker;
pub mod models;
pub mod resolver;
pub mod snapshot;
pub mod utils;
