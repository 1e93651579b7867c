//! TickerLab Core — catalog, filter engine, summary state machine, HTTP collaborators.
//!
//! This crate contains everything the dashboard and CLI share:
//! - Static ticker catalog (bundled default list, JSON file loading)
//! - Pure filter engine (case-insensitive substring search)
//! - Summary request state machine with stale-response tokens
//! - Analysis backend client (financial summaries over HTTP)
//! - Speech synthesis client (text to audio URL)
//! - Client configuration (endpoints, timeout policy)
//!
//! No UI dependencies live here.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod speech;
pub mod summary;
