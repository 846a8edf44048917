//! headlines - a terminal news search client.
//!
//! Typed input is debounced, filter changes are turned into fetches, and each
//! fetch is tagged with a generation so a slow response can never overwrite
//! a newer one. This library exposes the modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod events;
pub mod fetch;
pub mod input;
pub mod logging;
pub mod models;
pub mod query_state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
