//! Trait seams for dependency injection.
//!
//! - [`NewsSource`] - where search results come from (HTTP in production,
//!   scripted sources in tests)

pub mod news;

pub use news::NewsSource;
