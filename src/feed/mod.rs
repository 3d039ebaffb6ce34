//! Feed fetching and shaping for feedsnap.
//!
//! This module fetches a syndication feed with conditional-request hints and
//! reduces the parsed result to a flat JSON document with `header`, `feed`,
//! and `entries` sections.

mod client;
mod fetcher;
mod parser;
mod project;
mod shape;
mod types;
mod util;

// Re-export types for callers
pub use self::types::*;

// Re-export the entry point for main.rs to use
pub use self::fetcher::fetch_feed_json;

// Re-export other modules
pub use self::client::*;
pub use self::parser::*;
pub use self::project::*;
pub use self::shape::*;
pub use self::util::*;
