//! Type definitions for the feed module.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

/// Per-call shaping switches. Both default to off; the full summary text and
/// the tag list are only copied when explicitly requested.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShapeOptions {
    pub copy_entry_summary: bool,
    pub copy_entry_tags: bool,
}

/// Raw material handed from the HTTP layer to the parser.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
