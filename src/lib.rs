pub mod feed;
pub mod logging;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_SHAPE: &str = "shape";
