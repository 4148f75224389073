//! Domain layer
//!
//! The post record and the ports (traits) the application layer talks through.

pub mod ports;
pub mod post;

pub use post::{placeholder_icon_url, short_prefix, PostRecord, DISPLAY_NAME_LEN};
