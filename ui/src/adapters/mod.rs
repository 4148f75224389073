//! Adapters layer
//!
//! Implementations of the port traits defined in the domain layer.

pub mod http;

pub use http::HttpTimelineClient;
