//! HTTP adapter for the timeline API

mod client;

pub use client::HttpTimelineClient;
