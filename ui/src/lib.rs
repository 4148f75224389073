//! Timeline rendering and action client for the algia web UI.
//!
//! Fetches posts from the local timeline API, renders them as HTML cards and
//! sends post, reply, like and repost actions back. The backend (relays,
//! signing, storage) lives behind the HTTP API and is not part of this crate.
//!
//! Layout follows ports and adapters:
//! - `domain`: the post record and the port traits (API, UI handles)
//! - `adapters`: the reqwest implementation of the API port
//! - `feed`: pure HTML rendering
//! - `app`: timeline renderer and action dispatcher

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod hooks;

#[cfg(test)]
mod test_utils;

pub use adapters::HttpTimelineClient;
pub use app::{
    Action, ActionDispatcher, ActionUi, ComposeUi, PostTarget, SyncPolicy, TimelineRenderer,
};
pub use config::Config;
pub use domain::PostRecord;
pub use error::ClientError;
