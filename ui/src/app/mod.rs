//! Application layer
//!
//! The two things the page does: render the timeline, and dispatch user
//! actions against the API.

pub mod dispatcher;
pub mod sync_policy;
pub mod timeline_service;

pub use dispatcher::{Action, ActionDispatcher, ActionUi, ComposeUi, PostTarget};
pub use sync_policy::SyncPolicy;
pub use timeline_service::TimelineRenderer;
