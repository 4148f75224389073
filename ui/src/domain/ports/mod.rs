//! Port traits
//!
//! `TimelineApi` is the outbound HTTP collaborator. The UI handle traits are the
//! binding points to whatever markup hosts the timeline (a browser DOM, a file,
//! a terminal, or an in-memory recorder in tests).

pub mod timeline_api;
pub mod ui;

pub use timeline_api::{
    ActionReceipt, NewPostRequest, ReplyRequest, TargetRequest, TimelineApi,
};
pub use ui::{ActionControl, FeedContainer, Modal, StatusSlot, TextInput};
