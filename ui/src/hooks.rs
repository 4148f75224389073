//! DOM hook names shared with the page markup.
//!
//! Scripts bind to these ids and attributes; renaming one here breaks the page.

/// Class and id of the feed container
pub const FEED_CONTAINER: &str = "timeline-feed";

pub const POST_MODAL: &str = "post-modal";
pub const POST_CONTENT: &str = "post-content";
pub const POST_SUBMIT: &str = "post-submit";
pub const POST_STATUS: &str = "post-status";

pub const REPLY_MODAL: &str = "reply-modal";
pub const REPLY_CONTENT: &str = "reply-content";
pub const REPLY_SUBMIT: &str = "reply-submit";
pub const REPLY_STATUS: &str = "reply-status";
/// Shows who is being replied to
pub const REPLY_TARGET: &str = "reply-target";

/// Shared status slot for like/repost
pub const ACTION_STATUS: &str = "action-status";

/// Card action attribute values (`data-action="..."`)
pub const ACTION_LIKE: &str = "like";
pub const ACTION_REPOST: &str = "repost";
pub const ACTION_REPLY: &str = "reply";
