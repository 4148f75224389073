//! Page shell
//!
//! Full document around a rendered feed. Carries every hook in
//! [`crate::hooks`] so page scripts find the elements they bind to.

use crate::hooks::{
    ACTION_STATUS, FEED_CONTAINER, POST_CONTENT, POST_MODAL, POST_STATUS, POST_SUBMIT,
    REPLY_CONTENT, REPLY_MODAL, REPLY_STATUS, REPLY_SUBMIT, REPLY_TARGET,
};

/// Render a complete HTML document with `feed_html` inside the feed container
pub fn render_page(feed_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Timeline</title>
</head>
<body>
    <main>
        <div id="{feed}" class="{feed}">
{feed_html}        </div>
        <div id="{action_status}" class="status-message" hidden></div>
    </main>

    <div id="{post_modal}" class="modal" hidden>
        <textarea id="{post_content}" placeholder="What's happening?"></textarea>
        <button type="button" id="{post_submit}">Post</button>
        <p id="{post_status}" class="status-message"></p>
    </div>

    <div id="{reply_modal}" class="modal" hidden>
        <p id="{reply_target}" class="reply-target"></p>
        <textarea id="{reply_content}" placeholder="Write your reply"></textarea>
        <button type="button" id="{reply_submit}">Reply</button>
        <p id="{reply_status}" class="status-message"></p>
    </div>
</body>
</html>
"#,
        feed = FEED_CONTAINER,
        feed_html = feed_html,
        action_status = ACTION_STATUS,
        post_modal = POST_MODAL,
        post_content = POST_CONTENT,
        post_submit = POST_SUBMIT,
        post_status = POST_STATUS,
        reply_modal = REPLY_MODAL,
        reply_target = REPLY_TARGET,
        reply_content = REPLY_CONTENT,
        reply_submit = REPLY_SUBMIT,
        reply_status = REPLY_STATUS,
    )
}
