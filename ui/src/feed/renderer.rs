//! Feed renderer
//!
//! Renders post records to HTML card markup.

use crate::config::DEFAULT_PLACEHOLDER_ICON_URL;
use crate::domain::PostRecord;
use crate::hooks::{ACTION_LIKE, ACTION_REPLY, ACTION_REPOST};

/// Shown in place of the cards when the timeline is empty
pub const EMPTY_STATE_TEXT: &str = "No posts to show.";

/// Settings that affect card markup
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub placeholder_icon_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_icon_url: DEFAULT_PLACEHOLDER_ICON_URL.to_string(),
        }
    }
}

/// Render the whole feed: all cards in order, or the empty state
pub fn render_feed(records: &[PostRecord], options: &RenderOptions) -> String {
    if records.is_empty() {
        return render_empty_state();
    }

    let mut buf = String::new();
    for record in records {
        buf.push_str(&render_card_with(record, options));
    }
    buf
}

pub fn render_empty_state() -> String {
    format!(
        "<p class=\"secondary-text-color empty-state\">{}</p>\n",
        EMPTY_STATE_TEXT
    )
}

/// Render one card with default options
pub fn render_card(record: &PostRecord) -> String {
    render_card_with(record, &RenderOptions::default())
}

pub fn render_card_with(record: &PostRecord, options: &RenderOptions) -> String {
    let name = escape_html(record.display_name());
    let icon = escape_html(&record.icon_url_or(&options.placeholder_icon_url));
    let liked = if record.is_liked() { " liked" } else { "" };
    let target = action_attrs(record);

    format!(
        r#"<div class="post-card" data-event-id="{id}">
    <div class="post-header">
        <img src="{icon}" alt="user icon" class="user-icon">
        <span class="username">@{name}</span>
    </div>
    <div class="post-body">
        <p class="post-text">{content}</p>
        <p class="hashtags">{hashtags}</p>
    </div>
    <div class="post-footer">
        <button type="button" class="action reply-action" data-action="{reply}" {target}><i class="fa-regular fa-comment reply-icon"></i></button>
        <button type="button" class="action repost-action" data-action="{repost}" {target}><i class="fa-solid fa-retweet repost-icon"></i><span class="count repost-count">{reposts}</span></button>
        <button type="button" class="action like-action" data-action="{like}" {target}><i class="fa-solid fa-heart like-icon{liked}"></i><span class="count like-count">{likes}</span></button>
        <span class="zap"><i class="fa-solid fa-bolt zap-icon"></i><span class="count zap-count">{zaps}</span></span>
    </div>
</div>
"#,
        id = escape_html(&record.id),
        icon = icon,
        name = name,
        content = escape_html(&record.content),
        hashtags = escape_html(&record.hashtag_line()),
        reply = ACTION_REPLY,
        repost = ACTION_REPOST,
        like = ACTION_LIKE,
        target = target,
        reposts = record.repost_count,
        likes = record.like_count,
        liked = liked,
        zaps = record.zap_count,
    )
}

/// Data attributes binding an action button to its record
fn action_attrs(record: &PostRecord) -> String {
    format!(
        r#"data-event-id="{}" data-pubkey="{}" data-display-name="{}""#,
        escape_html(&record.id),
        escape_html(&record.pubkey),
        escape_html(record.display_name())
    )
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_record, test_record_with};

    // ===== render_feed tests =====

    #[test]
    fn render_feed_empty() {
        let result = render_feed(&[], &RenderOptions::default());

        assert!(result.contains(EMPTY_STATE_TEXT));
        assert!(!result.contains("post-card"));
    }

    #[test]
    fn render_feed_keeps_server_order() {
        let records = vec![
            test_record_with("first", "alice"),
            test_record_with("second", "bob"),
            test_record_with("third", "carol"),
        ];

        let result = render_feed(&records, &RenderOptions::default());

        let first = result.find(r#"data-event-id="first""#).unwrap();
        let second = result.find(r#"data-event-id="second""#).unwrap();
        let third = result.find(r#"data-event-id="third""#).unwrap();
        assert!(first < second && second < third);
        assert_eq!(result.matches("class=\"post-card\"").count(), 3);
        assert!(!result.contains(EMPTY_STATE_TEXT));
    }

    #[test]
    fn render_feed_uses_placeholder_option() {
        let mut record = test_record();
        record.icon_url = None;
        let options = RenderOptions {
            placeholder_icon_url: "https://avatars.example/50".to_string(),
        };

        let result = render_feed(&[record], &options);

        assert!(result.contains(r#"src="https://avatars.example/50?u=abc""#));
    }

    // ===== render_card tests =====

    #[test]
    fn render_card_minimal_record() {
        let record: PostRecord = serde_json::from_str(
            r#"{"id":"1","pubkey":"abc","content":"hi","tags":null,"likeCount":0,"repostCount":0}"#,
        )
        .unwrap();

        let result = render_card(&record);

        assert!(result.contains("<span class=\"username\">@abc</span>"));
        assert!(result.contains("<p class=\"post-text\">hi</p>"));
        assert!(result.contains("<p class=\"hashtags\"></p>"));
        assert!(result.contains("<i class=\"fa-solid fa-heart like-icon\"></i>"));
        assert!(result.contains("<span class=\"count like-count\">0</span>"));
        assert!(result.contains(r#"src="https://i.pravatar.cc/50?u=abc""#));
    }

    #[test]
    fn render_card_liked_state_from_count() {
        let mut record = test_record();
        record.like_count = 4;

        let result = render_card(&record);

        assert!(result.contains("like-icon liked"));
        assert!(result.contains("<span class=\"count like-count\">4</span>"));
    }

    #[test]
    fn render_card_tags() {
        let mut record = test_record();
        record.tags = vec!["Go".to_string(), "Nostr".to_string()];

        let result = render_card(&record);

        assert!(result.contains("<p class=\"hashtags\">#Go #Nostr</p>"));
    }

    #[test]
    fn render_card_truncates_pubkey_without_display_name() {
        let mut record = test_record();
        record.pubkey = "3bf0c63fcb93463407af97a5e5ee64fa".to_string();
        record.display_name = None;

        let result = render_card(&record);

        assert!(result.contains("@3bf0c63f</span>"));
        assert!(result.contains(r#"data-pubkey="3bf0c63fcb93463407af97a5e5ee64fa""#));
        assert!(result.contains(r#"data-display-name="3bf0c63f""#));
    }

    #[test]
    fn render_card_action_affordances() {
        let record = test_record_with("ev42", "nostr_girl");

        let result = render_card(&record);

        for action in [ACTION_LIKE, ACTION_REPOST, ACTION_REPLY] {
            assert!(result.contains(&format!(r#"data-action="{}""#, action)));
        }
        assert_eq!(result.matches(r#"data-event-id="ev42""#).count(), 4);
        assert_eq!(result.matches(r#"data-pubkey="nostr_girl""#).count(), 3);
    }

    #[test]
    fn render_card_escapes_content() {
        let mut record = test_record();
        record.content = "<script>alert('x')</script> & more".to_string();
        record.display_name = Some("\"quoted\"".to_string());

        let result = render_card(&record);

        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(result.contains("@&quot;quoted&quot;"));
    }

    #[test]
    fn render_card_shows_repost_and_zap_counts() {
        let mut record = test_record();
        record.repost_count = 7;
        record.zap_count = 15;

        let result = render_card(&record);

        assert!(result.contains("<span class=\"count repost-count\">7</span>"));
        assert!(result.contains("<span class=\"count zap-count\">15</span>"));
    }

    // ===== escape_html tests =====

    #[test]
    fn escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Go言語でNostr"), "Go言語でNostr");
    }
}
