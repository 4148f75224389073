//! Test fixtures
//!
//! Factory functions for post records with sensible defaults.

use crate::domain::PostRecord;

/// The minimal record: no tags, no icon, no display name, zero counts
pub fn test_record() -> PostRecord {
    test_record_with("1", "abc")
}

/// A minimal record with a specific id and pubkey
pub fn test_record_with(id: &str, pubkey: &str) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        pubkey: pubkey.to_string(),
        display_name: None,
        content: "hi".to_string(),
        tags: vec![],
        icon_url: None,
        like_count: 0,
        repost_count: 0,
        zap_count: 0,
    }
}
