//! Post record as served by the timeline endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Number of pubkey characters used when no display name is supplied
pub const DISPLAY_NAME_LEN: usize = 8;

/// Helper to deserialize null as default (empty vec, zero, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty strings count as absent.
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// One unit of timeline content.
///
/// Read-only: counts and identity are authoritative from the server, so there
/// is no way to change them locally. A new count means a new fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub pubkey: String,
    #[serde(
        default,
        alias = "name",
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub repost_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub zap_count: u64,
}

impl PostRecord {
    /// Name shown on the card: the supplied display name, or a pubkey prefix.
    pub fn display_name(&self) -> &str {
        match &self.display_name {
            Some(name) => name,
            None => short_prefix(&self.pubkey, DISPLAY_NAME_LEN),
        }
    }

    /// Avatar URL, falling back to `placeholder_base` keyed by pubkey.
    pub fn icon_url_or(&self, placeholder_base: &str) -> String {
        match &self.icon_url {
            Some(url) => url.clone(),
            None => placeholder_icon_url(placeholder_base, &self.pubkey),
        }
    }

    /// The like state is derived from the count only.
    pub fn is_liked(&self) -> bool {
        self.like_count > 0
    }

    /// Tags rendered as `#tag`, space separated. Empty when there are none.
    pub fn hashtag_line(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Deterministic avatar URL for a pubkey
pub fn placeholder_icon_url(base: &str, pubkey: &str) -> String {
    format!(
        "{}?u={}",
        base.trim_end_matches('/'),
        urlencoding::encode(pubkey)
    )
}

/// First `max_chars` characters of `s`, never splitting a character.
pub fn short_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
