//! Feed module
//!
//! HTML rendering of the timeline and the page that hosts it.

pub mod page;
pub mod renderer;

pub use page::render_page;
pub use renderer::{
    escape_html, render_card, render_card_with, render_empty_state, render_feed, RenderOptions,
    EMPTY_STATE_TEXT,
};
