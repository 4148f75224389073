//! UI handle port traits
//!
//! Every handle takes `&self`: a DOM element is shared and mutated through
//! the document, so implementations use interior mutability.

/// The single subtree the timeline is written into.
pub trait FeedContainer: Send + Sync {
    /// Replace the whole contents. Called once per render.
    fn set_html(&self, html: &str);
}

/// Slot for a transient status message.
pub trait StatusSlot: Send + Sync {
    fn show(&self, text: &str);

    fn clear(&self);
}

/// The button or icon that triggered an action.
pub trait ActionControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);

    /// Swap the visible label, e.g. to "Posting..." while in flight.
    fn set_label(&self, label: &str);
}

/// Compose or reply dialog.
pub trait Modal: Send + Sync {
    fn close(&self);
}

/// Content field of a compose or reply dialog.
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;

    fn clear(&self);
}
