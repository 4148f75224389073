//! When the timeline is re-fetched after a successful action

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Re-fetch and re-render the whole timeline after every successful action
    #[default]
    RefreshAfterMutation,
    /// Never re-render automatically; the caller decides
    Manual,
}

impl SyncPolicy {
    /// Every action writes an event, so this is a property of the policy alone.
    pub fn refreshes_after_success(&self) -> bool {
        matches!(self, SyncPolicy::RefreshAfterMutation)
    }
}
