//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and that
//! remember how they were called.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::ports::{
    ActionControl, ActionReceipt, FeedContainer, Modal, NewPostRequest, ReplyRequest, StatusSlot,
    TargetRequest, TextInput, TimelineApi,
};
use crate::domain::PostRecord;
use crate::error::ClientError;

// ============================================================================
// Scripted Timeline API
// ============================================================================

/// One recorded call against [`MockTimelineApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchTimeline,
    Post(NewPostRequest),
    Reply(ReplyRequest),
    Like(TargetRequest),
    Repost(TargetRequest),
}

pub struct MockTimelineApi {
    timeline: RwLock<Vec<PostRecord>>,
    timeline_failure: RwLock<Option<u16>>,
    action_failure: RwLock<Option<(u16, Option<String>)>>,
    event_id: RwLock<String>,
    calls: RwLock<Vec<ApiCall>>,
}

impl Default for MockTimelineApi {
    fn default() -> Self {
        Self {
            timeline: RwLock::new(Vec::new()),
            timeline_failure: RwLock::new(None),
            action_failure: RwLock::new(None),
            event_id: RwLock::new("e1".to_string()),
            calls: RwLock::new(Vec::new()),
        }
    }
}

impl MockTimelineApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeline(self, records: Vec<PostRecord>) -> Self {
        self.set_timeline(records);
        self
    }

    /// `GET /timeline` answers with this HTTP status and no body
    pub fn failing_timeline(self, status: u16) -> Self {
        *self.timeline_failure.write().unwrap() = Some(status);
        self
    }

    /// Every mutating endpoint answers with this status and optional `error`
    pub fn failing_actions(self, status: u16, message: Option<&str>) -> Self {
        *self.action_failure.write().unwrap() = Some((status, message.map(str::to_string)));
        self
    }

    /// Event id returned by successful actions
    pub fn with_event_id(self, event_id: &str) -> Self {
        *self.event_id.write().unwrap() = event_id.to_string();
        self
    }

    pub fn set_timeline(&self, records: Vec<PostRecord>) {
        *self.timeline.write().unwrap() = records;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, ApiCall::FetchTimeline))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.calls.write().unwrap().push(call);
    }

    fn action_result(&self) -> Result<ActionReceipt, ClientError> {
        match self.action_failure.read().unwrap().clone() {
            Some((status, message)) => Err(ClientError::Api { status, message }),
            None => Ok(ActionReceipt {
                event_id: self.event_id.read().unwrap().clone(),
            }),
        }
    }
}

#[async_trait]
impl TimelineApi for MockTimelineApi {
    async fn fetch_timeline(&self) -> Result<Vec<PostRecord>, ClientError> {
        self.record(ApiCall::FetchTimeline);
        if let Some(status) = *self.timeline_failure.read().unwrap() {
            return Err(ClientError::Api {
                status,
                message: None,
            });
        }
        Ok(self.timeline.read().unwrap().clone())
    }

    async fn post(&self, req: &NewPostRequest) -> Result<ActionReceipt, ClientError> {
        self.record(ApiCall::Post(req.clone()));
        self.action_result()
    }

    async fn reply(&self, req: &ReplyRequest) -> Result<ActionReceipt, ClientError> {
        self.record(ApiCall::Reply(req.clone()));
        self.action_result()
    }

    async fn like(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError> {
        self.record(ApiCall::Like(req.clone()));
        self.action_result()
    }

    async fn repost(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError> {
        self.record(ApiCall::Repost(req.clone()));
        self.action_result()
    }
}

// ============================================================================
// Recording UI handles
// ============================================================================

#[derive(Default)]
pub struct RecordingFeed {
    writes: RwLock<Vec<String>>,
}

impl RecordingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.read().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.read().unwrap().last().cloned()
    }
}

impl FeedContainer for RecordingFeed {
    fn set_html(&self, html: &str) {
        self.writes.write().unwrap().push(html.to_string());
    }
}

#[derive(Default)]
pub struct RecordingStatus {
    current: RwLock<Option<String>>,
    history: RwLock<Vec<String>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently visible, `None` once cleared
    pub fn current(&self) -> Option<String> {
        self.current.read().unwrap().clone()
    }

    /// Every text shown, in order
    pub fn history(&self) -> Vec<String> {
        self.history.read().unwrap().clone()
    }
}

impl StatusSlot for RecordingStatus {
    fn show(&self, text: &str) {
        *self.current.write().unwrap() = Some(text.to_string());
        self.history.write().unwrap().push(text.to_string());
    }

    fn clear(&self) {
        *self.current.write().unwrap() = None;
    }
}

pub struct RecordingControl {
    enabled: RwLock<bool>,
    enabled_history: RwLock<Vec<bool>>,
    label_history: RwLock<Vec<String>>,
}

impl Default for RecordingControl {
    fn default() -> Self {
        Self {
            enabled: RwLock::new(true),
            enabled_history: RwLock::new(Vec::new()),
            label_history: RwLock::new(Vec::new()),
        }
    }
}

impl RecordingControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        *self.enabled.read().unwrap()
    }

    pub fn enabled_history(&self) -> Vec<bool> {
        self.enabled_history.read().unwrap().clone()
    }

    pub fn label(&self) -> Option<String> {
        self.label_history.read().unwrap().last().cloned()
    }

    pub fn label_history(&self) -> Vec<String> {
        self.label_history.read().unwrap().clone()
    }
}

impl ActionControl for RecordingControl {
    fn set_enabled(&self, enabled: bool) {
        *self.enabled.write().unwrap() = enabled;
        self.enabled_history.write().unwrap().push(enabled);
    }

    fn set_label(&self, label: &str) {
        self.label_history.write().unwrap().push(label.to_string());
    }
}

#[derive(Default)]
pub struct RecordingModal {
    closed: RwLock<bool>,
}

impl RecordingModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.read().unwrap()
    }
}

impl Modal for RecordingModal {
    fn close(&self) {
        *self.closed.write().unwrap() = true;
    }
}

pub struct FakeInput {
    value: RwLock<String>,
}

impl FakeInput {
    pub fn new(value: &str) -> Self {
        Self {
            value: RwLock::new(value.to_string()),
        }
    }
}

impl TextInput for FakeInput {
    fn value(&self) -> String {
        self.value.read().unwrap().clone()
    }

    fn clear(&self) {
        self.value.write().unwrap().clear();
    }
}
