//! Action dispatcher
//!
//! Runs the four user actions (post, reply, like, repost) against the API.
//! Every action has the same shape:
//!
//! validate -> disable control -> in-flight status -> POST -> result status
//! -> re-render (on success) or re-enable the control (on failure)
//!
//! UI handles are passed in per call so the dispatcher never looks anything up.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::app::sync_policy::SyncPolicy;
use crate::app::timeline_service::TimelineRenderer;
use crate::config::Config;
use crate::domain::ports::{
    ActionControl, ActionReceipt, Modal, NewPostRequest, ReplyRequest, StatusSlot, TargetRequest,
    TextInput, TimelineApi,
};
use crate::domain::{short_prefix, DISPLAY_NAME_LEN};
use crate::error::ClientError;

pub const EMPTY_CONTENT_TEXT: &str = "Please enter some content.";
pub const MISSING_TARGET_TEXT: &str = "No target post selected.";

/// Characters of the event id shown in success messages
const EVENT_ID_PREVIEW_LEN: usize = 8;

/// A user-triggered request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Post,
    Reply,
    Like,
    Repost,
}

impl Action {
    /// Button label while idle (compose dialogs only)
    pub fn idle_label(&self) -> &'static str {
        match self {
            Action::Post => "Post",
            Action::Reply => "Reply",
            Action::Like => "Like",
            Action::Repost => "Repost",
        }
    }

    pub fn in_flight_text(&self) -> &'static str {
        match self {
            Action::Post => "Posting...",
            Action::Reply => "Replying...",
            Action::Like => "Liking...",
            Action::Repost => "Reposting...",
        }
    }

    fn success_text(&self, event_id: &str) -> String {
        let verb = match self {
            Action::Post => "Posted!",
            Action::Reply => "Replied!",
            Action::Like => "Liked!",
            Action::Repost => "Reposted!",
        };
        let preview = short_prefix(event_id, EVENT_ID_PREVIEW_LEN);
        if preview.len() < event_id.len() {
            format!("{} (id: {}...)", verb, preview)
        } else {
            format!("{} (id: {})", verb, preview)
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Post => "post",
            Action::Reply => "reply",
            Action::Like => "like",
            Action::Repost => "repost",
        };
        write!(f, "{}", s)
    }
}

/// Handles of a compose or reply dialog
pub struct ComposeUi<'a> {
    pub input: &'a dyn TextInput,
    pub control: &'a dyn ActionControl,
    pub status: &'a dyn StatusSlot,
    pub modal: &'a dyn Modal,
}

/// Handles for a card icon action (like, repost)
pub struct ActionUi<'a> {
    pub control: &'a dyn ActionControl,
    pub status: &'a dyn StatusSlot,
}

/// The card a reply, like or repost is aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTarget {
    pub event_id: String,
    pub pubkey: String,
    pub display_name: String,
}

impl PostTarget {
    /// `display_name` comes from the card's `data-display-name`; a missing or
    /// blank name falls back to the pubkey prefix.
    pub fn new(event_id: &str, pubkey: &str, display_name: Option<&str>) -> Self {
        let display_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => short_prefix(pubkey, DISPLAY_NAME_LEN).to_string(),
        };
        Self {
            event_id: event_id.to_string(),
            pubkey: pubkey.to_string(),
            display_name,
        }
    }

    fn is_complete(&self) -> bool {
        !self.event_id.trim().is_empty() && !self.pubkey.trim().is_empty()
    }

    fn to_target_request(&self) -> TargetRequest {
        TargetRequest {
            target_event_id: self.event_id.clone(),
            target_pubkey: self.pubkey.clone(),
        }
    }
}

pub struct ActionDispatcher<A>
where
    A: TimelineApi,
{
    api: Arc<A>,
    renderer: Arc<TimelineRenderer<A>>,
    policy: SyncPolicy,
    status_reset_delay: Duration,
    modal_close_delay: Duration,
}

impl<A> ActionDispatcher<A>
where
    A: TimelineApi,
{
    pub fn new(api: Arc<A>, renderer: Arc<TimelineRenderer<A>>, config: &Config) -> Self {
        Self {
            api,
            renderer,
            policy: SyncPolicy::default(),
            status_reset_delay: config.status_reset_delay,
            modal_close_delay: config.modal_close_delay,
        }
    }

    pub fn with_policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compose dialog submit: `POST /post {content}`
    pub async fn submit_post(&self, ui: &ComposeUi<'_>) -> Result<ActionReceipt, ClientError> {
        let content = validated_content(ui.input, ui.status)?;

        begin_compose(Action::Post, ui);
        let result = self.api.post(&NewPostRequest { content }).await;
        self.finish_compose(Action::Post, ui, result).await
    }

    /// Reply dialog submit: `POST /reply {content, replyToId, replyToPubkey}`
    pub async fn submit_reply(
        &self,
        target: &PostTarget,
        ui: &ComposeUi<'_>,
    ) -> Result<ActionReceipt, ClientError> {
        if !target.is_complete() {
            ui.status.show(MISSING_TARGET_TEXT);
            return Err(ClientError::Validation(MISSING_TARGET_TEXT.to_string()));
        }
        let content = validated_content(ui.input, ui.status)?;

        begin_compose(Action::Reply, ui);
        let req = ReplyRequest {
            content,
            reply_to_id: target.event_id.clone(),
            reply_to_pubkey: target.pubkey.clone(),
        };
        let result = self.api.reply(&req).await;
        self.finish_compose(Action::Reply, ui, result).await
    }

    /// Card like icon: `POST /like {targetEventId, targetPubkey}`
    pub async fn submit_like(
        &self,
        target: &PostTarget,
        ui: &ActionUi<'_>,
    ) -> Result<ActionReceipt, ClientError> {
        self.submit_card_action(Action::Like, target, ui).await
    }

    /// Card repost icon: `POST /repost {targetEventId, targetPubkey}`
    pub async fn submit_repost(
        &self,
        target: &PostTarget,
        ui: &ActionUi<'_>,
    ) -> Result<ActionReceipt, ClientError> {
        self.submit_card_action(Action::Repost, target, ui).await
    }

    async fn submit_card_action(
        &self,
        action: Action,
        target: &PostTarget,
        ui: &ActionUi<'_>,
    ) -> Result<ActionReceipt, ClientError> {
        if !target.is_complete() {
            ui.status.show(MISSING_TARGET_TEXT);
            sleep(self.status_reset_delay).await;
            ui.status.clear();
            return Err(ClientError::Validation(MISSING_TARGET_TEXT.to_string()));
        }

        ui.control.set_enabled(false);
        ui.status.show(action.in_flight_text());

        let req = target.to_target_request();
        let result = match action {
            Action::Repost => self.api.repost(&req).await,
            _ => self.api.like(&req).await,
        };

        match &result {
            Ok(receipt) => {
                tracing::info!("{} succeeded: {}", action, receipt.event_id);
                ui.status.show(&action.success_text(&receipt.event_id));
                self.refresh_after_success().await;
            }
            Err(e) => {
                log_failure(action, e);
                ui.status.show(&e.status_text());
                ui.control.set_enabled(true);
            }
        }

        sleep(self.status_reset_delay).await;
        ui.status.clear();
        ui.control.set_enabled(true);

        result
    }

    async fn finish_compose(
        &self,
        action: Action,
        ui: &ComposeUi<'_>,
        result: Result<ActionReceipt, ClientError>,
    ) -> Result<ActionReceipt, ClientError> {
        match &result {
            Ok(receipt) => {
                tracing::info!("{} succeeded: {}", action, receipt.event_id);
                ui.status.show(&action.success_text(&receipt.event_id));

                sleep(self.modal_close_delay).await;
                ui.modal.close();
                ui.input.clear();
                ui.status.clear();
                reset_control(action, ui.control);

                self.refresh_after_success().await;
            }
            Err(e) => {
                log_failure(action, e);
                ui.status.show(&e.status_text());
                reset_control(action, ui.control);
            }
        }
        result
    }

    async fn refresh_after_success(&self) {
        if self.policy.refreshes_after_success() {
            self.renderer.render_timeline().await;
        }
    }
}

/// Trimmed input content, or a validation error shown in `status`.
fn validated_content(
    input: &dyn TextInput,
    status: &dyn StatusSlot,
) -> Result<String, ClientError> {
    let content = input.value().trim().to_string();
    if content.is_empty() {
        status.show(EMPTY_CONTENT_TEXT);
        return Err(ClientError::Validation(EMPTY_CONTENT_TEXT.to_string()));
    }
    Ok(content)
}

fn begin_compose(action: Action, ui: &ComposeUi<'_>) {
    ui.control.set_enabled(false);
    ui.control.set_label(action.in_flight_text());
    ui.status.show(action.in_flight_text());
}

fn reset_control(action: Action, control: &dyn ActionControl) {
    control.set_label(action.idle_label());
    control.set_enabled(true);
}

fn log_failure(action: Action, err: &ClientError) {
    if err.reached_server() {
        tracing::warn!("{} rejected: {}", action, err);
    } else {
        tracing::error!("{} failed, could not reach the API: {}", action, err);
    }
}

async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
