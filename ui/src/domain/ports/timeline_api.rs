//! Timeline API port trait
//!
//! Defines the interface for the backend that owns the timeline and accepts
//! post, reply, like and repost actions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::post::PostRecord;
use crate::error::ClientError;

/// Body of `POST /post`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPostRequest {
    pub content: String,
}

/// Body of `POST /reply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub content: String,
    pub reply_to_id: String,
    pub reply_to_pubkey: String,
}

/// Body of `POST /like` and `POST /repost`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    pub target_event_id: String,
    pub target_pubkey: String,
}

/// Successful response from any mutating endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub event_id: String,
}

#[async_trait]
pub trait TimelineApi: Send + Sync {
    /// `GET /timeline`, records in server order
    async fn fetch_timeline(&self) -> Result<Vec<PostRecord>, ClientError>;

    async fn post(&self, req: &NewPostRequest) -> Result<ActionReceipt, ClientError>;

    async fn reply(&self, req: &ReplyRequest) -> Result<ActionReceipt, ClientError>;

    async fn like(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError>;

    async fn repost(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError>;
}
