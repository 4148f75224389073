//! HTTP client for the timeline API

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{normalize_base_url, Config};
use crate::domain::ports::{
    ActionReceipt, NewPostRequest, ReplyRequest, TargetRequest, TimelineApi,
};
use crate::domain::PostRecord;
use crate::error::ClientError;

/// Error payload returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed implementation of [`TimelineApi`]
#[derive(Clone)]
pub struct HttpTimelineClient {
    http: Client,
    base_url: String,
}

impl HttpTimelineClient {
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        // Content-Type is set per request by `.json()`, so GETs go out without one
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.api_url)?,
        })
    }

    /// Client against `base_url` with otherwise default settings
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let config = Config::default().with_api_url(base_url)?;
        Self::from_config(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_action<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ActionReceipt, ClientError> {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        handle_response(path, response).await
    }
}

async fn handle_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        tracing::warn!(
            "{} returned {}: {}",
            path,
            status,
            message.as_deref().unwrap_or("<no error field>")
        );
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode(format!("{}: {}", path, e)))
}

#[async_trait]
impl TimelineApi for HttpTimelineClient {
    async fn fetch_timeline(&self) -> Result<Vec<PostRecord>, ClientError> {
        tracing::debug!("GET /timeline");
        let response = self.http.get(self.url("/timeline")).send().await?;
        handle_response("/timeline", response).await
    }

    async fn post(&self, req: &NewPostRequest) -> Result<ActionReceipt, ClientError> {
        self.post_action("/post", req).await
    }

    async fn reply(&self, req: &ReplyRequest) -> Result<ActionReceipt, ClientError> {
        self.post_action("/reply", req).await
    }

    async fn like(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError> {
        self.post_action("/like", req).await
    }

    async fn repost(&self, req: &TargetRequest) -> Result<ActionReceipt, ClientError> {
        self.post_action("/repost", req).await
    }
}
