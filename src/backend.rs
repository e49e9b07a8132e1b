use const_format::formatcp;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{config::SUBSCRIBE_RETRIES, url::ChannelUrl};

const API: &str = "/api";
pub const SUBSCRIBE_PATH: &str = formatcp!("{API}/subscribe");
pub const EXTRACT_ID_PATH: &str = formatcp!("{API}/v1/channel/extractId");

/// What a single backend call amounted to, decoded from the HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Subscribe answered with a top-level `channelId`.
    Success { channel_id: String },
    /// Extract-id answered with `data.channelId`.
    NestedSuccess { channel_id: String },
    /// A 2xx answer that reported a logical failure in its `error` field.
    ApplicationError { message: String },
    /// A 2xx answer without an identifier or an error.
    NotFound,
    /// The call failed or came back non-2xx. `message` is whatever the
    /// server put in the error body, if anything.
    TransportError { message: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded with {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

impl BackendError {
    /// Message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Transport(_) => None,
            BackendError::Status { message, .. } => message.as_deref(),
        }
    }
}

impl From<BackendError> for Reply {
    fn from(err: BackendError) -> Self {
        Reply::TransportError {
            message: err.server_message().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest<'a> {
    channel_url: &'a ChannelUrl,
    retries: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractIdRequest<'a> {
    channel_url: &'a ChannelUrl,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeResponse {
    channel_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractIdResponse {
    data: Option<ExtractIdData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractIdData {
    channel_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Empty strings count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn parse_or_default<T: Default + for<'de> Deserialize<'de>>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_else(|err| {
        warn!(%err, "backend body is not the expected JSON shape");
        T::default()
    })
}

/// Decode a 2xx body from the subscribe endpoint.
///
/// `channelId` wins over `error`; neither means [`Reply::NotFound`].
pub fn decode_subscribe(body: &[u8]) -> Reply {
    let response: SubscribeResponse = parse_or_default(body);

    if let Some(channel_id) = present(response.channel_id) {
        Reply::Success { channel_id }
    } else if let Some(message) = present(response.error) {
        Reply::ApplicationError { message }
    } else {
        Reply::NotFound
    }
}

/// Decode a 2xx body from the extract-id endpoint.
pub fn decode_extract_id(body: &[u8]) -> Reply {
    let response: ExtractIdResponse = parse_or_default(body);

    match present(response.data.and_then(|data| data.channel_id)) {
        Some(channel_id) => Reply::NestedSuccess { channel_id },
        None => Reply::NotFound,
    }
}

/// Pull the best-effort `message` out of a non-2xx body.
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    present(body.message)
}

/// HTTP client for the PubSubHubbub backend.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: String,
}

impl BackendClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Ask the backend to subscribe to the channel's PubSubHubbub feed.
    pub async fn subscribe(&self, url: &ChannelUrl) -> Reply {
        let request = SubscribeRequest {
            channel_url: url,
            retries: SUBSCRIBE_RETRIES,
        };

        match self.post(SUBSCRIBE_PATH, &request).await {
            Ok(body) => decode_subscribe(&body),
            Err(err) => {
                error!(%err, path = SUBSCRIBE_PATH, "subscribe call failed");
                err.into()
            }
        }
    }

    /// Ask the backend which channel id the URL belongs to.
    pub async fn extract_channel_id(&self, url: &ChannelUrl) -> Reply {
        let request = ExtractIdRequest { channel_url: url };

        match self.post(EXTRACT_ID_PATH, &request).await {
            Ok(body) => decode_extract_id(&body),
            Err(err) => {
                error!(%err, path = EXTRACT_ID_PATH, "extract id call failed");
                err.into()
            }
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>, BackendError> {
        let endpoint = format!("{}{path}", self.base);
        debug!(%endpoint, "posting to backend");

        let response = self.http.post(&endpoint).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                message: decode_error_message(&bytes),
            });
        }

        Ok(bytes.to_vec())
    }
}
