use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;
pub type TimerId = u64;

/// Backend routes this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Chat,
    Sentiment,
    VisualSearch,
    Describe,
    Health,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Chat => "/api/chatbot/message",
            Endpoint::Sentiment => "/api/sentiment/analyze",
            Endpoint::VisualSearch => "/api/visual/search",
            Endpoint::Describe => "/api/generative/generar-descripcion",
            Endpoint::Health => "/health",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    pub confidence: f64,
    #[serde(default)]
    pub is_fake: Option<bool>,
    #[serde(default)]
    pub fake_probability: Option<f64>,
    /// Kept in backend order.
    pub probabilities: serde_json::Map<String, serde_json::Value>,
}

impl SentimentResponse {
    /// Probability entries in the order the backend sent them.
    pub fn probability_entries(&self) -> Result<Vec<(String, f64)>, BackendError> {
        self.probabilities
            .iter()
            .map(|(label, value)| {
                value
                    .as_f64()
                    .map(|probability| (label.clone(), probability))
                    .ok_or_else(|| {
                        BackendError::new(
                            FailureKind::Malformed,
                            format!("probability for {label:?} is not a number"),
                        )
                    })
            })
            .collect()
    }

    /// Fraud probability when the review is flagged as fake.
    pub fn fraud_probability(&self) -> Result<Option<f64>, BackendError> {
        match (self.is_fake, self.fake_probability) {
            (Some(true), Some(probability)) => Ok(Some(probability)),
            (Some(true), None) => Err(BackendError::new(
                FailureKind::Malformed,
                "is_fake set without fake_probability",
            )),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarProduct {
    pub name: String,
    pub similarity: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisualSearchResponse {
    pub similar_products: Vec<SimilarProduct>,
}

/// Field names follow the backend's Spanish API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionRequest {
    pub nombre_producto: String,
    pub caracteristicas: Vec<String>,
    pub categoria: String,
    pub precio: f64,
    pub temperatura: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescriptionData {
    pub descripcion: String,
    #[serde(default)]
    pub modelo_usado: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescriptionResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<DescriptionData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// One outbound backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Chat(ChatRequest),
    Sentiment(SentimentRequest),
    VisualSearch { image: PathBuf, top_k: u32 },
    Describe(DescriptionRequest),
    Health,
}

impl BackendCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            BackendCall::Chat(_) => Endpoint::Chat,
            BackendCall::Sentiment(_) => Endpoint::Sentiment,
            BackendCall::VisualSearch { .. } => Endpoint::VisualSearch,
            BackendCall::Describe(_) => Endpoint::Describe,
            BackendCall::Health => Endpoint::Health,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    Chat(ChatResponse),
    Sentiment(SentimentResponse),
    VisualSearch(VisualSearchResponse),
    Describe(DescriptionResponse),
    Health(HealthResponse),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Completed {
        request_id: RequestId,
        endpoint: Endpoint,
        result: Result<BackendReply, BackendError>,
    },
    TimerFired {
        timer_id: TimerId,
    },
    TimerTicked {
        timer_id: TimerId,
        tick: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Malformed,
    UnreadableFile,
    UnsupportedFile { mime: String },
    TooLarge { max_bytes: u64, actual: u64 },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::UnreadableFile => write!(f, "unreadable file"),
            FailureKind::UnsupportedFile { mime } => write!(f, "unsupported file type {mime}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "file too large (max {max_bytes}, actual {actual})")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_upload_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
