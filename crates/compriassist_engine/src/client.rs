use std::path::Path;

use assist_logging::{assist_debug, assist_warn};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::upload::ImageUpload;
use crate::{
    BackendError, ChatRequest, ChatResponse, ClientSettings, DescriptionRequest,
    DescriptionResponse, Endpoint, FailureKind, HealthResponse, SentimentRequest,
    SentimentResponse, VisualSearchResponse,
};

/// The AI backend as seen by the engine. Each call is one HTTP exchange.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;

    async fn sentiment(
        &self,
        request: &SentimentRequest,
    ) -> Result<SentimentResponse, BackendError>;

    async fn visual_search(
        &self,
        image: &Path,
        top_k: u32,
    ) -> Result<VisualSearchResponse, BackendError>;

    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<DescriptionResponse, BackendError>;

    async fn health(&self) -> Result<HealthResponse, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, BackendError> {
        reqwest::Url::parse(&settings.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn url(&self, endpoint: Endpoint) -> Result<reqwest::Url, BackendError> {
        let joined = format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint.path()
        );
        reqwest::Url::parse(&joined)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint)?;
        assist_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.post_json(Endpoint::Chat, request).await
    }

    async fn sentiment(
        &self,
        request: &SentimentRequest,
    ) -> Result<SentimentResponse, BackendError> {
        let response: SentimentResponse = self.post_json(Endpoint::Sentiment, request).await?;
        response.probability_entries()?;
        response.fraud_probability()?;
        Ok(response)
    }

    async fn visual_search(
        &self,
        image: &Path,
        top_k: u32,
    ) -> Result<VisualSearchResponse, BackendError> {
        let upload = ImageUpload::read(image, self.settings.max_upload_bytes).await?;
        let url = self.url(Endpoint::VisualSearch)?;
        assist_debug!(
            "POST {} ({} bytes, {}, top_k={})",
            url,
            upload.bytes.len(),
            upload.mime,
            top_k
        );

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime)
            .map_err(|err| {
                BackendError::new(
                    FailureKind::UnsupportedFile {
                        mime: upload.mime.clone(),
                    },
                    err.to_string(),
                )
            })?;
        let form = Form::new()
            .part("file", part)
            .text("top_k", top_k.to_string());

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<DescriptionResponse, BackendError> {
        let response: DescriptionResponse = self.post_json(Endpoint::Describe, request).await?;
        if response.success && response.data.is_none() {
            return Err(BackendError::new(
                FailureKind::Malformed,
                "success reported without data",
            ));
        }
        Ok(response)
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = self.url(Endpoint::Health)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, BackendError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let message = error_detail(&body).unwrap_or_else(|| status.to_string());
        assist_warn!("backend answered {}: {}", status.as_u16(), message);
        return Err(BackendError::new(
            FailureKind::HttpStatus(status.as_u16()),
            message,
        ));
    }

    serde_json::from_slice(&body)
        .map_err(|err| BackendError::new(FailureKind::Malformed, err.to_string()))
}

/// Pulls a human readable reason out of an error body (`detail` or `message`).
pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let field = value.get("detail").or_else(|| value.get("message"))?;
    match field {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        serde_json::Value::Null => None,
        serde_json::Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::Malformed, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
