//! The editor's view of the persistence service.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::models::wire::{LoadResponse, PhotoResponse, SaveOutcome, SaveResponse};
use crate::persistence::{service, ResumeStore};

/// The service refused the request with a message meant for the user
/// (a taken link name, an unsupported photo). Reaches callers inside
/// `anyhow::Error`; recover it with `downcast_ref`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct Rejected {
    pub status: u16,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Save/load for the signed-in user. The identity is bound when the
/// implementation is built, never passed per call.
#[async_trait]
pub trait RemoteResumes: Send + Sync {
    async fn save(&self, record: &ResumeRecord) -> Result<SaveOutcome>;

    async fn load(&self) -> Result<Option<ResumeRecord>>;

    /// Converts an uploaded image into a photo reference.
    async fn upload_photo(&self, content_type: &str, bytes: Vec<u8>) -> Result<String>;
}

/// Talks to the HTTP API.
#[derive(Clone)]
pub struct HttpResumeClient {
    http: Client,
    base_url: String,
    identity_header: String,
    user_id: Option<String>,
}

impl HttpResumeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpResumeClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            identity_header: "x-user-id".to_string(),
            user_id: None,
        }
    }

    /// Sends `user_id` in `header` on owner requests.
    pub fn with_identity(mut self, header: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.identity_header = header.into();
        self.user_id = Some(user_id.into());
        self
    }

    fn owner_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.request(method, format!("{}{path}", self.base_url));
        match &self.user_id {
            Some(user_id) => request.header(self.identity_header.as_str(), user_id.as_str()),
            None => request,
        }
    }
}

#[async_trait]
impl RemoteResumes for HttpResumeClient {
    async fn save(&self, record: &ResumeRecord) -> Result<SaveOutcome> {
        let response = self
            .owner_request(reqwest::Method::PUT, "/api/v1/resume")
            .json(record)
            .send()
            .await
            .context("Save request failed")?;
        let response: SaveResponse = read_json(response).await?;
        debug!(outcome = ?response.outcome, "Remote save finished");
        Ok(response.outcome)
    }

    async fn load(&self) -> Result<Option<ResumeRecord>> {
        let response = self
            .owner_request(reqwest::Method::GET, "/api/v1/resume")
            .send()
            .await
            .context("Load request failed")?;
        let response: LoadResponse = read_json(response).await?;
        Ok(response.resume)
    }

    async fn upload_photo(&self, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("photo")
            .mime_str(content_type)
            .context("Invalid photo content type")?;
        let form = reqwest::multipart::Form::new().part("photo", part);

        let response = self
            .owner_request(reqwest::Method::POST, "/api/v1/resume/photo")
            .multipart(form)
            .send()
            .await
            .context("Photo upload failed")?;
        let response: PhotoResponse = read_json(response).await?;
        Ok(response.photo_url)
    }
}

/// Decodes a success body, or turns the service's error envelope into
/// `Rejected` for 4xx responses.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.context("Malformed response body");
    }
    if status.is_client_error() {
        if let Ok(envelope) = response.json::<ErrorEnvelope>().await {
            return Err(Rejected {
                status: status.as_u16(),
                message: envelope.error.message,
            }
            .into());
        }
    }
    anyhow::bail!("Request failed with status {status}")
}

/// Client-side refusals become `Rejected`, everything else stays opaque.
fn from_app_error(err: AppError) -> anyhow::Error {
    match err {
        AppError::Validation(message) => Rejected { status: 400, message }.into(),
        AppError::NotFound(message) => Rejected { status: 404, message }.into(),
        AppError::Conflict(message) => Rejected { status: 409, message }.into(),
        other => other.into(),
    }
}

/// Calls a `ResumeStore` directly, for editors embedded in the server process.
pub struct StoreClient {
    store: Arc<dyn ResumeStore>,
    user_id: String,
    max_photo_bytes: usize,
}

impl StoreClient {
    pub fn new(store: Arc<dyn ResumeStore>, user_id: impl Into<String>, max_photo_bytes: usize) -> Self {
        StoreClient {
            store,
            user_id: user_id.into(),
            max_photo_bytes,
        }
    }
}

#[async_trait]
impl RemoteResumes for StoreClient {
    async fn save(&self, record: &ResumeRecord) -> Result<SaveOutcome> {
        service::save(self.store.as_ref(), &self.user_id, record)
            .await
            .map_err(from_app_error)
    }

    async fn load(&self) -> Result<Option<ResumeRecord>> {
        service::load(self.store.as_ref(), &self.user_id)
            .await
            .map_err(from_app_error)
    }

    async fn upload_photo(&self, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        crate::photo::to_data_url(content_type, &bytes, self.max_photo_bytes).map_err(|e| {
            Rejected {
                status: 400,
                message: e.to_string(),
            }
            .into()
        })
    }
}
