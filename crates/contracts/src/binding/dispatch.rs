//! Request pipeline shared by every binding: build, send, decode, render.

use async_trait::async_trait;
use serde_json::Value;

use super::render::{pretty_json, render_error};
use super::{ActionBinding, HttpMethod, RequestPayload};
use crate::error::ActionError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One fully resolved HTTP call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, present for POST only
    pub body: Option<String>,
}

impl ActionRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, payload: &RequestPayload) -> Result<Self, ActionError> {
        Ok(Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(payload.to_json()?),
        })
    }

    /// Resolve `binding` against `base`
    ///
    /// `lookup` reads path parameters by input id. `payload` is only used by
    /// methods that carry a body; a missing payload sends `{}`.
    pub fn for_binding<F>(
        binding: &ActionBinding,
        base: &str,
        lookup: F,
        payload: Option<&RequestPayload>,
    ) -> Result<Self, ActionError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let url = binding.endpoint.resolve(base, lookup)?;
        if binding.method.has_body() {
            let empty = RequestPayload::new();
            Self::post_json(url, payload.unwrap_or(&empty))
        } else {
            Ok(Self::get(url))
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

/// Status and undecoded body text as received from the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Decoded JSON response, shown without any schema check
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseArtifact {
    pub status: u16,
    pub body: Value,
}

impl ResponseArtifact {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client seam
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, ActionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// 2xx with a JSON body
    Success,
    /// Non-2xx with a JSON body, displayed like a success
    ErrorStatus,
    /// Transport, decoding or resolution failure
    Failed,
}

/// What a result element shows after an action settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: OutcomeKind,
    pub status: Option<u16>,
    pub text: String,
}

impl ActionOutcome {
    pub fn from_artifact(artifact: &ResponseArtifact) -> Self {
        let kind = if artifact.is_success() {
            OutcomeKind::Success
        } else {
            OutcomeKind::ErrorStatus
        };
        Self {
            kind,
            status: Some(artifact.status),
            text: pretty_json(&artifact.body),
        }
    }

    pub fn failed(error: &ActionError) -> Self {
        let status = match error {
            ActionError::Decode { status, .. } => Some(*status),
            _ => None,
        };
        Self {
            kind: OutcomeKind::Failed,
            status,
            text: render_error(error),
        }
    }

    /// Only a successful response clears the submitted form
    pub fn should_reset_form(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Send `request` and decode the body as JSON, whatever the status
pub async fn execute<T>(transport: &T, request: &ActionRequest) -> Result<ResponseArtifact, ActionError>
where
    T: Transport + ?Sized,
{
    let raw = transport.send(request).await?;
    let body = serde_json::from_str::<Value>(&raw.body).map_err(|e| ActionError::Decode {
        status: raw.status,
        message: e.to_string(),
    })?;
    Ok(ResponseArtifact {
        status: raw.status,
        body,
    })
}

/// Send `request` and turn every result, including failures, into display text
pub async fn perform<T>(transport: &T, request: &ActionRequest) -> ActionOutcome
where
    T: Transport + ?Sized,
{
    log::debug!("{} {}", request.method, request.url);
    match execute(transport, request).await {
        Ok(artifact) => {
            if !artifact.is_success() {
                log::warn!(
                    "{} {} answered HTTP {}",
                    request.method,
                    request.url,
                    artifact.status
                );
            }
            ActionOutcome::from_artifact(&artifact)
        }
        Err(e) => {
            log::error!("{} {} failed: {}", request.method, request.url, e);
            ActionOutcome::failed(&e)
        }
    }
}

/// Resolve and perform one binding
pub async fn run_binding<T, F>(
    transport: &T,
    binding: &ActionBinding,
    base: &str,
    lookup: F,
    payload: Option<&RequestPayload>,
) -> ActionOutcome
where
    T: Transport + ?Sized,
    F: FnMut(&str) -> Option<String>,
{
    match ActionRequest::for_binding(binding, base, lookup, payload) {
        Ok(request) => perform(transport, &request).await,
        Err(e) => {
            log::error!("{}: {}", binding, e);
            ActionOutcome::failed(&e)
        }
    }
}
