use async_trait::async_trait;
use contracts::binding::dispatch::{ActionRequest, RawResponse, Transport};
use contracts::binding::HttpMethod;
use contracts::error::ActionError;
use gloo_net::http::Request;

/// `fetch`-backed transport
///
/// Any status is returned as is; deciding what a status means is left to
/// the dispatch layer.
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, ActionError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        if let Some(content_type) = request.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let sent = match &request.body {
            Some(body) => builder
                .body(body.as_str())
                .map_err(|e| ActionError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ActionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ActionError::Transport(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
