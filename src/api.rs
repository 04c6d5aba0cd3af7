use crate::errors::RequestError;
use crate::models::{AskRequest, AskReply};
use reqwest::Client;

/// Transport for the ask endpoint: one POST per question, reply parsed
/// from the body.
#[derive(Debug, Clone)]
pub struct AskClient {
    http: Client,
    endpoint: String,
}

impl AskClient {
    /// Builds a client for the given endpoint URL. No request timeout is
    /// configured; latency is bounded by the network stack's defaults.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one question and parses the reply. The HTTP status line is
    /// not inspected: any response whose body parses as a reply counts as
    /// success, anything else is a `RequestError`.
    pub async fn ask(&self, message: &str) -> Result<AskReply, RequestError> {
        let payload = AskRequest {
            message: message.to_string(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let body = response.text().await?;
        let reply: AskReply = serde_json::from_str(&body)?;
        Ok(reply)
    }
}
