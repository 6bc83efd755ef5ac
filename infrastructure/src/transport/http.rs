//! HTTP adapter for the [`InquiryTransport`] port

use async_trait::async_trait;
use coaching_application::{InquiryTransport, TransportError};
use coaching_domain::{Acknowledgement, Inquiry};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Posts inquiries as JSON to the inquiry endpoint
#[derive(Clone)]
pub struct HttpInquiryTransport {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpInquiryTransport {
    /// Create a transport for `endpoint`.
    ///
    /// Without a `timeout` the request waits as long as reqwest does by default.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TransportError::ConnectionError(format!("invalid endpoint: {}", e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::ConnectionError(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl InquiryTransport for HttpInquiryTransport {
    #[tracing::instrument(skip(self, inquiry), fields(endpoint = %self.endpoint))]
    async fn send(&self, inquiry: &Inquiry) -> Result<Acknowledgement, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(inquiry)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::InvalidResponse(format!("failed to read response body: {}", e))
            }
        })?;
        let ack = serde_json::from_slice::<Acknowledgement>(&body);

        if !status.is_success() {
            let message = match ack {
                Ok(ack) => ack.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // Any 2xx counts as delivered, whatever the body says
        Ok(ack.unwrap_or_else(|e| {
            debug!("Unexpected acknowledgement body ({}); treating as accepted", e);
            Acknowledgement::accepted()
        }))
    }
}
