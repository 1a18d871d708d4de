// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the form-processing endpoint.

use super::FormPayload;
use crate::error::{Error, Result};

/// Posts [`FormPayload`]s to a single endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one submission. Any 2xx status counts as success; the response
    /// body is ignored.
    ///
    /// # Errors
    ///
    /// [`Error::Http`] on transport failure or a non-2xx status.
    pub async fn submit(&self, payload: &FormPayload) -> Result<()> {
        tracing::debug!(endpoint = %self.endpoint, "sending submission");
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, "submission accepted");
            Ok(())
        } else {
            Err(Error::Http(format!("endpoint answered {status}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_endpoint() {
        let client = SubmissionClient::new("http://127.0.0.1:9/f/test").expect("client builds");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/f/test");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let client = SubmissionClient::new("http://127.0.0.1:9/f/test").expect("client builds");
        let payload = FormPayload {
            reply_to: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            image: String::new(),
        };
        assert!(matches!(client.submit(&payload).await, Err(Error::Http(_))));
    }
}
