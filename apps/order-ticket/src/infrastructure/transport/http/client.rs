//! HTTP client for the EMS API.
//!
//! One request per call. Order submission is not idempotent, so nothing
//! here retries.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::{EmsEnvelope, EmsErrorResponse, STATUS_ERROR};
use super::config::HttpTransportConfig;
use super::error::EmsError;

/// HTTP client for the EMS API.
#[derive(Debug, Clone)]
pub struct EmsHttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    session_token: String,
}

impl EmsHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &HttpTransportConfig) -> Result<Self, EmsError> {
        if config.api_key.is_empty() || config.session_token.is_empty() {
            return Err(EmsError::MissingCredentials);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmsError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.clone(),
            session_token: config.session_token.clone(),
        })
    }

    /// Partner API key sent in every body.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Session token sent in every body.
    #[must_use]
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// POST `body` to `path` and decode a response whose status is `expected_status`.
    #[allow(clippy::future_not_send)]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        expected_status: &str,
    ) -> Result<T, EmsError> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(url = %url, "Sending EMS request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| EmsError::Http(e.to_string()))?;

        let http_status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EmsError::Http(e.to_string()))?;

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) if http_status.is_success() => return Err(EmsError::JsonParse(e.to_string())),
            Err(_) => {
                tracing::warn!(url = %url, status = %http_status, "EMS request failed");
                return Err(EmsError::Http(format!("HTTP {http_status}")));
            }
        };

        let envelope: EmsEnvelope =
            serde_json::from_value(value.clone()).map_err(|e| EmsError::JsonParse(e.to_string()))?;

        if envelope.status == STATUS_ERROR {
            let error: EmsErrorResponse =
                serde_json::from_value(value).map_err(|e| EmsError::JsonParse(e.to_string()))?;
            let error = EmsError::from_response(error);
            tracing::warn!(url = %url, error = %error, "EMS returned an error");
            return Err(error);
        }

        if envelope.status != expected_status {
            tracing::warn!(
                url = %url,
                status = %envelope.status,
                expected = expected_status,
                "Unexpected EMS response status"
            );
            return Err(EmsError::UnexpectedStatus(envelope.status));
        }

        serde_json::from_value(value).map_err(|e| EmsError::JsonParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_credentials() {
        let config = HttpTransportConfig::new("https://ems.example.com", "", "token");
        assert!(matches!(
            EmsHttpClient::new(&config),
            Err(EmsError::MissingCredentials)
        ));

        let config = HttpTransportConfig::new("https://ems.example.com", "key", "");
        assert!(EmsHttpClient::new(&config).is_err());
    }

    #[test]
    fn client_strips_trailing_slash() {
        let config = HttpTransportConfig::new("https://ems.example.com/", "key", "token");
        let client = EmsHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://ems.example.com");
        assert_eq!(client.api_key(), "key");
        assert_eq!(client.session_token(), "token");
    }
}
