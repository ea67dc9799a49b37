use std::time::Duration;

use rquest::{Client, RequestBuilder, Response};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, error};

use crate::config::OzonConfig;
use crate::error::{Error, Result};

/// Default bound on every outbound call; expiry is treated like any other
/// transport failure by the callers.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(ozon: &OzonConfig) -> Result<Self> {
        Self::with_timeout(ozon, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(ozon: &OzonConfig, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        // Empty credentials produce valid (rejected-upstream) headers, so
        // construction succeeds either way.
        let auth_headers = [
            ("Client-Id", ozon.client_id.as_str()),
            ("Api-Key", ozon.api_key.as_str()),
            ("Content-Type", "application/json"),
        ];
        for (key, value) in auth_headers {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(header_name, header_value);
            } else {
                error!(
                    header_key = key,
                    "Invalid header value, header not set"
                );
            }
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client, headers })
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.post(url);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        request
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status,
                body = %body,
                "Upstream returned non-success status"
            );
            return Err(Error::Status { status, body });
        }

        Ok(response)
    }
}
