//! HttpGateway - reqwest implementation of the ApiGateway port

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, instrument};

use feed_common::ClientConfig;
use feed_core::{ApiGateway, FetchError, FormField, FormValue, GatewayResult};

use crate::error::map_transport_error;

/// HTTP implementation of the data-fetch gateway
///
/// Attaches the configured bearer token, joins relative paths onto the
/// API base URL, and maps non-2xx responses into [`FetchError::Status`]
/// with the raw body preserved. No retries: a failed call surfaces
/// unchanged to the caller.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    /// Create a gateway from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::from_parts(
            client,
            &config.api.base_url,
            config.auth.token.clone(),
        ))
    }

    /// Create a gateway from pre-built parts
    pub fn from_parts(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Read a response body, mapping non-2xx statuses to errors
    async fn read_body(response: Response) -> GatewayResult<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(&e))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn parse_json(body: &str) -> GatewayResult<Value> {
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> GatewayResult<Value> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let body = Self::read_body(response).await?;
        Self::parse_json(&body)
    }

    #[instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> GatewayResult<Value> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .with_auth(self.client.post(&url))
            .json(body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let text = Self::read_body(response).await?;
        Self::parse_json(&text)
    }

    #[instrument(skip(self, fields))]
    async fn post_form(&self, path: &str, fields: &[FormField]) -> GatewayResult<Value> {
        let url = self.url(path);
        debug!(%url, field_count = fields.len(), "POST multipart");

        let mut form = multipart::Form::new();
        for field in fields {
            form = match &field.value {
                FormValue::Text(value) => form.text(field.name.clone(), value.clone()),
                FormValue::File { filename, bytes } => form.part(
                    field.name.clone(),
                    multipart::Part::bytes(bytes.clone()).file_name(filename.clone()),
                ),
            };
        }

        let response = self
            .with_auth(self.client.post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let text = Self::read_body(response).await?;
        Self::parse_json(&text)
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> GatewayResult<Option<Value>> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let response = self
            .with_auth(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let body = Self::read_body(response).await?;
        if body.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse_json(&body).map(Some)
        }
    }
}
