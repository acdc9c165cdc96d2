//! Shared HTTP plumbing for the REST service clients.
//!
//! Every request carries the operator's bearer token. Any non-success
//! status is turned into [`Error::Status`] without retrying.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::BearerToken;
use crate::error::{Error, Result};

/// Base URL plus connection pool for one backend service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    service: &'static str,
}

impl ApiClient {
    /// Create a client for `service` rooted at `base_url`.
    ///
    /// The `reqwest::Client` is cheap to clone and shares its pool, so one
    /// instance can back every service client and every virtual user.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>, service: &'static str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            service,
        }
    }

    #[must_use]
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Absolute URL for a service path such as `/players/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        auth: &BearerToken,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!(service = self.service, url = %url, ?query, "GET");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, auth.header_value())
            .query(query)
            .send()
            .await?;

        self.decode(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        auth: &BearerToken,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(service = self.service, url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, auth.header_value())
            .json(body)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(service = self.service, %status, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            return Err(Error::Status {
                service: self.service,
                status,
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
