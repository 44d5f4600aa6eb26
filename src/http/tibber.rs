//! Low-level Tibber client: `TibberHttp`.
//!
//! Returns wire types; conversion to domain types happens in
//! `domain::price::client`.

use super::{build_client, status_error};
use crate::domain::price::wire::{GraphQlRequest, TibberData, TibberResponse, PRICE_INFO_QUERY};
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the Tibber GraphQL API.
pub struct TibberHttp {
    url: String,
    client: Client,
    /// Bearer token. Never logged.
    token: String,
}

impl TibberHttp {
    pub fn new(url: &str, token: &str) -> Result<Self, HttpError> {
        reqwest::Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self {
            url: url.to_string(),
            client: build_client()?,
            token: token.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current, today's and tomorrow's prices for every home.
    pub async fn query_price_info(&self) -> Result<TibberData, HttpError> {
        let resp: TibberResponse = self.query(PRICE_INFO_QUERY).await?;
        into_data(resp)
    }

    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, HttpError> {
        tracing::debug!("Querying {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&GraphQlRequest { query })
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), body))
    }
}

/// Surfaces GraphQL-level errors, which arrive with a 200 status.
fn into_data(resp: TibberResponse) -> Result<TibberData, HttpError> {
    if !resp.errors.is_empty() {
        let messages: Vec<_> = resp.errors.into_iter().map(|e| e.message).collect();
        return Err(HttpError::GraphQl(messages.join("; ")));
    }
    resp.data
        .ok_or_else(|| HttpError::GraphQl("response carried no data".to_string()))
}
