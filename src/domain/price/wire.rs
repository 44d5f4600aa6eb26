//! Wire types for the Tibber GraphQL price query.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Today's and tomorrow's hourly prices for every home on the account.
pub const PRICE_INFO_QUERY: &str = concat!(
    "{viewer{homes{currentSubscription{priceInfo{",
    "current{total startsAt}",
    "today{total startsAt}",
    "tomorrow{total startsAt}",
    "}}}}}",
);

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TibberResponse {
    #[serde(default)]
    pub data: Option<TibberData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TibberData {
    pub viewer: Viewer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Viewer {
    #[serde(default)]
    pub homes: Vec<Home>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    #[serde(default)]
    pub current_subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub price_info: WirePriceInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WirePriceInfo {
    #[serde(default)]
    pub current: Option<WirePrice>,
    #[serde(default)]
    pub today: Option<Vec<WirePrice>>,
    /// Empty or `null` until the source publishes next-day prices.
    #[serde(default)]
    pub tomorrow: Option<Vec<WirePrice>>,
}

/// A single hourly price as sent by the source (`total` is a JSON number).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePrice {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub starts_at: DateTime<Utc>,
}
