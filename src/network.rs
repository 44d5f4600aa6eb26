//! Network constants for the price source and the display.

/// Tibber GraphQL endpoint.
pub const DEFAULT_TIBBER_API_URL: &str = "https://api.tibber.com/v1-beta/gql";

/// Default display host when none is configured.
pub const DEFAULT_AWTRIX_HOST: &str = "127.0.0.1";

/// Name of the custom app the chart is pushed to.
pub const CUSTOM_APP_NAME: &str = "tibberPrices";
