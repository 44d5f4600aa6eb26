//! Command line and environment configuration.
//!
//! Every flag falls back to an environment variable; a flag given on the
//! command line wins.

use crate::error::AppError;
use crate::network::DEFAULT_AWTRIX_HOST;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tibber-awtrix",
    version,
    about = "Show hourly Tibber electricity prices on an Awtrix display"
)]
pub struct Cli {
    /// Your Tibber developer API token
    #[arg(long, env = "TIBBER_TOKEN", hide_env_values = true)]
    pub tibber_token: Option<String>,

    /// Host or IPv4 address of your Awtrix device
    #[arg(long, env = "AWTRIX_IP", default_value = DEFAULT_AWTRIX_HOST)]
    pub awtrix_host: String,

    /// Draw synthetic prices instead of querying Tibber
    #[arg(long, env = "TIBBER_DEMO")]
    pub demo: bool,
}

/// Where prices come from.
#[derive(Clone, PartialEq, Eq)]
pub enum PriceSourceConfig {
    Tibber { token: String },
    Demo,
}

impl std::fmt::Debug for PriceSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSourceConfig::Tibber { .. } => f
                .debug_struct("Tibber")
                .field("token", &"<redacted>")
                .finish(),
            PriceSourceConfig::Demo => write!(f, "Demo"),
        }
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub price_source: PriceSourceConfig,
    pub awtrix_host: String,
}

impl TryFrom<Cli> for Config {
    type Error = AppError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let awtrix_host = cli.awtrix_host.trim().to_string();
        if awtrix_host.is_empty() {
            return Err(AppError::Config("Awtrix host must not be empty".to_string()));
        }

        let token = cli
            .tibber_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let price_source = match (cli.demo, token) {
            (true, _) => PriceSourceConfig::Demo,
            (false, Some(token)) => PriceSourceConfig::Tibber { token },
            (false, None) => {
                return Err(AppError::Config(
                    "No Tibber token given. Pass --tibber-token, set TIBBER_TOKEN, or use --demo"
                        .to_string(),
                ))
            }
        };

        Ok(Self {
            price_source,
            awtrix_host,
        })
    }
}
