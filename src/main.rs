use clap::Parser;
use tracing_subscriber::EnvFilter;

use tibber_awtrix::config::{Cli, Config, PriceSourceConfig};
use tibber_awtrix::domain::display::client::Awtrix;
use tibber_awtrix::domain::price::client::{DemoPrices, TibberPrices};
use tibber_awtrix::http::{AwtrixHttp, TibberHttp};
use tibber_awtrix::network::DEFAULT_TIBBER_API_URL;
use tibber_awtrix::scheduler::Scheduler;
use tibber_awtrix::shared::SystemClock;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::try_from(Cli::parse())?;
    tracing::info!(host = %config.awtrix_host, source = ?config.price_source, "Starting");

    let display = Awtrix::new(AwtrixHttp::new(&config.awtrix_host)?);

    match config.price_source {
        PriceSourceConfig::Tibber { token } => {
            let prices = TibberPrices::new(TibberHttp::new(DEFAULT_TIBBER_API_URL, &token)?);
            Scheduler::new(prices, display, SystemClock).run().await?;
        }
        PriceSourceConfig::Demo => {
            tracing::warn!(
                "Demo mode: drawing synthetic prices, pass --tibber-token for real data"
            );
            Scheduler::new(DemoPrices::new(SystemClock), display, SystemClock)
                .run()
                .await?;
        }
    }

    Ok(())
}
