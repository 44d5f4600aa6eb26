//! Price sources: the Tibber API and a synthetic demo feed.

use super::{PriceInfo, PricePoint, PriceSeries};
use crate::error::AppError;
use crate::http::TibberHttp;
use crate::shared::clock::hour_start;
use crate::shared::{Clock, SystemClock};

use chrono::{Days, TimeDelta, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Something that can produce the current price series.
#[allow(async_fn_in_trait)]
pub trait PriceSource {
    async fn fetch(&self) -> Result<PriceSeries, AppError>;
}

/// Prices for the first home on a Tibber account.
pub struct TibberPrices {
    http: TibberHttp,
}

impl TibberPrices {
    pub fn new(http: TibberHttp) -> Self {
        Self { http }
    }

    /// Today's and tomorrow's prices, kept apart.
    pub async fn price_info(&self) -> Result<PriceInfo, AppError> {
        let data = self.http.query_price_info().await?;
        Ok(PriceInfo::try_from(data)?)
    }
}

impl PriceSource for TibberPrices {
    async fn fetch(&self) -> Result<PriceSeries, AppError> {
        let info = self.price_info().await?;
        if !info.has_tomorrow() {
            tracing::info!("No price data for tomorrow yet");
        }
        Ok(info.into_series())
    }
}

/// Synthetic hourly prices for running without a Tibber account.
///
/// Produces today's 24 hours and, from noon UTC on, tomorrow's as well.
pub struct DemoPrices<C = SystemClock> {
    clock: C,
    seed: Option<u64>,
}

impl<C: Clock> DemoPrices<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, seed: None }
    }

    /// Deterministic output for a given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn generate(&self) -> PriceSeries {
        let now = self.clock.now();
        let midnight = hour_start(now) - TimeDelta::hours(i64::from(now.hour()));
        let days = if now.hour() >= 12 { 2 } else { 1 };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut points = Vec::with_capacity(days * 24);
        for day in 0..days {
            let day_start = midnight
                .checked_add_days(Days::new(day as u64))
                .unwrap_or(midnight);
            for hour in 0..24 {
                let total = demo_price(hour, rng.gen_range(-0.02..0.02));
                points.push(PricePoint::new(total, day_start + TimeDelta::hours(hour)));
            }
        }
        PriceSeries::new(points)
    }
}

impl<C: Clock> PriceSource for DemoPrices<C> {
    async fn fetch(&self) -> Result<PriceSeries, AppError> {
        Ok(self.generate())
    }
}

/// Cheap nights, a morning bump and an evening peak.
fn demo_price(hour: i64, jitter: f64) -> Decimal {
    let phase = (hour as f64 - 12.0) / 24.0 * std::f64::consts::TAU;
    let evening = if (17..=20).contains(&hour) { 0.05 } else { 0.0 };
    let value = 0.27 - 0.05 * phase.cos() + evening + jitter;
    Decimal::try_from(value).unwrap_or_default().round_dp(4)
}
