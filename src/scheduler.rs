//! The hourly update loop.
//!
//! Strictly sequential: fetch, detect changes, replace the known prices,
//! render, submit, then sleep until just past the next full hour.

use crate::domain::display::client::DisplaySink;
use crate::domain::display::{AppOptions, CustomApp};
use crate::domain::price::client::PriceSource;
use crate::domain::price::KnownPrices;
use crate::error::{AppError, WindowError};
use crate::network::CUSTOM_APP_NAME;
use crate::render::commands::ChartLayout;
use crate::render::render_chart;
use crate::shared::clock::hour_start;
use crate::shared::Clock;

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// What a single cycle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No prices known yet; the display was not touched.
    Skipped,
    /// The display accepted a chart with this many bars.
    Rendered { bars: usize },
    /// The chart was built but the display did not accept it.
    DisplayFailed,
}

/// Time from `now` until one second past the next full hour.
///
/// Waking slightly after the boundary keeps hour-aligned prices from ever
/// starting exactly at "now".
pub fn duration_until_next_hour(now: DateTime<Utc>) -> Duration {
    let next = hour_start(now) + TimeDelta::hours(1) + TimeDelta::seconds(1);
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Drives one price source and one display.
pub struct Scheduler<P, D, C> {
    source: P,
    display: D,
    clock: C,
    known: KnownPrices,
    layout: ChartLayout,
    app_name: String,
    options: AppOptions,
}

impl<P, D, C> Scheduler<P, D, C>
where
    P: PriceSource,
    D: DisplaySink,
    C: Clock,
{
    pub fn new(source: P, display: D, clock: C) -> Self {
        Self {
            source,
            display,
            clock,
            known: KnownPrices::new(),
            layout: ChartLayout::default(),
            app_name: CUSTOM_APP_NAME.to_string(),
            options: AppOptions::default(),
        }
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    /// Options sent along with every chart update.
    pub fn with_app_options(mut self, options: AppOptions) -> Self {
        self.options = options;
        self
    }

    pub fn known_prices(&self) -> &KnownPrices {
        &self.known
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Fetch and replace the known prices. On failure the previous prices
    /// are kept and `false` is returned.
    pub async fn update_prices(&mut self) -> bool {
        tracing::info!("Fetching prices...");
        let series = match self.source.fetch().await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!("Could not fetch prices: {}", e);
                return false;
            }
        };

        let changes = self.known.replace(series);
        tracing::info!(
            prices = self.known.series().len(),
            changed = changes.len(),
            "Updated known prices"
        );
        true
    }

    /// Render the known prices and push them to the display.
    ///
    /// Display failures are logged and reported as an outcome; only a
    /// price that can't be placed relative to now is an error.
    pub async fn update_display(&self) -> Result<CycleOutcome, WindowError> {
        if self.known.is_empty() {
            tracing::info!("No prices available, skipping display update");
            return Ok(CycleOutcome::Skipped);
        }

        let now = self.clock.now();
        let draw = render_chart(self.known.series(), now, &self.layout)?;
        let bars = draw.len().saturating_sub(1);
        let app = CustomApp::new(draw).with_options(self.options.clone());

        tracing::info!("Drawing {} prices...", bars);
        match self.display.push_app(&self.app_name, &app).await {
            Ok(()) => Ok(CycleOutcome::Rendered { bars }),
            Err(e) => {
                tracing::error!("Could not update custom app {}: {}", self.app_name, e);
                Ok(CycleOutcome::DisplayFailed)
            }
        }
    }

    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, WindowError> {
        self.update_prices().await;
        self.update_display().await
    }

    /// Runs cycles forever. Returns only when a price can't be placed.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.run_cycle().await?;

            let wait = duration_until_next_hour(self.clock.now());
            tracing::info!("Sleeping for {:?}", wait);
            tokio::time::sleep(wait).await;
        }
    }
}
