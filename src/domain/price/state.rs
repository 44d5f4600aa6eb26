//! Known-prices state: owned by the scheduler, replaced on every fetch.

use super::{PricePoint, PriceSeries};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A price that changed for an hour already seen in the previous fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceChange {
    pub starts_at: DateTime<Utc>,
    pub old: Decimal,
    pub new: Decimal,
}

/// Compares every new point against every old point with the same start time.
///
/// Hours that only exist in `new` are not changes.
pub fn detect_changes(old: &[PricePoint], new: &[PricePoint]) -> Vec<PriceChange> {
    let mut changes = Vec::new();
    for new_point in new {
        for old_point in old {
            if new_point.starts_at == old_point.starts_at && new_point.total != old_point.total {
                changes.push(PriceChange {
                    starts_at: new_point.starts_at,
                    old: old_point.total,
                    new: new_point.total,
                });
            }
        }
    }
    changes
}

/// The last successfully fetched price series.
#[derive(Debug, Clone, Default)]
pub struct KnownPrices {
    series: PriceSeries,
}

impl KnownPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the known series, reporting prices that moved since the last fetch.
    pub fn replace(&mut self, series: PriceSeries) -> Vec<PriceChange> {
        let changes = detect_changes(self.series.points(), series.points());
        for change in &changes {
            tracing::info!(
                starts_at = %change.starts_at,
                old = %change.old,
                new = %change.new,
                "Price changed"
            );
        }
        self.series = series;
        changes
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
