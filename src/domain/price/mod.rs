//! Price domain: hourly electricity prices from the price source.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use state::{KnownPrices, PriceChange};

/// The total price for the hour starting at `starts_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    /// Currency units per kWh, taxes included.
    pub total: Decimal,
    pub starts_at: DateTime<Utc>,
}

impl PricePoint {
    pub fn new(total: Decimal, starts_at: DateTime<Utc>) -> Self {
        Self { total, starts_at }
    }
}

/// Today's and (once published) tomorrow's prices for one home.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceInfo {
    pub current: Option<PricePoint>,
    pub today: Vec<PricePoint>,
    pub tomorrow: Vec<PricePoint>,
}

impl PriceInfo {
    /// Whether the source has published tomorrow's prices yet.
    pub fn has_tomorrow(&self) -> bool {
        !self.tomorrow.is_empty()
    }

    pub fn into_series(self) -> PriceSeries {
        let mut points = self.today;
        points.extend(self.tomorrow);
        PriceSeries::new(points)
    }
}

/// A chronological run of hourly prices.
///
/// Replaced wholesale on every fetch; never merged point by point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series, ordering points by start time.
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.starts_at);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_series_is_sorted_on_construction() {
        let series = PriceSeries::new(vec![
            PricePoint::new(Decimal::new(3, 1), at(2)),
            PricePoint::new(Decimal::new(1, 1), at(0)),
            PricePoint::new(Decimal::new(2, 1), at(1)),
        ]);
        let hours: Vec<_> = series.iter().map(|p| p.starts_at).collect();
        assert_eq!(hours, vec![at(0), at(1), at(2)]);
    }

    #[test]
    fn test_price_info_concatenates_today_and_tomorrow() {
        let info = PriceInfo {
            current: None,
            today: vec![
                PricePoint::new(Decimal::ONE, at(22)),
                PricePoint::new(Decimal::TWO, at(23)),
            ],
            tomorrow: vec![PricePoint::new(
                Decimal::TEN,
                Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap(),
            )],
        };
        assert!(info.has_tomorrow());
        let series = info.into_series();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[2].total, Decimal::TEN);
    }

    #[test]
    fn test_price_info_without_tomorrow() {
        let info = PriceInfo {
            current: None,
            today: vec![PricePoint::new(Decimal::ONE, at(0))],
            tomorrow: Vec::new(),
        };
        assert!(!info.has_tomorrow());
        assert_eq!(info.into_series().len(), 1);
    }
}
