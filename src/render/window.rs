//! Selects which prices end up on the chart.

use crate::domain::price::{PricePoint, PriceSeries};
use crate::error::WindowError;
use chrono::{DateTime, Utc};

/// Width of the pixel matrix in columns.
pub const MATRIX_WIDTH: usize = 36;
/// Columns reserved on the left for the price label.
pub const LABEL_WIDTH: usize = 12;
/// Bars that fit next to the label, one column each.
pub const BAR_CAPACITY: usize = MATRIX_WIDTH - LABEL_WIDTH;
/// Elapsed hours kept on the chart.
pub const MAX_HISTORIC: usize = 4;

/// How many bars the window may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLimits {
    pub max_historic: usize,
    pub bar_capacity: usize,
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self {
            max_historic: MAX_HISTORIC,
            bar_capacity: BAR_CAPACITY,
        }
    }
}

/// The prices to draw: a few elapsed hours followed by upcoming ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderWindow {
    historic: Vec<PricePoint>,
    upcoming: Vec<PricePoint>,
    label: Option<PricePoint>,
}

impl RenderWindow {
    /// Elapsed hours, most recent last. The last one is the current hour.
    pub fn historic(&self) -> &[PricePoint] {
        &self.historic
    }

    pub fn upcoming(&self) -> &[PricePoint] {
        &self.upcoming
    }

    /// All points in chart order.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.historic.iter().chain(self.upcoming.iter())
    }

    pub fn len(&self) -> usize {
        self.historic.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.historic.is_empty() && self.upcoming.is_empty()
    }

    /// The price shown in the label: the most recent elapsed hour, or the
    /// first upcoming one when nothing has elapsed yet.
    ///
    /// Chosen before truncation, so it is the current hour even when the
    /// bars can't fit it.
    pub fn label_point(&self) -> Option<&PricePoint> {
        self.label.as_ref()
    }
}

/// Partitions `points` into those starting before `now` and those after it.
///
/// A point starting exactly at `now` belongs to neither side and is an error.
pub fn split_prices(
    points: &[PricePoint],
    now: DateTime<Utc>,
) -> Result<(Vec<PricePoint>, Vec<PricePoint>), WindowError> {
    let mut historic = Vec::new();
    let mut upcoming = Vec::new();

    for point in points {
        if point.starts_at < now {
            historic.push(*point);
        } else if point.starts_at > now {
            upcoming.push(*point);
        } else {
            return Err(WindowError::AmbiguousTimestamp {
                starts_at: point.starts_at,
                now,
            });
        }
    }

    Ok((historic, upcoming))
}

/// Keeps the last `max_historic` elapsed hours plus upcoming ones, then cuts
/// the furthest-future entries until everything fits in `bar_capacity`.
pub fn select_window(
    series: &PriceSeries,
    now: DateTime<Utc>,
    limits: WindowLimits,
) -> Result<RenderWindow, WindowError> {
    let (mut historic, mut upcoming) = split_prices(series.points(), now)?;

    if historic.len() > limits.max_historic {
        historic.drain(..historic.len() - limits.max_historic);
    }
    let label = historic.last().or_else(|| upcoming.first()).copied();

    historic.truncate(limits.bar_capacity);
    upcoming.truncate(limits.bar_capacity - historic.len());

    Ok(RenderWindow {
        historic,
        upcoming,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rust_decimal::Decimal;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    /// `count` hourly points starting at midnight, priced by their hour index.
    fn series(count: i64) -> PriceSeries {
        PriceSeries::new(
            (0..count)
                .map(|h| PricePoint::new(Decimal::from(h), base() + TimeDelta::hours(h)))
                .collect(),
        )
    }

    fn hours(points: &[PricePoint]) -> Vec<i64> {
        points
            .iter()
            .map(|p| (p.starts_at - base()).num_hours())
            .collect()
    }

    #[test]
    fn test_split_is_a_partition() {
        let s = series(48);
        let now = base() + TimeDelta::minutes(10 * 60 + 1);
        let (historic, upcoming) = split_prices(s.points(), now).unwrap();

        assert_eq!(historic.len() + upcoming.len(), 48);
        assert_eq!(hours(&historic), (0..=10).collect::<Vec<i64>>());
        assert_eq!(hours(&upcoming), (11..48).collect::<Vec<i64>>());
    }

    #[test]
    fn test_exact_match_is_an_error() {
        let s = series(3);
        let now = base() + TimeDelta::hours(1);
        let err = split_prices(s.points(), now).unwrap_err();
        assert_eq!(
            err,
            WindowError::AmbiguousTimestamp {
                starts_at: now,
                now
            }
        );
    }

    #[test]
    fn test_select_keeps_last_four_historic() {
        let s = series(24);
        let now = base() + TimeDelta::hours(10) + TimeDelta::seconds(1);
        let window = select_window(&s, now, WindowLimits::default()).unwrap();

        assert_eq!(hours(window.historic()), vec![7, 8, 9, 10]);
        assert_eq!(hours(window.upcoming()), (11..24).collect::<Vec<i64>>());
        assert_eq!(window.label_point().unwrap().total, Decimal::from(10));
    }

    #[test]
    fn test_select_truncates_furthest_future_first() {
        let s = series(48);
        let now = base() + TimeDelta::hours(10) + TimeDelta::seconds(1);
        let window = select_window(&s, now, WindowLimits::default()).unwrap();

        assert_eq!(window.len(), BAR_CAPACITY);
        let all: Vec<_> = window.iter().copied().collect();
        assert_eq!(hours(&all), (7..31).collect::<Vec<i64>>());
    }

    #[test]
    fn test_select_with_few_historic() {
        let s = series(24);
        let now = base() + TimeDelta::hours(1) + TimeDelta::seconds(1);
        let window = select_window(&s, now, WindowLimits::default()).unwrap();

        assert_eq!(hours(window.historic()), vec![0, 1]);
        assert_eq!(window.len(), 24);
    }

    #[test]
    fn test_select_with_nothing_elapsed() {
        let s = series(5);
        let now = base() - TimeDelta::minutes(30);
        let window = select_window(&s, now, WindowLimits::default()).unwrap();

        assert!(window.historic().is_empty());
        assert_eq!(window.len(), 5);
        assert_eq!(window.label_point().unwrap().total, Decimal::ZERO);
    }

    #[test]
    fn test_select_with_tiny_capacity() {
        let s = series(24);
        let now = base() + TimeDelta::hours(10) + TimeDelta::seconds(1);
        let limits = WindowLimits {
            max_historic: 4,
            bar_capacity: 3,
        };
        let window = select_window(&s, now, limits).unwrap();

        assert_eq!(hours(window.historic()), vec![7, 8, 9]);
        assert!(window.upcoming().is_empty());
        // The current hour is cut from the bars but still labels the chart.
        assert_eq!(window.label_point().unwrap().total, Decimal::from(10));
    }

    #[test]
    fn test_label_survives_zero_capacity() {
        let s = series(24);
        let now = base() + TimeDelta::hours(5) + TimeDelta::seconds(1);
        let limits = WindowLimits {
            max_historic: 4,
            bar_capacity: 0,
        };
        let window = select_window(&s, now, limits).unwrap();

        assert!(window.is_empty());
        assert_eq!(window.label_point().unwrap().total, Decimal::from(5));
    }

    #[test]
    fn test_select_empty_series() {
        let window =
            select_window(&PriceSeries::default(), base(), WindowLimits::default()).unwrap();
        assert!(window.is_empty());
        assert!(window.label_point().is_none());
    }
}
