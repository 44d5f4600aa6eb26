//! Price bands and their colors.

use crate::domain::price::PricePoint;
use crate::shared::clock::hour_start;
use crate::shared::Color;
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

/// Color of the bar for the hour we are in, whatever its price.
pub const CURRENT_HOUR_COLOR: Color = Color::WHITE;

/// Absolute price bands from cheapest to most expensive.
///
/// Each band's upper bound is exclusive; the next band starts at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceBand {
    /// At or below zero.
    Free,
    /// Below 0.25.
    VeryCheap,
    /// Below 0.28.
    Cheap,
    /// Below 0.30.
    Normal,
    /// Below 0.33.
    Elevated,
    /// Below 0.35.
    Expensive,
    VeryExpensive,
}

impl PriceBand {
    pub fn classify(total: Decimal) -> Self {
        if total <= Decimal::ZERO {
            PriceBand::Free
        } else if total < Decimal::new(25, 2) {
            PriceBand::VeryCheap
        } else if total < Decimal::new(28, 2) {
            PriceBand::Cheap
        } else if total < Decimal::new(30, 2) {
            PriceBand::Normal
        } else if total < Decimal::new(33, 2) {
            PriceBand::Elevated
        } else if total < Decimal::new(35, 2) {
            PriceBand::Expensive
        } else {
            PriceBand::VeryExpensive
        }
    }

    pub fn color(self) -> Color {
        match self {
            PriceBand::Free => Color::rgb(0x21, 0x5D, 0x6E),
            PriceBand::VeryCheap => Color::rgb(0x5B, 0xA0, 0x23),
            PriceBand::Cheap => Color::rgb(0x7B, 0x96, 0x32),
            PriceBand::Normal => Color::rgb(0x9B, 0x8C, 0x41),
            PriceBand::Elevated => Color::rgb(0xBA, 0x82, 0x50),
            PriceBand::Expensive => Color::rgb(0xDA, 0x78, 0x5F),
            PriceBand::VeryExpensive => Color::rgb(0xFA, 0x6E, 0x6E),
        }
    }
}

/// Whether `starts_at` falls in the hour containing `now`.
pub fn is_current_hour(starts_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let start = hour_start(now);
    starts_at >= start && starts_at < start + TimeDelta::hours(1)
}

/// The color of a bar: the highlight for the current hour, else its band.
pub fn bar_color(point: &PricePoint, now: DateTime<Utc>) -> Color {
    if is_current_hour(point.starts_at, now) {
        return CURRENT_HOUR_COLOR;
    }
    PriceBand::classify(point.total).color()
}
