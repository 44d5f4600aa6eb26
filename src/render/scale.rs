//! Linear mapping from prices to pixel rows.
//!
//! All math uses `rust_decimal::Decimal`; the only rounding is the final
//! floor to a whole row.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Rows available to the bars. Row 0 is left free above the tallest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub min: i32,
    pub max: i32,
}

impl Default for PixelRange {
    fn default() -> Self {
        Self { min: 1, max: 8 }
    }
}

impl PixelRange {
    pub fn span(&self) -> i32 {
        self.max - self.min
    }
}

/// Where a bar starts and how far down it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub top: i32,
    pub height: i32,
}

/// A price-to-row mapping fitted to one window of prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    min_price: Decimal,
    max_price: Decimal,
    range: PixelRange,
}

impl PriceScale {
    /// Fits the scale to the observed minimum and maximum. `None` if there
    /// are no prices.
    pub fn fit<I>(prices: I, range: PixelRange) -> Option<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut iter = prices.into_iter();
        let first = iter.next()?;
        let (min_price, max_price) =
            iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self {
            min_price,
            max_price,
            range,
        })
    }

    pub fn min_price(&self) -> Decimal {
        self.min_price
    }

    pub fn max_price(&self) -> Decimal {
        self.max_price
    }

    /// Rows per currency unit. Zero when every price is the same.
    pub fn slope(&self) -> Decimal {
        let spread = self.max_price - self.min_price;
        if spread.is_zero() {
            return Decimal::ZERO;
        }
        Decimal::from(self.range.span())
            .checked_div(spread)
            .unwrap_or(Decimal::ZERO)
    }

    /// `min + span * (price - min_price) / (max_price - min_price)`, floored.
    ///
    /// Multiplies before dividing so the maximum price lands exactly on
    /// `range.max`.
    pub fn level(&self, price: Decimal) -> i32 {
        let spread = self.max_price - self.min_price;
        if spread.is_zero() {
            return self.range.min;
        }
        let offset = Decimal::from(self.range.span())
            .checked_mul(price - self.min_price)
            .and_then(|v| v.checked_div(spread))
            .unwrap_or(Decimal::ZERO);
        let scaled = Decimal::from(self.range.min) + offset;
        scaled.floor().to_i32().unwrap_or(self.range.min)
    }

    /// The bar for `price`: its top row is `max - level`, and every bar is
    /// `max` rows tall so it always reaches the bottom edge.
    pub fn bar(&self, price: Decimal) -> Bar {
        Bar {
            top: self.range.max - self.level(price),
            height: self.range.max,
        }
    }
}
