//! Conversions from wire types to domain types for prices.

use super::wire::{TibberData, WirePrice, WirePriceInfo};
use super::{PriceInfo, PricePoint};
use crate::error::PriceError;

impl From<WirePrice> for PricePoint {
    fn from(p: WirePrice) -> Self {
        Self {
            total: p.total,
            starts_at: p.starts_at,
        }
    }
}

impl From<WirePriceInfo> for PriceInfo {
    fn from(info: WirePriceInfo) -> Self {
        Self {
            current: info.current.map(PricePoint::from),
            today: points(info.today),
            tomorrow: points(info.tomorrow),
        }
    }
}

fn points(prices: Option<Vec<WirePrice>>) -> Vec<PricePoint> {
    prices
        .unwrap_or_default()
        .into_iter()
        .map(PricePoint::from)
        .collect()
}

/// Picks the first home on the account.
impl TryFrom<TibberData> for PriceInfo {
    type Error = PriceError;

    fn try_from(data: TibberData) -> Result<Self, Self::Error> {
        let home = data
            .viewer
            .homes
            .into_iter()
            .next()
            .ok_or(PriceError::NoHomes)?;
        let subscription = home
            .current_subscription
            .ok_or(PriceError::NoSubscription)?;
        Ok(subscription.price_info.into())
    }
}
