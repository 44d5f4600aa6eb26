//! Turns a render window into the ordered draw commands for one update.

use super::band::bar_color;
use super::scale::{PixelRange, PriceScale};
use super::window::{RenderWindow, WindowLimits, LABEL_WIDTH};
use crate::domain::display::DrawCommand;
use crate::shared::Color;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Positions and sizes on the pixel matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub label_x: i32,
    pub label_y: i32,
    pub label_color: Color,
    /// Column of the first bar.
    pub bar_offset: i32,
    pub bar_width: i32,
    pub pixels: PixelRange,
    pub limits: WindowLimits,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            label_x: 0,
            label_y: 1,
            label_color: Color::WHITE,
            bar_offset: LABEL_WIDTH as i32,
            bar_width: 1,
            pixels: PixelRange::default(),
            limits: WindowLimits::default(),
        }
    }
}

/// Price in cents, half-way values rounded away from zero.
pub fn cents(total: Decimal) -> i64 {
    (total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

pub fn price_label(total: Decimal) -> String {
    format!("{}¢", cents(total))
}

/// The label first, then one bar per window entry from oldest to newest.
///
/// An empty window yields no commands.
pub fn build_commands(
    window: &RenderWindow,
    now: DateTime<Utc>,
    layout: &ChartLayout,
) -> Vec<DrawCommand> {
    let Some(label) = window.label_point() else {
        return Vec::new();
    };
    let Some(scale) = PriceScale::fit(window.iter().map(|p| p.total), layout.pixels) else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(window.len() + 1);
    commands.push(DrawCommand::text(
        layout.label_x,
        layout.label_y,
        price_label(label.total),
        layout.label_color,
    ));

    for (i, point) in window.iter().enumerate() {
        let bar = scale.bar(point.total);
        let color = bar_color(point, now);
        tracing::debug!(
            starts_at = %point.starts_at,
            price = %point.total,
            top = bar.top,
            min = %scale.min_price(),
            max = %scale.max_price(),
            color = %color,
            "Mapped price to bar"
        );
        commands.push(DrawCommand::filled_rect(
            layout.bar_offset + i as i32 * layout.bar_width,
            bar.top,
            layout.bar_width,
            bar.height,
            color,
        ));
    }

    commands
}
