//! Pure rendering pipeline: price series in, draw commands out.
//!
//! No async, no network calls.

pub mod band;
pub mod commands;
pub mod scale;
pub mod window;

use crate::domain::display::DrawCommand;
use crate::domain::price::PriceSeries;
use crate::error::WindowError;
use chrono::{DateTime, Utc};

use commands::{build_commands, ChartLayout};
use window::select_window;

/// Selects the window for `now` and builds its draw commands.
pub fn render_chart(
    series: &PriceSeries,
    now: DateTime<Utc>,
    layout: &ChartLayout,
) -> Result<Vec<DrawCommand>, WindowError> {
    let window = select_window(series, now, layout.limits)?;

    tracing::debug!("Identified {} relevant prices", window.len());
    for point in window.iter() {
        tracing::debug!("Starting at {}: {}", point.starts_at, point.total);
    }

    Ok(build_commands(&window, now, layout))
}
