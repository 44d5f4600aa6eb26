//! # tibber-awtrix
//!
//! Polls hourly electricity prices from the Tibber GraphQL API and renders a
//! rolling price chart onto an Awtrix pixel-matrix display.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared types, domain slices for prices and the display
//! 2. **Render**: The pure price-to-pixel pipeline (window, scale, bands, commands)
//! 3. **HTTP**: `TibberHttp` and `AwtrixHttp`, one method per endpoint
//! 4. **Scheduler**: `Scheduler`, the hourly fetch/render/submit loop
//! 5. **Config**: Command line and environment surface for the binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tibber_awtrix::prelude::*;
//!
//! let prices = TibberPrices::new(TibberHttp::new(DEFAULT_TIBBER_API_URL, &token)?);
//! let display = Awtrix::new(AwtrixHttp::new("192.168.1.50")?);
//! let mut scheduler = Scheduler::new(prices, display, SystemClock);
//! scheduler.run().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Crate error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Render ──────────────────────────────────────────────────────────

/// Price window selection, pixel scaling, color banding and draw commands.
pub mod render;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP clients for the price source and the display.
pub mod http;

// ── Layer 4: Scheduler ───────────────────────────────────────────────────────

/// The hourly update loop.
pub mod scheduler;

// ── Layer 5: Config ──────────────────────────────────────────────────────────

/// Command line / environment configuration.
pub mod config;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Clock, Color, SystemClock};

    // Domain types: prices
    pub use crate::domain::price::client::{DemoPrices, PriceSource, TibberPrices};
    pub use crate::domain::price::state::{detect_changes, KnownPrices, PriceChange};
    pub use crate::domain::price::{PricePoint, PriceSeries};

    // Domain types: display
    pub use crate::domain::display::client::{Awtrix, DisplaySink};
    pub use crate::domain::display::{AppOptions, CustomApp, DrawCommand, Notification};

    // Render pipeline
    pub use crate::render::band::PriceBand;
    pub use crate::render::commands::{build_commands, ChartLayout};
    pub use crate::render::scale::{PixelRange, PriceScale};
    pub use crate::render::window::{select_window, RenderWindow, WindowLimits};

    // Errors
    pub use crate::error::{AppError, HttpError, PriceError, WindowError};

    // Network
    pub use crate::network::{CUSTOM_APP_NAME, DEFAULT_TIBBER_API_URL};

    // HTTP clients
    pub use crate::http::{AwtrixHttp, TibberHttp};

    // Scheduler + config
    pub use crate::config::{Cli, Config, PriceSourceConfig};
    pub use crate::scheduler::{CycleOutcome, Scheduler};
}
