//! Display domain: drawing primitives and app/notification payloads.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Color;

/// A single drawing primitive on the pixel matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Text with its top-left corner at `(x, y)`.
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
    },
    /// A filled rectangle with its top-left corner at `(x, y)`.
    FilledRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn text(x: i32, y: i32, text: impl Into<String>, color: Color) -> Self {
        DrawCommand::Text {
            x,
            y,
            text: text.into(),
            color,
        }
    }

    pub fn filled_rect(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        DrawCommand::FilledRect {
            x,
            y,
            width,
            height,
            color,
        }
    }
}

/// Pass-through app settings; unset fields use the device defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppOptions {
    /// Seconds the app stays on screen per loop.
    pub duration: Option<u32>,
    /// Remove the app if it gets no update for this many seconds.
    pub lifetime: Option<u32>,
    /// Position in the app loop, applied on the first push only.
    pub pos: Option<u32>,
    pub no_scroll: bool,
    /// Scroll speed as a percentage of the default.
    pub scroll_speed: Option<u32>,
    /// Other displays the device forwards this app to.
    pub clients: Vec<String>,
}

/// One complete custom-app update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomApp {
    pub draw: Vec<DrawCommand>,
    pub options: AppOptions,
}

impl CustomApp {
    pub fn new(draw: Vec<DrawCommand>) -> Self {
        Self {
            draw,
            options: AppOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AppOptions) -> Self {
        self.options = options;
        self
    }
}

/// A transient overlay shown on top of the app loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub color: Option<Color>,
    pub icon: Option<String>,
    pub duration: Option<u32>,
    /// Keep on screen until dismissed on the device.
    pub hold: bool,
    /// Queue behind the current notification instead of replacing it.
    pub stack: bool,
    pub wakeup: bool,
    pub sound: Option<String>,
    pub rtttl: Option<String>,
    pub clients: Vec<String>,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
