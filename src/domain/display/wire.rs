//! Wire types for the Awtrix HTTP API.

use crate::shared::Color;
use serde::Serialize;

/// A draw instruction as the device expects it: a single-key object
/// holding a positional argument array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WireDrawCommand {
    /// `{"dt": [x, y, text, color]}`
    #[serde(rename = "dt")]
    Text(i32, i32, String, Color),
    /// `{"df": [x, y, width, height, color]}`
    #[serde(rename = "df")]
    FilledRect(i32, i32, i32, i32, Color),
}

/// Body for both `/api/custom` and `/api/notify`.
///
/// Every field is optional on the device side; unset ones are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwtrixApp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub draw: Vec<WireDrawCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wakeup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_speed: Option<u32>,
}
