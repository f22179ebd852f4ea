//! Configuration record read by the layout engine.
//!
//! The record mirrors what the configurator's selection store holds. Every
//! field is optional on input: the engine normalizes missing or malformed
//! values instead of rejecting them.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_LENGTH_M, DEFAULT_WIDTH_M};

/// How the canopy is mounted.
///
/// Parsing is lenient: only the free-standing label maps to
/// [`CanopyType::FreeStanding`], everything else is wall-mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CanopyType {
    /// Two units facing each other.
    FreeStanding,
    /// A single unit against a backing plane.
    #[default]
    WallMounted,
}

impl CanopyType {
    pub const FREE_STANDING_LABEL: &'static str = "free-standing";
    pub const WALL_MOUNTED_LABEL: &'static str = "wall-mounted";

    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case(Self::FREE_STANDING_LABEL) {
            CanopyType::FreeStanding
        } else {
            CanopyType::WallMounted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CanopyType::FreeStanding => Self::FREE_STANDING_LABEL,
            CanopyType::WallMounted => Self::WALL_MOUNTED_LABEL,
        }
    }

    /// Number of structural units placed for this mounting.
    pub fn unit_count(self) -> usize {
        match self {
            CanopyType::FreeStanding => 2,
            CanopyType::WallMounted => 1,
        }
    }
}

impl From<String> for CanopyType {
    fn from(label: String) -> Self {
        CanopyType::from_label(&label)
    }
}

impl From<&str> for CanopyType {
    fn from(label: &str) -> Self {
        CanopyType::from_label(label)
    }
}

impl From<CanopyType> for String {
    fn from(kind: CanopyType) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for CanopyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current selections of the configurator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    #[serde(deserialize_with = "lenient_canopy_type")]
    pub canopy_type: CanopyType,
    /// Free-text size label ("Large", "6 x 4", ...); only drives the size multiplier.
    pub size: Option<String>,
    /// Length in meters.
    #[serde(deserialize_with = "lenient_meters")]
    pub length: Option<f32>,
    /// Width in meters.
    #[serde(deserialize_with = "lenient_meters")]
    pub width: Option<f32>,
    /// Roof selection, passed through to the scene layer.
    pub roof: Option<String>,
    /// Color selection, passed through to the scene layer.
    pub color: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            canopy_type: CanopyType::default(),
            size: None,
            length: Some(DEFAULT_LENGTH_M),
            width: Some(DEFAULT_WIDTH_M),
            roof: None,
            color: None,
        }
    }
}

impl Configuration {
    pub fn new(canopy_type: CanopyType) -> Self {
        Self {
            canopy_type,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_dimensions(mut self, length: f32, width: f32) -> Self {
        self.length = Some(length);
        self.width = Some(width);
        self
    }

    /// Length used by the formulas; absent, non-positive or non-finite values
    /// fall back to the default.
    #[inline]
    pub fn effective_length(&self) -> f32 {
        positive_or(self.length, DEFAULT_LENGTH_M)
    }

    /// Width used by the formulas, normalized like [`Self::effective_length`].
    #[inline]
    pub fn effective_width(&self) -> f32 {
        positive_or(self.width, DEFAULT_WIDTH_M)
    }
}

#[inline]
fn positive_or(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}

/// Parse a dimension label such as `"6"`, `"7.5"` or `"3m"`.
pub fn parse_meters(value: &str) -> Option<f32> {
    value
        .trim()
        .trim_end_matches('m')
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| !v.is_nan())
}

// Menu values arrive as strings, unset selections as null.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Number(f32),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_canopy_type<'de, D>(deserializer: D) -> Result<CanopyType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientValue::deserialize(deserializer)? {
        LenientValue::Text(label) => CanopyType::from_label(&label),
        _ => CanopyType::WallMounted,
    })
}

fn lenient_meters<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientValue::deserialize(deserializer)? {
        LenientValue::Number(v) => Some(v),
        LenientValue::Text(text) => parse_meters(&text),
        LenientValue::Other(_) => None,
    })
}
