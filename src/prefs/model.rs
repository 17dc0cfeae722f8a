use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PreferenceError;

pub const DEFAULT_FONT_FAMILY: &str = "system-ui";
pub const DEFAULT_FONT_SIZE: i64 = 16;
pub const MIN_FONT_SIZE: i64 = 12;
pub const MAX_FONT_SIZE: i64 = 24;
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 1.0;
pub const MIN_SIZE_MULTIPLIER: f64 = 0.8;
pub const MAX_SIZE_MULTIPLIER: f64 = 1.5;
pub const SIZE_STEP: f64 = 0.1;

/// Font families offered by the settings panel.
pub const FONT_CHOICES: [&str; 5] = [
    DEFAULT_FONT_FAMILY,
    "Public Sans",
    "Intro",
    "DM Sans",
    "Nunito Sans",
];

pub fn is_known_font(name: &str) -> bool {
    FONT_CHOICES.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Wide,
    Narrow,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Default, Layout::Wide, Layout::Narrow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Wide => "wide",
            Layout::Narrow => "narrow",
        }
    }

    /// Marker class set on the document root while this layout is active.
    pub const fn class_name(self) -> &'static str {
        match self {
            Layout::Default => "layout-default",
            Layout::Wide => "layout-wide",
            Layout::Narrow => "layout-narrow",
        }
    }

    pub fn class_names() -> [&'static str; 3] {
        Self::ALL.map(Layout::class_name)
    }
}

impl FromStr for Layout {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == value)
            .ok_or_else(|| PreferenceError::InvalidOption {
                field: "layout",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every user-adjustable interface preference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    pub dark_mode: bool,
    pub high_contrast: bool,
    pub rtl: bool,
    pub compact_mode: bool,
    pub font_family: String,
    pub font_size: i64,
    pub layout: Layout,
    pub primary_color: String,
    pub size_multiplier: f64,
    /// Session-only; never written to storage.
    pub presentation_mode: bool,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            high_contrast: false,
            rtl: false,
            compact_mode: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            layout: Layout::Default,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            size_multiplier: DEFAULT_SIZE_MULTIPLIER,
            presentation_mode: false,
        }
    }
}

pub fn clamp_font_size(size: i64) -> i64 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

pub fn clamp_size_multiplier(multiplier: f64) -> f64 {
    if !multiplier.is_finite() {
        return DEFAULT_SIZE_MULTIPLIER;
    }
    multiplier.clamp(MIN_SIZE_MULTIPLIER, MAX_SIZE_MULTIPLIER)
}

/// Rounds to the nearest 0.1 and clamps, so every later step is exactly one tenth.
pub fn snap_size_multiplier(multiplier: f64) -> f64 {
    clamp_size_multiplier((multiplier * 10.0).round() / 10.0)
}

/// Moves the multiplier by `delta`, snapped to the 0.1 grid and clamped.
pub fn step_size_multiplier(current: f64, delta: f64) -> f64 {
    snap_size_multiplier(snap_size_multiplier(current) + delta)
}
