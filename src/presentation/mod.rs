//! Global presentation hooks mirrored from the preference store.
//!
//! Consumers that do not subscribe to the store read these values instead:
//! marker classes on the document root, the text direction, the root font
//! and a handful of CSS custom properties.

use std::collections::{BTreeMap, BTreeSet};

mod stylesheet;

pub use stylesheet::render_stylesheet;

pub const DARK_CLASS: &str = "dark";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const COMPACT_CLASS: &str = "compact";
pub const PRESENTATION_MODE_CLASS: &str = "presentation-mode";

pub const FONT_FAMILY_PROPERTY: &str = "--font-family";
pub const PRIMARY_COLOR_PROPERTY: &str = "--primary-color";
pub const SIZE_MULTIPLIER_PROPERTY: &str = "--size-multiplier";

const FONT_FALLBACK: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn from_rtl(rtl: bool) -> Self {
        if rtl {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Write side of the document root the preference store drives.
pub trait PresentationSurface {
    fn set_class(&mut self, name: &str, enabled: bool);
    fn remove_classes(&mut self, names: &[&str]);
    fn set_direction(&mut self, direction: Direction);
    fn set_font_size_px(&mut self, size: i64);
    fn set_font_family(&mut self, family: &str);
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// In-memory document root element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
    direction: Direction,
    font_size_px: Option<i64>,
    font_family: Option<String>,
    style_properties: BTreeMap<String, String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Space-separated class attribute, in stable order.
    pub fn class_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn font_size_px(&self) -> Option<i64> {
        self.font_size_px
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style_properties.get(name).map(String::as_str)
    }

    pub fn style_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style_properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn stylesheet(&self) -> String {
        render_stylesheet(self)
    }
}

impl PresentationSurface for DocumentRoot {
    fn set_class(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.classes.insert(name.to_string());
        } else {
            self.classes.remove(name);
        }
    }

    fn remove_classes(&mut self, names: &[&str]) {
        for name in names {
            self.classes.remove(*name);
        }
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn set_font_size_px(&mut self, size: i64) {
        self.font_size_px = Some(size);
    }

    fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(format!("{family}, {FONT_FALLBACK}"));
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style_properties
            .insert(name.to_string(), value.to_string());
    }
}
