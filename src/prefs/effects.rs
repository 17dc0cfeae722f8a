use crate::presentation::{
    Direction, PresentationSurface, COMPACT_CLASS, DARK_CLASS, FONT_FAMILY_PROPERTY,
    HIGH_CONTRAST_CLASS, PRESENTATION_MODE_CLASS, PRIMARY_COLOR_PROPERTY,
    SIZE_MULTIPLIER_PROPERTY,
};

use super::model::{Layout, PreferenceState};

pub(super) fn apply_dark_mode<P: PresentationSurface>(surface: &mut P, enabled: bool) {
    surface.set_class(DARK_CLASS, enabled);
}

pub(super) fn apply_high_contrast<P: PresentationSurface>(surface: &mut P, enabled: bool) {
    surface.set_class(HIGH_CONTRAST_CLASS, enabled);
}

pub(super) fn apply_compact_mode<P: PresentationSurface>(surface: &mut P, enabled: bool) {
    surface.set_class(COMPACT_CLASS, enabled);
}

pub(super) fn apply_presentation_mode<P: PresentationSurface>(surface: &mut P, enabled: bool) {
    surface.set_class(PRESENTATION_MODE_CLASS, enabled);
}

pub(super) fn apply_rtl<P: PresentationSurface>(surface: &mut P, rtl: bool) {
    surface.set_direction(Direction::from_rtl(rtl));
}

pub(super) fn apply_font_family<P: PresentationSurface>(surface: &mut P, family: &str) {
    surface.set_style_property(FONT_FAMILY_PROPERTY, family);
    surface.set_font_family(family);
}

pub(super) fn apply_font_size<P: PresentationSurface>(surface: &mut P, size: i64) {
    surface.set_font_size_px(size);
}

pub(super) fn apply_layout<P: PresentationSurface>(surface: &mut P, layout: Layout) {
    surface.remove_classes(&Layout::class_names());
    surface.set_class(layout.class_name(), true);
}

pub(super) fn apply_primary_color<P: PresentationSurface>(surface: &mut P, color: &str) {
    surface.set_style_property(PRIMARY_COLOR_PROPERTY, color);
}

pub(super) fn apply_size_multiplier<P: PresentationSurface>(surface: &mut P, multiplier: f64) {
    surface.set_style_property(SIZE_MULTIPLIER_PROPERTY, &multiplier.to_string());
}

/// Pushes every field of `state` to the surface.
pub(super) fn apply_all<P: PresentationSurface>(surface: &mut P, state: &PreferenceState) {
    apply_dark_mode(surface, state.dark_mode);
    apply_high_contrast(surface, state.high_contrast);
    apply_compact_mode(surface, state.compact_mode);
    apply_presentation_mode(surface, state.presentation_mode);
    apply_rtl(surface, state.rtl);
    apply_font_family(surface, &state.font_family);
    apply_font_size(surface, state.font_size);
    apply_layout(surface, state.layout);
    apply_primary_color(surface, &state.primary_color);
    apply_size_multiplier(surface, state.size_multiplier);
}

/// Removes every marker a previous action may have added, then applies defaults.
pub(super) fn reset_all<P: PresentationSurface>(surface: &mut P) {
    surface.remove_classes(&[
        DARK_CLASS,
        HIGH_CONTRAST_CLASS,
        COMPACT_CLASS,
        PRESENTATION_MODE_CLASS,
    ]);
    apply_all(surface, &PreferenceState::default());
}
