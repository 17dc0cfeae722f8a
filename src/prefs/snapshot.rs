//! Persisted subset of [`PreferenceState`] and its storage envelope.
//!
//! The slot holds `{"state": {...}, "version": 0}`. Loading is lenient per
//! field but strict about the envelope: anything that does not look like the
//! current shape yields full defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::model::{clamp_font_size, snap_size_multiplier, Layout, PreferenceState};

pub const SNAPSHOT_VERSION: u64 = 0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedPreferences<'a> {
    dark_mode: bool,
    high_contrast: bool,
    rtl: bool,
    compact_mode: bool,
    font_family: &'a str,
    font_size: i64,
    layout: Layout,
    primary_color: &'a str,
    size_multiplier: f64,
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    state: PersistedPreferences<'a>,
    version: u64,
}

pub fn encode_snapshot(state: &PreferenceState) -> serde_json::Result<String> {
    let envelope = Envelope {
        state: PersistedPreferences {
            dark_mode: state.dark_mode,
            high_contrast: state.high_contrast,
            rtl: state.rtl,
            compact_mode: state.compact_mode,
            font_family: &state.font_family,
            font_size: state.font_size,
            layout: state.layout,
            primary_color: &state.primary_color,
            size_multiplier: state.size_multiplier,
        },
        version: SNAPSHOT_VERSION,
    };
    serde_json::to_string(&envelope)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRejection {
    Malformed,
    NotAnObject,
    MissingState,
    UnsupportedVersion(Option<u64>),
}

/// Overlays a stored snapshot on the defaults.
pub fn decode_snapshot(serialized: &str) -> Result<PreferenceState, SnapshotRejection> {
    let raw: Value = serde_json::from_str(serialized).map_err(|_| SnapshotRejection::Malformed)?;
    let envelope = raw.as_object().ok_or(SnapshotRejection::NotAnObject)?;

    match envelope.get("version") {
        None => {}
        Some(version) if version.as_u64() == Some(SNAPSHOT_VERSION) => {}
        Some(version) => return Err(SnapshotRejection::UnsupportedVersion(version.as_u64())),
    }

    let fields = envelope
        .get("state")
        .and_then(Value::as_object)
        .ok_or(SnapshotRejection::MissingState)?;

    let defaults = PreferenceState::default();
    Ok(PreferenceState {
        dark_mode: field(fields, "darkMode").unwrap_or(defaults.dark_mode),
        high_contrast: field(fields, "highContrast").unwrap_or(defaults.high_contrast),
        rtl: field(fields, "rtl").unwrap_or(defaults.rtl),
        compact_mode: field(fields, "compactMode").unwrap_or(defaults.compact_mode),
        font_family: field(fields, "fontFamily").unwrap_or(defaults.font_family),
        font_size: field(fields, "fontSize")
            .map(clamp_font_size)
            .unwrap_or(defaults.font_size),
        layout: field(fields, "layout").unwrap_or(defaults.layout),
        primary_color: field(fields, "primaryColor").unwrap_or(defaults.primary_color),
        size_multiplier: field(fields, "sizeMultiplier")
            .map(snap_size_multiplier)
            .unwrap_or(defaults.size_multiplier),
        presentation_mode: defaults.presentation_mode,
    })
}

fn field<T: DeserializeOwned>(fields: &Map<String, Value>, name: &str) -> Option<T> {
    let value = fields.get(name)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(field = name, ?err, "ignoring unreadable stored preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_snapshot_holds_only_persisted_fields() {
        let state = PreferenceState {
            presentation_mode: true,
            ..PreferenceState::default()
        };
        let encoded = encode_snapshot(&state).unwrap();
        let raw: Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(raw["version"], 0);
        let fields = raw["state"].as_object().unwrap();
        let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "compactMode",
                "darkMode",
                "fontFamily",
                "fontSize",
                "highContrast",
                "layout",
                "primaryColor",
                "rtl",
                "sizeMultiplier",
            ]
        );
        assert_eq!(fields["layout"], "default");
    }

    #[test]
    fn decode_overlays_present_fields_on_defaults() {
        let state = decode_snapshot(
            r##"{"state": {"darkMode": true, "layout": "narrow", "primaryColor": "#10b981"}, "version": 0}"##,
        )
        .unwrap();

        assert!(state.dark_mode);
        assert_eq!(state.layout, Layout::Narrow);
        assert_eq!(state.primary_color, "#10b981");
        assert_eq!(state.font_size, 16);
        assert_eq!(state.font_family, "system-ui");
    }

    #[test]
    fn decode_keeps_default_for_wrongly_typed_fields() {
        let state = decode_snapshot(
            r#"{"state": {"darkMode": "yes", "fontSize": "big", "layout": "sideways", "rtl": true}}"#,
        )
        .unwrap();

        assert!(!state.dark_mode);
        assert_eq!(state.font_size, 16);
        assert_eq!(state.layout, Layout::Default);
        assert!(state.rtl);
    }

    #[test]
    fn decode_clamps_out_of_range_numbers() {
        let state =
            decode_snapshot(r#"{"state": {"fontSize": 99, "sizeMultiplier": 0.1}, "version": 0}"#)
                .unwrap();
        assert_eq!(state.font_size, 24);
        assert_eq!(state.size_multiplier, 0.8);
    }

    #[test]
    fn decode_ignores_stored_presentation_mode() {
        let state =
            decode_snapshot(r#"{"state": {"presentationMode": true}, "version": 0}"#).unwrap();
        assert!(!state.presentation_mode);
    }

    #[test]
    fn decode_rejects_unknown_shapes() {
        assert_eq!(
            decode_snapshot("{ invalid "),
            Err(SnapshotRejection::Malformed)
        );
        assert_eq!(decode_snapshot("[1, 2]"), Err(SnapshotRejection::NotAnObject));
        assert_eq!(
            decode_snapshot(r#"{"darkMode": true}"#),
            Err(SnapshotRejection::MissingState)
        );
        assert_eq!(
            decode_snapshot(r#"{"state": {}, "version": 3}"#),
            Err(SnapshotRejection::UnsupportedVersion(Some(3)))
        );
    }
}
