use super::model::Layout;

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceAction {
    ToggleDarkMode,
    ToggleHighContrast,
    ToggleRtl,
    ToggleCompactMode,
    TogglePresentationMode,
    SetFontFamily(String),
    SetFontSize(i64),
    SetLayout(Layout),
    SetPrimaryColor(String),
    IncreaseSize,
    DecreaseSize,
    ResetSize,
    ResetSettings,
}

impl PreferenceAction {
    /// Whether committing this action can change a persisted field.
    pub fn touches_persisted_state(&self) -> bool {
        !matches!(self, PreferenceAction::TogglePresentationMode)
    }
}
