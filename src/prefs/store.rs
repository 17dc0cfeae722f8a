use crate::presentation::PresentationSurface;
use crate::storage::PreferenceStorage;

use super::action::PreferenceAction;
use super::effects;
use super::error::PreferenceResult;
use super::model::{
    clamp_font_size, step_size_multiplier, Layout, PreferenceState, DEFAULT_SIZE_MULTIPLIER,
    SIZE_STEP,
};
use super::snapshot::{decode_snapshot, encode_snapshot};

pub const STORAGE_KEY: &str = "ui-preferences";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&PreferenceState)>;

/// Single owner of the interface preferences.
///
/// Every action commits the new state, mirrors it onto the presentation
/// surface, writes the persisted subset to storage and then notifies
/// subscribers, all before returning.
pub struct PreferenceStore<S, P> {
    state: PreferenceState,
    storage: S,
    surface: P,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: PreferenceStorage, P: PresentationSurface> PreferenceStore<S, P> {
    /// Restores the persisted snapshot (or defaults) and applies it to `surface`.
    pub fn load(storage: S, mut surface: P) -> Self {
        let state = read_snapshot(&storage);
        effects::apply_all(&mut surface, &state);
        tracing::debug!(?state, "preferences loaded");

        Self {
            state,
            storage,
            surface,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_parts(self) -> (S, P) {
        (self.storage, self.surface)
    }

    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&PreferenceState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn dispatch(&mut self, action: PreferenceAction) {
        tracing::debug!(?action, "dispatch preference action");
        let persist = action.touches_persisted_state();
        match action {
            PreferenceAction::ToggleDarkMode => {
                self.state.dark_mode = !self.state.dark_mode;
                effects::apply_dark_mode(&mut self.surface, self.state.dark_mode);
            }
            PreferenceAction::ToggleHighContrast => {
                self.state.high_contrast = !self.state.high_contrast;
                effects::apply_high_contrast(&mut self.surface, self.state.high_contrast);
            }
            PreferenceAction::ToggleRtl => {
                self.state.rtl = !self.state.rtl;
                effects::apply_rtl(&mut self.surface, self.state.rtl);
            }
            PreferenceAction::ToggleCompactMode => {
                self.state.compact_mode = !self.state.compact_mode;
                effects::apply_compact_mode(&mut self.surface, self.state.compact_mode);
            }
            PreferenceAction::TogglePresentationMode => {
                self.state.presentation_mode = !self.state.presentation_mode;
                effects::apply_presentation_mode(&mut self.surface, self.state.presentation_mode);
            }
            PreferenceAction::SetFontFamily(family) => {
                effects::apply_font_family(&mut self.surface, &family);
                self.state.font_family = family;
            }
            PreferenceAction::SetFontSize(size) => {
                self.state.font_size = clamp_font_size(size);
                effects::apply_font_size(&mut self.surface, self.state.font_size);
            }
            PreferenceAction::SetLayout(layout) => {
                self.state.layout = layout;
                effects::apply_layout(&mut self.surface, layout);
            }
            PreferenceAction::SetPrimaryColor(color) => {
                effects::apply_primary_color(&mut self.surface, &color);
                self.state.primary_color = color;
            }
            PreferenceAction::IncreaseSize => {
                self.set_size_multiplier(step_size_multiplier(
                    self.state.size_multiplier,
                    SIZE_STEP,
                ));
            }
            PreferenceAction::DecreaseSize => {
                self.set_size_multiplier(step_size_multiplier(
                    self.state.size_multiplier,
                    -SIZE_STEP,
                ));
            }
            PreferenceAction::ResetSize => {
                self.set_size_multiplier(DEFAULT_SIZE_MULTIPLIER);
            }
            PreferenceAction::ResetSettings => {
                self.state = PreferenceState::default();
                effects::reset_all(&mut self.surface);
            }
        }
        self.commit(persist);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(PreferenceAction::ToggleDarkMode);
    }

    pub fn toggle_high_contrast(&mut self) {
        self.dispatch(PreferenceAction::ToggleHighContrast);
    }

    pub fn toggle_rtl(&mut self) {
        self.dispatch(PreferenceAction::ToggleRtl);
    }

    pub fn toggle_compact_mode(&mut self) {
        self.dispatch(PreferenceAction::ToggleCompactMode);
    }

    pub fn toggle_presentation_mode(&mut self) {
        self.dispatch(PreferenceAction::TogglePresentationMode);
    }

    /// Accepts any name; unknown families pass through unchanged.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.dispatch(PreferenceAction::SetFontFamily(family.into()));
    }

    /// Out-of-range sizes are clamped into 12..=24.
    pub fn set_font_size(&mut self, size: i64) {
        self.dispatch(PreferenceAction::SetFontSize(size));
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.dispatch(PreferenceAction::SetLayout(layout));
    }

    /// Parses `name` as a layout; unknown names leave the state untouched.
    pub fn set_layout_named(&mut self, name: &str) -> PreferenceResult<()> {
        let layout = name.parse::<Layout>().inspect_err(|err| {
            tracing::warn!(%err, "rejected layout change");
        })?;
        self.set_layout(layout);
        Ok(())
    }

    /// Accepts any CSS color string without validation.
    pub fn set_primary_color(&mut self, color: impl Into<String>) {
        self.dispatch(PreferenceAction::SetPrimaryColor(color.into()));
    }

    pub fn increase_size(&mut self) {
        self.dispatch(PreferenceAction::IncreaseSize);
    }

    pub fn decrease_size(&mut self) {
        self.dispatch(PreferenceAction::DecreaseSize);
    }

    pub fn reset_size(&mut self) {
        self.dispatch(PreferenceAction::ResetSize);
    }

    pub fn reset_settings(&mut self) {
        self.dispatch(PreferenceAction::ResetSettings);
    }

    fn set_size_multiplier(&mut self, multiplier: f64) {
        self.state.size_multiplier = multiplier;
        effects::apply_size_multiplier(&mut self.surface, multiplier);
    }

    fn commit(&mut self, persist: bool) {
        if persist {
            self.persist();
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }

    fn persist(&mut self) {
        let serialized = match encode_snapshot(&self.state) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(?err, "failed to encode preference snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.write(STORAGE_KEY, &serialized) {
            tracing::warn!(%err, key = STORAGE_KEY, "failed to persist preferences");
        }
    }
}

fn read_snapshot<S: PreferenceStorage>(storage: &S) -> PreferenceState {
    let serialized = match storage.read(STORAGE_KEY) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => return PreferenceState::default(),
        Err(err) => {
            tracing::warn!(%err, key = STORAGE_KEY, "failed to read preferences; using defaults");
            return PreferenceState::default();
        }
    };
    decode_snapshot(&serialized).unwrap_or_else(|rejection| {
        tracing::warn!(
            ?rejection,
            key = STORAGE_KEY,
            "stored preferences rejected; using defaults"
        );
        PreferenceState::default()
    })
}

impl<S, P> std::fmt::Debug for PreferenceStore<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
