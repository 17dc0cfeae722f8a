use std::time::Duration;

use super::{ShellError, ShellResult};

/// How long the "language changed" notice stays up before it dismisses itself.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 5] = [
    Language {
        code: "GB",
        name: "English",
    },
    Language {
        code: "FR",
        name: "French",
    },
    Language {
        code: "VN",
        name: "Vietnamese",
    },
    Language {
        code: "CN",
        name: "Chinese",
    },
    Language {
        code: "SA",
        name: "Arabic",
    },
];

/// Flag dropdown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelector {
    selected: Language,
    open: bool,
    notice_visible: bool,
}

impl Default for LanguageSelector {
    fn default() -> Self {
        Self {
            selected: LANGUAGES[0],
            open: false,
            notice_visible: false,
        }
    }
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Language {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Switches language, closes the dropdown and raises the change notice.
    pub fn select(&mut self, code: &str) -> ShellResult<Language> {
        let language = LANGUAGES
            .iter()
            .find(|language| language.code.eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| ShellError::UnknownLanguage(code.to_string()))?;

        self.selected = language;
        self.open = false;
        self.notice_visible = true;
        tracing::debug!(code = language.code, "language selected");
        Ok(language)
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_visible
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_visible = false;
    }

    /// Dismisses the notice once it has been shown for [`NOTICE_DURATION`].
    pub fn tick_notice(&mut self, shown_for: Duration) {
        if shown_for >= NOTICE_DURATION {
            self.dismiss_notice();
        }
    }
}
