//! Local state of the navigation shell.
//!
//! None of this is persisted and none of it is coordinated with the
//! preference store: each piece is an independent toggle or filter.

pub mod carousel;
pub mod catalog;
pub mod language;
pub mod panels;

use thiserror::Error;

pub use carousel::{Carousel, Slide, FEATURED_SLIDES};
pub use catalog::{
    online_count, search_contacts, search_nav_items, Contact, NavItem, NavSearch, CONTACTS,
    NAV_ITEMS,
};
pub use language::{Language, LanguageSelector, LANGUAGES};
pub use panels::{MenuSection, MenuSections, Panel, ShellPanels, MENU_SECTIONS};

pub type ShellResult<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("slide index {index} out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
}
