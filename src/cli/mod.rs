//! `dashshell` command-line surface.
//!
//! Each invocation loads the store from its slot, runs at most one action
//! and prints the result. Presentation mode is session-only, so toggling it
//! here only affects the printed state.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{config_env_dirs, load_app_config, AppConfig};
use crate::error::AppResult;
use crate::logging;
use crate::prefs::{PreferenceAction, PreferenceStore};
use crate::presentation::DocumentRoot;
use crate::shell::{online_count, search_contacts, search_nav_items, CONTACTS, NAV_ITEMS};
use crate::storage::{FileStorage, PreferenceStorage};

#[derive(Debug, Parser)]
#[command(name = "dashshell", version, about = "Inspect and change dashboard UI preferences")]
pub struct Cli {
    /// Directory holding the preference slot (overrides config.json).
    #[arg(long, global = true, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current preferences as JSON.
    Show,
    /// Print the stylesheet the preferences produce.
    Css,
    /// Flip a boolean preference.
    Toggle {
        #[arg(value_enum)]
        target: ToggleTarget,
    },
    /// Set the font family (any name is accepted).
    FontFamily { name: String },
    /// Set the root font size in pixels; clamped to 12..=24.
    FontSize {
        #[arg(allow_negative_numbers = true)]
        size: i64,
    },
    /// Set the layout: default, wide or narrow.
    Layout { name: String },
    /// Set the accent color (any CSS color string).
    Color { color: String },
    /// Step or reset the size multiplier.
    Size {
        #[arg(value_enum)]
        step: SizeStep,
    },
    /// Restore every preference to its default.
    Reset,
    /// Filter the navigation items by title or path.
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Filter the contact list by name, role or email.
    Contacts {
        #[arg(default_value = "")]
        term: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleTarget {
    Dark,
    Contrast,
    Rtl,
    Compact,
    Presentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeStep {
    Up,
    Down,
    Reset,
}

impl Command {
    /// The store action this command maps to, if it maps to exactly one.
    pub fn preference_action(&self) -> Option<PreferenceAction> {
        let action = match self {
            Command::Toggle { target } => match target {
                ToggleTarget::Dark => PreferenceAction::ToggleDarkMode,
                ToggleTarget::Contrast => PreferenceAction::ToggleHighContrast,
                ToggleTarget::Rtl => PreferenceAction::ToggleRtl,
                ToggleTarget::Compact => PreferenceAction::ToggleCompactMode,
                ToggleTarget::Presentation => PreferenceAction::TogglePresentationMode,
            },
            Command::FontFamily { name } => PreferenceAction::SetFontFamily(name.clone()),
            Command::FontSize { size } => PreferenceAction::SetFontSize(*size),
            Command::Color { color } => PreferenceAction::SetPrimaryColor(color.clone()),
            Command::Size { step } => match step {
                SizeStep::Up => PreferenceAction::IncreaseSize,
                SizeStep::Down => PreferenceAction::DecreaseSize,
                SizeStep::Reset => PreferenceAction::ResetSize,
            },
            Command::Reset => PreferenceAction::ResetSettings,
            Command::Show
            | Command::Css
            | Command::Layout { .. }
            | Command::Search { .. }
            | Command::Contacts { .. } => return None,
        };
        Some(action)
    }
}

/// Entrypoint for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config();
    logging::init(config.log_filter.as_deref());

    let (xdg_config_home, home) = config_env_dirs();
    let storage = open_storage(
        cli.storage_dir.clone(),
        &config,
        xdg_config_home.as_deref(),
        home.as_deref(),
    )?;
    tracing::debug!(dir = %storage.dir().display(), "using preference storage");

    let mut store = PreferenceStore::load(storage, DocumentRoot::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &mut store, &mut out)?;
    Ok(())
}

/// Picks the slot directory: `--storage-dir`, then `config.json`, then the app config dir.
pub fn open_storage(
    flag: Option<PathBuf>,
    config: &AppConfig,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> AppResult<FileStorage> {
    match flag.or_else(|| config.storage_dir.clone()) {
        Some(dir) => Ok(FileStorage::new(dir)),
        None => Ok(FileStorage::in_config_dir(xdg_config_home, home)?),
    }
}

pub fn execute<S, W>(
    command: &Command,
    store: &mut PreferenceStore<S, DocumentRoot>,
    out: &mut W,
) -> AppResult<()>
where
    S: PreferenceStorage,
    W: Write,
{
    if let Some(action) = command.preference_action() {
        store.dispatch(action);
        return print_state(store, out);
    }

    match command {
        Command::Show => print_state(store, out),
        Command::Css => {
            out.write_all(store.surface().stylesheet().as_bytes())?;
            Ok(())
        }
        Command::Layout { name } => {
            store.set_layout_named(name)?;
            print_state(store, out)
        }
        Command::Search { term } => {
            let matches = search_nav_items(&NAV_ITEMS, term);
            if matches.is_empty() {
                writeln!(out, "No results found for \"{term}\"")?;
            }
            for item in matches {
                writeln!(out, "{}\t{}\t{}", item.title, item.path, item.badges.join(", "))?;
            }
            Ok(())
        }
        Command::Contacts { term } => {
            let matches = search_contacts(&CONTACTS, term);
            for contact in &matches {
                let status = if contact.online {
                    "online"
                } else {
                    contact.last_seen.unwrap_or("offline")
                };
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    contact.name,
                    contact.role.unwrap_or("-"),
                    contact.email,
                    status
                )?;
            }
            writeln!(
                out,
                "Showing {} of {} team members ({} online)",
                matches.len(),
                CONTACTS.len(),
                online_count(&matches)
            )?;
            Ok(())
        }
        Command::Toggle { .. }
        | Command::FontFamily { .. }
        | Command::FontSize { .. }
        | Command::Color { .. }
        | Command::Size { .. }
        | Command::Reset => unreachable!("{command:?} maps to a store action"),
    }
}

fn print_state<S, W>(store: &PreferenceStore<S, DocumentRoot>, out: &mut W) -> AppResult<()>
where
    S: PreferenceStorage,
    W: Write,
{
    let rendered = serde_json::to_string_pretty(store.state())?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
