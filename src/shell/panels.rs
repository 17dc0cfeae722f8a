#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Menu,
    Search,
    Notifications,
    Avatar,
    Settings,
    Contacts,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Menu,
        Panel::Search,
        Panel::Notifications,
        Panel::Avatar,
        Panel::Settings,
        Panel::Contacts,
    ];

    const fn index(self) -> usize {
        match self {
            Panel::Menu => 0,
            Panel::Search => 1,
            Panel::Notifications => 2,
            Panel::Avatar => 3,
            Panel::Settings => 4,
            Panel::Contacts => 5,
        }
    }
}

/// Open/closed flags for the shell's sidebars and overlays.
///
/// Flags are independent: opening one panel does not close another. The
/// backdrop is shown while any panel is open and clicking it closes all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellPanels {
    open: [bool; Panel::ALL.len()],
}

impl ShellPanels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open[panel.index()]
    }

    pub fn toggle(&mut self, panel: Panel) -> bool {
        let slot = &mut self.open[panel.index()];
        *slot = !*slot;
        tracing::trace!(?panel, open = *slot, "toggle shell panel");
        *slot
    }

    pub fn close_all(&mut self) {
        self.open = [false; Panel::ALL.len()];
    }

    pub fn any_open(&self) -> bool {
        self.open.iter().any(|open| *open)
    }

    pub fn open_panels(&self) -> impl Iterator<Item = Panel> + '_ {
        Panel::ALL.into_iter().filter(|panel| self.is_open(*panel))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuSection {
    pub key: &'static str,
    pub items: &'static [&'static str],
}

const CRUD_ITEMS: &[&str] = &["List", "Details", "Create", "Edit"];

pub const MENU_SECTIONS: [MenuSection; 12] = [
    MenuSection {
        key: "user",
        items: &["Profile", "Cards", "List", "Create", "Edit", "Account"],
    },
    MenuSection {
        key: "product",
        items: CRUD_ITEMS,
    },
    MenuSection {
        key: "order",
        items: &["List", "Details"],
    },
    MenuSection {
        key: "invoice",
        items: CRUD_ITEMS,
    },
    MenuSection {
        key: "blog",
        items: CRUD_ITEMS,
    },
    MenuSection {
        key: "job",
        items: CRUD_ITEMS,
    },
    MenuSection {
        key: "tour",
        items: CRUD_ITEMS,
    },
    MenuSection {
        key: "File manager",
        items: &["All files", "Recent", "Shared", "Starred", "Trash"],
    },
    MenuSection {
        key: "Mail",
        items: &["Inbox", "Sent", "Drafts", "Spam", "Trash"],
    },
    MenuSection {
        key: "Chat",
        items: &["Contacts", "Rooms", "Groups", "Archived"],
    },
    MenuSection {
        key: "Calendar",
        items: &["Month", "Week", "Day", "Agenda"],
    },
    MenuSection {
        key: "Kanban",
        items: &["Board", "Tasks", "Backlog", "Completed"],
    },
];

/// Expansion state of the hamburger sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSections {
    expanded: [bool; MENU_SECTIONS.len()],
    level_open: bool,
}

impl MenuSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &'static [MenuSection] {
        &MENU_SECTIONS
    }

    fn position(key: &str) -> Option<usize> {
        MENU_SECTIONS.iter().position(|section| section.key == key)
    }

    /// Unknown keys are ignored and report `None`.
    pub fn toggle_section(&mut self, key: &str) -> Option<bool> {
        let index = Self::position(key)?;
        self.expanded[index] = !self.expanded[index];
        Some(self.expanded[index])
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        Self::position(key).is_some_and(|index| self.expanded[index])
    }

    pub fn toggle_level(&mut self) -> bool {
        self.level_open = !self.level_open;
        self.level_open
    }

    pub fn is_level_open(&self) -> bool {
        self.level_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_one_panel_leaves_others_untouched() {
        let mut panels = ShellPanels::new();
        assert!(!panels.any_open());

        assert!(panels.toggle(Panel::Settings));
        assert!(panels.toggle(Panel::Contacts));

        assert!(panels.is_open(Panel::Settings));
        assert!(panels.is_open(Panel::Contacts));
        assert!(!panels.is_open(Panel::Menu));
        assert_eq!(
            panels.open_panels().collect::<Vec<_>>(),
            vec![Panel::Settings, Panel::Contacts]
        );

        assert!(!panels.toggle(Panel::Settings));
        assert!(panels.is_open(Panel::Contacts));
    }

    #[test]
    fn close_all_hides_backdrop() {
        let mut panels = ShellPanels::new();
        for panel in Panel::ALL {
            panels.toggle(panel);
        }
        assert!(panels.any_open());

        panels.close_all();

        assert!(!panels.any_open());
        assert_eq!(panels, ShellPanels::new());
    }

    #[test]
    fn menu_sections_start_collapsed_and_toggle_independently() {
        let mut menu = MenuSections::new();
        assert!(menu.sections().iter().all(|s| !menu.is_expanded(s.key)));

        assert_eq!(menu.toggle_section("Mail"), Some(true));
        assert_eq!(menu.toggle_section("user"), Some(true));
        assert_eq!(menu.toggle_section("Mail"), Some(false));

        assert!(menu.is_expanded("user"));
        assert!(!menu.is_expanded("Mail"));
        assert_eq!(menu.toggle_section("nonexistent"), None);
        assert!(!menu.is_expanded("nonexistent"));
    }

    #[test]
    fn level_dropdown_toggles() {
        let mut menu = MenuSections::new();
        assert!(!menu.is_level_open());
        assert!(menu.toggle_level());
        assert!(!menu.toggle_level());
    }
}
