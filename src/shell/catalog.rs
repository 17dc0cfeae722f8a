//! Static navigation and contact lists plus their search filters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub badges: &'static [&'static str],
}

const OVERVIEW: &[&str] = &["Overview"];
const USER_MANAGEMENT: &[&str] = &["User", "Management"];
const PRODUCT_MANAGEMENT: &[&str] = &["Product", "Management"];

const fn nav(
    title: &'static str,
    path: &'static str,
    badges: &'static [&'static str],
) -> NavItem {
    NavItem {
        title,
        path,
        badges,
    }
}

pub static NAV_ITEMS: [NavItem; 12] = [
    nav("App", "/dashboard", OVERVIEW),
    nav("E-commerce", "/dashboard/E-commerce", OVERVIEW),
    nav("Analytics", "/dashboard/analytics", OVERVIEW),
    nav("Banking", "/dashboard/banking", OVERVIEW),
    nav("Booking", "/dashboard/booking", OVERVIEW),
    nav("Course", "/dashboard/Course", OVERVIEW),
    nav("User", "/dashboard/User", OVERVIEW),
    nav("Profile", "/dashboard/Profile", USER_MANAGEMENT),
    nav("Cards", "/dashboard/Cards", USER_MANAGEMENT),
    nav("List", "/dashboard/List", USER_MANAGEMENT),
    nav("Create", "/dashboard/Create", USER_MANAGEMENT),
    nav("details", "/dashboard/Details", PRODUCT_MANAGEMENT),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub role: Option<&'static str>,
    pub online: bool,
    pub last_seen: Option<&'static str>,
    pub email: &'static str,
}

const fn online(id: u32, name: &'static str, role: &'static str, email: &'static str) -> Contact {
    Contact {
        id,
        name,
        role: Some(role),
        online: true,
        last_seen: None,
        email,
    }
}

const fn away(
    id: u32,
    name: &'static str,
    role: &'static str,
    last_seen: &'static str,
    email: &'static str,
) -> Contact {
    Contact {
        id,
        name,
        role: Some(role),
        online: false,
        last_seen: Some(last_seen),
        email,
    }
}

pub static CONTACTS: [Contact; 20] = [
    online(1, "Alex Johnson", "Frontend Developer", "alex.johnson@example.com"),
    away(2, "Sarah Williams", "UX Designer", "2 days ago", "sarah.w@example.com"),
    online(3, "Michael Chen", "Backend Engineer", "michael.c@example.com"),
    away(4, "Emily Rodriguez", "Product Manager", "1 hour ago", "emily.r@example.com"),
    online(5, "David Kim", "DevOps Specialist", "david.k@example.com"),
    away(6, "Jessica Lee", "QA Engineer", "3 days ago", "jessica.l@example.com"),
    online(7, "Ryan Park", "Mobile Developer", "ryan.p@example.com"),
    away(8, "Olivia Martinez", "Data Scientist", "just now", "olivia.m@example.com"),
    online(9, "Daniel Wilson", "Team Lead", "daniel.w@example.com"),
    away(10, "Sophia Garcia", "Content Writer", "5 days ago", "sophia.g@example.com"),
    online(11, "James Brown", "UI Designer", "james.b@example.com"),
    away(12, "Emma Davis", "Marketing Specialist", "1 week ago", "emma.d@example.com"),
    online(13, "Matthew Taylor", "Fullstack Developer", "matthew.t@example.com"),
    away(14, "Ava Anderson", "HR Manager", "yesterday", "ava.a@example.com"),
    online(15, "Christopher Thomas", "System Architect", "chris.t@example.com"),
    away(16, "Mia Hernandez", "Customer Support", "4 days ago", "mia.h@example.com"),
    online(17, "Andrew White", "Database Admin", "andrew.w@example.com"),
    away(18, "Isabella Lopez", "Sales Executive", "2 weeks ago", "isabella.l@example.com"),
    online(19, "Joshua Gonzalez", "Security Specialist", "josh.g@example.com"),
    away(20, "Charlotte Perez", "Business Analyst", "1 month ago", "charlotte.p@example.com"),
];

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Items whose title or path contains `term`, ignoring case.
pub fn search_nav_items<'a>(items: &'a [NavItem], term: &str) -> Vec<&'a NavItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            contains_ignore_case(item.title, &needle) || contains_ignore_case(item.path, &needle)
        })
        .collect()
}

/// Contacts whose name, role or email contains `term`, ignoring case.
pub fn search_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    if term.is_empty() {
        return contacts.iter().collect();
    }
    let needle = term.to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            contains_ignore_case(contact.name, &needle)
                || contact
                    .role
                    .is_some_and(|role| contains_ignore_case(role, &needle))
                || contains_ignore_case(contact.email, &needle)
        })
        .collect()
}

pub fn online_count(contacts: &[&Contact]) -> usize {
    contacts.iter().filter(|contact| contact.online).count()
}

/// Search overlay input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavSearch {
    term: String,
    has_searched: bool,
}

impl NavSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.has_searched = !self.term.is_empty();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results(&self) -> Vec<&'static NavItem> {
        search_nav_items(&NAV_ITEMS, &self.term)
    }

    /// The "no results" message only shows once something has been typed.
    pub fn shows_empty_notice(&self) -> bool {
        self.has_searched && self.results().is_empty()
    }
}
