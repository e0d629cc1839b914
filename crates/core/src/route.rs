//! Section routing: which of the mutually exclusive panels is visible.

/// Content panels of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Courses,
    Quiz,
    Forum,
    Account,
    Feedback,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Courses,
        Section::Quiz,
        Section::Forum,
        Section::Account,
        Section::Feedback,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Courses => "courses",
            Section::Quiz => "quiz",
            Section::Forum => "forum",
            Section::Account => "account",
            Section::Feedback => "feedback",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Courses => "Courses",
            Section::Quiz => "Quiz",
            Section::Forum => "Forum",
            Section::Account => "Account",
            Section::Feedback => "Feedback",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Navigation control state for rendering the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// Result of a navigation: the address to record and the visible section.
///
/// An unknown id yields no visible section; the address still reflects the
/// requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    fragment: String,
    visible: Option<Section>,
}

impl RouteState {
    /// State at load time. A missing or empty fragment, or one naming no
    /// section, lands on `home`.
    #[must_use]
    pub fn initial(fragment: Option<&str>) -> Self {
        let id = fragment.map(strip_hash).unwrap_or_default();
        match Section::from_id(id) {
            Some(_) => Self::navigate(id),
            None => Self::navigate(Section::Home.id()),
        }
    }

    /// Hide everything, then show `id` if such a section exists.
    #[must_use]
    pub fn navigate(id: &str) -> Self {
        let id = strip_hash(id);
        Self {
            fragment: format!("#{id}"),
            visible: Section::from_id(id),
        }
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[must_use]
    pub fn visible(&self) -> Option<Section> {
        self.visible
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible == Some(section)
    }

    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                active: self.is_visible(section),
            })
            .collect()
    }
}

fn strip_hash(raw: &str) -> &str {
    raw.trim().trim_start_matches('#')
}
