//! Navigation - Page Registry

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    /// Announcement feed
    #[default]
    Dashboard,
    /// Officer roster table
    Roster,
}

impl ActivePage {
    pub fn all() -> [ActivePage; 2] {
        [ActivePage::Dashboard, ActivePage::Roster]
    }

    /// Stable identifier used for element ids
    pub fn id(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "dashboard",
            ActivePage::Roster => "roster",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "▤",
            ActivePage::Roster => "☰",
        }
    }

    /// Translation key for the sidebar label
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "nav-dashboard",
            ActivePage::Roster => "nav-roster",
        }
    }
}
