#![forbid(unsafe_code)]

//! Page sections reachable through same-page anchors.

/// One anchored section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Sections in the order they appear on the page.
    pub const PAGE_ORDER: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections in the order the navigation bar lists them.
    pub const NAV_ORDER: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Anchor id (the fragment after `#`).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// `#anchor` href for in-page links.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Look up a section by its anchor id.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::PAGE_ORDER
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}
