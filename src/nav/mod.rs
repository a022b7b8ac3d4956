//! Navigation model: the ordered sections of the portfolio and their
//! sub-sections.
//!
//! `NAV_ENTRIES` is the single table both the sidebar and the scroll tracker
//! read from; the section -> sub-section lookup is derived from it rather
//! than kept as a second map.

/// A secondary region nested inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// A top-level navigational/content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    /// Sidebar label.
    pub label: &'static str,
    /// Heading shown above the section's slides.
    pub title: &'static str,
    /// Sidebar icon glyph.
    pub icon: &'static str,
    /// Whether the content area draws the title header.
    pub shows_header: bool,
    pub sub_entries: &'static [SubEntry],
}

impl NavEntry {
    pub fn has_sub_sections(&self) -> bool {
        !self.sub_entries.is_empty()
    }
}

/// Sidebar header text.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const PROFILE: SiteProfile = SiteProfile {
    title: "Duy An",
    subtitle: "HUS High School for Gifted Students",
};

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: "biography",
        label: "Biography",
        title: "Biography",
        icon: "\u{2302}",
        shows_header: false,
        sub_entries: &[],
    },
    NavEntry {
        id: "education",
        label: "Education & Experience",
        title: "Education",
        icon: "\u{1F393}",
        shows_header: true,
        sub_entries: &[
            SubEntry { id: "education-main", label: "Education" },
            SubEntry { id: "experience", label: "Experience" },
        ],
    },
    NavEntry {
        id: "extracurricular",
        label: "Extracurricular Activities",
        title: "Extracurricular Activities",
        icon: "\u{2699}",
        shows_header: true,
        sub_entries: &[
            SubEntry { id: "clubs", label: "Club & Organization" },
            SubEntry { id: "volunteer", label: "Volunteer Work" },
        ],
    },
    NavEntry {
        id: "hobbies",
        label: "Hobbies",
        title: "Hobbies",
        icon: "\u{1F3A8}",
        shows_header: true,
        sub_entries: &[],
    },
    NavEntry {
        id: "goals",
        label: "Goals and mission",
        title: "Goals & Mission",
        icon: "\u{1F3AF}",
        shows_header: false,
        sub_entries: &[],
    },
];

/// The section the viewer starts on.
pub fn first_section() -> &'static str {
    NAV_ENTRIES[0].id
}

pub fn entry(id: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|e| e.id == id)
}

/// Ordered sub-section ids of `section_id`; empty for unknown ids and for
/// sections without sub-navigation.
pub fn sub_ids_for(section_id: &str) -> &'static [SubEntry] {
    entry(section_id).map(|e| e.sub_entries).unwrap_or(&[])
}

/// Every id that owns slides: sections without sub-sections plus all
/// sub-section ids, in display order.
pub fn slide_owner_ids() -> impl Iterator<Item = &'static str> {
    NAV_ENTRIES.iter().flat_map(|e| {
        let own = (!e.has_sub_sections()).then_some(e.id);
        own.into_iter().chain(e.sub_entries.iter().map(|s| s.id))
    })
}
