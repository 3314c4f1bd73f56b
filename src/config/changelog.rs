//! Release notes shown in the About panel.

/// One release in the changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub date: &'static str,
    pub version: &'static str,
    pub changes: &'static [&'static str],
}

/// Newest first.
pub const CHANGELOG: &[ChangelogEntry] = &[
    ChangelogEntry {
        date: "2025-07-14",
        version: "0.2.0",
        changes: &[
            "Added the changelog",
            "Reworked the site structure",
            "Added three GPUs (B570, 5050, 5050M)",
            "Fixed the baseline-mode percentage calculation",
        ],
    },
    ChangelogEntry {
        date: "2025-06-16",
        version: "0.1.0",
        changes: &["First release"],
    },
];

/// Most recent changelog entry.
pub fn latest() -> Option<&'static ChangelogEntry> {
    CHANGELOG.first()
}
