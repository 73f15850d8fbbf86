use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four top-level views of the quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Tasks,
    Resources,
    Results,
}

impl Section {
    /// Navigation bar order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Tasks,
        Section::Resources,
        Section::Results,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Tasks => "tasks",
            Section::Resources => "resources",
            Section::Results => "results",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Tasks => "Tasks",
            Section::Resources => "Resources",
            Section::Results => "Results",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for section names coming from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError {
    raw: String,
}

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown section {:?} (expected home, tasks, resources or results)",
            self.raw
        )
    }
}

impl std::error::Error for ParseSectionError {}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseSectionError { raw: s.to_string() })
    }
}

/// Holds the active section. Every section is reachable from every other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Section,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start(section: Section) -> Self {
        Self { current: section }
    }

    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    /// Switch to `section`, returning the one that was active.
    pub fn navigate(&mut self, section: Section) -> Section {
        std::mem::replace(&mut self.current, section)
    }
}
