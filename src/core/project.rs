//! Known project catalog
//!
//! Projects are the content namespaces on the wiki backend. The catalog is a
//! closed set and its order is the display order used by callers.

use std::fmt;

/// Known wiki projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Project {
    Kondoumh,
    HelpJp,
    ComicForum,
    Icons,
}

impl Project {
    /// All projects in display order
    pub const ALL: [Project; 4] = [
        Project::Kondoumh,
        Project::HelpJp,
        Project::ComicForum,
        Project::Icons,
    ];

    /// Identifier as sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Kondoumh => "kondoumh",
            Project::HelpJp => "help-jp",
            Project::ComicForum => "comic-forum",
            Project::Icons => "icons",
        }
    }

    /// Look up a project by its exact identifier
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers of all known projects, in display order
pub fn get_projects() -> [&'static str; 4] {
    Project::ALL.map(|p| p.as_str())
}
