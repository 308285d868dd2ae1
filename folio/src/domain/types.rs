//! Domain types providing compile-time safety and self-documentation
//!
//! Tabs, request classes and request sequence numbers are small enough to be
//! plain integers or strings; the wrappers keep them from being mixed up.

use std::fmt;

/// One of the four mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Tab {
    #[default]
    Profile,
    Projects,
    Skills,
    /// Reachable only once a global search has succeeded
    Search,
}

impl Tab {
    /// Tabs in navigation order
    pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Projects, Tab::Skills, Tab::Search];

    pub fn index(self) -> usize {
        match self {
            Tab::Profile => 0,
            Tab::Projects => 1,
            Tab::Skills => 2,
            Tab::Search => 3,
        }
    }

    /// Tab for a 1-based number key (`'1'` → Profile).
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Profile => "profile",
            Tab::Projects => "projects",
            Tab::Skills => "skills",
            Tab::Search => "search",
        };
        f.write_str(name)
    }
}

/// Kind of request. Sequence numbers are tracked per class, so a skill filter
/// never supersedes a search and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionClass {
    Profile,
    ProjectsBySkill,
    Search,
}

impl fmt::Display for ActionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionClass::Profile => "profile",
            ActionClass::ProjectsBySkill => "projects-by-skill",
            ActionClass::Search => "search",
        };
        f.write_str(name)
    }
}

/// Request sequence number, monotonically increasing within one
/// [`ActionClass`]. Zero means "nothing issued yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestSeq(pub u64);

impl RequestSeq {
    #[must_use]
    pub fn next(self) -> RequestSeq {
        RequestSeq(self.0 + 1)
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
