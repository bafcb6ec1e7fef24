//! The pages reachable from the navigation sidebar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A content page of the dashboard.
///
/// # Examples
///
/// ```
/// use snvl_protocol::Page;
///
/// assert_eq!(Page::Tables.title(), "Data Tables");
/// assert_eq!("kanban".parse::<Page>(), Ok(Page::Kanban));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Metric cards and charts.
    #[default]
    Analytics,
    /// The user management table.
    Tables,
    /// The month grid of events.
    Calendar,
    /// The task board.
    Kanban,
}

impl Page {
    /// Returns every page in sidebar order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Analytics, Self::Tables, Self::Calendar, Self::Kanban]
    }

    /// Returns the sidebar entry and header title of this page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tables => "Data Tables",
            Self::Calendar => "Calendar",
            Self::Kanban => "Kanban Board",
        }
    }

    /// Returns the one-line description shown under the title.
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Analytics => "Comprehensive insights into your data performance.",
            Self::Tables => "Manage and view your data with interactive tables.",
            Self::Calendar => "Manage your schedule and upcoming events.",
            Self::Kanban => "Organize and track your tasks.",
        }
    }

    /// Returns the machine name of this page.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::Tables => "tables",
            Self::Calendar => "calendar",
            Self::Kanban => "kanban",
        }
    }

    /// Returns the position of this page in the sidebar (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Analytics => 0,
            Self::Tables => 1,
            Self::Calendar => 2,
            Self::Kanban => 3,
        }
    }

    /// Creates a `Page` from its sidebar position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Analytics),
            1 => Some(Self::Tables),
            2 => Some(Self::Calendar),
            3 => Some(Self::Kanban),
            _ => None,
        }
    }

    /// Returns the following page, wrapping around.
    #[must_use]
    pub const fn cycle_next(self) -> Self {
        match Self::from_index((self.index() + 1) % 4) {
            Some(page) => page,
            None => self,
        }
    }

    /// Returns the preceding page, wrapping around.
    #[must_use]
    pub const fn cycle_previous(self) -> Self {
        match Self::from_index((self.index() + 3) % 4) {
            Some(page) => page,
            None => self,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| ProtocolError::UnknownView(s.to_string()))
    }
}
