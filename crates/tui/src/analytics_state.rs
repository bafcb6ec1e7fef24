//! State of the analytics page.

/// A tab of the analytics charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsTab {
    /// Page views and visitors per month, plus the bounce rate trend.
    #[default]
    Overview,
    /// Visitors per traffic source.
    Traffic,
    /// Return visitors, pages per session and mobile share.
    Behavior,
}

impl AnalyticsTab {
    /// Returns the tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Overview, Self::Traffic, Self::Behavior]
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Traffic => "Traffic Sources",
            Self::Behavior => "User Behavior",
        }
    }

    /// Returns the position of this tab.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Traffic => 1,
            Self::Behavior => 2,
        }
    }
}

/// The selected tab of the analytics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticsState {
    /// The visible tab.
    pub tab: AnalyticsTab,
}

impl AnalyticsState {
    /// Shows the tab on the left, wrapping around.
    pub fn previous_tab(&mut self) {
        let tabs = AnalyticsTab::all();
        self.tab = tabs[(self.tab.index() + tabs.len() - 1) % tabs.len()];
    }

    /// Shows the tab on the right, wrapping around.
    pub fn next_tab(&mut self) {
        let tabs = AnalyticsTab::all();
        self.tab = tabs[(self.tab.index() + 1) % tabs.len()];
    }
}
