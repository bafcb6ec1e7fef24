//! Series and headline figures shown on the analytics page.

use serde::{Deserialize, Serialize};

/// Traffic figures for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTraffic {
    /// Abbreviated month name.
    pub month: String,
    /// Number of page views.
    pub page_views: u64,
    /// Number of distinct visitors.
    pub unique_visitors: u64,
    /// Share of single-page sessions, in percent.
    pub bounce_rate: u64,
}

/// Visitors arriving through one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSource {
    /// Channel name.
    pub source: String,
    /// Number of visitors.
    pub visitors: u64,
    /// Share of all visitors, in percent.
    pub percentage: u64,
}

/// Direction of a metric compared to the previous month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// The figure went up.
    Up,
    /// The figure went down.
    Down,
}

/// A headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Card title.
    pub title: String,
    /// Formatted current value.
    pub value: String,
    /// Formatted month-over-month change, e.g. `+12.5%`.
    pub change: String,
    /// Whether the change is an increase or a decrease.
    pub trend: Trend,
}

impl MetricCard {
    /// Returns the caption under the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::{MetricCard, Trend};
    ///
    /// let card = MetricCard {
    ///     title: "Bounce Rate".to_string(),
    ///     value: "42.3%".to_string(),
    ///     change: "-2.1%".to_string(),
    ///     trend: Trend::Down,
    /// };
    /// assert_eq!(card.caption(), "-2.1% from last month");
    /// ```
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} from last month", self.change)
    }
}

/// One figure of the user behaviour tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorStat {
    /// Formatted value.
    pub value: String,
    /// What the value measures.
    pub label: String,
}

/// Everything the analytics page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsData {
    /// Headline cards.
    pub metrics: Vec<MetricCard>,
    /// Monthly traffic, oldest first.
    pub monthly: Vec<MonthlyTraffic>,
    /// Traffic channels, largest first.
    pub sources: Vec<TrafficSource>,
    /// User behaviour figures.
    pub behavior: Vec<BehaviorStat>,
}

impl AnalyticsData {
    /// Returns the largest monthly page view or visitor count.
    ///
    /// Used as the upper bound of the overview chart.
    #[must_use]
    pub fn peak_traffic(&self) -> u64 {
        self.monthly
            .iter()
            .map(|month| month.page_views.max(month.unique_visitors))
            .max()
            .unwrap_or(0)
    }

    /// Returns the total visitors across every source.
    #[must_use]
    pub fn total_source_visitors(&self) -> u64 {
        self.sources.iter().map(|source| source.visitors).sum()
    }
}
