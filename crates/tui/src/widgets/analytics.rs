//! Analytics page: metric cards and tabbed charts.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
        Paragraph, Tabs, Widget,
    },
};
use snvl_protocol::{AnalyticsData, MetricCard, Trend};

use crate::analytics_state::{AnalyticsState, AnalyticsTab};
use crate::theme::Palette;

/// Height of a metric card.
const CARD_HEIGHT: u16 = 5;

/// Height of the tab bar.
const TABS_HEIGHT: u16 = 3;

fn block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {title} "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(false))
}

/// Renders the metric cards, the tab bar and the selected tab.
pub fn render_analytics(
    data: &AnalyticsData,
    state: &AnalyticsState,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let [cards_area, tabs_area, body_area] = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    let card_areas = Layout::horizontal(data.metrics.iter().map(|_| Constraint::Fill(1)))
        .split(cards_area);
    for (card, card_area) in data.metrics.iter().zip(card_areas.iter()) {
        render_metric_card(card, palette, *card_area, buf);
    }

    let titles = AnalyticsTab::all().map(AnalyticsTab::title);
    Tabs::new(titles)
        .select(state.tab.index())
        .style(palette.muted())
        .highlight_style(palette.selected())
        .divider("│")
        .block(block("Reports", palette))
        .render(tabs_area, buf);

    match state.tab {
        AnalyticsTab::Overview => render_overview(data, palette, body_area, buf),
        AnalyticsTab::Traffic => render_traffic(data, palette, body_area, buf),
        AnalyticsTab::Behavior => render_behavior(data, palette, body_area, buf),
    }
}

fn render_metric_card(card: &MetricCard, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let arrow = match card.trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    };
    let lines = vec![
        Line::from(Span::styled(
            card.value.as_str(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{arrow} "),
                Style::default().fg(palette.trend(card.trend)),
            ),
            Span::styled(card.caption(), palette.muted()),
        ]),
    ];
    Paragraph::new(lines)
        .block(block(&card.title, palette))
        .render(area, buf);
}

/// Page views and visitors per month on the left, bounce rate on the right.
fn render_overview(data: &AnalyticsData, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let [traffic_area, bounce_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);

    let points = |value: fn(&snvl_protocol::MonthlyTraffic) -> u64| -> Vec<(f64, f64)> {
        data.monthly
            .iter()
            .enumerate()
            .map(|(i, month)| (i as f64, value(month) as f64))
            .collect()
    };
    let views = points(|m| m.page_views);
    let visitors = points(|m| m.unique_visitors);

    let peak = data.peak_traffic() as f64;
    let last = data.monthly.len().saturating_sub(1) as f64;
    let months: Vec<&str> = data.monthly.iter().map(|m| m.month.as_str()).collect();

    let datasets = vec![
        Dataset::default()
            .name("Page Views")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&views),
        Dataset::default()
            .name("Unique Visitors")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&visitors),
    ];

    Chart::new(datasets)
        .block(block("Traffic Overview", palette))
        .x_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([0.0, last])
                .labels(months),
        )
        .y_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([0.0, peak])
                .labels(["0".to_string(), format!("{}", data.peak_traffic())]),
        )
        .render(traffic_area, buf);

    let bars: Vec<Bar<'_>> = data
        .monthly
        .iter()
        .map(|month| {
            Bar::default()
                .value(month.bounce_rate)
                .label(Line::from(month.month.as_str()))
                .text_value(format!("{}%", month.bounce_rate))
        })
        .collect();

    BarChart::default()
        .block(block("Bounce Rate", palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(palette.selected())
        .render(bounce_area, buf);
}

/// Visitors per source as bars, and the breakdown as text.
fn render_traffic(data: &AnalyticsData, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let [chart_area, breakdown_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    let bars: Vec<Bar<'_>> = data
        .sources
        .iter()
        .map(|source| {
            Bar::default()
                .value(source.visitors)
                .label(Line::from(source.source.as_str()))
                .text_value(source.visitors.to_string())
        })
        .collect();

    BarChart::default()
        .block(block("Traffic Sources", palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(palette.selected())
        .render(chart_area, buf);

    let mut lines: Vec<Line<'_>> = data
        .sources
        .iter()
        .map(|source| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", source.source), palette.text()),
                Span::styled(format!("{:>6}", source.visitors), palette.key()),
                Span::styled(format!("  {:>3}%", source.percentage), palette.muted()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {:<16}", "Total"), palette.title()),
        Span::styled(
            format!("{:>6}", data.total_source_visitors()),
            palette.key(),
        ),
    ]));

    Paragraph::new(lines)
        .block(block("Breakdown", palette))
        .render(breakdown_area, buf);
}

/// The three behaviour figures side by side.
fn render_behavior(data: &AnalyticsData, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let outer = block("User Behavior", palette);
    let inner = outer.inner(area);
    outer.render(area, buf);

    let areas = Layout::horizontal(data.behavior.iter().map(|_| Constraint::Fill(1))).split(inner);
    for (stat, stat_area) in data.behavior.iter().zip(areas.iter()) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                stat.value.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(stat.label.as_str(), palette.muted())).centered(),
        ];
        Paragraph::new(lines).render(*stat_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snvl_config::Theme;
    use snvl_protocol::dummy::mock_analytics;

    use crate::test_utils::render_to_string;

    fn render(tab: AnalyticsTab) -> String {
        let data = mock_analytics();
        let palette = Palette::of(Theme::Dark);
        render_to_string(120, 30, |area, buf| {
            render_analytics(&data, &AnalyticsState { tab }, &palette, area, buf);
        })
    }

    #[test]
    fn metric_cards_show_values_and_captions() {
        let content = render(AnalyticsTab::Overview);

        assert!(content.contains("Total Page Views"));
        assert!(content.contains("1,234,567"));
        assert!(content.contains("▲ +12.5% from last month"));
        assert!(content.contains("▼ -2.1% from last month"));
    }

    #[test]
    fn overview_shows_both_charts() {
        let content = render(AnalyticsTab::Overview);

        assert!(content.contains("Traffic Overview"));
        assert!(content.contains("Page Views"));
        assert!(content.contains("Bounce Rate"));
        assert!(content.contains("9800"));
    }

    #[test]
    fn traffic_tab_lists_sources() {
        let content = render(AnalyticsTab::Traffic);

        assert!(content.contains("Breakdown"));
        assert!(content.contains("Organic Search"));
        assert!(content.contains("45%"));
        assert!(content.contains("10000"));
    }

    #[test]
    fn behavior_tab_shows_figures() {
        let content = render(AnalyticsTab::Behavior);

        assert!(content.contains("67%"));
        assert!(content.contains("Avg. Pages/Session"));
        assert!(content.contains("Mobile Users"));
    }

    #[test]
    fn tab_bar_lists_every_tab() {
        let content = render(AnalyticsTab::Traffic);
        for tab in AnalyticsTab::all() {
            assert!(content.contains(tab.title()), "missing {}", tab.title());
        }
    }
}
