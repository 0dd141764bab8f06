//! Stats component renderer.
//!
//! Renders headline counters followed by horizontal bar charts for the
//! subject, round, and round/match distributions of the current view.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChartView, StatsView};

/// Maximum bar width in characters.
const BAR_WIDTH: usize = 30;

/// Renders the stats view.
pub fn render_stats(stats: &StatsView, theme: &Theme, cols: usize) {
    if let Some(empty) = &stats.empty_state {
        super::render_empty_state(empty, theme, cols);
        return;
    }

    println!(
        "{}Questions: {}   Subjects: {}   Rounds: {}   Matches: {}{}",
        Theme::bold(),
        stats.total,
        stats.subjects,
        stats.rounds,
        stats.matches,
        Theme::reset(),
    );

    for chart in &stats.charts {
        println!();
        render_chart(chart, theme);
    }
}

fn render_chart(chart: &ChartView, theme: &Theme) {
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        chart.title,
        Theme::reset(),
    );

    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    for bar in &chart.bars {
        let filled = ((BAR_WIDTH as f64) * bar.fraction).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        println!(
            "  {:<label_width$}  {}{}{}{} {}",
            bar.label,
            Theme::fg(&theme.colors.accent),
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            Theme::reset(),
            bar.count,
        );
    }
}
