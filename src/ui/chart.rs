//! Horizontal text bar charts for chart series.

use crate::models::SeriesPoint;
use crate::utils::colors::{GREEN, RED, paint};
use unicode_width::UnicodeWidthStr;

const BAR: &str = "█";

/// Axis titles printed above and below the bars.
pub struct ChartLabels {
    pub keys: String,
    pub counts: String,
}

/// Render one line per point: key (green), bar scaled to `bar_width`, count (red).
pub fn render_bar_chart(
    series: &[SeriesPoint],
    labels: &ChartLabels,
    bar_width: usize,
    color: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&paint(&labels.keys, GREEN, color));
    out.push('\n');

    if series.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let key_width = series.iter().map(|p| p.key.width()).max().unwrap_or(0);
    let max = series.iter().map(|p| p.count).max().unwrap_or(0);

    for p in series {
        let pad = " ".repeat(key_width.saturating_sub(p.key.width()));
        out.push_str(&paint(&p.key, GREEN, color));
        out.push_str(&pad);
        out.push_str(" | ");
        out.push_str(&BAR.repeat(bar_len(p.count, max, bar_width)));
        out.push(' ');
        out.push_str(&paint(&p.count.to_string(), RED, color));
        out.push('\n');
    }

    out.push_str(&paint(&labels.counts, RED, color));
    out.push('\n');
    out
}

/// Bars are proportional to the largest count; any non-zero count gets at
/// least one block.
fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    (count * width / max).max(1)
}
