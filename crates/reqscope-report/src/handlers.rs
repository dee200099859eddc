use unicode_width::UnicodeWidthStr;

use reqscope_logs::{LevelCounts, RequestStats};

/// Handler column width used when there are no handlers to size against
const EMPTY_HANDLER_WIDTH: usize = 20;

/// Handler column header label
const HANDLER_HEADER: &str = "HANDLER";

/// Render the per-handler severity report as a fixed-width text table
///
/// First line is the global request total, followed by a blank line, the
/// column header, a dash rule, one row per handler in lexicographic order,
/// a dash rule, and a TOTAL row summing each column. No trailing newline.
pub fn render_handlers(stats: &RequestStats) -> String {
    let width = handler_width(stats);
    let rule = "-".repeat(width + 40);

    let mut lines = vec![
        format!("Total requests: {}", stats.total_requests()),
        String::new(),
        format!(
            "{}   DEBUG   INFO    WARNING ERROR   CRITICAL",
            pad(HANDLER_HEADER, width)
        ),
        rule.clone(),
    ];

    for (handler, counts) in stats.handlers() {
        lines.push(row(handler, counts, width));
    }

    lines.push(rule);
    lines.push(row("TOTAL", &stats.column_totals(), width));

    lines.join("\n")
}

/// Width of the handler column: the widest handler key, at least as wide
/// as the header label
fn handler_width(stats: &RequestStats) -> usize {
    stats
        .handlers()
        .map(|(handler, _)| handler.width())
        .max()
        .unwrap_or(EMPTY_HANDLER_WIDTH)
        .max(HANDLER_HEADER.width())
}

/// One table row: padded label, then each count right-aligned in its column
fn row(label: &str, counts: &LevelCounts, width: usize) -> String {
    format!(
        "{}   {:>6}   {:>6}   {:>7}   {:>6}   {:>8}",
        pad(label, width),
        counts.debug,
        counts.info,
        counts.warning,
        counts.error,
        counts.critical
    )
}

/// Left-align a label into a column of the given display width
fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.width());
    let mut out = String::with_capacity(label.len() + fill);
    out.push_str(label);
    out.push_str(&" ".repeat(fill));
    out
}
