use serde_json::json;

use freq_core::ReportEntry;

use crate::analyze::AnalysisOutcome;

/// Render report entries as `token<TAB>count` lines, one per entry, in
/// report order.
pub fn render_text(entries: &[ReportEntry]) -> String {
    let mut buffer = String::new();
    for entry in entries {
        buffer.push_str(&entry.token);
        buffer.push('\t');
        buffer.push_str(&entry.count.to_string());
        buffer.push('\n');
    }
    buffer
}

/// Render the full outcome as a JSON object with run totals and the ranked
/// entry array.
pub fn render_json(outcome: &AnalysisOutcome) -> String {
    let report = json!({
        "total_tokens": outcome.total_tokens,
        "distinct_tokens": outcome.distinct_tokens,
        "encoding": outcome.encoding,
        "entries": outcome.entries,
    });
    report.to_string()
}
