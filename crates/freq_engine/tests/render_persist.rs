use freq_core::{TokenizerConfig, TokenizerMode};
use freq_engine::{analyze_str, render_json, render_text, write_report, AnalysisOptions};
use pretty_assertions::assert_eq;

fn outcome_for(input: &str) -> freq_engine::AnalysisOutcome {
    let options = AnalysisOptions {
        tokenizer: TokenizerConfig {
            case_fold: true,
            ..TokenizerConfig::new(TokenizerMode::Word)
        },
        ..AnalysisOptions::default()
    };
    analyze_str(input, &options).unwrap()
}

#[test]
fn text_rendering_is_tab_separated_lines_in_report_order() {
    let outcome = outcome_for("a a b");

    assert_eq!(render_text(&outcome.entries), "a\t2\nb\t1\n");
}

#[test]
fn text_rendering_of_empty_report_is_empty() {
    let outcome = outcome_for("");

    assert_eq!(render_text(&outcome.entries), "");
}

#[test]
fn json_rendering_carries_totals_and_ranked_entries() {
    let outcome = outcome_for("a a b");
    let rendered = render_json(&outcome);

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["total_tokens"], 3);
    assert_eq!(value["distinct_tokens"], 2);
    assert_eq!(value["encoding"], serde_json::Value::Null);

    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["token"], "a");
    assert_eq!(entries[0]["count"], 2);
}

#[test]
fn write_report_replaces_existing_output() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("report.txt");

    write_report(&path, "a\t2\n").unwrap();
    write_report(&path, "b\t5\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "b\t5\n");
}

#[test]
fn write_report_creates_missing_parent_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("nested").join("out").join("report.txt");

    let written = write_report(&path, "a\t1\n").unwrap();

    assert_eq!(written, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\t1\n");
}
