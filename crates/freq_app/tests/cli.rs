use clap::Parser;

use freq_app::cli::{Cli, OutputFormat, SortOrder};
use freq_core::{ReportOrder, TokenizerMode};
use pretty_assertions::assert_eq;

#[test]
fn defaults_are_word_mode_all_entries_descending_text() {
    let cli = Cli::try_parse_from(["freq"]).unwrap();

    assert_eq!(cli.mode, TokenizerMode::Word);
    assert_eq!(cli.top, 0);
    assert_eq!(cli.order, SortOrder::Desc);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.fail_if_empty);

    let options = cli.analysis_options();
    assert_eq!(options.report.top_n, None);
    assert_eq!(options.report.order, ReportOrder::Descending);
    assert!(!options.require_non_empty);
}

#[test]
fn ngram_mode_parses_with_size() {
    let cli = Cli::try_parse_from(["freq", "--mode", "ngram:3"]).unwrap();

    assert_eq!(cli.mode, TokenizerMode::Ngram(3));
}

#[test]
fn unknown_mode_is_a_usage_error() {
    assert!(Cli::try_parse_from(["freq", "--mode", "sentence"]).is_err());
    assert!(Cli::try_parse_from(["freq", "--mode", "ngram:0"]).is_err());
    assert!(Cli::try_parse_from(["freq", "--mode", "ngram:two"]).is_err());
}

#[test]
fn top_maps_to_report_truncation() {
    let cli = Cli::try_parse_from(["freq", "--top", "5", "--order", "asc"]).unwrap();

    let options = cli.analysis_options();
    assert_eq!(options.report.top_n, Some(5));
    assert_eq!(options.report.order, ReportOrder::Ascending);
}

#[test]
fn flags_carry_into_tokenizer_config() {
    let cli = Cli::try_parse_from([
        "freq",
        "--mode",
        "char",
        "--case-fold",
        "--strip-punctuation",
        "--fail-if-empty",
    ])
    .unwrap();

    let options = cli.analysis_options();
    assert_eq!(options.tokenizer.mode, TokenizerMode::Character);
    assert!(options.tokenizer.case_fold);
    assert!(options.tokenizer.strip_punctuation);
    assert!(options.require_non_empty);
}

#[test]
fn negative_top_is_rejected_at_parse_time() {
    assert!(Cli::try_parse_from(["freq", "--top", "-1"]).is_err());
}
