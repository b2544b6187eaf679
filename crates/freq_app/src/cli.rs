use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use freq_core::{ReportOrder, ReportParams, TokenizerConfig, TokenizerMode};
use freq_engine::AnalysisOptions;

use crate::logging::LogDestination;

/// `freq` reports token frequencies from a file or standard input.
///
/// Counts tokens under the chosen granularity and prints a ranked
/// `token<TAB>count` report.
#[derive(Parser, Debug)]
#[command(name = "freq", version, about, long_about = None)]
pub struct Cli {
    /// Input file. Reads standard input when omitted or "-".
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Tokenization granularity: "char", "word", or "ngram:N"
    /// (n-grams window over word tokens).
    #[arg(long, default_value = "word", env = "FREQ_MODE")]
    pub mode: TokenizerMode,

    /// Lowercase tokens before counting.
    #[arg(long, env = "FREQ_CASE_FOLD")]
    pub case_fold: bool,

    /// Strip leading/trailing punctuation from word tokens; skip punctuation
    /// characters entirely in char mode.
    #[arg(long, env = "FREQ_STRIP_PUNCTUATION")]
    pub strip_punctuation: bool,

    /// Show only the top N entries. Use 0 to show all.
    #[arg(long, default_value_t = 0, env = "FREQ_TOP")]
    pub top: usize,

    /// Sort direction for counts; equal counts always order tokens ascending.
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to FILE instead of standard output.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with an error when the input yields no tokens.
    #[arg(long)]
    pub fail_if_empty: bool,

    /// Also write logs to ./freq.log.
    #[arg(long)]
    pub log_file: bool,

    /// Verbose logging (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
    Asc,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Engine options for this invocation.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            tokenizer: TokenizerConfig {
                mode: self.mode,
                case_fold: self.case_fold,
                strip_punctuation: self.strip_punctuation,
            },
            report: ReportParams {
                top_n: (self.top > 0).then_some(self.top),
                order: match self.order {
                    SortOrder::Desc => ReportOrder::Descending,
                    SortOrder::Asc => ReportOrder::Ascending,
                },
            },
            require_non_empty: self.fail_if_empty,
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }
}
