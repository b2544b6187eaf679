use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;

use freq_engine::{
    analyze_reader, render_json, render_text, write_report, AnalysisOptions, AnalysisOutcome,
};
use freq_logging::freq_info;

use crate::cli::{Cli, OutputFormat};

/// Runs one analysis for the parsed command line: reads the input, invokes
/// the engine, renders and delivers the report.
///
/// Usable from the binary or imported and driven programmatically.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.analysis_options();
    let outcome = read_and_analyze(cli, &options)?;

    freq_info!(
        "run complete: {} tokens, {} distinct",
        outcome.total_tokens,
        outcome.distinct_tokens
    );

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&outcome.entries),
        OutputFormat::Json => {
            let mut line = render_json(&outcome);
            line.push('\n');
            line
        }
    };

    match &cli.output {
        Some(path) => {
            write_report(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            freq_info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn read_and_analyze(cli: &Cli, options: &AnalysisOptions) -> anyhow::Result<AnalysisOutcome> {
    match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            analyze_reader(file, options)
                .with_context(|| format!("failed to analyze {}", path.display()))
        }
        _ => analyze_reader(io::stdin().lock(), options)
            .context("failed to analyze standard input"),
    }
}
