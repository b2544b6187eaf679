use std::io::Read;

use freq_core::{
    ConfigError, FrequencyEngine, ReportEntry, ReportParams, Tokenizer, TokenizerConfig,
};
use freq_logging::{freq_debug, freq_info};

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("input produced no tokens")]
    EmptyInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Options for one analysis run, fixed before any input is consumed.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub tokenizer: TokenizerConfig,
    pub report: ReportParams,
    /// Caller-level policy: fail with [`AnalysisError::EmptyInput`] when the
    /// input yields zero tokens. Off by default; an empty report is valid.
    pub require_non_empty: bool,
}

/// Result of one analysis run: the ranked report plus run totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub entries: Vec<ReportEntry>,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    /// Name of the character encoding the input was decoded from, when the
    /// input arrived as raw bytes.
    pub encoding: Option<String>,
}

/// Runs the full pipeline over an in-memory buffer: tokenize, ingest into a
/// fresh [`FrequencyEngine`], report.
pub fn analyze_str(input: &str, options: &AnalysisOptions) -> Result<AnalysisOutcome, AnalysisError> {
    let tokenizer = Tokenizer::new(input, &options.tokenizer)?;
    let mut engine = FrequencyEngine::new();
    engine.ingest(tokenizer);

    if options.require_non_empty && engine.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let entries = engine.report(&options.report);
    freq_info!(
        "analyzed {} tokens ({} distinct, mode {})",
        engine.total_ingested(),
        engine.distinct_count(),
        options.tokenizer.mode
    );

    Ok(AnalysisOutcome {
        entries,
        total_tokens: engine.total_ingested(),
        distinct_tokens: engine.distinct_count(),
        encoding: None,
    })
}

/// Reads the stream to the end, decodes the bytes, and analyzes the text.
///
/// Read errors propagate unchanged; this layer does not reinterpret them.
pub fn analyze_reader<R: Read>(
    mut reader: R,
    options: &AnalysisOptions,
) -> Result<AnalysisOutcome, AnalysisError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let decoded = decode_text(&bytes)?;
    freq_debug!(
        "decoded {} bytes as {}",
        bytes.len(),
        decoded.encoding_label
    );

    let mut outcome = analyze_str(&decoded.text, options)?;
    outcome.encoding = Some(decoded.encoding_label);
    Ok(outcome)
}
