//! Frequency engine: input decoding, the analysis pipeline, and report output.
mod analyze;
mod decode;
mod persist;
mod render;

pub use analyze::{analyze_reader, analyze_str, AnalysisError, AnalysisOptions, AnalysisOutcome};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use persist::{write_report, PersistError};
pub use render::{render_json, render_text};
