use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ngram size must be at least 1, got {0}")]
    NgramSize(usize),
    #[error("unknown tokenizer mode \"{0}\" (expected \"char\", \"word\", or \"ngram:N\")")]
    UnknownMode(String),
    #[error("malformed ngram size \"{0}\"")]
    MalformedNgramSize(String),
}

/// Tokenization granularity.
///
/// N-grams are windows over word tokens, joined by a single space; `Ngram(1)`
/// is equivalent to `Word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    Character,
    Word,
    Ngram(usize),
}

impl fmt::Display for TokenizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerMode::Character => write!(f, "char"),
            TokenizerMode::Word => write!(f, "word"),
            TokenizerMode::Ngram(n) => write!(f, "ngram:{n}"),
        }
    }
}

impl FromStr for TokenizerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "char" | "character" => Ok(TokenizerMode::Character),
            "word" => Ok(TokenizerMode::Word),
            other => {
                if let Some(size) = other.strip_prefix("ngram:") {
                    let n: usize = size
                        .parse()
                        .map_err(|_| ConfigError::MalformedNgramSize(size.to_string()))?;
                    if n < 1 {
                        return Err(ConfigError::NgramSize(n));
                    }
                    Ok(TokenizerMode::Ngram(n))
                } else {
                    Err(ConfigError::UnknownMode(other.to_string()))
                }
            }
        }
    }
}

/// Validated tokenizer configuration, constructed once before scanning begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub mode: TokenizerMode,
    /// Lowercase tokens (locale-independent Unicode mapping) before emission.
    pub case_fold: bool,
    /// Strip leading/trailing ASCII punctuation from word tokens; skip ASCII
    /// punctuation characters entirely in character mode.
    pub strip_punctuation: bool,
}

impl TokenizerConfig {
    pub fn new(mode: TokenizerMode) -> Self {
        Self {
            mode,
            case_fold: false,
            strip_punctuation: false,
        }
    }

    /// Rejects configurations that must never be silently defaulted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.mode {
            TokenizerMode::Ngram(n) if n < 1 => Err(ConfigError::NgramSize(n)),
            _ => Ok(()),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::new(TokenizerMode::Word)
    }
}
