use std::collections::VecDeque;
use std::str::{Chars, SplitWhitespace};

use crate::config::{ConfigError, TokenizerConfig, TokenizerMode};

/// A discrete unit extracted from input text. Equality is by content after
/// normalization.
pub type Token = String;

/// Lazy, finite, single-pass token stream over a borrowed input buffer.
///
/// A `Tokenizer` is exhausted once consumed; construct a fresh one to re-scan
/// the same input.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    state: ModeState<'a>,
}

#[derive(Debug)]
enum ModeState<'a> {
    Character {
        chars: Chars<'a>,
        case_fold: bool,
        strip_punctuation: bool,
    },
    Word(WordStream<'a>),
    Ngram {
        words: WordStream<'a>,
        n: usize,
        window: VecDeque<Token>,
    },
}

/// Word tokens: runs of non-whitespace, normalized per the configuration.
/// All-punctuation words are dropped, not emitted empty.
#[derive(Debug)]
struct WordStream<'a> {
    split: SplitWhitespace<'a>,
    case_fold: bool,
    strip_punctuation: bool,
}

impl<'a> Iterator for WordStream<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let raw = self.split.next()?;
            let stripped = if self.strip_punctuation {
                raw.trim_matches(|c: char| c.is_ascii_punctuation())
            } else {
                raw
            };
            if stripped.is_empty() {
                continue;
            }
            return Some(if self.case_fold {
                stripped.to_lowercase()
            } else {
                stripped.to_string()
            });
        }
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, config: &TokenizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let word_stream = || WordStream {
            split: input.split_whitespace(),
            case_fold: config.case_fold,
            strip_punctuation: config.strip_punctuation,
        };
        let state = match config.mode {
            TokenizerMode::Character => ModeState::Character {
                chars: input.chars(),
                case_fold: config.case_fold,
                strip_punctuation: config.strip_punctuation,
            },
            TokenizerMode::Word => ModeState::Word(word_stream()),
            TokenizerMode::Ngram(n) => ModeState::Ngram {
                words: word_stream(),
                n,
                window: VecDeque::with_capacity(n),
            },
        };
        Ok(Self { state })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match &mut self.state {
            ModeState::Character {
                chars,
                case_fold,
                strip_punctuation,
            } => loop {
                let c = chars.next()?;
                if c.is_whitespace() {
                    continue;
                }
                if *strip_punctuation && c.is_ascii_punctuation() {
                    continue;
                }
                return Some(if *case_fold {
                    c.to_lowercase().collect()
                } else {
                    c.to_string()
                });
            },
            ModeState::Word(words) => words.next(),
            ModeState::Ngram { words, n, window } => {
                while window.len() < *n {
                    window.push_back(words.next()?);
                }
                let token = window
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                // Slide by one; the next call refills the window.
                window.pop_front();
                Some(token)
            }
        }
    }
}
