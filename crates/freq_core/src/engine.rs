use std::collections::HashMap;

use crate::report::{ReportEntry, ReportOrder, ReportParams};
use crate::tokenizer::Token;

/// Accumulates token occurrences and produces ranked frequency reports.
///
/// Owns its frequency table exclusively; one engine per counting run.
/// Invariant: the sum of all counts equals the number of tokens ingested
/// since creation or the last [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct FrequencyEngine {
    table: HashMap<Token, u64>,
    ingested: u64,
}

impl FrequencyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the token sequence to exhaustion, incrementing each token's
    /// count by one.
    ///
    /// Not idempotent: ingesting the same sequence twice doubles its counts.
    pub fn ingest<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            *self.table.entry(token).or_insert(0) += 1;
            self.ingested += 1;
        }
    }

    /// Total tokens ingested since creation or the last reset.
    pub fn total_ingested(&self) -> u64 {
        self.ingested
    }

    /// Number of distinct tokens in the table.
    pub fn distinct_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Builds a ranked report: sorted by count in the requested order with
    /// ties broken by ascending token order, truncated to `top_n` after
    /// sorting. An empty table yields an empty report.
    ///
    /// Each report is an independent snapshot, recomputed per call.
    pub fn report(&self, params: &ReportParams) -> Vec<ReportEntry> {
        let mut entries: Vec<(&Token, u64)> =
            self.table.iter().map(|(token, &count)| (token, count)).collect();
        entries.sort_unstable_by(|a, b| match params.order {
            ReportOrder::Descending => b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)),
            ReportOrder::Ascending => a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)),
        });
        if let Some(n) = params.top_n {
            entries.truncate(n);
        }
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (token, count))| ReportEntry {
                rank: index + 1,
                token: token.clone(),
                count,
            })
            .collect()
    }

    /// Clears the table, starting a fresh counting epoch. Reports already
    /// produced are unaffected.
    pub fn reset(&mut self) {
        self.table.clear();
        self.ingested = 0;
    }

    /// Absorbs another engine's counts. This is the aggregation path for
    /// per-worker partial tables counted over split input.
    pub fn merge(&mut self, other: FrequencyEngine) {
        for (token, count) in other.table {
            *self.table.entry(token).or_insert(0) += count;
        }
        self.ingested += other.ingested;
    }
}
