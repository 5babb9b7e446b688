//! Identifier-keyed accumulation of lexeme frequencies.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One distinct lexeme with its first-seen forms and its frequency.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LexemeRecord {
    pub lexeme_id: String,
    pub word_form: String,
    pub surface_form: String,
    pub frequency: u64,
}

/// What [LexemeTable::record] did with an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recorded {
    /// A new identifier was added with frequency 1.
    Inserted,
    /// The frequency of a known identifier was incremented.
    Incremented,
    /// A new identifier was dropped because the capacity limit was reached.
    Rejected,
}

/// Mapping from lexeme identifier to [LexemeRecord].
///
/// Identifiers are compared as exact strings: no trimming, no case folding.
/// The word form and surface form of a record are those given on the first
/// observation of its identifier.
#[derive(Debug, Default)]
pub struct LexemeTable {
    records: HashMap<String, LexemeRecord>,
    capacity_limit: Option<usize>,
    rejected: u64,
}

impl LexemeTable {
    /// An empty table without a limit on the number of distinct identifiers.
    pub fn new() -> LexemeTable {
        LexemeTable::default()
    }

    /// An empty table that accepts at most `limit` distinct identifiers.
    ///
    /// Once full, observations of known identifiers are still counted.
    pub fn with_capacity_limit(limit: usize) -> LexemeTable {
        LexemeTable {
            capacity_limit: Some(limit),
            ..LexemeTable::default()
        }
    }

    pub fn record(&mut self, lexeme_id: &str, word_form: &str, surface_form: &str) -> Recorded {
        self.observe(lexeme_id, word_form, surface_form, 1)
    }

    /// Adds all counts of `other`.
    ///
    /// Records already in `self` keep their forms, so merging tables in input
    /// order keeps the first-seen forms of the whole input.
    pub fn merge(&mut self, other: &LexemeTable) {
        for r in other.iter() {
            self.observe(&r.lexeme_id, &r.word_form, &r.surface_form, r.frequency);
        }
    }

    fn observe(
        &mut self,
        lexeme_id: &str,
        word_form: &str,
        surface_form: &str,
        count: u64,
    ) -> Recorded {
        if let Some(r) = self.records.get_mut(lexeme_id) {
            r.frequency += count;
            return Recorded::Incremented;
        }
        if let Some(limit) = self.capacity_limit {
            if self.records.len() >= limit {
                self.rejected += 1;
                if self.rejected == 1 {
                    warn!(target: "lexfreq", "maximum number of distinct lexemes ({limit}) reached, new lexemes are ignored from now on");
                }
                debug!(target: "lexfreq", "ignored new lexeme '{lexeme_id}'");
                return Recorded::Rejected;
            }
        }
        self.records.insert(
            lexeme_id.to_owned(),
            LexemeRecord {
                lexeme_id: lexeme_id.to_owned(),
                word_form: word_form.to_owned(),
                surface_form: surface_form.to_owned(),
                frequency: count,
            },
        );
        Recorded::Inserted
    }

    pub fn get(&self, lexeme_id: &str) -> Option<&LexemeRecord> {
        self.records.get(lexeme_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Number of observations dropped because of the capacity limit.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexemeRecord> {
        self.records.values()
    }

    /// All records, in no particular order.
    pub fn snapshot(&self) -> Vec<LexemeRecord> {
        self.records.values().cloned().collect()
    }

    /// All records, in no particular order.
    pub fn into_records(self) -> Vec<LexemeRecord> {
        self.records.into_values().collect()
    }
}
