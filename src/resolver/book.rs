//! Price book keeping the current reconciled timeline

use chrono::NaiveDateTime;
use std::collections::BTreeSet;

use crate::resolver::PriceResolver;
use crate::types::*;
use crate::utils::{is_consistent, sorted_timeline};

/// Current prices of all keys, updated batch by batch
#[derive(Debug, Default)]
pub struct PriceBook {
    resolver: PriceResolver,
    records: Vec<PriceRecord>,
}

impl PriceBook {
    /// Create an empty price book with the default resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty price book with a custom resolver
    pub fn with_resolver(resolver: PriceResolver) -> Self {
        Self {
            resolver,
            records: Vec::new(),
        }
    }

    /// Create a price book from an already reconciled timeline
    ///
    /// The records are trusted and not validated.
    pub fn with_records(records: Vec<PriceRecord>) -> Self {
        Self {
            resolver: PriceResolver::new(),
            records,
        }
    }

    /// Merge a batch of updates into the book
    ///
    /// Either the whole batch is applied or, on error, the book is left as it was.
    pub fn apply(&mut self, updates: &[PriceRecord]) -> PriceResult<()> {
        let merged = self.resolver.merge_prices(&self.records, updates)?;
        debug_assert!(is_consistent(&merged), "merged timeline has overlaps");
        self.records = merged;
        Ok(())
    }

    /// All records currently in the book
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Every key with at least one record
    pub fn keys(&self) -> BTreeSet<PriceKey> {
        self.records.iter().map(PriceRecord::key).collect()
    }

    /// Records of one key ordered by begin
    pub fn timeline(&self, key: &PriceKey) -> Vec<&PriceRecord> {
        sorted_timeline(&self.records, key)
    }

    /// The record of `key` in effect at `instant`, if any
    pub fn price_at(&self, key: &PriceKey, instant: NaiveDateTime) -> Option<&PriceRecord> {
        self.records
            .iter()
            .find(|record| record.has_key(key) && record.contains_instant(instant))
    }

    /// Number of records in the book
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the book, returning its records
    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }
}
