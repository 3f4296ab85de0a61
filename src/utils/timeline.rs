//! Helpers for inspecting reconciled timelines

use chrono::Duration;

use crate::types::*;

/// Index pairs of records that share a key and overlap in time
pub fn overlapping_pairs(prices: &[PriceRecord]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in prices.iter().enumerate() {
        for (j, b) in prices.iter().enumerate().skip(i + 1) {
            if a.key() == b.key() && a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// True when no two records of the same key overlap
pub fn is_consistent(prices: &[PriceRecord]) -> bool {
    overlapping_pairs(prices).is_empty()
}

/// Records of one key ordered by begin
pub fn sorted_timeline<'a>(prices: &'a [PriceRecord], key: &PriceKey) -> Vec<&'a PriceRecord> {
    let mut timeline: Vec<&PriceRecord> = prices.iter().filter(|p| p.has_key(key)).collect();
    timeline.sort_by_key(|p| (p.begin, p.end));
    timeline
}

/// Total time covered by the records of one key
///
/// Overlapping or adjacent intervals are counted once.
pub fn covered_duration(prices: &[PriceRecord], key: &PriceKey) -> Duration {
    let mut total = Duration::zero();
    let mut current: Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)> = None;

    for price in sorted_timeline(prices, key) {
        match current {
            Some((begin, end)) if price.begin <= end => {
                current = Some((begin, end.max(price.end)));
            }
            Some((begin, end)) => {
                total = total + (end - begin);
                current = Some((price.begin, price.end));
            }
            None => current = Some((price.begin, price.end)),
        }
    }

    if let Some((begin, end)) = current {
        total = total + (end - begin);
    }
    total
}
