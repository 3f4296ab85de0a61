//! Per-key merge of incoming prices into an existing timeline

use std::collections::BTreeMap;

use crate::types::*;

/// Group prices by their key, keeping input order inside each group
pub fn group_by_key(prices: &[PriceRecord]) -> BTreeMap<PriceKey, Vec<PriceRecord>> {
    let mut groups: BTreeMap<PriceKey, Vec<PriceRecord>> = BTreeMap::new();
    for price in prices {
        groups.entry(price.key()).or_default().push(price.clone());
    }
    groups
}

/// What happened when a single new price was merged into a timeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Same-valued prices swallowed by the new price
    pub absorbed: usize,
    /// Differently valued prices removed from the timeline
    pub overridden: usize,
    /// Remainders of overridden prices put back into the timeline
    pub fragments: usize,
}

impl MergeOutcome {
    /// True when the new price did not touch anything already present
    pub fn is_plain_insert(&self) -> bool {
        self.absorbed == 0 && self.overridden == 0
    }
}

/// Working set of prices for a single key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyTimeline {
    prices: Vec<PriceRecord>,
}

impl KeyTimeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timeline from prices already known to be consistent
    pub fn from_prices(prices: Vec<PriceRecord>) -> Self {
        Self { prices }
    }

    /// Current prices of the timeline
    pub fn prices(&self) -> &[PriceRecord] {
        &self.prices
    }

    /// Consume the timeline, returning its prices
    pub fn into_prices(self) -> Vec<PriceRecord> {
        self.prices
    }

    /// Merge one new price into the timeline
    ///
    /// Overlaps are computed against the current state, so earlier merges
    /// for the same key are visible to later ones. The new price ends up in
    /// the timeline exactly once, possibly widened by same-valued neighbours.
    pub fn apply(&mut self, new_price: &PriceRecord) -> MergeOutcome {
        let (overlapping, untouched): (Vec<PriceRecord>, Vec<PriceRecord>) =
            std::mem::take(&mut self.prices)
                .into_iter()
                .partition(|price| price.overlaps(new_price));
        self.prices = untouched;

        if overlapping.is_empty() {
            self.prices.push(new_price.clone());
            return MergeOutcome::default();
        }

        let (same_value, different_value): (Vec<PriceRecord>, Vec<PriceRecord>) = overlapping
            .into_iter()
            .partition(|price| price.value == new_price.value);

        let merged = absorb(new_price, &same_value);

        let mut outcome = MergeOutcome {
            absorbed: same_value.len(),
            overridden: different_value.len(),
            fragments: 0,
        };

        for old_price in &different_value {
            for fragment in remainders(old_price, &merged) {
                self.prices.push(fragment);
                outcome.fragments += 1;
            }
        }

        self.prices.push(merged);
        outcome
    }
}

/// Widen `new_price` to cover every same-valued price it overlaps
fn absorb(new_price: &PriceRecord, same_value: &[PriceRecord]) -> PriceRecord {
    if same_value.is_empty() {
        return new_price.clone();
    }

    let begin = same_value
        .iter()
        .map(|price| price.begin)
        .fold(new_price.begin, std::cmp::min);
    let end = same_value
        .iter()
        .map(|price| price.end)
        .fold(new_price.end, std::cmp::max);

    new_price.with_bounds(begin, end)
}

/// Parts of `old_price` left over once `new_price` overrides it
fn remainders(old_price: &PriceRecord, new_price: &PriceRecord) -> Vec<PriceRecord> {
    let mut fragments = Vec::with_capacity(2);

    if old_price.begin < new_price.begin {
        fragments.push(old_price.with_bounds(old_price.begin, new_price.begin));
    }
    if new_price.end < old_price.end {
        fragments.push(old_price.with_bounds(new_price.end, old_price.end));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::{NaiveDate, NaiveDateTime};

    fn t(hours: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + chrono::Duration::hours(hours)
    }

    fn price(id: &str, begin: i64, end: i64, value: i64) -> PriceRecord {
        PriceRecord::new(
            id,
            "productCode1",
            2,
            1,
            t(begin),
            t(end),
            BigDecimal::from(value),
        )
    }

    fn bounds(timeline: &KeyTimeline) -> Vec<(NaiveDateTime, NaiveDateTime, BigDecimal)> {
        let mut result: Vec<_> = timeline
            .prices()
            .iter()
            .map(|p| (p.begin, p.end, p.value.clone()))
            .collect();
        result.sort_by_key(|(begin, _, _)| *begin);
        result
    }

    #[test]
    fn test_group_by_key_keeps_order() {
        let mut other = price("x", 0, 5, 1);
        other.number = 7;
        let prices = vec![price("a", 10, 20, 1), other, price("b", 0, 5, 1)];

        let groups = group_by_key(&prices);

        assert_eq!(groups.len(), 2);
        let group = &groups[&PriceKey::new("productCode1", 2, 1)];
        assert_eq!(group[0].id, "a");
        assert_eq!(group[1].id, "b");
    }

    #[test]
    fn test_insert_without_overlap() {
        let mut timeline = KeyTimeline::from_prices(vec![price("old", 0, 10, 1)]);

        let outcome = timeline.apply(&price("new", 10, 20, 2));

        assert!(outcome.is_plain_insert());
        assert_eq!(timeline.prices().len(), 2);
    }

    #[test]
    fn test_same_value_absorption() {
        let mut timeline = KeyTimeline::from_prices(vec![price("old", 10, 20, 5)]);

        let outcome = timeline.apply(&price("new", 15, 25, 5));

        assert_eq!(outcome.absorbed, 1);
        assert_eq!(timeline.prices().len(), 1);
        let merged = &timeline.prices()[0];
        assert_eq!(merged.id, "new");
        assert_eq!((merged.begin, merged.end), (t(10), t(25)));
    }

    #[test]
    fn test_same_value_absorbs_several() {
        let mut timeline =
            KeyTimeline::from_prices(vec![price("a", 5, 15, 5), price("b", 15, 17, 5)]);

        timeline.apply(&price("wide", 5, 30, 5));

        assert_eq!(bounds(&timeline), vec![(t(5), t(30), BigDecimal::from(5))]);
    }

    #[test]
    fn test_split_when_old_contains_new() {
        let mut timeline = KeyTimeline::from_prices(vec![price("old", 10, 20, 1)]);

        let outcome = timeline.apply(&price("new", 12, 18, 2));

        assert_eq!(
            outcome,
            MergeOutcome {
                absorbed: 0,
                overridden: 1,
                fragments: 2
            }
        );
        assert_eq!(
            bounds(&timeline),
            vec![
                (t(10), t(12), BigDecimal::from(1)),
                (t(12), t(18), BigDecimal::from(2)),
                (t(18), t(20), BigDecimal::from(1)),
            ]
        );
        let fragments: Vec<_> = timeline.prices().iter().filter(|p| p.id == "old").collect();
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_partial_left_overlap() {
        let mut timeline = KeyTimeline::from_prices(vec![price("old", 10, 20, 1)]);

        timeline.apply(&price("new", 6, 15, 2));

        assert_eq!(
            bounds(&timeline),
            vec![
                (t(6), t(15), BigDecimal::from(2)),
                (t(15), t(20), BigDecimal::from(1)),
            ]
        );
    }

    #[test]
    fn test_full_override() {
        let mut timeline = KeyTimeline::from_prices(vec![price("old", 20, 30, 1)]);

        let outcome = timeline.apply(&price("new", 5, 40, 2));

        assert_eq!(outcome.fragments, 0);
        assert_eq!(bounds(&timeline), vec![(t(5), t(40), BigDecimal::from(2))]);
    }

    #[test]
    fn test_new_price_inserted_once_over_many_olds() {
        let mut timeline = KeyTimeline::from_prices(vec![
            price("left", 0, 10, 1),
            price("right", 10, 20, 3),
        ]);

        let outcome = timeline.apply(&price("new", 5, 15, 2));

        assert_eq!(outcome.overridden, 2);
        assert_eq!(timeline.prices().iter().filter(|p| p.id == "new").count(), 1);
        assert_eq!(
            bounds(&timeline),
            vec![
                (t(0), t(5), BigDecimal::from(1)),
                (t(5), t(15), BigDecimal::from(2)),
                (t(15), t(20), BigDecimal::from(3)),
            ]
        );
    }

    #[test]
    fn test_absorption_widens_override() {
        // same-valued neighbour extends the new price before the override
        let mut timeline = KeyTimeline::from_prices(vec![
            price("diff", 0, 10, 1),
            price("same", 10, 20, 2),
        ]);

        timeline.apply(&price("new", 5, 12, 2));

        assert_eq!(
            bounds(&timeline),
            vec![
                (t(0), t(5), BigDecimal::from(1)),
                (t(5), t(20), BigDecimal::from(2)),
            ]
        );
    }

    #[test]
    fn test_absorb_and_remainders_helpers() {
        let new_price = price("new", 10, 20, 2);
        assert_eq!(absorb(&new_price, &[]), new_price);

        let old_price = price("old", 0, 30, 1);
        let fragments = remainders(&old_price, &new_price);
        assert_eq!(fragments.len(), 2);
        assert_eq!((fragments[0].begin, fragments[0].end), (t(0), t(10)));
        assert_eq!((fragments[1].begin, fragments[1].end), (t(20), t(30)));

        assert!(remainders(&price("inner", 12, 18, 1), &new_price).is_empty());
    }
}
