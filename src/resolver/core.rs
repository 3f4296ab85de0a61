//! Main resolver that reconciles an existing price timeline with updates

use tracing::{debug, trace};

use crate::resolver::merge::{group_by_key, KeyTimeline};
use crate::traits::*;
use crate::types::*;

/// Price resolver that merges new prices into an existing timeline
///
/// Old prices are kept where no update applies, new prices win where they
/// conflict, and partially covered old prices are cut down to the part that
/// is still valid. Prices with different keys never interact.
pub struct PriceResolver {
    validator: Box<dyn PriceValidator>,
}

impl Default for PriceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PriceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceResolver").finish_non_exhaustive()
    }
}

impl PriceResolver {
    /// Create a new resolver with the default validator
    pub fn new() -> Self {
        Self {
            validator: Box::new(DefaultPriceValidator),
        }
    }

    /// Create a new resolver with a custom validator
    pub fn with_validator(validator: Box<dyn PriceValidator>) -> Self {
        Self { validator }
    }

    /// Merge `new_prices` into `old_prices`
    ///
    /// New prices are validated up front; on failure nothing is merged.
    /// Old prices are trusted as they are. Neither input is modified, the
    /// result is a freshly built list whose order carries no meaning.
    #[tracing::instrument(
        level = "debug",
        name = "pricing::merge_prices",
        skip_all,
        fields(old = old_prices.len(), new = new_prices.len())
    )]
    pub fn merge_prices(
        &self,
        old_prices: &[PriceRecord],
        new_prices: &[PriceRecord],
    ) -> PriceResult<Vec<PriceRecord>> {
        if let Err(err) = self.validator.validate_prices(new_prices) {
            debug!(error = %err, "rejected incoming prices");
            return Err(err);
        }

        let mut timelines = group_by_key(old_prices);
        let updates = group_by_key(new_prices);

        for (key, prices) in updates {
            let existing = timelines.remove(&key).unwrap_or_default();
            let existing_len = existing.len();
            let mut timeline = KeyTimeline::from_prices(existing);

            for price in &prices {
                let outcome = timeline.apply(price);
                trace!(
                    key = %key,
                    id = %price.id,
                    absorbed = outcome.absorbed,
                    overridden = outcome.overridden,
                    fragments = outcome.fragments,
                    "merged price"
                );
            }

            debug!(
                key = %key,
                existing = existing_len,
                incoming = prices.len(),
                resulting = timeline.prices().len(),
                "reconciled key"
            );
            timelines.insert(key, timeline.into_prices());
        }

        Ok(timelines.into_values().flatten().collect())
    }

    /// Merge prices where either list may be absent
    ///
    /// An absent list is an error, unlike an empty one.
    pub fn merge_optional_prices(
        &self,
        old_prices: Option<&[PriceRecord]>,
        new_prices: Option<&[PriceRecord]>,
    ) -> PriceResult<Vec<PriceRecord>> {
        let old_prices = old_prices.ok_or(PriceError::NullInput("old"))?;
        let new_prices = new_prices.ok_or(PriceError::NullInput("new"))?;
        self.merge_prices(old_prices, new_prices)
    }
}

/// Merge prices using a resolver with the default validator
pub fn merge_prices(
    old_prices: &[PriceRecord],
    new_prices: &[PriceRecord],
) -> PriceResult<Vec<PriceRecord>> {
    PriceResolver::new().merge_prices(old_prices, new_prices)
}

/// Merge possibly absent price lists using the default validator
pub fn merge_optional_prices(
    old_prices: Option<&[PriceRecord]>,
    new_prices: Option<&[PriceRecord]>,
) -> PriceResult<Vec<PriceRecord>> {
    PriceResolver::new().merge_optional_prices(old_prices, new_prices)
}
