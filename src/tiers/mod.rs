// Tier Selector
//
// Picks the single quantity bracket of a product's pricing ladder that
// applies to a requested quantity. Well-formed ladders are contiguous and
// non-overlapping (the catalog validator enforces this), so at most one
// bracket can match.

use crate::models::WholesaleTier;

/// Tier Selector
pub struct TierSelector;

impl TierSelector {
    /// Return the tier whose bracket contains `quantity`, if any.
    ///
    /// An empty ladder, or a quantity below the lowest bracket, yields
    /// `None`. Malformed (overlapping) ladders resolve deterministically to
    /// the matching bracket with the greatest `min_quantity`, so a boundary
    /// quantity lands in the higher bracket rather than a lower bracket's
    /// unbounded overflow.
    pub fn select(tiers: &[WholesaleTier], quantity: u32) -> Option<&WholesaleTier> {
        tiers
            .iter()
            .filter(|tier| tier.contains(quantity))
            .max_by_key(|tier| tier.min_quantity)
    }
}
