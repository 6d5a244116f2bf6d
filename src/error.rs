// Rejection and violation types for the wholesale pricing core
//
// The pricing path never fails: inapplicable conditions come back as
// ordinary result fields. The types here carry the human-readable messages
// those results and the catalog validator surface to merchants and API
// clients; the Display string of each variant is the exact wording shown.

use thiserror::Error;

/// Reason a customer discount candidate is not applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscountRejection {
    /// The percentage falls outside 0-100
    #[error("Invalid discount percentage")]
    InvalidPercentage,

    /// The expiry instant has already passed
    #[error("Discount expired")]
    Expired,
}

/// A single violation of the wholesale pricing configuration rules
///
/// One validation call accumulates every violation it finds; the variant
/// order here mirrors the priority in which the rules are checked, so the
/// first reported error always comes from the highest-priority broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogViolation {
    /// The default wholesale price does not clear the cost floor
    #[error("wholesale price must be greater than base price")]
    WholesaleNotAboveBase,

    /// A minimum order quantity of zero was supplied
    #[error("MOQ must be greater than 0")]
    NonPositiveMoq,

    /// A bracket starts at quantity zero
    #[error("minimum quantity must be greater than 0")]
    NonPositiveMinQuantity,

    /// A bracket's upper bound sits below its lower bound
    #[error("maximum quantity cannot be less than minimum quantity")]
    MaxBelowMin,

    /// A bracket's display discount falls outside 0-100
    #[error("discount must be between 0 and 100")]
    DiscountOutOfRange,

    /// A bracket is priced at or below cost
    #[error("tier price must be greater than base price")]
    TierPriceNotAboveBase,

    /// A bracket is priced above the undiscounted wholesale price
    #[error("tier price cannot exceed wholesale price")]
    TierPriceAboveWholesale,

    /// Two adjacent brackets cover the same quantity
    #[error("Overlapping tier ranges")]
    OverlappingRanges,

    /// A larger bracket charges more per unit than a smaller one
    #[error("Bulk discounts should decrease prices")]
    IncreasingTierPrice,
}
