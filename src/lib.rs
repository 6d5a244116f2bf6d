// Wholesale Pricing Core
//
// Pure pricing and validation engine for the wholesale storefront backend.
// It manages four core capabilities:
// - Discount validation: decide whether a customer discount is usable right now
// - Tier selection: pick the quantity bracket that applies to a requested quantity
// - Price calculation: per-item and cart-level bulk pricing breakdowns
// - Catalog validation: reject inconsistent tier configurations before they are saved
//
// The surrounding application loads product and tier records, calls in with a
// snapshot, and renders or persists whatever this core returns. Nothing here
// touches the network, the filesystem, or a database; every call is a pure
// function of its inputs (plus the wall clock for discount expiry).

pub mod catalog;
pub mod discount;
pub mod display;
pub mod error;
pub mod models;
pub mod pricing;
pub mod tiers;
pub mod validation;


// Re-export commonly used types for convenience
pub use catalog::{
    format_validation_errors, CatalogValidationResult, CatalogValidator, ValidationErrorResponse,
};
pub use discount::{DiscountValidation, DiscountValidator};
pub use display::{
    format_price, price_breakdown, round_price, tier_pricing_table, PriceBreakdown, TierRow,
};
pub use error::{CatalogViolation, DiscountRejection};
pub use models::{CartItem, CustomerDiscount, Product, TierBound, WholesaleTier};
pub use pricing::{CartTotalResult, PriceCalculationResult, PriceCalculator};
pub use tiers::TierSelector;
