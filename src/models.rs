use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound of a quantity bracket
///
/// The highest bracket of a pricing ladder is usually open-ended. Modelling
/// the bound as a sum type keeps "no upper limit" out of arithmetic instead
/// of hiding it behind a sentinel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierBound {
    /// Inclusive upper limit of the bracket
    Bounded(u32),

    /// No upper limit; the bracket covers every larger quantity
    Unbounded,
}

impl TierBound {
    /// The inclusive upper limit, or `None` for an open-ended bracket.
    pub fn as_bounded(&self) -> Option<u32> {
        match self {
            TierBound::Bounded(max) => Some(*max),
            TierBound::Unbounded => None,
        }
    }
}

/// One quantity bracket of a product's bulk pricing ladder
///
/// Brackets are created and edited by merchants through the catalog
/// validator gate and are read-only to the price calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WholesaleTier {
    /// Inclusive lower bound of the bracket.
    pub min_quantity: u32,
    /// Inclusive upper bound, or unbounded on the highest bracket.
    pub max_quantity: TierBound,
    /// Per-unit price charged within this bracket.
    pub price: Decimal,
    /// Display-only percentage describing how far `price` sits below the
    /// wholesale price. Informational; never recomputed or trusted by the
    /// price calculator.
    pub discount_percent: Decimal,
}

impl WholesaleTier {
    /// Build a bracket covering `min_quantity..=max` at the given unit price.
    pub fn new(
        min_quantity: u32,
        max_quantity: TierBound,
        price: Decimal,
        discount_percent: Decimal,
    ) -> Self {
        Self {
            min_quantity,
            max_quantity,
            price,
            discount_percent,
        }
    }

    /// Whether `quantity` falls inside this bracket.
    pub fn contains(&self, quantity: u32) -> bool {
        if quantity < self.min_quantity {
            return false;
        }
        match self.max_quantity {
            TierBound::Bounded(max) => quantity <= max,
            TierBound::Unbounded => true,
        }
    }

    /// Human range label used in pricing tables: `"10-49"`, `"100+"`.
    pub fn range_label(&self) -> String {
        match self.max_quantity {
            TierBound::Bounded(max) => format!("{}-{}", self.min_quantity, max),
            TierBound::Unbounded => format!("{}+", self.min_quantity),
        }
    }
}

/// Pricing-relevant projection of a catalog product
///
/// Loaded by the surrounding application and handed in as a snapshot; the
/// core never mutates or persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Cost floor for the product.
    pub base_price: Decimal,
    /// Default per-unit price with no bulk tier and no customer discount.
    pub wholesale_price: Decimal,
    /// Minimum order quantity; `None` means no floor beyond "more than zero".
    pub moq: Option<u32>,
    /// Bulk pricing ladder, ordered by bracket, possibly empty.
    pub wholesale_tiers: Vec<WholesaleTier>,
}

impl Product {
    /// The smallest priceable quantity for this product.
    ///
    /// An absent MOQ means one unit; a quantity of zero is never priceable.
    pub fn minimum_required(&self) -> u32 {
        self.moq.unwrap_or(1).max(1)
    }
}

/// A customer-level discount candidate
///
/// Evaluated fresh on every pricing call; never cached and never assumed
/// valid by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDiscount {
    /// Percentage off, expected within 0-100.
    pub percent: Decimal,
    /// Optional expiry instant; an absent expiry never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// A storefront cart line: a loaded product and the requested quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CartItem {
    pub product: Product,
    /// Requested quantity. Zero quantities are rejected at the boundary,
    /// before pricing.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}
