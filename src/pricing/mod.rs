// Price Calculator
//
// Composes tier selection and a pre-validated customer discount into a full
// per-item price breakdown, and aggregates per-item breakdowns into a
// cart-level total.
//
// The calculator trusts the `customer_discount_valid` flag it is handed; it
// never re-checks expiry itself. Callers run the discount validator once and
// price as many lines as they need against that single answer.
//
// All monetary outputs stay unrounded so chained calculations remain exact;
// rounding and currency rendering belong to the display module.

use rust_decimal::Decimal;

use crate::models::{CartItem, Product, WholesaleTier};
use crate::tiers::TierSelector;

/// Full per-item price breakdown
///
/// A value object produced fresh on every call and never mutated after
/// construction. Savings are always measured against the undiscounted
/// wholesale price, never the tier price alone, so tier savings and
/// customer-discount savings stay additive in the reported figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCalculationResult {
    /// Whether the requested quantity clears the minimum order quantity.
    pub meets_minimum: bool,
    /// The minimum order quantity the quantity was checked against.
    pub minimum_required: u32,
    /// The bracket that matched, if any.
    pub tier_applied: Option<WholesaleTier>,
    /// Per-unit price before the customer discount.
    pub tier_price: Decimal,
    /// The matched bracket's display discount; zero without a bracket.
    pub tier_discount_percent: Decimal,
    pub subtotal_before_discount: Decimal,
    /// The customer discount percent that was actually applied.
    pub customer_discount_percent: Decimal,
    pub customer_discount_amount: Decimal,
    pub subtotal_after_discount: Decimal,
    pub final_total: Decimal,
    /// Effective per-unit price after all discounts.
    pub final_unit_price: Decimal,
    /// Absolute savings versus the undiscounted wholesale baseline.
    pub total_savings: Decimal,
    /// Savings as a percentage of that baseline; zero when the baseline is.
    pub total_savings_percent: Decimal,
}

impl PriceCalculationResult {
    /// Result for a quantity below the minimum order quantity: the item is
    /// not priceable, so every monetary field is zero.
    fn below_minimum(minimum_required: u32) -> Self {
        Self {
            meets_minimum: false,
            minimum_required,
            tier_applied: None,
            tier_price: Decimal::ZERO,
            tier_discount_percent: Decimal::ZERO,
            subtotal_before_discount: Decimal::ZERO,
            customer_discount_percent: Decimal::ZERO,
            customer_discount_amount: Decimal::ZERO,
            subtotal_after_discount: Decimal::ZERO,
            final_total: Decimal::ZERO,
            final_unit_price: Decimal::ZERO,
            total_savings: Decimal::ZERO,
            total_savings_percent: Decimal::ZERO,
        }
    }
}

/// Cart-level aggregation of tier-priced items
///
/// The cart-wide customer discount is applied once, uniformly, to every
/// item's tier-priced amount; per-item discount overrides are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotalResult {
    /// Sum of tier-priced amounts before the customer discount.
    pub subtotal: Decimal,
    /// Cart-wide customer discount taken off the subtotal.
    pub total_customer_discount: Decimal,
    /// Amount payable after the discount.
    pub total: Decimal,
    /// Aggregate savings versus the undiscounted wholesale baseline.
    pub total_savings: Decimal,
}

/// Price Calculator
pub struct PriceCalculator;

impl PriceCalculator {
    /// Price a single item at the requested quantity.
    ///
    /// `customer_discount_valid` is expected to reflect a prior
    /// [`DiscountValidator`](crate::discount::DiscountValidator) call; the
    /// discount is applied only when the caller asserts it is valid.
    pub fn price_item(
        product: &Product,
        quantity: u32,
        customer_discount_percent: Option<Decimal>,
        customer_discount_valid: bool,
    ) -> PriceCalculationResult {
        let minimum_required = product.minimum_required();

        if quantity < minimum_required {
            return PriceCalculationResult::below_minimum(minimum_required);
        }

        let tier_applied = TierSelector::select(&product.wholesale_tiers, quantity).cloned();
        let (tier_price, tier_discount_percent) = match &tier_applied {
            Some(tier) => (tier.price, tier.discount_percent),
            None => (product.wholesale_price, Decimal::ZERO),
        };

        let quantity_dec = Decimal::from(quantity);
        let subtotal_before_discount = tier_price * quantity_dec;

        let (customer_discount_percent, customer_discount_amount) = if customer_discount_valid {
            let percent = customer_discount_percent.unwrap_or(Decimal::ZERO);
            let amount = subtotal_before_discount * percent / Decimal::from(100);
            (percent, amount)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        let subtotal_after_discount = subtotal_before_discount - customer_discount_amount;
        let final_total = subtotal_after_discount;
        let final_unit_price = final_total / quantity_dec;

        let baseline = product.wholesale_price * quantity_dec;
        let total_savings = baseline - final_total;
        let total_savings_percent = if baseline.is_zero() {
            Decimal::ZERO
        } else {
            total_savings / baseline * Decimal::from(100)
        };

        PriceCalculationResult {
            meets_minimum: true,
            minimum_required,
            tier_applied,
            tier_price,
            tier_discount_percent,
            subtotal_before_discount,
            customer_discount_percent,
            customer_discount_amount,
            subtotal_after_discount,
            final_total,
            final_unit_price,
            total_savings,
            total_savings_percent,
        }
    }

    /// Aggregate a cart of items under one cart-wide customer discount.
    ///
    /// The subtotal is tier pricing only; the discount comes off the
    /// subtotal in a single uniform step. Items below their minimum order
    /// quantity contribute nothing to the subtotal or the savings.
    pub fn price_cart(
        items: &[CartItem],
        customer_discount_percent: Option<Decimal>,
        customer_discount_valid: bool,
    ) -> CartTotalResult {
        let mut subtotal = Decimal::ZERO;
        let mut total_savings = Decimal::ZERO;

        for item in items {
            let priced = Self::price_item(
                &item.product,
                item.quantity,
                customer_discount_percent,
                customer_discount_valid,
            );
            subtotal += priced.subtotal_before_discount;
            total_savings += priced.total_savings;
        }

        let total_customer_discount = if customer_discount_valid {
            let percent = customer_discount_percent.unwrap_or(Decimal::ZERO);
            subtotal * percent / Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        let total = subtotal - total_customer_discount;

        tracing::debug!(
            "Priced cart of {} item(s): subtotal {}, total {}",
            items.len(),
            subtotal,
            total
        );

        CartTotalResult {
            subtotal,
            total_customer_discount,
            total,
            total_savings,
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::models::TierBound;
    use proptest::prelude::*;

    fn cents(value: u32) -> Decimal {
        Decimal::from(value) / Decimal::from(100)
    }

    /// Subtotal invariant: with no matching tier the subtotal is always
    /// wholesale price times quantity.
    #[test]
    fn prop_subtotal_is_wholesale_times_quantity() {
        proptest!(|(
            quantity in 1u32..=1000,
            price_cents in 1u32..=100_000u32
        )| {
            let product = Product {
                base_price: Decimal::ZERO,
                wholesale_price: cents(price_cents),
                moq: None,
                wholesale_tiers: vec![],
            };

            let result = PriceCalculator::price_item(&product, quantity, None, false);

            prop_assert!(result.meets_minimum);
            prop_assert_eq!(
                result.subtotal_before_discount,
                cents(price_cents) * Decimal::from(quantity)
            );
            prop_assert_eq!(result.total_savings, Decimal::ZERO);
        });
    }

    /// Below the minimum order quantity every monetary field is zero.
    #[test]
    fn prop_below_moq_is_always_zeroed() {
        proptest!(|(
            moq in 2u32..=500,
            shortfall in 1u32..=500,
            price_cents in 1u32..=100_000u32
        )| {
            let quantity = moq.saturating_sub(shortfall.min(moq));
            let product = Product {
                base_price: Decimal::ZERO,
                wholesale_price: cents(price_cents),
                moq: Some(moq),
                wholesale_tiers: vec![],
            };

            let result = PriceCalculator::price_item(&product, quantity, None, false);

            prop_assert!(!result.meets_minimum);
            prop_assert_eq!(result.final_total, Decimal::ZERO);
            prop_assert_eq!(result.subtotal_before_discount, Decimal::ZERO);
            prop_assert_eq!(result.customer_discount_amount, Decimal::ZERO);
        });
    }

    /// A valid percentage discount always takes exactly percent/100 of the
    /// tier subtotal off the final total.
    #[test]
    fn prop_discount_amount_matches_percent() {
        proptest!(|(
            quantity in 1u32..=1000,
            price_cents in 1u32..=100_000u32,
            percent in 0u32..=100
        )| {
            let product = Product {
                base_price: Decimal::ZERO,
                wholesale_price: cents(price_cents),
                moq: None,
                wholesale_tiers: vec![],
            };

            let result = PriceCalculator::price_item(
                &product,
                quantity,
                Some(Decimal::from(percent)),
                true,
            );

            let expected = result.subtotal_before_discount * Decimal::from(percent)
                / Decimal::from(100);
            prop_assert_eq!(result.customer_discount_amount, expected);
            prop_assert_eq!(
                result.final_total,
                result.subtotal_before_discount - expected
            );
        });
    }

    /// Cart totals always reconcile: total = subtotal - discount, and the
    /// discount is the cart-wide percent of the subtotal.
    #[test]
    fn prop_cart_totals_reconcile() {
        proptest!(|(
            quantities in prop::collection::vec(1u32..=200, 1..=8),
            price_cents in 1u32..=50_000u32,
            percent in 0u32..=100
        )| {
            let items: Vec<CartItem> = quantities
                .iter()
                .map(|&quantity| CartItem {
                    product: Product {
                        base_price: Decimal::ZERO,
                        wholesale_price: cents(price_cents),
                        moq: None,
                        wholesale_tiers: vec![WholesaleTier::new(
                            10,
                            TierBound::Unbounded,
                            cents(price_cents),
                            Decimal::ZERO,
                        )],
                    },
                    quantity,
                })
                .collect();

            let cart = PriceCalculator::price_cart(&items, Some(Decimal::from(percent)), true);

            let expected_discount = cart.subtotal * Decimal::from(percent) / Decimal::from(100);
            prop_assert_eq!(cart.total_customer_discount, expected_discount);
            prop_assert_eq!(cart.total, cart.subtotal - expected_discount);
            prop_assert!(cart.total >= Decimal::ZERO);
        });
    }

    /// Pricing is a pure function: identical inputs give identical results.
    #[test]
    fn prop_pricing_is_idempotent() {
        proptest!(|(
            quantity in 1u32..=1000,
            price_cents in 1u32..=100_000u32,
            percent in 0u32..=100
        )| {
            let product = Product {
                base_price: Decimal::ZERO,
                wholesale_price: cents(price_cents),
                moq: Some(10),
                wholesale_tiers: vec![WholesaleTier::new(
                    10,
                    TierBound::Unbounded,
                    cents(price_cents),
                    Decimal::ZERO,
                )],
            };

            let first = PriceCalculator::price_item(
                &product,
                quantity,
                Some(Decimal::from(percent)),
                true,
            );
            let second = PriceCalculator::price_item(
                &product,
                quantity,
                Some(Decimal::from(percent)),
                true,
            );

            prop_assert_eq!(first, second);
        });
    }
}
