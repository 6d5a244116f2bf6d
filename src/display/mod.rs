// Presentation Formatters
//
// Currency rendering, rounding, and the human-readable breakdown/table
// values consumed by storefront templates. Calculators hand over exact
// amounts; everything user-facing is rounded and rendered here.
//
// The rendering contract: whole amounts drop their
// decimal portion entirely and fractional amounts keep only significant
// digits, so `1000` renders as `"৳1,000"` and `5.5` as `"৳5.5"`, never
// `"৳5.50"`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Product;
use crate::pricing::PriceCalculator;

/// Currency glyph used across the storefront.
const CURRENCY_SYMBOL: &str = "৳";

/// Round a monetary amount to two decimal places, half-up.
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with the currency glyph and thousands separators.
pub fn format_price(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.to_string();

    let (integer_part, fraction) = match text.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, fraction),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped),
    }
}

fn format_percent(percent: Decimal) -> String {
    format!("{}%", percent.normalize())
}

/// Human-readable price breakdown for a product detail page
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Effective per-unit price after all discounts.
    pub unit_price: String,
    /// Description of the bracket that applied, or the minimum-order notice.
    pub tier: String,
    /// Description of the customer discount that applied.
    pub discount: String,
    /// Amount payable, or `"N/A"` below the minimum order quantity.
    pub final_price: String,
    /// Savings versus the undiscounted wholesale price.
    pub savings: String,
}

/// Build the displayable breakdown for one product at one quantity.
pub fn price_breakdown(
    product: &Product,
    quantity: u32,
    customer_discount_percent: Option<Decimal>,
    customer_discount_valid: bool,
) -> PriceBreakdown {
    let result = PriceCalculator::price_item(
        product,
        quantity,
        customer_discount_percent,
        customer_discount_valid,
    );

    if !result.meets_minimum {
        return PriceBreakdown {
            unit_price: "N/A".to_string(),
            tier: format!("Minimum order: {}", result.minimum_required),
            discount: "No discount".to_string(),
            final_price: "N/A".to_string(),
            savings: "No savings".to_string(),
        };
    }

    let tier = match &result.tier_applied {
        Some(tier) => format!(
            "{} units at {} ({} off)",
            tier.range_label(),
            format_price(tier.price),
            format_percent(tier.discount_percent)
        ),
        None => "Standard wholesale price".to_string(),
    };

    let discount = if result.customer_discount_percent.is_zero() {
        "No discount".to_string()
    } else {
        format!(
            "{} off ({})",
            format_percent(result.customer_discount_percent),
            format_price(round_price(result.customer_discount_amount))
        )
    };

    let savings = if result.total_savings.is_zero() {
        "No savings".to_string()
    } else {
        format!(
            "Save {} ({})",
            format_price(round_price(result.total_savings)),
            format_percent(round_price(result.total_savings_percent))
        )
    };

    PriceBreakdown {
        unit_price: format_price(round_price(result.final_unit_price)),
        tier,
        discount,
        final_price: format_price(round_price(result.final_total)),
        savings,
    }
}

/// One row of the bulk pricing table shown on product pages
#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    /// Human range label: `"10-49"`, `"100+"`.
    pub range: String,
    pub unit_price: String,
    /// Tier discount plus customer discount, summed additively.
    pub discount_label: String,
}

/// Build the bulk pricing table for a product, one row per bracket.
///
/// The discount column adds the customer discount on top of each bracket's
/// display discount as a plain sum, not compounded.
pub fn tier_pricing_table(
    product: &Product,
    customer_discount_percent: Option<Decimal>,
    customer_discount_valid: bool,
) -> Vec<TierRow> {
    let customer_percent = if customer_discount_valid {
        customer_discount_percent.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    product
        .wholesale_tiers
        .iter()
        .map(|tier| TierRow {
            range: tier.range_label(),
            unit_price: format_price(tier.price),
            discount_label: format_percent(tier.discount_percent + customer_percent),
        })
        .collect()
}
