// Catalog Validator
//
// Checks a product's static pricing configuration before it is persisted or
// activated. Every rule runs unconditionally and every violation lands in
// one accumulated list, so a merchant editing a tier table sees all of its
// problems in a single pass instead of one error at a time.
//
// This validator gates configuration; it knows nothing about a priced
// transaction and does not depend on the calculators.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CatalogViolation;
use crate::models::{Product, TierBound, WholesaleTier};
use crate::validation;

/// Accumulated outcome of a configuration check
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogValidationResult {
    pub is_valid: bool,
    /// Every violation found, in rule-priority order.
    pub errors: Vec<CatalogViolation>,
}

impl CatalogValidationResult {
    /// Violation messages in the order they were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }
}

/// Response-shaped wrapper for a failed validation
///
/// Admin callers surface this verbatim as an API error body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub details: Vec<String>,
}

/// Wrap a failing validation result into the API error body shape.
pub fn format_validation_errors(result: &CatalogValidationResult) -> ValidationErrorResponse {
    ValidationErrorResponse {
        error: "Wholesale pricing validation failed".to_string(),
        details: result.error_messages(),
    }
}

/// Catalog Validator
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check the full pricing configuration of a product record.
    ///
    /// Rules run in a fixed priority order, so when a single rule fails its
    /// message is the first error; a configuration breaking several rules
    /// reports every one of them.
    pub fn validate_pricing(product: &Product) -> CatalogValidationResult {
        let mut errors = Self::validate_basic_pricing(product.base_price, product.wholesale_price)
            .errors;

        if let Some(moq) = product.moq {
            if moq == 0 {
                errors.push(CatalogViolation::NonPositiveMoq);
            }
        }

        for tier in &product.wholesale_tiers {
            if tier.min_quantity == 0 {
                errors.push(CatalogViolation::NonPositiveMinQuantity);
            }
        }

        for tier in &product.wholesale_tiers {
            if let TierBound::Bounded(max) = tier.max_quantity {
                if max < tier.min_quantity {
                    errors.push(CatalogViolation::MaxBelowMin);
                }
            }
        }

        for tier in &product.wholesale_tiers {
            if validation::validate_percent_range(tier.discount_percent).is_err() {
                errors.push(CatalogViolation::DiscountOutOfRange);
            }
        }

        for tier in &product.wholesale_tiers {
            if tier.price <= product.base_price {
                errors.push(CatalogViolation::TierPriceNotAboveBase);
            }
        }

        for tier in &product.wholesale_tiers {
            if tier.price > product.wholesale_price {
                errors.push(CatalogViolation::TierPriceAboveWholesale);
            }
        }

        let mut sorted: Vec<&WholesaleTier> = product.wholesale_tiers.iter().collect();
        sorted.sort_by_key(|tier| tier.min_quantity);

        // One report per adjacent overlapping pair: the lower bracket's
        // effective upper bound must sit strictly below the next bracket.
        for pair in sorted.windows(2) {
            let overlaps = match pair[0].max_quantity {
                TierBound::Bounded(max) => max >= pair[1].min_quantity,
                TierBound::Unbounded => true,
            };
            if overlaps {
                errors.push(CatalogViolation::OverlappingRanges);
            }
        }

        // Per-unit price must not rise with bracket size; equal is allowed.
        for pair in sorted.windows(2) {
            if pair[1].price > pair[0].price {
                errors.push(CatalogViolation::IncreasingTierPrice);
            }
        }

        if !errors.is_empty() {
            tracing::debug!(
                "Pricing configuration rejected with {} violation(s)",
                errors.len()
            );
        }

        CatalogValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Standalone basic-pricing check, reusable without a tier list: the
    /// wholesale price must strictly clear the cost floor.
    pub fn validate_basic_pricing(
        base_price: Decimal,
        wholesale_price: Decimal,
    ) -> CatalogValidationResult {
        let mut errors = Vec::new();
        if wholesale_price <= base_price {
            errors.push(CatalogViolation::WholesaleNotAboveBase);
        }

        CatalogValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
