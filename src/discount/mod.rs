// Discount Validator
//
// Decides whether a customer-level discount percentage is currently
// applicable. Checks the percentage range and the optional expiry instant;
// nothing else about the customer or the cart is consulted here.
//
// Validation and pricing are a two-step protocol: callers
// validate once, then hand the resulting boolean and percent to the price
// calculator for as many cart lines as they like. The calculator never
// re-checks expiry, so a clock tick mid-cart cannot change the answer
// between lines.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::DiscountRejection;
use crate::models::CustomerDiscount;
use crate::validation;

/// Outcome of a discount applicability check
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountValidation {
    pub is_valid: bool,
    /// The percent to apply; zero whenever the candidate was rejected.
    pub applicable_percent: Decimal,
    pub reason: Option<DiscountRejection>,
}

/// Discount Validator
///
/// Pure function of its inputs and the supplied instant. Callers that need
/// deterministic results (tests, batch pricing) should inject the clock via
/// [`DiscountValidator::validate_at`].
pub struct DiscountValidator;

impl DiscountValidator {
    /// Check a discount candidate against the ambient clock.
    pub fn validate(percent: Decimal, expires_at: Option<DateTime<Utc>>) -> DiscountValidation {
        Self::validate_at(percent, expires_at, Utc::now())
    }

    /// Check a discount candidate against an injected instant.
    pub fn validate_at(
        percent: Decimal,
        expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DiscountValidation {
        if validation::validate_percent_range(percent).is_err() {
            return DiscountValidation {
                is_valid: false,
                applicable_percent: Decimal::ZERO,
                reason: Some(DiscountRejection::InvalidPercentage),
            };
        }

        if let Some(expiry) = expires_at {
            if expiry < now {
                return DiscountValidation {
                    is_valid: false,
                    applicable_percent: Decimal::ZERO,
                    reason: Some(DiscountRejection::Expired),
                };
            }
        }

        DiscountValidation {
            is_valid: true,
            applicable_percent: percent,
            reason: None,
        }
    }

    /// Check a loaded [`CustomerDiscount`] record against the ambient clock.
    pub fn validate_candidate(candidate: &CustomerDiscount) -> DiscountValidation {
        Self::validate(candidate.percent, candidate.expires_at)
    }
}
