//! # Validation Module
//!
//! Opt-in input validation for pricing inputs.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CMS / admin dashboard                                        │
//! │  └── Editors enter tiers and prices                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart (this crate)                                            │
//! │  └── CartItem ids, quantity and base price checked on add              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── NO validation: every input produces a price                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing functions never call into this module. A malformed tier list
//! still prices (first match wins); [`validate_tiers`] exists so the admin
//! dashboard can warn before publishing one.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::PricingTier;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    Ok(())
}

/// Validates that a price is not negative. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price("base_price", Decimal::new(250, 2)).is_ok());
/// assert!(validate_price("base_price", Decimal::ZERO).is_ok());
/// assert!(validate_price("base_price", Decimal::new(-1, 2)).is_err());
/// ```
pub fn validate_price(field: &str, price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: price.to_string(),
        });
    }

    Ok(())
}

/// Validates a VAT rate in basis points (0% to 100%).
pub fn validate_vat_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Tier Validators
// =============================================================================

/// Checks that tiers are well-formed: each band's bounds are in order, bands
/// are listed in increasing order, and no two bands overlap.
///
/// Gaps between bands are allowed; quantities in a gap pay the base price.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::types::PricingTier;
/// use storefront_core::validation::validate_tiers;
///
/// let ok = vec![
///     PricingTier::new(1, Some(49), Decimal::new(250, 2)),
///     PricingTier::new(50, None, Decimal::new(225, 2)),
/// ];
/// assert!(validate_tiers(&ok).is_ok());
///
/// let overlapping = vec![
///     PricingTier::new(1, None, Decimal::new(250, 2)),
///     PricingTier::new(50, None, Decimal::new(225, 2)),
/// ];
/// assert!(validate_tiers(&overlapping).is_err());
/// ```
pub fn validate_tiers(tiers: &[PricingTier]) -> ValidationResult<()> {
    for (index, tier) in tiers.iter().enumerate() {
        validate_price("price_per_unit", tier.price_per_unit)?;

        if let Some(max) = tier.max_quantity {
            if max < tier.min_quantity {
                return Err(ValidationError::InvertedTier {
                    index,
                    min: tier.min_quantity,
                    max,
                });
            }
        }

        if index == 0 {
            continue;
        }

        let previous = &tiers[index - 1];
        // An unbounded band must be last.
        let overlaps = match previous.max_quantity {
            None => true,
            Some(prev_max) => tier.min_quantity <= prev_max,
        };
        if overlaps {
            return Err(ValidationError::OverlappingTiers {
                previous: index - 1,
                index,
            });
        }
    }

    Ok(())
}

// =============================================================================
// ID Validators
// =============================================================================

/// Validates a UUID string (product and variant ids from the backend).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_uuid;
///
/// assert!(validate_uuid("product_id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("product_id", "not-a-uuid").is_err());
/// ```
pub fn validate_uuid(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
