//! # Domain Types
//!
//! Value objects passed into and out of the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PricingTier    │   │   OrderTotal    │   │    VatRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  min_quantity   │   │  subtotal       │   │  bps (u32)      │       │
//! │  │  max_quantity?  │   │  shipping_cost  │   │  2000 = 20%     │       │
//! │  │  price_per_unit │   │  vat_amount     │   └─────────────────┘       │
//! │  │  discount?      │   │  total          │                             │
//! │  │  label?         │   │  shipping_method│   ┌─────────────────┐       │
//! │  └─────────────────┘   └─────────────────┘   │  VatBreakdown   │       │
//! │                                              │  exclusive, vat │       │
//! │  ┌─────────────────┐                         └─────────────────┘       │
//! │  │ ShippingOption  │                                                    │
//! │  │  method, cost   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are transient: built per pricing request, never persisted,
//! no identity.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::round_half_up;
use crate::validation::{validate_vat_rate_bps, ValidationResult};
use crate::DEFAULT_VAT_RATE_BPS;

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (UK standard rate), 500 bps = 5% (reduced rate)
///
/// Storing an integer keeps the rate exact; [`VatRate::as_fraction`] turns it
/// into the `0.20` the formulas use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a VAT rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// Creates a VAT rate from a percentage (20.0 → 2000 bps).
    ///
    /// Percentages are rounded half-up to whole basis points. Anything outside
    /// 0% to 100% is rejected with [`ValidationError::OutOfRange`].
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::types::VatRate;
    ///
    /// assert_eq!(VatRate::from_percentage(Decimal::new(175, 1)).unwrap().bps(), 1750);
    /// assert!(VatRate::from_percentage(Decimal::new(-5, 0)).is_err());
    /// ```
    pub fn from_percentage(pct: Decimal) -> ValidationResult<Self> {
        let out_of_range = || ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: 10_000,
        };

        let bps = pct
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|bps| round_half_up(bps, 0))
            .filter(|bps| !bps.is_sign_negative() || bps.is_zero())
            .and_then(|bps| bps.to_u32())
            .ok_or_else(out_of_range)?;

        validate_vat_rate_bps(bps)?;
        Ok(VatRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction: 2000 bps → `0.2000`.
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Zero-rated goods.
    #[inline]
    pub const fn zero() -> Self {
        VatRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Defaults to the standard 20% rate.
impl Default for VatRate {
    fn default() -> Self {
        VatRate(DEFAULT_VAT_RATE_BPS)
    }
}

// =============================================================================
// Pricing Tier
// =============================================================================

/// One quantity band of bulk pricing.
///
/// `min_quantity` and `max_quantity` are both inclusive. A missing
/// `max_quantity` means the band has no upper bound.
///
/// ## Ordering
/// Tiers are consumed in the order given. The engine neither sorts nor
/// validates them, so the first band that contains the quantity wins even if a
/// later band would also match. See [`crate::validation::validate_tiers`] for an
/// opt-in check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Inclusive lower bound.
    pub min_quantity: u32,

    /// Inclusive upper bound; `None` = unbounded.
    #[serde(default)]
    pub max_quantity: Option<u32>,

    /// Flat price charged per unit inside this band.
    #[ts(type = "string")]
    pub price_per_unit: Decimal,

    /// Discount as shown by the CMS. Informational only, never used in math.
    #[serde(default)]
    #[ts(type = "string | null")]
    pub discount: Option<Decimal>,

    /// Display label ("Trade", "Bulk 100+").
    #[serde(default)]
    pub label: Option<String>,
}

impl PricingTier {
    /// Creates a tier with no discount or label.
    pub fn new(min_quantity: u32, max_quantity: Option<u32>, price_per_unit: Decimal) -> Self {
        PricingTier {
            min_quantity,
            max_quantity,
            price_per_unit,
            discount: None,
            label: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns true if `quantity` falls inside this band.
    #[inline]
    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.min_quantity && self.max_quantity.map_or(true, |max| quantity <= max)
    }
}

// =============================================================================
// Order Total
// =============================================================================

/// The fully rounded money summary shown at checkout and sent to payments.
///
/// ## Invariant
/// `total == subtotal + shipping_cost + vat_amount`, where each of the three
/// parts was rounded to the penny first. The sum itself is not re-rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    #[ts(type = "string")]
    pub subtotal: Decimal,
    #[ts(type = "string")]
    pub shipping_cost: Decimal,
    #[ts(type = "string")]
    pub vat_amount: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,
    /// Left empty by the engine; set by checkout.
    pub shipping_method: String,
}

impl OrderTotal {
    /// Sets the shipping method label.
    pub fn with_shipping_method(mut self, method: impl Into<String>) -> Self {
        self.shipping_method = method.into();
        self
    }
}

// =============================================================================
// VAT Breakdown
// =============================================================================

/// A VAT-inclusive amount split into its net and VAT parts.
///
/// Both parts are rounded independently, so `exclusive + vat` can be one penny
/// away from the amount they were extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatBreakdown {
    #[ts(type = "string")]
    pub exclusive: Decimal,
    #[ts(type = "string")]
    pub vat: Decimal,
}

// =============================================================================
// Shipping Option
// =============================================================================

/// A delivery option chosen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingOption {
    /// Label copied onto [`OrderTotal::shipping_method`].
    pub method: String,
    #[ts(type = "string")]
    pub cost: Decimal,
}

impl ShippingOption {
    pub fn new(method: impl Into<String>, cost: Decimal) -> Self {
        ShippingOption {
            method: method.into(),
            cost,
        }
    }

    /// No shipping charged (collection, digital goods).
    pub fn free(method: impl Into<String>) -> Self {
        ShippingOption::new(method, Decimal::ZERO)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vat_rate_from_bps() {
        let rate = VatRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert_eq!(rate.as_fraction(), dec!(0.20));
        assert_eq!(rate.percentage(), dec!(20));
    }

    #[test]
    fn test_vat_rate_from_percentage() {
        assert_eq!(VatRate::from_percentage(dec!(20)).unwrap().bps(), 2000);
        assert_eq!(VatRate::from_percentage(dec!(5)).unwrap().bps(), 500);
        assert_eq!(VatRate::from_percentage(dec!(17.5)).unwrap().bps(), 1750);
        assert_eq!(VatRate::from_percentage(dec!(0.125)).unwrap().bps(), 13);
        assert_eq!(VatRate::from_percentage(Decimal::ZERO).unwrap(), VatRate::zero());
        assert_eq!(VatRate::from_percentage(dec!(100)).unwrap().bps(), 10_000);
    }

    #[test]
    fn test_vat_rate_from_percentage_rejects_out_of_range() {
        let expected = ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(VatRate::from_percentage(dec!(-5)).unwrap_err(), expected);
        assert_eq!(VatRate::from_percentage(dec!(100.01)).unwrap_err(), expected);
        assert_eq!(VatRate::from_percentage(dec!(50000000)).unwrap_err(), expected);
        assert_eq!(VatRate::from_percentage(Decimal::MAX).unwrap_err(), expected);
    }

    #[test]
    fn test_vat_rate_default_is_standard_rate() {
        assert_eq!(VatRate::default(), VatRate::from_bps(DEFAULT_VAT_RATE_BPS));
        assert!(VatRate::zero().is_zero());
    }

    #[test]
    fn test_tier_contains_is_inclusive() {
        let tier = PricingTier::new(50, Some(99), dec!(2.25));
        assert!(!tier.contains(49));
        assert!(tier.contains(50));
        assert!(tier.contains(99));
        assert!(!tier.contains(100));

        let open = PricingTier::new(100, None, dec!(2.00));
        assert!(open.contains(100));
        assert!(open.contains(u32::MAX));
    }

    #[test]
    fn test_tier_deserializes_from_cms_shape() {
        let tier: PricingTier = serde_json::from_str(
            r#"{"minQuantity":100,"pricePerUnit":"2.00","label":"Bulk 100+"}"#,
        )
        .unwrap();
        assert_eq!(tier.min_quantity, 100);
        assert_eq!(tier.max_quantity, None);
        assert_eq!(tier.price_per_unit, dec!(2.00));
        assert_eq!(tier.label.as_deref(), Some("Bulk 100+"));
    }

    #[test]
    fn test_order_total_with_shipping_method() {
        let total = OrderTotal {
            subtotal: dec!(100.00),
            shipping_cost: dec!(5.00),
            vat_amount: dec!(21.00),
            total: dec!(126.00),
            shipping_method: String::new(),
        }
        .with_shipping_method("Next day");
        assert_eq!(total.shipping_method, "Next day");
    }
}
