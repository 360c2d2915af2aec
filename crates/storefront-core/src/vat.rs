//! # VAT and Order Totals
//!
//! VAT is levied on goods **and** shipping together. That is a deliberate UK
//! rule (delivery follows the VAT treatment of the goods), not an oversight.
//!
//! ## Order Total Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal (unrounded)   shipping (unrounded)                            │
//! │       │                       │                                         │
//! │       └──────────┬────────────┘                                         │
//! │                  ▼                                                      │
//! │  vat_amount = round₂((subtotal + shipping) × rate)                      │
//! │                                                                         │
//! │  subtotal' = round₂(subtotal)   shipping' = round₂(shipping)           │
//! │                                                                         │
//! │  total = subtotal' + shipping' + vat_amount     (NOT re-rounded)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Summing pre-rounded parts can drift a penny from rounding the exact sum.
//! Receipts show the three parts, so the total must equal what they add up to.

use rust_decimal::Decimal;
use tracing::debug;

use crate::money::round_to_pence;
use crate::types::{OrderTotal, VatBreakdown, VatRate};

/// Computes VAT on goods + shipping, rounded to the penny.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::vat::calculate_vat;
/// use storefront_core::VatRate;
///
/// let vat = calculate_vat(Decimal::new(10000, 2), Decimal::new(500, 2), VatRate::default());
/// assert_eq!(vat, Decimal::new(2100, 2)); // 20% of £105.00
/// ```
pub fn calculate_vat(subtotal: Decimal, shipping_cost: Decimal, vat_rate: VatRate) -> Decimal {
    round_to_pence((subtotal + shipping_cost) * vat_rate.as_fraction())
}

/// Builds the checkout [`OrderTotal`] from a subtotal and shipping cost.
///
/// Each monetary field is rounded to the penny on its own and `total` is the
/// sum of the rounded fields. `shipping_method` is left empty for the caller.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::vat::calculate_order_total;
/// use storefront_core::VatRate;
///
/// let order = calculate_order_total(
///     Decimal::new(10000, 2),
///     Decimal::new(500, 2),
///     VatRate::from_bps(2000),
/// );
/// assert_eq!(order.vat_amount, Decimal::new(2100, 2));
/// assert_eq!(order.total, Decimal::new(12600, 2));
/// assert!(order.shipping_method.is_empty());
/// ```
pub fn calculate_order_total(
    subtotal: Decimal,
    shipping_cost: Decimal,
    vat_rate: VatRate,
) -> OrderTotal {
    let vat_amount = calculate_vat(subtotal, shipping_cost, vat_rate);
    let subtotal = round_to_pence(subtotal);
    let shipping_cost = round_to_pence(shipping_cost);
    let total = subtotal + shipping_cost + vat_amount;

    debug!(
        %subtotal,
        %shipping_cost,
        %vat_amount,
        %total,
        vat_rate_bps = vat_rate.bps(),
        "Order total calculated"
    );

    OrderTotal {
        subtotal,
        shipping_cost,
        vat_amount,
        total,
        shipping_method: String::new(),
    }
}

/// Splits a VAT-inclusive amount into its net and VAT parts.
///
/// `exclusive = amount / (1 + rate)` and `vat = amount - exclusive`, each
/// rounded to the penny independently.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::vat::calculate_vat_exclusive;
/// use storefront_core::VatRate;
///
/// let split = calculate_vat_exclusive(Decimal::new(12000, 2), VatRate::default());
/// assert_eq!(split.exclusive, Decimal::new(10000, 2));
/// assert_eq!(split.vat, Decimal::new(2000, 2));
/// ```
pub fn calculate_vat_exclusive(vat_inclusive_amount: Decimal, vat_rate: VatRate) -> VatBreakdown {
    let exclusive = vat_inclusive_amount / (Decimal::ONE + vat_rate.as_fraction());
    let vat = vat_inclusive_amount - exclusive;

    VatBreakdown {
        exclusive: round_to_pence(exclusive),
        vat: round_to_pence(vat),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
