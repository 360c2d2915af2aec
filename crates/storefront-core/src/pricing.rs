//! # Pricing Engine
//!
//! Tiered (bulk) unit pricing, line totals and discount percentages.
//!
//! ## Price Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity, base_price, tiers, variant_adjustment                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  select_active_tier() ── first tier (list order) containing quantity   │
//! │       │                                                                 │
//! │       ├── None ──────► unit = base_price + variant_adjustment          │
//! │       │                                                                 │
//! │       └── Some(tier) ─► unit = tier.price_per_unit                     │
//! │                         (variant_adjustment is NOT added)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  line = unit × quantity   (unrounded; the order total rounds)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Asymmetry
//! A variant's price adjustment only ever reaches the fallback base price. Once
//! any tier matches, the tier price is charged as-is, so a "+£0.50 large"
//! variant costs the same as the plain product at bulk quantities. Changing
//! this would change checkout totals for existing orders, so it stays.
//!
//! Every function here is total: empty tier lists, zero quantities and zero
//! prices all resolve to a value, never an error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::money::round_half_up;
use crate::types::PricingTier;

/// Returns the first tier, in list order, whose band contains `quantity`.
///
/// `None` means "charge the base price" and is an expected outcome, not a
/// failure. Tiers are not sorted: with overlapping bands the earlier one wins.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::pricing::select_active_tier;
/// use storefront_core::types::PricingTier;
///
/// let tiers = vec![
///     PricingTier::new(1, Some(49), Decimal::new(250, 2)),
///     PricingTier::new(50, None, Decimal::new(225, 2)),
/// ];
/// assert_eq!(select_active_tier(60, &tiers), Some(&tiers[1]));
/// assert_eq!(select_active_tier(0, &tiers), None);
/// ```
pub fn select_active_tier(quantity: u32, tiers: &[PricingTier]) -> Option<&PricingTier> {
    let tier = tiers.iter().find(|tier| tier.contains(quantity));
    trace!(
        quantity,
        tier_count = tiers.len(),
        matched_min = tier.map(|t| t.min_quantity),
        "Selected pricing tier"
    );
    tier
}

/// Computes the unit price for `quantity`.
///
/// - No matching tier: `base_price + variant_adjustment`
/// - Matching tier: the tier's `price_per_unit`, ignoring `variant_adjustment`
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::pricing::calculate_unit_price;
/// use storefront_core::types::PricingTier;
///
/// let base = Decimal::new(250, 2);
/// let large = Decimal::new(50, 2);
/// let tiers = vec![PricingTier::new(50, None, Decimal::new(225, 2))];
///
/// assert_eq!(calculate_unit_price(10, base, &tiers, large), Decimal::new(300, 2));
/// assert_eq!(calculate_unit_price(50, base, &tiers, large), Decimal::new(225, 2));
/// ```
pub fn calculate_unit_price(
    quantity: u32,
    base_price: Decimal,
    tiers: &[PricingTier],
    variant_adjustment: Decimal,
) -> Decimal {
    resolve_unit_price(
        select_active_tier(quantity, tiers),
        base_price,
        variant_adjustment,
    )
}

/// The one place the tier/adjustment asymmetry lives.
#[inline]
fn resolve_unit_price(
    tier: Option<&PricingTier>,
    base_price: Decimal,
    variant_adjustment: Decimal,
) -> Decimal {
    match tier {
        Some(tier) => tier.price_per_unit,
        None => base_price + variant_adjustment,
    }
}

/// Computes `unit_price × quantity` without rounding.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::pricing::calculate_line_total;
///
/// let line = calculate_line_total(10, Decimal::new(250, 2), &[], Decimal::ZERO);
/// assert_eq!(line, Decimal::new(2500, 2));
/// ```
pub fn calculate_line_total(
    quantity: u32,
    base_price: Decimal,
    tiers: &[PricingTier],
    variant_adjustment: Decimal,
) -> Decimal {
    calculate_unit_price(quantity, base_price, tiers, variant_adjustment) * Decimal::from(quantity)
}

/// Computes how much cheaper `tier` is than `base_price`, in whole percent.
///
/// Returns 0 when the tier is not cheaper than the base price (a pricier tier
/// is shown as "no discount", never as a surcharge) and when `base_price` is
/// not positive. Otherwise rounds `(base - tier) / base × 100` half-up.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::pricing::calculate_discount_percentage;
/// use storefront_core::types::PricingTier;
///
/// let tier = PricingTier::new(50, Some(99), Decimal::new(225, 2));
/// assert_eq!(calculate_discount_percentage(&tier, Decimal::new(250, 2)), 10);
/// ```
pub fn calculate_discount_percentage(tier: &PricingTier, base_price: Decimal) -> u32 {
    if tier.price_per_unit >= base_price || base_price <= Decimal::ZERO {
        return 0;
    }

    (base_price - tier.price_per_unit)
        .checked_div(base_price)
        .map(|ratio| round_half_up(ratio * Decimal::ONE_HUNDRED, 0))
        .and_then(|pct| pct.to_u32())
        .unwrap_or(0)
}

// =============================================================================
// Price Quote
// =============================================================================

/// Everything the product page and cart line show for one quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote<'a> {
    pub unit_price: Decimal,
    pub line_total: Decimal,
    /// The band that set the price, if any.
    pub tier: Option<&'a PricingTier>,
    /// Saving of the active tier against `base_price + variant_adjustment`.
    pub discount_percentage: u32,
}

/// Resolves unit price, line total and the tier discount badge in one pass.
///
/// The discount is measured against the adjusted base price, i.e. what the
/// customer would pay per unit without the tier.
pub fn quote(
    quantity: u32,
    base_price: Decimal,
    tiers: &[PricingTier],
    variant_adjustment: Decimal,
) -> PriceQuote<'_> {
    let tier = select_active_tier(quantity, tiers);
    let unit_price = resolve_unit_price(tier, base_price, variant_adjustment);
    let adjusted_base = base_price + variant_adjustment;

    PriceQuote {
        unit_price,
        line_total: unit_price * Decimal::from(quantity),
        tier,
        discount_percentage: tier.map_or(0, |t| calculate_discount_percentage(t, adjusted_base)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bulk_tiers() -> Vec<PricingTier> {
        vec![
            PricingTier::new(1, Some(49), dec!(2.50)),
            PricingTier::new(50, Some(99), dec!(2.25)),
            PricingTier::new(100, None, dec!(2.00)),
        ]
    }

    #[test]
    fn test_no_tiers_uses_base_price() {
        assert_eq!(calculate_unit_price(10, dec!(2.50), &[], Decimal::ZERO), dec!(2.50));
        assert_eq!(calculate_line_total(10, dec!(2.50), &[], Decimal::ZERO), dec!(25.00));
    }

    #[test]
    fn test_mid_tier_quantity() {
        let tiers = bulk_tiers();
        assert_eq!(calculate_unit_price(75, dec!(2.50), &tiers, Decimal::ZERO), dec!(2.25));
        assert_eq!(calculate_line_total(75, dec!(2.50), &tiers, Decimal::ZERO), dec!(168.75));
    }

    #[test]
    fn test_unbounded_tier_catches_large_quantities() {
        let tiers = bulk_tiers();
        assert_eq!(calculate_unit_price(150, dec!(2.50), &tiers, Decimal::ZERO), dec!(2.00));
        assert_eq!(calculate_unit_price(u32::MAX, dec!(2.50), &tiers, Decimal::ZERO), dec!(2.00));
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        let tiers = bulk_tiers();
        assert_eq!(select_active_tier(49, &tiers).map(|t| t.min_quantity), Some(1));
        assert_eq!(select_active_tier(50, &tiers).map(|t| t.min_quantity), Some(50));
        assert_eq!(select_active_tier(99, &tiers).map(|t| t.min_quantity), Some(50));
        assert_eq!(select_active_tier(100, &tiers).map(|t| t.min_quantity), Some(100));
    }

    #[test]
    fn test_quantity_below_first_tier_falls_back_with_adjustment() {
        let tiers = vec![PricingTier::new(10, None, dec!(1.80))];
        assert_eq!(select_active_tier(0, &tiers), None);
        assert_eq!(calculate_unit_price(9, dec!(2.00), &tiers, dec!(0.40)), dec!(2.40));
    }

    #[test]
    fn test_variant_adjustment_ignored_once_tier_matches() {
        let tiers = bulk_tiers();
        assert_eq!(calculate_unit_price(75, dec!(2.50), &tiers, dec!(0.75)), dec!(2.25));
        assert_eq!(calculate_line_total(75, dec!(2.50), &tiers, dec!(0.75)), dec!(168.75));
    }

    #[test]
    fn test_gap_between_tiers_falls_back_to_base() {
        let tiers = vec![
            PricingTier::new(1, Some(9), dec!(3.00)),
            PricingTier::new(20, None, dec!(2.00)),
        ];
        assert_eq!(calculate_unit_price(15, dec!(3.10), &tiers, dec!(0.10)), dec!(3.20));
    }

    #[test]
    fn test_first_listed_tier_wins_when_out_of_order() {
        let tiers = vec![
            PricingTier::new(1, None, dec!(2.50)),
            PricingTier::new(100, None, dec!(2.00)),
        ];
        assert_eq!(calculate_unit_price(500, dec!(2.50), &tiers, Decimal::ZERO), dec!(2.50));

        let reversed: Vec<_> = tiers.into_iter().rev().collect();
        assert_eq!(calculate_unit_price(500, dec!(2.50), &reversed, Decimal::ZERO), dec!(2.00));
    }

    #[test]
    fn test_zero_quantity_and_zero_price() {
        let tiers = bulk_tiers();
        assert_eq!(calculate_line_total(0, dec!(2.50), &tiers, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_unit_price(5, Decimal::ZERO, &[], Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_is_not_rounded() {
        let tiers = vec![PricingTier::new(1, None, dec!(0.125))];
        assert_eq!(calculate_line_total(3, dec!(0.20), &tiers, Decimal::ZERO), dec!(0.375));
    }

    #[test]
    fn test_discount_percentage() {
        let tier = PricingTier::new(50, Some(99), dec!(2.25));
        assert_eq!(calculate_discount_percentage(&tier, dec!(2.50)), 10);

        let tier = PricingTier::new(100, None, dec!(2.00));
        assert_eq!(calculate_discount_percentage(&tier, dec!(2.50)), 20);
    }

    #[test]
    fn test_discount_percentage_rounds_half_up() {
        // 1/8 off = 12.5% → 13
        let tier = PricingTier::new(1, None, dec!(7.00));
        assert_eq!(calculate_discount_percentage(&tier, dec!(8.00)), 13);
        // 1/3 off = 33.33% → 33
        let tier = PricingTier::new(1, None, dec!(2.00));
        assert_eq!(calculate_discount_percentage(&tier, dec!(3.00)), 33);
    }

    #[test]
    fn test_discount_percentage_never_negative() {
        let pricier = PricingTier::new(1, None, dec!(3.00));
        assert_eq!(calculate_discount_percentage(&pricier, dec!(2.50)), 0);

        let same = PricingTier::new(1, None, dec!(2.50));
        assert_eq!(calculate_discount_percentage(&same, dec!(2.50)), 0);
    }

    #[test]
    fn test_discount_percentage_zero_base_price() {
        let tier = PricingTier::new(1, None, dec!(-1.00));
        assert_eq!(calculate_discount_percentage(&tier, Decimal::ZERO), 0);
    }

    #[test]
    fn test_quote_with_tier() {
        let tiers = bulk_tiers();
        let q = quote(75, dec!(2.50), &tiers, Decimal::ZERO);
        assert_eq!(q.unit_price, dec!(2.25));
        assert_eq!(q.line_total, dec!(168.75));
        assert_eq!(q.tier, Some(&tiers[1]));
        assert_eq!(q.discount_percentage, 10);
    }

    #[test]
    fn test_quote_keeps_adjustment_asymmetry() {
        let tiers = vec![PricingTier::new(50, None, dec!(2.25))];

        let tiered = quote(60, dec!(2.50), &tiers, dec!(0.50));
        assert_eq!(tiered.unit_price, dec!(2.25));
        assert_eq!(tiered.discount_percentage, 25); // against 3.00

        let fallback = quote(10, dec!(2.50), &tiers, dec!(0.50));
        assert_eq!(fallback.unit_price, dec!(3.00));
        assert_eq!(fallback.line_total, dec!(30.00));
    }

    #[test]
    fn test_quote_without_tier() {
        let q = quote(3, dec!(4.00), &[], dec!(1.00));
        assert_eq!(q.unit_price, dec!(5.00));
        assert_eq!(q.line_total, dec!(15.00));
        assert_eq!(q.tier, None);
        assert_eq!(q.discount_percentage, 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn price() -> impl Strategy<Value = Decimal> {
            (0i64..100_000).prop_map(|pence| Decimal::new(pence, 2))
        }

        proptest! {
            /// Property: below the first band the adjusted base price is charged.
            #[test]
            fn below_first_tier_charges_adjusted_base(
                qty in 0u32..50,
                base in price(),
                adjustment in price(),
            ) {
                let tiers = vec![PricingTier::new(50, None, dec!(1.00))];
                prop_assert_eq!(
                    calculate_unit_price(qty, base, &tiers, adjustment),
                    base + adjustment
                );
            }

            /// Property: inside a band the tier price is charged exactly.
            #[test]
            fn inside_tier_charges_tier_price(
                qty in 50u32..=99,
                base in price(),
                adjustment in price(),
            ) {
                let tiers = bulk_tiers();
                prop_assert_eq!(calculate_unit_price(qty, base, &tiers, adjustment), dec!(2.25));
            }

            /// Property: line total = unit price × quantity.
            #[test]
            fn line_total_is_unit_times_quantity(
                qty in 0u32..10_000,
                base in price(),
                adjustment in price(),
            ) {
                let tiers = bulk_tiers();
                let unit = calculate_unit_price(qty, base, &tiers, adjustment);
                prop_assert_eq!(
                    calculate_line_total(qty, base, &tiers, adjustment),
                    unit * Decimal::from(qty)
                );
            }

            /// Property: a quote agrees with the standalone price functions.
            #[test]
            fn quote_matches_price_functions(
                qty in 0u32..200,
                base in price(),
                adjustment in price(),
            ) {
                let tiers = vec![
                    PricingTier::new(10, Some(49), dec!(2.40)),
                    PricingTier::new(50, None, dec!(2.10)),
                ];
                let q = quote(qty, base, &tiers, adjustment);
                prop_assert_eq!(q.unit_price, calculate_unit_price(qty, base, &tiers, adjustment));
                prop_assert_eq!(q.line_total, calculate_line_total(qty, base, &tiers, adjustment));
                prop_assert_eq!(q.tier, select_active_tier(qty, &tiers));
            }

            /// Property: discount percentage is 0 whenever the tier is not cheaper.
            #[test]
            fn discount_zero_when_not_cheaper(base in price(), markup in price()) {
                let tier = PricingTier::new(1, None, base + markup);
                prop_assert_eq!(calculate_discount_percentage(&tier, base), 0);
            }

            /// Property: discount percentage never exceeds 100 for non-negative prices.
            #[test]
            fn discount_bounded(base in price(), tier_price in price()) {
                let tier = PricingTier::new(1, None, tier_price);
                prop_assert!(calculate_discount_percentage(&tier, base) <= 100);
            }
        }
    }
}
