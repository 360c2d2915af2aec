//! # Money Module
//!
//! Provides the `Money` type and the storefront's rounding rule.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    1.005 * 100 = 100.49999999999999  → rounds to £1.00  ❌ WRONG!       │
//! │                                                                         │
//! │  Tier prices are not always whole pennies (£0.125 per label), so       │
//! │  integer pence can't hold an unrounded line total either.              │
//! │                                                                         │
//! │  OUR SOLUTION: Exact base-10 decimals                                  │
//! │    Unrounded values stay exact until the order total rounds them       │
//! │    to the penny, once, with a single documented rule.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Half-up toward positive infinity: `floor(x × 10ⁿ + 0.5) / 10ⁿ`.
//! `2.345 → 2.35`, `-2.345 → -2.34`. This is the storefront's long-standing
//! checkout convention and every rounded field goes through [`round_half_up`].
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_core::money::Money;
//!
//! let price = Money::from_pence(1099); // £10.99
//! let line = price * 3;                // £32.97
//! assert_eq!(line.to_string(), "£32.97");
//! assert_eq!(line.amount(), Decimal::new(3297, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Decimal places in the storefront currency (pounds and pence).
pub const CURRENCY_DECIMALS: u32 = 2;

/// Display prefix for formatted prices.
pub const CURRENCY_SYMBOL: &str = "£";

/// Largest scale a `Decimal` can hold.
const MAX_DECIMAL_SCALE: u32 = 28;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds `value` to `dp` decimal places, halves toward positive infinity.
///
/// `dp` above 28 is clamped to 28, the most a `Decimal` can carry.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::money::round_half_up;
///
/// assert_eq!(round_half_up(Decimal::new(2345, 3), 2), Decimal::new(235, 2));
/// assert_eq!(round_half_up(Decimal::new(-2345, 3), 2), Decimal::new(-234, 2));
/// assert_eq!(round_half_up(Decimal::new(105, 1), 0), Decimal::from(11));
/// ```
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let dp = dp.min(MAX_DECIMAL_SCALE);
    // Halves go up for positives and toward zero for negatives: both are +∞.
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(dp, strategy);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(dp);
    rounded
}

/// Rounds a monetary amount to the penny.
#[inline]
pub fn round_to_pence(value: Decimal) -> Decimal {
    round_half_up(value, CURRENCY_DECIMALS)
}

/// Formats an amount for display: `£`-prefixed, two decimal places.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_core::format_price;
///
/// assert_eq!(format_price(Decimal::new(125, 1)), "£12.50");
/// assert_eq!(format_price(Decimal::new(-55, 1)), "-£5.50");
/// ```
pub fn format_price(amount: Decimal) -> String {
    Money::from_decimal(amount).to_string()
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in pounds, held as an exact decimal.
///
/// ## Design Decisions
/// - **Unrounded by default**: line totals stay exact; only [`Money::round_to_pence`]
///   and the order-total assembly round
/// - **Signed**: negative values are allowed for refunds and adjustments
/// - **Serialized as a string**: `"12.50"` survives JSON without float drift
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole pence.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(250).to_string(), "£2.50");
    /// ```
    #[inline]
    pub fn from_pence(pence: i64) -> Self {
        Money(Decimal::new(pence, CURRENCY_DECIMALS))
    }

    /// Returns the exact amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to the penny using [`round_half_up`].
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// let eighth = Money::from_decimal(Decimal::new(125, 3)); // £0.125
    /// assert_eq!(eighth.round_to_pence(), Money::from_pence(13));
    /// ```
    #[inline]
    pub fn round_to_pence(&self) -> Self {
        Money(round_to_pence(self.0))
    }

    /// Multiplies a unit price by a quantity without rounding.
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to the penny with the `£` prefix.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = round_to_pence(self.0);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}{}{:.2}", sign, CURRENCY_SYMBOL, rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
