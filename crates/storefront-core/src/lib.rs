//! # storefront-core: Pure Pricing Logic for the Storefront
//!
//! This crate computes every price the storefront shows or charges: tiered
//! unit prices, line totals, discount badges, VAT and order totals. It has
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Storefront pages (CMS content, BaaS data)             │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Payment session            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartItem records                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │    vat    │  │   cart    │  │   money   │  │   │
//! │  │   │   tiers   │  │ OrderTotal│  │ CartItem  │  │  £ format │  │   │
//! │  │   │ unit/line │  │  reverse  │  │   Cart    │  │  rounding │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Tier selection, unit price, line total, discount percentage
//! - [`vat`] - VAT on goods + shipping, order totals, reverse VAT extraction
//! - [`cart`] - Cart items priced through the engine
//! - [`money`] - Decimal money with round-half-up to the penny
//! - [`types`] - Value objects (PricingTier, OrderTotal, VatRate, ...)
//! - [`config`] - Injected pricing configuration
//! - [`validation`] - Opt-in input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no side effects
//! 2. **Total Functions**: pricing never errors; absence falls back to base price
//! 3. **Exact Decimals**: no binary floats anywhere in a price
//! 4. **Injected Rates**: the VAT rate is a parameter, never a hidden global
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_core::pricing::calculate_line_total;
//! use storefront_core::types::PricingTier;
//! use storefront_core::vat::calculate_order_total;
//! use storefront_core::VatRate;
//!
//! let tiers = vec![
//!     PricingTier::new(1, Some(49), Decimal::new(250, 2)),
//!     PricingTier::new(50, Some(99), Decimal::new(225, 2)),
//!     PricingTier::new(100, None, Decimal::new(200, 2)),
//! ];
//!
//! let line = calculate_line_total(75, Decimal::new(250, 2), &tiers, Decimal::ZERO);
//! assert_eq!(line, Decimal::new(16875, 2)); // 75 × £2.25
//!
//! let total = calculate_order_total(line, Decimal::new(500, 2), VatRate::default());
//! assert_eq!(total.total, Decimal::new(20850, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod vat;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use config::PricingConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_price, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default VAT rate in basis points (2000 = 20%, UK standard rate).
pub const DEFAULT_VAT_RATE_BPS: u32 = 2000;

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps payment-session payloads small.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Bulk tiers go well past retail quantities, but a five-digit order is almost
/// always a typo and goes through the trade desk instead.
pub const MAX_ITEM_QUANTITY: u32 = 9_999;
