//! # Cart
//!
//! Cart lines as the checkout layer hands them over, priced through
//! [`crate::pricing`] and summed into an [`OrderTotal`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront Action          Cart Method              State Change       │
//! │  ─────────────────          ───────────              ────────────       │
//! │                                                                         │
//! │  Add to basket ───────────► add_item() ────────────► push or merge qty │
//! │                                                                         │
//! │  Change quantity ─────────► update_quantity() ─────► items[i].qty = n  │
//! │                                                                         │
//! │  Remove ──────────────────► remove_item() ─────────► items.remove(i)   │
//! │                                                                         │
//! │  Checkout ────────────────► order_total() ─────────► (read only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are keyed by `(product_id, variant_id)`: the same product in two
//! variants is two lines. Because tier prices depend on the line quantity,
//! merging quantities can move a line into a cheaper band.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, PriceQuote};
use crate::types::{OrderTotal, PricingTier, ShippingOption, VatRate};
use crate::validation::{validate_price, validate_quantity, validate_uuid};
use crate::vat::calculate_order_total;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// One line in the cart.
///
/// ## Design Notes
/// `base_price`, `variant_adjustment` and `tiers` are copied from the catalog
/// when the line is added, so later catalog edits don't reprice a basket the
/// customer is looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID)
    pub product_id: String,

    /// Variant ID (UUID), if the product has variants
    #[serde(default)]
    pub variant_id: Option<String>,

    /// Display name at time of adding
    pub name: String,

    pub quantity: u32,

    /// Catalog unit price before tiers
    #[ts(type = "string")]
    pub base_price: Decimal,

    /// Per-variant delta; only applies when no tier matches
    #[serde(default)]
    #[ts(type = "string")]
    pub variant_adjustment: Decimal,

    /// Bulk tiers in catalog order
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

impl CartItem {
    /// Creates a line with no variant and no tiers.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        base_price: Decimal,
    ) -> Self {
        CartItem {
            product_id: product_id.into(),
            variant_id: None,
            name: name.into(),
            quantity,
            base_price,
            variant_adjustment: Decimal::ZERO,
            tiers: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant_id: impl Into<String>, adjustment: Decimal) -> Self {
        self.variant_id = Some(variant_id.into());
        self.variant_adjustment = adjustment;
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<PricingTier>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Unit price at the current quantity.
    pub fn unit_price(&self) -> Decimal {
        pricing::calculate_unit_price(
            self.quantity,
            self.base_price,
            &self.tiers,
            self.variant_adjustment,
        )
    }

    /// Unit price × quantity, unrounded.
    pub fn line_total(&self) -> Decimal {
        pricing::calculate_line_total(
            self.quantity,
            self.base_price,
            &self.tiers,
            self.variant_adjustment,
        )
    }

    /// Saving badge for the active tier (0 when no tier applies).
    pub fn tier_discount_percentage(&self) -> u32 {
        self.quote().discount_percentage
    }

    /// Full price breakdown for display.
    pub fn quote(&self) -> PriceQuote<'_> {
        pricing::quote(
            self.quantity,
            self.base_price,
            &self.tiers,
            self.variant_adjustment,
        )
    }

    fn matches(&self, product_id: &str, variant_id: Option<&str>) -> bool {
        self.product_id == product_id && self.variant_id.as_deref() == variant_id
    }

    fn validate(&self) -> CoreResult<()> {
        validate_uuid("product_id", &self.product_id)?;
        if let Some(variant_id) = &self.variant_id {
            validate_uuid("variant_id", variant_id)?;
        }
        validate_price("base_price", self.base_price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `(product_id, variant_id)`
/// - Every line has `0 < quantity ≤ MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` lines
///
/// Deserializing goes through [`Cart::from_items`], so a stored or posted
/// cart document is held to the same rules as one built with `add_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Wire shape of a [`Cart`] before its lines are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartDocument {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = CartDocument::deserialize(deserializer)?;
        Cart::from_items(document.items).map_err(serde::de::Error::custom)
    }
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Builds a cart from lines, merging duplicates.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> CoreResult<Self> {
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(item)?;
        }
        Ok(cart)
    }

    /// Adds a line, or increases the quantity of the matching line.
    ///
    /// The existing line keeps its captured prices; only its quantity grows.
    pub fn add_item(&mut self, item: CartItem) -> CoreResult<()> {
        item.validate()?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&item.product_id, item.variant_id.as_deref()))
        {
            let new_qty = u64::from(existing.quantity) + u64::from(item.quantity);
            if new_qty > u64::from(MAX_ITEM_QUANTITY) {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = new_qty as u32;
            debug!(product_id = %existing.product_id, quantity = existing.quantity, "Merged cart line");
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        debug!(product_id = %item.product_id, quantity = item.quantity, "Added cart line");
        self.items.push(item);
        Ok(())
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        variant_id: Option<&str>,
        quantity: u32,
    ) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id, variant_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: u64::from(quantity),
                max: MAX_ITEM_QUANTITY,
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.matches(product_id, variant_id))
            .ok_or_else(|| CoreError::ItemNotFound(product_id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str, variant_id: Option<&str>) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| !i.matches(product_id, variant_id));

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of the unrounded line totals.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| Money::from_decimal(i.line_total()))
            .sum::<Money>()
            .amount()
    }

    /// Checkout summary with VAT on goods + shipping and the shipping method set.
    pub fn order_total(&self, shipping: &ShippingOption, vat_rate: VatRate) -> OrderTotal {
        calculate_order_total(self.subtotal(), shipping.cost, vat_rate)
            .with_shipping_method(shipping.method.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
