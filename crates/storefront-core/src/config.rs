//! # Pricing Configuration
//!
//! Settings the pricing functions take as parameters.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`), read by the binary
//! 2. Defaults (this file)
//!
//! This module only holds the values. Reading the environment is I/O and
//! lives in the app; the core receives a finished `PricingConfig`.

use serde::{Deserialize, Serialize};

use crate::types::VatRate;
use crate::validation::{validate_vat_rate_bps, ValidationResult};
use crate::DEFAULT_VAT_RATE_BPS;

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// VAT rate in basis points, e.g. 2000 = 20%
    pub vat_rate_bps: u32,

    /// Currency code (ISO 4217)
    pub currency_code: String,
}

impl PricingConfig {
    /// The VAT rate to pass into [`crate::vat`] and [`crate::Cart::order_total`].
    pub fn vat_rate(&self) -> VatRate {
        VatRate::from_bps(self.vat_rate_bps)
    }

    /// Checks the values are usable.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_vat_rate_bps(self.vat_rate_bps)
    }
}

impl Default for PricingConfig {
    /// UK storefront defaults: 20% VAT, pounds sterling.
    fn default() -> Self {
        PricingConfig {
            vat_rate_bps: DEFAULT_VAT_RATE_BPS,
            currency_code: "GBP".to_string(),
        }
    }
}
