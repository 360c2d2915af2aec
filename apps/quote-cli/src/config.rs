//! Quote CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use storefront_core::validation::validate_vat_rate_bps;
use storefront_core::PricingConfig;

/// Environment variable holding the VAT rate in basis points.
pub const VAT_RATE_BPS_VAR: &str = "STOREFRONT_VAT_RATE_BPS";

/// Environment variable holding the ISO 4217 currency code.
pub const CURRENCY_CODE_VAR: &str = "STOREFRONT_CURRENCY_CODE";

/// Load pricing configuration from environment variables.
pub fn load() -> Result<PricingConfig, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load pricing configuration through `lookup`, so tests don't touch the
/// process environment.
pub fn load_from<F>(lookup: F) -> Result<PricingConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = PricingConfig::default();

    let vat_rate_bps = match lookup(VAT_RATE_BPS_VAR) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue(VAT_RATE_BPS_VAR.to_string()))?,
        None => defaults.vat_rate_bps,
    };

    validate_vat_rate_bps(vat_rate_bps)
        .map_err(|_| ConfigError::InvalidValue(VAT_RATE_BPS_VAR.to_string()))?;

    let currency_code = match lookup(CURRENCY_CODE_VAR) {
        Some(raw) if raw.trim().len() == 3 => raw.trim().to_uppercase(),
        Some(_) => return Err(ConfigError::InvalidValue(CURRENCY_CODE_VAR.to_string())),
        None => defaults.currency_code,
    };

    Ok(PricingConfig {
        vat_rate_bps,
        currency_code,
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_from(lookup(&[])).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = load_from(lookup(&[
            (VAT_RATE_BPS_VAR, " 500 "),
            (CURRENCY_CODE_VAR, "eur"),
        ]))
        .unwrap();
        assert_eq!(config.vat_rate_bps, 500);
        assert_eq!(config.currency_code, "EUR");
    }

    #[test]
    fn test_rejects_unparsable_rate() {
        let err = load_from(lookup(&[(VAT_RATE_BPS_VAR, "20%")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_VAT_RATE_BPS");
    }

    #[test]
    fn test_rejects_rate_over_100_percent() {
        assert!(load_from(lookup(&[(VAT_RATE_BPS_VAR, "10001")])).is_err());
    }

    #[test]
    fn test_rejects_bad_currency_code() {
        assert!(load_from(lookup(&[(CURRENCY_CODE_VAR, "POUNDS")])).is_err());
    }
}
