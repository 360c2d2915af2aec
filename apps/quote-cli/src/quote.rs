//! Request and response documents for the quote command.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::{
    format_price, Cart, CartItem, CoreResult, OrderTotal, PricingConfig, ShippingOption,
};
use tracing::info;

/// A cart as sent by the checkout page.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<CartItem>,
    /// Omitted for collection orders.
    #[serde(default)]
    pub shipping: Option<ShippingOption>,
}

/// One priced cart line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedLine {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub discount_percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_label: Option<String>,
}

/// Everything printed for a quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub currency: String,
    pub lines: Vec<QuotedLine>,
    pub order: OrderTotal,
    pub formatted_total: String,
}

/// Prices every line and assembles the order total.
pub fn price(request: QuoteRequest, config: &PricingConfig) -> CoreResult<QuoteResponse> {
    let cart = Cart::from_items(request.items)?;
    let shipping = request
        .shipping
        .unwrap_or_else(|| ShippingOption::free("Collection"));

    let lines = cart
        .items()
        .iter()
        .map(|item| {
            let quote = item.quote();
            QuotedLine {
                product_id: item.product_id.clone(),
                variant_id: item.variant_id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: quote.unit_price,
                line_total: quote.line_total,
                discount_percentage: quote.discount_percentage,
                tier_label: quote.tier.and_then(|t| t.label.clone()),
            }
        })
        .collect();

    let order = cart.order_total(&shipping, config.vat_rate());
    info!(
        lines = cart.item_count(),
        units = cart.total_quantity(),
        total = %order.total,
        shipping_method = %order.shipping_method,
        "Quote priced"
    );

    Ok(QuoteResponse {
        currency: config.currency_code.clone(),
        lines,
        formatted_total: format_price(order.total),
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const REQUEST: &str = r#"{
        "items": [
            {
                "productId": "0b5c3c1e-4d1f-4a57-9a43-6f1f2f0c9a11",
                "name": "Kraft mailer bag",
                "quantity": 75,
                "basePrice": "2.50",
                "tiers": [
                    {"minQuantity": 1, "maxQuantity": 49, "pricePerUnit": "2.50"},
                    {"minQuantity": 50, "maxQuantity": 99, "pricePerUnit": "2.25", "label": "Trade"},
                    {"minQuantity": 100, "pricePerUnit": "2.00", "label": "Bulk"}
                ]
            }
        ],
        "shipping": {"method": "Next day", "cost": "5.00"}
    }"#;

    #[test]
    fn test_prices_request() {
        let request: QuoteRequest = serde_json::from_str(REQUEST).unwrap();
        let response = price(request, &PricingConfig::default()).unwrap();

        assert_eq!(response.currency, "GBP");
        assert_eq!(response.lines.len(), 1);
        let line = &response.lines[0];
        assert_eq!(line.unit_price, dec!(2.25));
        assert_eq!(line.line_total, dec!(168.75));
        assert_eq!(line.discount_percentage, 10);
        assert_eq!(line.tier_label.as_deref(), Some("Trade"));

        // (168.75 + 5.00) × 20% = 34.75
        assert_eq!(response.order.vat_amount, dec!(34.75));
        assert_eq!(response.order.total, dec!(208.50));
        assert_eq!(response.order.shipping_method, "Next day");
        assert_eq!(response.formatted_total, "£208.50");
    }

    #[test]
    fn test_missing_shipping_means_collection() {
        let request = QuoteRequest {
            items: vec![CartItem::new(
                "0b5c3c1e-4d1f-4a57-9a43-6f1f2f0c9a11",
                "Gift box",
                1,
                dec!(100.00),
            )],
            shipping: None,
        };
        let response = price(request, &PricingConfig::default()).unwrap();
        assert_eq!(response.order.shipping_cost, Decimal::ZERO);
        assert_eq!(response.order.shipping_method, "Collection");
        assert_eq!(response.order.total, dec!(120.00));
    }

    #[test]
    fn test_invalid_line_is_rejected() {
        let request = QuoteRequest {
            items: vec![CartItem::new("sku-1", "Gift box", 1, dec!(1.00))],
            shipping: None,
        };
        assert!(price(request, &PricingConfig::default()).is_err());
    }
}
