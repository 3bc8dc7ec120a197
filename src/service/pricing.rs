use crate::model::order::PickupMethod;

/// Fixed price list, in rupiah per mousepad. Not user-editable; the order
/// form and the summary both derive from this table.
pub const SERVICE_PRICES: [(&str, u64); 4] = [
    ("Deep Cleaning", 20_000),
    ("Express Cleaning", 25_000),
    ("Stain Removal", 30_000),
    ("Premium Care", 35_000),
];

/// Unit price for a service name. Unknown names price at 0 rather than
/// failing; the summary must never error on a stale selection.
pub fn service_price(name: &str) -> u64 {
    SERVICE_PRICES
        .iter()
        .find(|(service, _)| *service == name)
        .map(|(_, price)| *price)
        .unwrap_or(0)
}

/// `quantity × Σ price[s]` over the selection. Empty selection totals 0.
pub fn order_total(services: &[String], quantity: u32) -> u64 {
    let per_pad: u64 = services.iter().map(|s| service_price(s)).sum();
    per_pad * quantity as u64
}

/// Indonesian rupiah display form: no decimals, dot thousands grouping.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

/// Live preview of the order form: selected services, quantity, pickup
/// method, and price total. Derived on every change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub services_label: String,
    pub quantity: u32,
    pub method_label: String,
    pub total: u64,
}

impl OrderSummary {
    pub fn derive(services: &[String], quantity: u32, method: Option<PickupMethod>) -> Self {
        let services_label = if services.is_empty() {
            "-".to_string()
        } else {
            services.join(", ")
        };
        let method_label = method.map(|m| m.label().to_string()).unwrap_or_else(|| "-".to_string());
        OrderSummary {
            services_label,
            quantity,
            method_label,
            total: order_total(services, quantity),
        }
    }

    pub fn formatted_total(&self) -> String {
        format_rupiah(self.total)
    }
}
