use mousespa_backend::model::order::PickupMethod;
use mousespa_backend::service::pricing::{
    format_rupiah, order_total, service_price, OrderSummary, SERVICE_PRICES,
};

fn services(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_total_is_quantity_times_price_sum_for_every_subset() {
    for mask in 0u32..16 {
        let selection: Vec<String> = SERVICE_PRICES
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, (name, _))| name.to_string())
            .collect();
        let per_pad: u64 = SERVICE_PRICES
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, (_, price))| *price)
            .sum();

        for quantity in [1u32, 7, 20] {
            assert_eq!(
                order_total(&selection, quantity),
                per_pad * quantity as u64,
                "mask {mask} quantity {quantity}"
            );
        }
    }
}

#[test]
fn test_empty_selection_totals_zero() {
    for quantity in 1..=20 {
        assert_eq!(order_total(&[], quantity), 0);
    }
}

#[test]
fn test_unknown_service_contributes_zero() {
    assert_eq!(service_price("Waxing"), 0);
    let selection = services(&["Deep Cleaning", "Waxing"]);
    assert_eq!(order_total(&selection, 2), 40_000);
}

#[test]
fn test_known_prices() {
    assert_eq!(service_price("Deep Cleaning"), 20_000);
    assert_eq!(service_price("Express Cleaning"), 25_000);
    assert_eq!(service_price("Stain Removal"), 30_000);
    assert_eq!(service_price("Premium Care"), 35_000);
}

#[test]
fn test_format_rupiah_grouping() {
    assert_eq!(format_rupiah(0), "Rp 0");
    assert_eq!(format_rupiah(500), "Rp 500");
    assert_eq!(format_rupiah(20_000), "Rp 20.000");
    assert_eq!(format_rupiah(40_000), "Rp 40.000");
    assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
}

#[test]
fn test_summary_for_single_service_order() {
    // One Deep Cleaning, two pads, dropped off by the customer.
    let summary = OrderSummary::derive(
        &services(&["Deep Cleaning"]),
        2,
        Some(PickupMethod::SelfDeliver),
    );
    assert_eq!(summary.total, 40_000);
    assert_eq!(summary.formatted_total(), "Rp 40.000");
    assert_eq!(summary.services_label, "Deep Cleaning");
    assert_eq!(summary.method_label, "Antar Sendiri");
    assert_eq!(summary.quantity, 2);
}

#[test]
fn test_summary_placeholders_when_nothing_selected() {
    let summary = OrderSummary::derive(&[], 1, None);
    assert_eq!(summary.services_label, "-");
    assert_eq!(summary.method_label, "-");
    assert_eq!(summary.total, 0);
}

#[test]
fn test_summary_joins_services_and_labels_pickup() {
    let summary = OrderSummary::derive(
        &services(&["Deep Cleaning", "Stain Removal"]),
        3,
        Some(PickupMethod::Pickup),
    );
    assert_eq!(summary.services_label, "Deep Cleaning, Stain Removal");
    assert_eq!(summary.method_label, "Pickup");
    assert_eq!(summary.total, 150_000);
}
