use super::*;

// =============================================================
// format_fee
// =============================================================

#[test]
fn format_fee_whole_dollars() {
    assert_eq!(format_fee(2_000_000), "$2.00");
    assert_eq!(format_fee(0), "$0.00");
}

#[test]
fn format_fee_sub_dollar_prices() {
    assert_eq!(format_fee(50_000), "$0.05");
    assert_eq!(format_fee(1_250_000), "$1.25");
}

#[test]
fn format_fee_rounds_to_nearest_cent() {
    assert_eq!(format_fee(4_999), "$0.00");
    assert_eq!(format_fee(5_000), "$0.01");
    assert_eq!(format_fee(1_994_999), "$1.99");
    assert_eq!(format_fee(1_995_000), "$2.00");
}

#[test]
fn format_fee_does_not_overflow() {
    assert!(format_fee(u64::MAX).starts_with('$'));
}

// =============================================================
// probability
// =============================================================

#[test]
fn format_probability_drops_trailing_zero_fraction() {
    assert_eq!(format_probability(72.0), "72%");
    assert_eq!(format_probability(41.5), "41.5%");
}

#[test]
fn meter_width_clamps_out_of_range_values() {
    assert_eq!(meter_width(72.0), "72%");
    assert_eq!(meter_width(-5.0), "0%");
    assert_eq!(meter_width(140.0), "100%");
    assert_eq!(meter_width(f64::NAN), "0%");
}

// =============================================================
// platform_label
// =============================================================

#[test]
fn platform_label_decorates_known_platforms() {
    assert_eq!(platform_label("Polymarket"), "🟣 Polymarket");
    assert_eq!(platform_label("Kalshi"), "🔘 Kalshi");
    assert_eq!(platform_label("Solflare"), "☀️ Solflare");
}

#[test]
fn platform_label_passes_unknown_platforms_through() {
    assert_eq!(platform_label("Manifold"), "Manifold");
}
