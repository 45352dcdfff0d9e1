//! Display formatting for signal cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Smallest currency units per displayed dollar.
pub const UNITS_PER_DOLLAR: u64 = 1_000_000;

/// Unlock fee as dollars with two decimals, e.g. `2_000_000` → `"$2.00"`.
#[must_use]
pub fn format_fee(price: u64) -> String {
    let cents = price.saturating_add(UNITS_PER_DOLLAR / 200) / (UNITS_PER_DOLLAR / 100);
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Win probability as shown on the card, e.g. `72.0` → `"72%"`.
#[must_use]
pub fn format_probability(probability: f64) -> String {
    format!("{probability}%")
}

/// CSS width of the probability meter, clamped to `0%..=100%`.
#[must_use]
pub fn meter_width(probability: f64) -> String {
    let clamped = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 100.0) };
    format!("{clamped}%")
}

/// Badge text for a platform; unknown platforms show their raw name.
#[must_use]
pub fn platform_label(platform: &str) -> String {
    match platform {
        "Polymarket" => "🟣 Polymarket".to_owned(),
        "Kalshi" => "🔘 Kalshi".to_owned(),
        "Solflare" => "☀️ Solflare".to_owned(),
        other => other.to_owned(),
    }
}
