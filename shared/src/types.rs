//! Common types and money helpers
//!
//! Monetary values are plain `f64` throughout the system. Internal totals are
//! never rounded; two-decimal rounding happens only at presentation time.

/// Tolerance used when comparing monetary totals that went through repeated
/// add/delete cycles.
pub const MONEY_EPSILON: f64 = 1e-6;

/// Round a monetary value to two decimals for display.
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a monetary value with two decimals and a currency suffix,
/// e.g. `"30.00 EGP"`.
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{:.2} {}", value, currency)
}

/// Compare two monetary totals within [`MONEY_EPSILON`].
pub fn money_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < MONEY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(10.004), 10.0);
        assert_eq!(round_display(12.345678), 12.35);
        assert_eq!(round_display(-199.999), -200.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(30.0, "EGP"), "30.00 EGP");
        assert_eq!(format_money(12.345, "EGP"), "12.35 EGP");
        assert_eq!(format_money(-200.0, "EGP"), "-200.00 EGP");
    }

    #[test]
    fn test_money_eq_tolerates_float_noise() {
        let total = (0..10).fold(0.0f64, |acc, _| acc + 0.1);
        assert!(money_eq(total, 1.0));
        assert!(!money_eq(1.0, 1.01));
    }
}
