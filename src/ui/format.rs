//! Display formatting for the result cards.
//!
//! The engine carries full precision; rounding happens only here.

/// `"$ "` prefix, two decimals. Negative amounts keep their sign.
pub fn format_currency(value: f64) -> String {
    format!("$ {value:.2}")
}

/// Two decimals with a `%` suffix.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_zero_state() {
        assert_eq!(format_currency(0.0), "$ 0.00");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(16.551724), "$ 16.55");
        assert_eq!(format_currency(2.397), "$ 2.40");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_currency(-3.5), "$ -3.50");
        assert_eq!(format_percentage(-12.345), "-12.35%");
    }

    #[test]
    fn percentage_zero_state() {
        assert_eq!(format_percentage(0.0), "0.00%");
    }
}
