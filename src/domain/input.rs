//! Free-text field sanitization and parsing.
//!
//! Every field in the calculator is a plain text input; whatever the user
//! types passes through [`sanitize`] and [`parse_value`] before the pricing
//! engine ever sees it. Both functions are total: malformed text coerces to
//! `0.0` instead of surfacing an error.

/// Reduce raw field text to digits and at most one decimal point.
///
/// All other characters are dropped, including any sign, so the parser never
/// sees a negative number. When several dots survive the first pass, the
/// first one stays as the separator and the digits of the later groups are
/// concatenated behind it (`"1.2.3"` becomes `"1.23"`).
pub fn sanitize(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    let Some((head, tail)) = filtered.split_once('.') else {
        return filtered;
    };

    let decimals: String = tail.chars().filter(char::is_ascii_digit).collect();
    format!("{head}.{decimals}")
}

/// Parse sanitized field text as a non-negative amount.
///
/// Takes the longest numeric prefix (`digits`, optionally `'.' digits`); a
/// lone trailing dot is tolerated. Empty input, junk, and anything negative
/// or non-finite all yield `0.0`.
pub fn parse_value(sanitized: &str) -> f64 {
    let prefix_len = numeric_prefix_len(sanitized);
    if prefix_len == 0 {
        return 0.0;
    }

    let candidate = sanitized[..prefix_len].trim_end_matches('.');
    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Rate fields are entered as percentages; the engine works in fractions.
pub fn percent_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

fn numeric_prefix_len(text: &str) -> usize {
    let mut len = 0;
    let mut seen_dot = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => len += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                len += 1;
            }
            _ => break,
        }
    }
    len
}
