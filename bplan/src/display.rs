//! Console presentation of currency amounts.

use colored::{ColoredString, Colorize};

/// Formats `value` to two decimals
pub fn amount(value: f64) -> String {
    // Avoid printing "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

/// Formats `value` like [`amount`], red when negative and green when positive
///
/// Zero is left uncoloured.
pub fn signed(value: f64) -> ColoredString {
    let text = amount(value);
    if value < 0.0 {
        text.as_str().red()
    } else if value > 0.0 {
        text.as_str().green()
    } else {
        text.as_str().normal()
    }
}

/// Prefixes `value` with a currency symbol, coloured by [`signed`] when `colorize` is set
pub fn currency(value: f64, symbol: &str, colorize: bool) -> String {
    if colorize {
        format!("{symbol}{}", signed(value))
    } else {
        format!("{symbol}{}", amount(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_sign_picks_color() {
        assert_eq!(signed(-800.0).fgcolor(), Some(Color::Red));
        assert_eq!(signed(4.375).fgcolor(), Some(Color::Green));
        assert_eq!(signed(0.0).fgcolor(), None);
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(&*signed(-6.262976), "-6.26");
        assert_eq!(&*signed(1856.375), "1856.38");
        assert_eq!(&*signed(-0.0), "0.00");
        assert_eq!(amount(-0.0), "0.00");
    }

    #[test]
    fn test_plain_currency_has_no_escapes() {
        colored::control::set_override(true);
        assert_eq!(currency(-800.0, "R$", false), "R$-800.00");
        assert_eq!(currency(170.25, "R$", false), "R$170.25");
        assert!(currency(-800.0, "R$", true).contains('\u{1b}'));
    }
}
