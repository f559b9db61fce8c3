//! Lenient parsing of amount text fields.
//!
//! Form fields hold raw text. Summed fields treat anything unparseable as
//! zero, while the physical cash count must tell "not entered" apart from
//! "entered as 0", so parsing returns an `Option`.

/// Parse an amount typed by the user.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text, text
/// that is not entirely a decimal number, and non-finite values.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse an amount, treating invalid or empty text as `0.0`.
#[must_use]
pub fn amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// Sum a sequence of amount fields. Invalid entries contribute zero.
pub fn sum_amounts<'a, I>(fields: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().map(amount_or_zero).sum()
}

/// True when the field parses to a strictly positive amount.
#[must_use]
pub fn is_positive_amount(text: &str) -> bool {
    parse_amount(text).is_some_and(|value| value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12.50", Some(12.5))]
    #[case("  7 ", Some(7.0))]
    #[case("0", Some(0.0))]
    #[case("-3.25", Some(-3.25))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("abc", None)]
    #[case("12abc", None)]
    #[case("NaN", None)]
    #[case("inf", None)]
    fn parses_amount_text(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(text), expected);
    }

    #[test]
    fn empty_list_sums_to_zero() {
        let fields: Vec<&str> = Vec::new();
        assert!(sum_amounts(fields).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_entries_do_not_poison_the_sum() {
        let total = sum_amounts(["100", "abc", "", "NaN", "50.5"]);
        assert!((total - 150.5).abs() < 1e-9);
        assert!(total.is_finite());
    }

    #[test]
    fn positive_amount_detection() {
        assert!(is_positive_amount("0.01"));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-5"));
        assert!(!is_positive_amount("x"));
    }
}
