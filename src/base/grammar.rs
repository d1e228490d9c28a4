//! Character-class and identifier-shape predicates
//!
//! Direct transcriptions of the SemVer 2.0.0 BNF terminals. Everything here
//! is ASCII-only: any non-ASCII character fails every predicate.

/// `<letter>`: `A`-`Z` or `a`-`z`
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `<positive digit>`: `1`-`9`
pub fn is_positive_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

/// `<digit>`: `0` or a positive digit
pub fn is_digit(c: char) -> bool {
    c == '0' || is_positive_digit(c)
}

/// `<non-digit>`: a letter or `-`
pub fn is_non_digit(c: char) -> bool {
    is_letter(c) || c == '-'
}

/// `<identifier character>`: a digit or a non-digit
pub fn is_identifier_char(c: char) -> bool {
    is_digit(c) || is_non_digit(c)
}

/// Every character is a digit. Vacuously true for `""`.
pub fn all_digits(s: &str) -> bool {
    s.chars().all(is_digit)
}

/// Every character is an identifier character. Vacuously true for `""`.
pub fn is_identifier_chars(s: &str) -> bool {
    s.chars().all(is_identifier_char)
}

/// `<numeric identifier>`: `"0"`, or a positive digit followed by digits.
///
/// Leading zeros are rejected (`"01"`), as is the empty string.
pub fn is_numeric_identifier(s: &str) -> bool {
    if s == "0" {
        return true;
    }
    match s.chars().next() {
        Some(first) => is_positive_digit(first) && all_digits(s),
        None => false,
    }
}

/// `<alphanumeric identifier>`: identifier characters with at least one
/// non-digit.
///
/// The leading-zero rule does not apply here, so `"0valid"` and `"0A"` are
/// alphanumeric identifiers.
pub fn is_alphanumeric_identifier(s: &str) -> bool {
    !s.is_empty() && is_identifier_chars(s) && s.chars().any(is_non_digit)
}

/// `<pre-release identifier>`: numeric or alphanumeric
pub fn is_pre_release_identifier(s: &str) -> bool {
    is_numeric_identifier(s) || is_alphanumeric_identifier(s)
}

/// `<build identifier>`: alphanumeric or `<digits>`, i.e. any non-empty run
/// of identifier characters. Leading zeros are allowed.
pub fn is_build_identifier(s: &str) -> bool {
    !s.is_empty() && is_identifier_chars(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert!(is_letter('a') && is_letter('Z'));
        assert!(!is_letter('-') && !is_letter('0') && !is_letter('é'));

        assert!(is_positive_digit('1') && is_positive_digit('9'));
        assert!(!is_positive_digit('0'));

        assert!(is_digit('0') && is_digit('7'));
        assert!(!is_digit('a') && !is_digit('٣'));

        assert!(is_non_digit('-') && is_non_digit('x'));
        assert!(!is_non_digit('5') && !is_non_digit('_'));

        assert!(is_identifier_char('-') && is_identifier_char('0') && is_identifier_char('q'));
        assert!(!is_identifier_char('.') && !is_identifier_char('+') && !is_identifier_char(' '));
    }

    #[test]
    fn test_numeric_identifier() {
        assert!(is_numeric_identifier("0"));
        assert!(is_numeric_identifier("1"));
        assert!(is_numeric_identifier("1227"));
        assert!(is_numeric_identifier("99999999999999999999999"));

        assert!(!is_numeric_identifier(""));
        assert!(!is_numeric_identifier("00"));
        assert!(!is_numeric_identifier("0123"));
        assert!(!is_numeric_identifier("1a"));
        assert!(!is_numeric_identifier("-1"));
    }

    #[test]
    fn test_alphanumeric_identifier() {
        assert!(is_alphanumeric_identifier("alpha"));
        assert!(is_alphanumeric_identifier("-"));
        assert!(is_alphanumeric_identifier("---RC-SNAPSHOT"));
        assert!(is_alphanumeric_identifier("1--"));

        assert!(!is_alphanumeric_identifier(""));
        assert!(!is_alphanumeric_identifier("123"));
        assert!(!is_alphanumeric_identifier("alpha_beta"));
    }

    #[test]
    fn test_leading_zero_only_restricts_numeric_identifiers() {
        assert!(!is_pre_release_identifier("0123"));
        assert!(is_pre_release_identifier("0valid"));
        assert!(is_pre_release_identifier("0A"));
    }

    #[test]
    fn test_build_identifier_allows_leading_zeros() {
        assert!(is_build_identifier("0"));
        assert!(is_build_identifier("007"));
        assert!(is_build_identifier("1-rc"));
        assert!(!is_build_identifier(""));
        assert!(!is_build_identifier("a.b"));
    }
}
