// fieldmask/src/validators.rs
//! Programmatic validation beyond pattern matching.
//!
//! This module holds the checksum logic for the national identification
//! number: an 11-digit identifier whose last two digits are check digits
//! computed by a weighted mod-11 algorithm. Format is irrelevant here; the
//! input is reduced to its digits before any rule applies.
//!
//! License: MIT OR APACHE 2.0

/// Number of digits in a national ID, check digits included.
const NATIONAL_ID_DIGITS: usize = 11;

/// Validates a national ID by its two mod-11 check digits.
///
/// Separators and any other non-digit characters are stripped first, so both
/// masked (`NNN.NNN.NNN-NN`) and bare forms are accepted. The value must
/// reduce to exactly 11 digits, must not be a degenerate run of a single
/// repeated digit, and both check digits must match the weighted sums over
/// the digits before them.
pub fn is_valid_national_id(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != NATIONAL_ID_DIGITS {
        return false;
    }
    // A run of one repeated digit passes the check-digit math but is a
    // known-invalid pattern; reject it up front.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Computes one mod-11 check digit over `digits`, weighting the first digit
/// by `first_weight` and descending by one per position (down to 2).
/// A remainder of 10 or 11 clamps to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (first_weight - i as u32))
        .sum();

    let remainder = 11 - (sum % 11);
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_ids() {
        let valid = vec![
            "52998224725",
            // masked form of the same id
            "529.982.247-25",
            // second check digit exercises the 10/11 -> 0 clamp
            "46761018480",
        ];
        for id in valid {
            assert!(is_valid_national_id(id), "{id} should be valid");
        }
    }

    #[test]
    fn rejects_bad_check_digits() {
        let invalid = vec![
            "12345678900",
            "52998224726",
            "52998224735",
        ];
        for id in invalid {
            assert!(!is_valid_national_id(id), "{id} should be invalid");
        }
    }

    #[test]
    fn rejects_degenerate_repeats() {
        for d in '0'..='9' {
            let id: String = std::iter::repeat(d).take(11).collect();
            assert!(!is_valid_national_id(&id), "{id} should be invalid");
        }
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert!(!is_valid_national_id(""));
        assert!(!is_valid_national_id("5299822472"));
        assert!(!is_valid_national_id("529982247251"));
        assert!(!is_valid_national_id("no digits at all"));
    }
}
