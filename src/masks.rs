// fieldmask/src/masks.rs
//! Live input masks for form fields.
//!
//! A mask is a pure transform applied on every input-change event: it filters
//! the raw text down to the characters its kind allows and, for the fixed
//! numeric formats, inserts group separators at fixed digit boundaries. Masks
//! never fail; pathological input degrades to an empty or partially formatted
//! string. Formatting rules follow the national scheme used by the default
//! registration form (see `config/default_form.yaml`).
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum formatted length of a masked national ID: `NNN.NNN.NNN-NN`.
pub const NATIONAL_ID_MASK_LEN: usize = 14;
/// Maximum formatted length of a masked postal code: `NNNNN-NNN`.
pub const POSTAL_CODE_MASK_LEN: usize = 9;
/// Maximum formatted length of a masked mobile phone: `(NN) NNNNN-NNNN`.
pub const MOBILE_PHONE_MASK_LEN: usize = 15;

static NON_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{M} ]").expect("static pattern must compile")
});

static NON_WORD_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\W").expect("static pattern must compile")
});

/// The closed set of mask kinds a field can declare.
///
/// Each kind maps to exactly one transform rule. Kinds are chosen by the
/// caller per field (or declared in a form file) and carry no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// Unicode letters, combining marks and spaces; filter only.
    PersonName,
    /// Word characters (letters, digits, underscore); filter only.
    Identifier,
    /// Digits grouped as `NNN.NNN.NNN-NN`.
    NationalId,
    /// Digits grouped as `NNNNN-NNN`.
    PostalCode,
    /// Digits only; filter only.
    HouseNumber,
    /// Digits grouped as `(NN) NNNNN-NNNN`.
    MobilePhone,
}

impl MaskKind {
    /// The maximum formatted length this kind can produce, if bounded.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            MaskKind::NationalId => Some(NATIONAL_ID_MASK_LEN),
            MaskKind::PostalCode => Some(POSTAL_CODE_MASK_LEN),
            MaskKind::MobilePhone => Some(MOBILE_PHONE_MASK_LEN),
            MaskKind::PersonName | MaskKind::Identifier | MaskKind::HouseNumber => None,
        }
    }
}

/// Applies the mask for `kind` to `input` and returns the formatted text.
///
/// The output contains only characters permitted by the kind, never exceeds
/// the kind's maximum formatted length, and is a fixed point of the same
/// transform: `transform(kind, transform(kind, s)) == transform(kind, s)`.
pub fn transform(kind: MaskKind, input: &str) -> String {
    match kind {
        MaskKind::PersonName => NON_NAME_CHARS.replace_all(input, "").into_owned(),
        MaskKind::Identifier => NON_WORD_CHARS.replace_all(input, "").into_owned(),
        MaskKind::NationalId => mask_national_id(input),
        MaskKind::PostalCode => mask_postal_code(input),
        MaskKind::HouseNumber => digits_of(input),
        MaskKind::MobilePhone => mask_mobile_phone(input),
    }
}

/// Strips everything but ASCII digits from `input`.
fn digits_of(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `NNN.NNN.NNN-NN`. Separators appear only once the digit after the
/// boundary has been typed, so partial input stays partially formatted.
fn mask_national_id(input: &str) -> String {
    let digits = digits_of(input);
    let mut out = String::with_capacity(digits.len() + 3);
    for (i, ch) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }
    // The bound applies to the formatted string, not the digit count.
    out.truncate(NATIONAL_ID_MASK_LEN);
    out
}

/// `NNNNN-NNN`.
fn mask_postal_code(input: &str) -> String {
    let digits = digits_of(input);
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(ch);
    }
    out.truncate(POSTAL_CODE_MASK_LEN);
    out
}

/// `(NN) NNNNN-NNNN`. The area-code parentheses only appear once a third
/// digit exists; until then the digits are shown bare.
fn mask_mobile_phone(input: &str) -> String {
    let digits = digits_of(input);
    if digits.len() <= 2 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + 4);
    out.push('(');
    for (i, ch) in digits.chars().enumerate() {
        match i {
            2 => out.push_str(") "),
            7 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }
    out.truncate(MOBILE_PHONE_MASK_LEN);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [MaskKind; 6] = [
        MaskKind::PersonName,
        MaskKind::Identifier,
        MaskKind::NationalId,
        MaskKind::PostalCode,
        MaskKind::HouseNumber,
        MaskKind::MobilePhone,
    ];

    #[test]
    fn national_id_literal_format() {
        assert_eq!(transform(MaskKind::NationalId, "12345678901"), "123.456.789-01");
    }

    #[test]
    fn postal_code_literal_format() {
        assert_eq!(transform(MaskKind::PostalCode, "12345678"), "12345-678");
    }

    #[test]
    fn mobile_phone_literal_format() {
        assert_eq!(transform(MaskKind::MobilePhone, "11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn partial_input_stays_partially_formatted() {
        assert_eq!(transform(MaskKind::NationalId, "123"), "123");
        assert_eq!(transform(MaskKind::NationalId, "1234"), "123.4");
        assert_eq!(transform(MaskKind::PostalCode, "12345"), "12345");
        assert_eq!(transform(MaskKind::PostalCode, "123456"), "12345-6");
        assert_eq!(transform(MaskKind::MobilePhone, "11"), "11");
        assert_eq!(transform(MaskKind::MobilePhone, "119"), "(11) 9");
        assert_eq!(transform(MaskKind::MobilePhone, "1198765"), "(11) 98765");
    }

    #[test]
    fn overlong_input_truncates_on_the_formatted_string() {
        assert_eq!(transform(MaskKind::NationalId, "123456789012345"), "123.456.789-01");
        assert_eq!(transform(MaskKind::PostalCode, "123456789"), "12345-678");
        assert_eq!(transform(MaskKind::MobilePhone, "119876543210"), "(11) 98765-4321");
    }

    #[test]
    fn digit_masks_ignore_noise_characters() {
        assert_eq!(transform(MaskKind::NationalId, "123.456.789-01"), "123.456.789-01");
        assert_eq!(transform(MaskKind::NationalId, "a1b2c3 4-5.6/7(8)9_0#1"), "123.456.789-01");
        assert_eq!(transform(MaskKind::HouseNumber, "No. 42b"), "42");
    }

    #[test]
    fn person_name_keeps_letters_marks_and_spaces() {
        assert_eq!(transform(MaskKind::PersonName, "José da Silva 3rd!"), "José da Silva rd");
        assert_eq!(transform(MaskKind::PersonName, "12345"), "");
    }

    #[test]
    fn identifier_keeps_word_characters() {
        assert_eq!(transform(MaskKind::Identifier, "user_name-99!"), "user_name99");
    }

    #[test]
    fn all_symbol_input_degrades_to_empty() {
        for kind in [
            MaskKind::NationalId,
            MaskKind::PostalCode,
            MaskKind::HouseNumber,
            MaskKind::MobilePhone,
        ] {
            assert_eq!(transform(kind, "!@# $%^ &*()"), "");
        }
    }

    #[test]
    fn transforms_are_idempotent() {
        let samples = [
            "",
            "   ",
            "José da Silva",
            "user_99",
            "12345678901",
            "123.456.789-01",
            "11987654321",
            "(11) 98765-4321",
            "12345-678",
            "a!b@c#1$2%3",
            "999999999999999999",
        ];
        for kind in ALL_KINDS {
            for sample in samples {
                let once = transform(kind, sample);
                let twice = transform(kind, &once);
                assert_eq!(once, twice, "kind {kind:?} not idempotent on {sample:?}");
            }
        }
    }

    #[test]
    fn bounded_kinds_respect_their_length_bound() {
        let long = "9".repeat(64);
        for kind in ALL_KINDS {
            if let Some(max) = kind.max_len() {
                assert!(transform(kind, &long).len() <= max);
            }
        }
    }

    #[test]
    fn digit_mask_output_alphabet_is_closed() {
        fn allowed(extra: &'static str) -> impl Fn(char) -> bool {
            move |c| c.is_ascii_digit() || extra.contains(c)
        }

        let noisy = "xx11ab98cd76ef54gh32zz10--..()  !!";
        assert!(transform(MaskKind::NationalId, noisy).chars().all(allowed(".-")));
        assert!(transform(MaskKind::PostalCode, noisy).chars().all(allowed("-")));
        assert!(transform(MaskKind::MobilePhone, noisy).chars().all(allowed("() -")));
        assert!(transform(MaskKind::HouseNumber, noisy).chars().all(allowed("")));
    }
}
