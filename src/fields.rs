// fieldmask/src/fields.rs
//! Field validation rules and outcomes.
//!
//! Validation runs on finalized values (blur or submit), never per keystroke.
//! Every kind shares one baseline rule: a field must contain non-whitespace
//! content before its format rule applies, and an empty field short-circuits
//! with the required-field reason. Outcomes are a pure function of the
//! `(kind, value)` pair; there is no warning state and no error path distinct
//! from an `Invalid` reason.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validators;

static POSTAL_CODE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{5}-\d{3}$").expect("static pattern must compile")
});

static MOBILE_PHONE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{2}\) 9\d{4}-\d{4}$").expect("static pattern must compile")
});

static LANDLINE_PHONE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{2}\) \d{4}-\d{4}$").expect("static pattern must compile")
});

static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern must compile")
});

/// Symbols a password may (and must, at least once) contain.
const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-={};':"\|,.<>/?"##;

/// Minimum password length in characters.
const PASSWORD_MIN_LEN: usize = 8;

/// The semantic kind of a field under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text field with no format rule; only the required-check applies.
    /// Carries the human-readable field name used in the reason string.
    Required(String),
    PostalCode,
    /// Phone number; mobile numbers carry a leading `9` on the subscriber
    /// part and one extra digit.
    Phone { mobile: bool },
    Email,
    Password,
    /// Must equal the already-entered password, byte for byte.
    PasswordConfirmation(String),
    /// Delegates to the mod-11 checksum in [`validators`].
    NationalId,
}

impl FieldKind {
    /// The field name used in reason strings.
    pub fn label(&self) -> &str {
        match self {
            FieldKind::Required(label) => label,
            FieldKind::PostalCode => "Postal code",
            FieldKind::Phone { mobile: true } => "Mobile phone",
            FieldKind::Phone { mobile: false } => "Phone",
            FieldKind::Email => "Email",
            FieldKind::Password | FieldKind::PasswordConfirmation(_) => "Password",
            FieldKind::NationalId => "National ID",
        }
    }
}

/// The result of validating one field.
///
/// Exactly two shapes: the value is acceptable, or it is not and the reason
/// is a human-readable sentence ready for an external presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The reason string, if the outcome is `Invalid`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Validates a finalized `value` against the rule for `kind`.
///
/// The required-check runs first for every kind: the value is trimmed and, if
/// empty, the outcome is `Invalid("<FieldName> is required")` with no further
/// rule applied. Format rules then run against the untrimmed value.
pub fn validate(kind: &FieldKind, value: &str) -> ValidationOutcome {
    if value.trim().is_empty() {
        return ValidationOutcome::Invalid(format!("{} is required", kind.label()));
    }

    match kind {
        FieldKind::Required(_) => ValidationOutcome::Valid,
        FieldKind::PostalCode => {
            check(POSTAL_CODE_FORMAT.is_match(value), "Invalid postal code")
        }
        FieldKind::Phone { mobile } => {
            let format = if *mobile {
                &MOBILE_PHONE_FORMAT
            } else {
                &LANDLINE_PHONE_FORMAT
            };
            check(format.is_match(value), &format!("Invalid {}", kind.label()))
        }
        FieldKind::Email => check(EMAIL_FORMAT.is_match(value), "Invalid email"),
        FieldKind::Password => check(
            is_strong_password(value),
            "Password must be at least 8 characters and contain upper, lower, digit and symbol",
        ),
        FieldKind::PasswordConfirmation(expected) => {
            check(value == expected, "Passwords must match")
        }
        FieldKind::NationalId => {
            check(validators::is_valid_national_id(value), "Invalid national ID")
        }
    }
}

fn check(ok: bool, reason: &str) -> ValidationOutcome {
    if ok {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(reason.to_string())
    }
}

/// At least 8 characters, at least one lowercase letter, one uppercase
/// letter, one digit and one symbol, drawn only from that alphabet.
fn is_strong_password(value: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;
    let mut len = 0usize;

    for c in value.chars() {
        len += 1;
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if PASSWORD_SYMBOLS.contains(c) {
            symbol = true;
        } else {
            // Outside the allowed alphabet (e.g. whitespace).
            return false;
        }
    }

    len >= PASSWORD_MIN_LEN && lower && upper && digit && symbol
}
