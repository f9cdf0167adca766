// fieldmask/src/engine.rs
//! The form engine: the boundary the surrounding application talks to.
//!
//! A `FormEngine` binds one [`FormConfig`] and exposes the two calls of the
//! boundary contract: masking on input-change events and validation on
//! blur/submit. The engine resolves per-field rules to runtime kinds —
//! including the cross-field lookup a confirmation rule needs — and addresses
//! every outcome to the field's error region, so a presenter can render it
//! without knowing anything about the rules.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use log::debug;

use crate::config::{validate_fields, FieldRule, FieldSpec, FormConfig};
use crate::errors::FieldmaskError;
use crate::fields::{self, FieldKind, ValidationOutcome};
use crate::masks;

/// The validation result for one field, addressed to its error region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    /// The id of the field that was validated.
    pub field_id: String,
    /// The stable id of the error region the outcome should render into.
    pub error_region_id: String,
    pub outcome: ValidationOutcome,
}

/// Binds a form description and applies its masks and rules.
///
/// The engine holds no mutable state; every call is a pure function of the
/// bound form and the caller's strings, so calls from multiple fields may
/// run in any order.
#[derive(Debug, Clone)]
pub struct FormEngine {
    config: FormConfig,
}

impl FormEngine {
    /// Builds an engine over `config`, re-checking the form's shape so a
    /// hand-built config gets the same guarantees as a loaded one.
    pub fn new(config: FormConfig) -> Result<Self, FieldmaskError> {
        validate_fields(&config.fields)?;
        debug!("Form engine ready with {} fields.", config.fields.len());
        Ok(Self { config })
    }

    /// The bound form description.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Masks one input-change event's text for `field_id`.
    ///
    /// Fields that declare no mask pass their text through unchanged. The
    /// caller writes the result back into the editable field and owns caret
    /// and selection handling.
    pub fn mask_input(&self, field_id: &str, text: &str) -> Result<String, FieldmaskError> {
        let field = self.field(field_id)?;
        Ok(match field.mask {
            Some(kind) => masks::transform(kind, text),
            None => text.to_string(),
        })
    }

    /// Validates a single field against the submitted value map.
    ///
    /// The map must contain the values of any fields this field's rule
    /// refers to (a confirmation rule reads its target's value from here);
    /// a missing entry validates as empty.
    pub fn validate_field(
        &self,
        field_id: &str,
        submitted: &HashMap<String, String>,
    ) -> Result<FieldReport, FieldmaskError> {
        let field = self.field(field_id)?;
        Ok(self.report_for(field, submitted))
    }

    /// Validates every field of the form, in declaration order.
    pub fn validate_form(&self, submitted: &HashMap<String, String>) -> Vec<FieldReport> {
        let reports: Vec<FieldReport> = self
            .config
            .fields
            .iter()
            .map(|field| self.report_for(field, submitted))
            .collect();

        let failures = reports.iter().filter(|r| !r.outcome.is_valid()).count();
        debug!(
            "Validated {} fields: {} invalid.",
            reports.len(),
            failures
        );
        reports
    }

    fn field(&self, id: &str) -> Result<&FieldSpec, FieldmaskError> {
        self.config
            .field(id)
            .ok_or_else(|| FieldmaskError::UnknownField(id.to_string()))
    }

    fn report_for(&self, field: &FieldSpec, submitted: &HashMap<String, String>) -> FieldReport {
        let kind = self.resolve_kind(field, submitted);
        let value = submitted.get(&field.id).map(String::as_str).unwrap_or("");
        FieldReport {
            field_id: field.id.clone(),
            error_region_id: field.error_region_id(),
            outcome: fields::validate(&kind, value),
        }
    }

    /// Resolves a declared rule to its runtime kind. Confirmation rules read
    /// the expected value from the submitted map at this point.
    fn resolve_kind(&self, field: &FieldSpec, submitted: &HashMap<String, String>) -> FieldKind {
        match &field.rule {
            FieldRule::Required => FieldKind::Required(field.label.clone()),
            FieldRule::PostalCode => FieldKind::PostalCode,
            FieldRule::Phone => FieldKind::Phone { mobile: false },
            FieldRule::MobilePhone => FieldKind::Phone { mobile: true },
            FieldRule::Email => FieldKind::Email,
            FieldRule::Password => FieldKind::Password,
            FieldRule::PasswordConfirmation { matches } => {
                let expected = submitted.get(matches).cloned().unwrap_or_default();
                FieldKind::PasswordConfirmation(expected)
            }
            FieldRule::NationalId => FieldKind::NationalId,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FormEngine {
        FormEngine::new(FormConfig::load_default_form().unwrap()).unwrap()
    }

    fn submitted(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unknown_field_ids_are_errors() {
        let engine = engine();
        assert!(matches!(
            engine.mask_input("no_such_field", "x"),
            Err(FieldmaskError::UnknownField(_))
        ));
        assert!(matches!(
            engine.validate_field("no_such_field", &HashMap::new()),
            Err(FieldmaskError::UnknownField(_))
        ));
    }

    #[test]
    fn unmasked_fields_pass_text_through() {
        let engine = engine();
        assert_eq!(engine.mask_input("email", "user@example.com").unwrap(), "user@example.com");
    }

    #[test]
    fn confirmation_reads_its_target_from_the_submitted_map() {
        let engine = engine();
        let ok = submitted(&[("password", "Abcdef1!"), ("password_confirmation", "Abcdef1!")]);
        let report = engine.validate_field("password_confirmation", &ok).unwrap();
        assert!(report.outcome.is_valid());

        let mismatch = submitted(&[("password", "Abcdef1!"), ("password_confirmation", "abcdef1!")]);
        let report = engine.validate_field("password_confirmation", &mismatch).unwrap();
        assert_eq!(report.outcome.reason(), Some("Passwords must match"));
    }

    #[test]
    fn missing_values_validate_as_empty() {
        let engine = engine();
        let report = engine.validate_field("email", &HashMap::new()).unwrap();
        assert_eq!(report.outcome.reason(), Some("Email is required"));
        assert_eq!(report.error_region_id, "error-email");
    }
}
