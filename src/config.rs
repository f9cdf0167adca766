// fieldmask/src/config.rs
//! Declarative form descriptions for `fieldmask`.
//!
//! A form file names each input field once: a stable id, a human-readable
//! label for reason strings, an optional live mask and the validation rule
//! that runs on blur/submit. Forms load from YAML, and a default registration
//! form ships embedded in the crate. Loading validates the form's shape up
//! front so the engine never meets a dangling reference at runtime.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::FieldmaskError;
use crate::masks::MaskKind;

/// The validation rule a field declares.
///
/// Rules are resolved to a runtime [`crate::fields::FieldKind`] by the
/// engine; `password_confirmation` is the only rule needing cross-field
/// context (the sibling field it must match).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldRule {
    /// Non-whitespace content only; no format rule.
    Required,
    PostalCode,
    Phone,
    MobilePhone,
    Email,
    Password,
    /// Must match the submitted value of the field named by `matches`.
    PasswordConfirmation { matches: String },
    NationalId,
}

/// One input field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldSpec {
    /// Stable identifier, unique within the form.
    pub id: String,
    /// Human-readable field name used in reason strings.
    pub label: String,
    /// Live mask applied on every input-change event, if any.
    #[serde(default)]
    pub mask: Option<MaskKind>,
    #[serde(flatten)]
    pub rule: FieldRule,
}

impl FieldSpec {
    /// The stable identifier of this field's error region, derived from the
    /// field's own id by convention.
    pub fn error_region_id(&self) -> String {
        format!("error-{}", self.id)
    }
}

/// A complete form description: an ordered list of field specs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormConfig {
    pub fields: Vec<FieldSpec>,
}

impl FormConfig {
    /// Loads a form description from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading form description from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(FieldmaskError::IoError)
            .with_context(|| format!("Failed to read form file {}", path.display()))?;
        let config: FormConfig = serde_yml::from_str(&text)
            .map_err(|e| FieldmaskError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse form file {}", path.display()))?;

        validate_fields(&config.fields)?;
        info!("Loaded {} fields from file {}.", config.fields.len(), path.display());

        Ok(config)
    }

    /// Loads the default registration form from the embedded description.
    pub fn load_default_form() -> Result<Self> {
        debug!("Loading default form from embedded string...");
        let default_yaml = include_str!("../config/default_form.yaml");
        let config: FormConfig = serde_yml::from_str(default_yaml)
            .map_err(|e| FieldmaskError::ParseError(e.to_string()))
            .context("Failed to parse default form")?;

        validate_fields(&config.fields)?;
        Ok(config)
    }

    /// Looks up a field spec by its id.
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Checks a form's shape: field ids must be unique and every confirmation
/// rule must name a field the form declares.
pub fn validate_fields(fields: &[FieldSpec]) -> Result<(), FieldmaskError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for field in fields {
        if !seen.insert(field.id.as_str()) {
            return Err(FieldmaskError::DuplicateFieldId(field.id.clone()));
        }
    }

    for field in fields {
        if let FieldRule::PasswordConfirmation { matches } = &field.rule {
            let Some(target) = fields.iter().find(|f| f.id == *matches) else {
                return Err(FieldmaskError::UnknownConfirmationTarget(
                    field.id.clone(),
                    matches.clone(),
                ));
            };
            if !matches!(target.rule, FieldRule::Password) {
                warn!(
                    "Field '{}' confirms against '{}', which is not a password field.",
                    field.id, target.id
                );
            }
        }
    }

    Ok(())
}
