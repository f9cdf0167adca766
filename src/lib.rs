// fieldmask/src/lib.rs
//! # Fieldmask Core Library
//!
//! `fieldmask` provides the fundamental, UI-independent logic for form-input
//! processing: live input masks that normalize raw keystrokes into canonical
//! display formats, field validators that check finalized values against
//! domain rules, and the weighted mod-11 checksum that decides validity of a
//! national identification number independent of formatting.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation and judgement of caller-supplied strings, without concerns
//! for rendering, routing, session handling or persisted application state.
//!
//! ## Modules
//!
//! * `masks`: Defines `MaskKind` and the `transform` function applied on every input-change event.
//! * `fields`: Defines `FieldKind`, `ValidationOutcome` and the `validate` function run on blur/submit.
//! * `validators`: Provides programmatic checksum validation for the national ID.
//! * `config`: Defines `FieldSpec`s and `FormConfig` for declarative form descriptions.
//! * `engine`: Defines `FormEngine`, the boundary the surrounding application calls.
//! * `presenter`: Defines the `ErrorPresenter` seam adapters implement for their UI technology.
//! * `errors`: Defines the structured error type for the configuration boundary.
//!
//! ## Public API
//!
//! **Masking & Validation Primitives**
//!
//! * [`transform`]: Reformats raw text for a [`MaskKind`]; never fails, always idempotent.
//! * [`validate`]: Judges a finalized value for a [`FieldKind`], yielding a [`ValidationOutcome`].
//! * [`is_valid_national_id`]: The two-pass mod-11 check digit algorithm.
//!
//! **Form Descriptions & Engine**
//!
//! * [`FormConfig`]: An ordered list of [`FieldSpec`]s, loadable from YAML.
//! * [`FormConfig::load_default_form`]: Loads the embedded default registration form.
//! * [`FormEngine`]: Binds a form and exposes `mask_input` / `validate_field` / `validate_form`.
//! * [`FieldReport`]: One field's outcome, addressed to its stable error region.
//!
//! **Presentation Seam**
//!
//! * [`ErrorPresenter`]: Implemented by adapters that render outcomes.
//! * [`present`]: Pushes a batch of reports through a presenter.
//!
//! ## Usage Example
//!
//! ```rust
//! use fieldmask::{FormConfig, FormEngine};
//! use std::collections::HashMap;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the embedded default registration form.
//!     let form = FormConfig::load_default_form()?;
//!     let engine = FormEngine::new(form)?;
//!
//!     // 2. On every input-change event, mask the raw text and write it back.
//!     let shown = engine.mask_input("mobile_phone", "11987654321")?;
//!     assert_eq!(shown, "(11) 98765-4321");
//!
//!     // 3. On submit, validate the whole value map at once.
//!     let mut submitted = HashMap::new();
//!     submitted.insert("email".to_string(), "user@example.com".to_string());
//!     let reports = engine.validate_form(&submitted);
//!
//!     let email = reports.iter().find(|r| r.field_id == "email").unwrap();
//!     assert!(email.outcome.is_valid());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Masking has no error path at all and validation expresses failure as data
//! (`Invalid(reason)`), never as an `Err`. Errors exist only at the
//! configuration boundary — unreadable or malformed form files, inconsistent
//! form shapes, unknown field ids — and surface as [`FieldmaskError`].
//!
//! ## Design Principles
//!
//! * **Pure:** Every mask and validation call is a pure function of its
//!   inputs; no shared mutable state, no I/O, no ordering dependency.
//! * **UI-agnostic:** The engine returns data; presenting a reason is the
//!   adapter's job, behind the `ErrorPresenter` trait.
//! * **Closed kinds:** Mask and field kinds are closed enums, so every case
//!   is handled exhaustively at compile time.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod masks;
pub mod presenter;
pub mod validators;

/// Re-exports the public configuration types and functions for describing forms.
pub use config::{validate_fields, FieldRule, FieldSpec, FormConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FieldmaskError;

/// Re-exports the masking primitives.
pub use masks::{transform, MaskKind};

/// Re-exports the validation primitives.
pub use fields::{validate, FieldKind, ValidationOutcome};

/// Re-exports the national-ID checksum.
pub use validators::is_valid_national_id;

/// Re-exports the form engine and its per-field report type.
pub use engine::{FieldReport, FormEngine};

/// Re-exports the presentation seam.
pub use presenter::{present, ErrorPresenter};
