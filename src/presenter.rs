// fieldmask/src/presenter.rs
//! The seam between the engine and whatever renders its outcomes.
//!
//! The engine never touches a visual surface; it produces [`FieldReport`]s
//! addressed to stable error-region ids. An adapter implements
//! `ErrorPresenter` for its UI technology and lets [`present`] push a batch
//! of reports through it: invalid fields get their reason displayed, valid
//! fields get their region cleared.
//!
//! License: MIT OR APACHE 2.0

use crate::engine::FieldReport;
use crate::fields::ValidationOutcome;

/// Renders validation outcomes into per-field error regions.
pub trait ErrorPresenter {
    /// Shows `message` in the error region identified by `error_region_id`.
    fn display_error(&mut self, error_region_id: &str, message: &str);

    /// Clears the error region identified by `error_region_id`.
    fn clear_error(&mut self, error_region_id: &str);
}

/// Pushes a batch of reports through `presenter` and returns whether every
/// field was valid.
pub fn present(reports: &[FieldReport], presenter: &mut dyn ErrorPresenter) -> bool {
    let mut all_valid = true;
    for report in reports {
        match &report.outcome {
            ValidationOutcome::Valid => presenter.clear_error(&report.error_region_id),
            ValidationOutcome::Invalid(reason) => {
                all_valid = false;
                presenter.display_error(&report.error_region_id, reason);
            }
        }
    }
    all_valid
}
