//! Verify Module
//!
//! Cross-checks a build's output directory: every expected widget has its
//! HTML shell, its JS, and every asset its shell references.

mod report;
mod use_case;

pub use report::{VerificationFailure, VerificationReport, VerificationWarning, WidgetReport};
pub use use_case::VerifyUseCase;
