//! Eligibility assessment for Old Age Security, the Guaranteed Income
//! Supplement, the Allowance and the Allowance for the Survivor.
//!
//! A request flows through [`validation`] into a typed [`FactSet`], then the
//! [`EligibilityEngine`] asks each benefit's requirement table which facts are
//! still missing and, once none are, walks that benefit's decision table.

pub mod country;
pub mod domain;
pub mod engine;
pub(crate) mod evaluation;
pub mod report;
pub(crate) mod requirements;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use country::{classify, CountryClass};
pub use domain::{
    Benefit, FactSet, Field, LegalStatus, MaritalStatus, ResultKind, ResultReason, Verdict,
};
pub use engine::{EligibilityEngine, EligibilityError};
pub use evaluation::{EligibilityThresholds, RuleGap};
pub use report::{EligibilityReport, FieldScope};
pub use router::eligibility_router;
pub use service::EligibilityService;
pub use validation::{validate, FactSubmission, ValidationFailure, Violation, ViolationKind};
