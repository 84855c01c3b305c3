//! Conditional field requirements.
//!
//! Each benefit declares an ordered list of stages; a stage is a batch of
//! `(field, guard)` pairs. Guards only look at facts that are already known
//! (and, for GIS, the OAS verdict). The first stage with a guarded field still
//! absent is the batch reported back to the caller, so later questions are
//! never asked before the answers they depend on.

use super::domain::{Benefit, Field};
use super::evaluation::{stages_for, Assessment};

pub(crate) struct Requirement {
    pub(crate) field: Field,
    pub(crate) when: fn(&Assessment<'_>) -> bool,
}

pub(crate) type Stage = &'static [Requirement];

pub(crate) fn always(_: &Assessment<'_>) -> bool {
    true
}

/// Fields required next for `benefit`, in chain order. Empty when the rule
/// table can run.
pub(crate) fn missing_fields(benefit: Benefit, assessment: &Assessment<'_>) -> Vec<Field> {
    for stage in stages_for(benefit) {
        let missing: Vec<Field> = stage
            .iter()
            .filter(|requirement| (requirement.when)(assessment))
            .map(|requirement| requirement.field)
            .filter(|field| !assessment.facts.is_present(*field))
            .collect();

        if !missing.is_empty() {
            return missing;
        }
    }

    Vec::new()
}
