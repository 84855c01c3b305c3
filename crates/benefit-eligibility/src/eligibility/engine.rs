use serde_json::{json, Value};

use super::domain::{Benefit, FactSet, Field, ResultKind, Verdict};
use super::evaluation::{evaluate, Assessment, EligibilityThresholds, RuleGap};
use super::report::{EligibilityReport, FieldScope};
use super::requirements::missing_fields;
use super::validation::{validate, FactSubmission, ValidationFailure};

/// Failure modes of a full assessment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
    #[error(transparent)]
    RuleGap(#[from] RuleGap),
}

impl EligibilityError {
    /// JSON body reported to callers: `{error, detail}` for invalid input,
    /// `{error}` for an exhausted decision table.
    pub fn payload(&self) -> Value {
        match self {
            EligibilityError::Invalid(failure) => json!({
                "error": ResultKind::Invalid.label(),
                "detail": failure.violations,
            }),
            EligibilityError::RuleGap(gap) => json!({
                "error": gap.to_string(),
            }),
        }
    }
}

/// Stateless aggregator: validation, requirement resolution and rule
/// evaluation for all four benefits.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    thresholds: EligibilityThresholds,
    field_scope: FieldScope,
}

impl EligibilityEngine {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self {
            thresholds,
            field_scope: FieldScope::default(),
        }
    }

    pub fn with_field_scope(mut self, field_scope: FieldScope) -> Self {
        self.field_scope = field_scope;
        self
    }

    /// Validate raw facts, then assess every benefit.
    pub fn assess(
        &self,
        submission: &FactSubmission,
    ) -> Result<EligibilityReport, EligibilityError> {
        let facts = validate(submission)?;
        Ok(self.evaluate_in_order(&facts, submission.supplied_fields())?)
    }

    /// Assess already-validated facts; `allFields` starts from the canonical field order.
    pub fn evaluate(&self, facts: &FactSet) -> Result<EligibilityReport, RuleGap> {
        self.evaluate_in_order(facts, facts.supplied_fields())
    }

    // GIS sees the OAS verdict computed here.
    fn evaluate_in_order(
        &self,
        facts: &FactSet,
        supplied: Vec<Field>,
    ) -> Result<EligibilityReport, RuleGap> {
        let assessment = Assessment::new(facts, &self.thresholds);

        let oas = verdict_for(Benefit::Oas, &assessment)?;
        let gis = verdict_for(
            Benefit::Gis,
            &Assessment::new(facts, &self.thresholds).with_oas(&oas),
        )?;
        let allowance = verdict_for(Benefit::Allowance, &assessment)?;
        let afs = verdict_for(Benefit::AllowanceForSurvivor, &assessment)?;

        Ok(EligibilityReport::assemble(
            supplied,
            self.field_scope,
            [oas, gis, allowance, afs],
        ))
    }
}

fn verdict_for(benefit: Benefit, assessment: &Assessment<'_>) -> Result<Verdict, RuleGap> {
    let missing = missing_fields(benefit, assessment);
    if !missing.is_empty() {
        return Ok(Verdict::needs_more_info(missing));
    }
    evaluate(benefit, assessment)
}
