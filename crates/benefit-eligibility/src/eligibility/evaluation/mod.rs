//! Ordered rule tables, one per benefit. The first rule whose predicate holds
//! decides the verdict; running off the end of a table is a [`RuleGap`].

mod allowance;
mod gis;
mod oas;
mod survivor;
mod thresholds;

pub use thresholds::EligibilityThresholds;

use super::country::CountryClass;
use super::domain::{Benefit, FactSet, Field, ResultKind, ResultReason, Verdict};
use super::requirements::Stage;

/// Read-only view over one request's facts, plus the OAS verdict once known.
pub(crate) struct Assessment<'a> {
    pub(crate) facts: &'a FactSet,
    pub(crate) thresholds: &'a EligibilityThresholds,
    pub(crate) oas: Option<&'a Verdict>,
}

impl<'a> Assessment<'a> {
    pub(crate) fn new(facts: &'a FactSet, thresholds: &'a EligibilityThresholds) -> Self {
        Self {
            facts,
            thresholds,
            oas: None,
        }
    }

    pub(crate) fn with_oas(mut self, oas: &'a Verdict) -> Self {
        self.oas = Some(oas);
        self
    }

    pub(crate) fn income_below(&self, ceiling: u64) -> bool {
        self.facts.income.is_some_and(|income| income < ceiling)
    }

    pub(crate) fn income_at_least(&self, ceiling: u64) -> bool {
        self.facts.income.is_some_and(|income| income >= ceiling)
    }

    pub(crate) fn age_below(&self, minimum: i64) -> bool {
        self.facts.age.is_some_and(|age| age < minimum)
    }

    pub(crate) fn age_within(&self, minimum: i64, maximum: i64) -> bool {
        self.facts
            .age
            .is_some_and(|age| (minimum..=maximum).contains(&age))
    }

    pub(crate) fn age_outside(&self, minimum: i64, maximum: i64) -> bool {
        self.facts
            .age
            .is_some_and(|age| !(minimum..=maximum).contains(&age))
    }

    pub(crate) fn years_at_least(&self, minimum: u64) -> bool {
        self.facts
            .years_in_canada_since_18
            .is_some_and(|years| years >= minimum)
    }

    pub(crate) fn years_below(&self, minimum: u64) -> bool {
        self.facts
            .years_in_canada_since_18
            .is_some_and(|years| years < minimum)
    }

    pub(crate) fn citizen_like(&self) -> bool {
        self.facts.citizen_like() == Some(true)
    }

    pub(crate) fn not_citizen_like(&self) -> bool {
        self.facts.citizen_like() == Some(false)
    }

    pub(crate) fn living_in(&self, class: CountryClass) -> bool {
        self.facts.country_class() == Some(class)
    }

    pub(crate) fn oas_favourable(&self) -> bool {
        self.oas.is_some_and(|verdict| verdict.result.is_favourable())
    }
}

/// One row of a decision table.
pub(crate) struct Rule {
    pub(crate) applies: fn(&Assessment<'_>) -> bool,
    pub(crate) result: ResultKind,
    pub(crate) reason: ResultReason,
    pub(crate) detail: &'static str,
}

impl Rule {
    fn verdict(&self) -> Verdict {
        Verdict::decided(self.result, self.reason, self.detail)
    }
}

/// A decision table ran out of rows for complete input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {benefit} rule matched the supplied facts ({})", render_fields(.supplied))]
pub struct RuleGap {
    pub benefit: Benefit,
    pub supplied: Vec<Field>,
}

fn render_fields(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "none supplied".to_string();
    }
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn stages_for(benefit: Benefit) -> &'static [Stage] {
    match benefit {
        Benefit::Oas => oas::STAGES,
        Benefit::Gis => gis::STAGES,
        Benefit::Allowance => allowance::STAGES,
        Benefit::AllowanceForSurvivor => survivor::STAGES,
    }
}

fn rules_for(benefit: Benefit) -> &'static [Rule] {
    match benefit {
        Benefit::Oas => oas::RULES,
        Benefit::Gis => gis::RULES,
        Benefit::Allowance => allowance::RULES,
        Benefit::AllowanceForSurvivor => survivor::RULES,
    }
}

pub(crate) fn evaluate(benefit: Benefit, assessment: &Assessment<'_>) -> Result<Verdict, RuleGap> {
    rules_for(benefit)
        .iter()
        .find(|rule| (rule.applies)(assessment))
        .map(Rule::verdict)
        .ok_or_else(|| RuleGap {
            benefit,
            supplied: assessment.facts.supplied_fields(),
        })
}
