use super::super::domain::{Field, ResultKind, ResultReason};
use super::super::requirements::{always, Requirement, Stage};
use super::{Assessment, Rule};

pub(super) const STAGES: &[Stage] = &[
    &[Requirement {
        field: Field::Income,
        when: always,
    }],
    &[Requirement {
        field: Field::MaritalStatus,
        when: oas_favourable,
    }],
    &[Requirement {
        field: Field::PartnerReceivingOas,
        when: partnered_with_oas_favourable,
    }],
];

pub(super) const RULES: &[Rule] = &[
    Rule {
        applies: oas_unfavourable,
        result: ResultKind::Ineligible,
        reason: ResultReason::Oas,
        detail: "You need to be eligible for Old Age Security to receive the Guaranteed Income Supplement.",
    },
    Rule {
        applies: income_above_limit,
        result: ResultKind::Ineligible,
        reason: ResultReason::Income,
        detail: "Your income is too high to be eligible for the Guaranteed Income Supplement.",
    },
    Rule {
        applies: income_within_limit,
        result: ResultKind::Eligible,
        reason: ResultReason::None,
        detail: "Based on the information provided, you are eligible for the Guaranteed Income Supplement!",
    },
];

fn oas_favourable(assessment: &Assessment<'_>) -> bool {
    assessment.oas_favourable()
}

fn oas_unfavourable(assessment: &Assessment<'_>) -> bool {
    !assessment.oas_favourable()
}

fn partnered_with_oas_favourable(assessment: &Assessment<'_>) -> bool {
    assessment.oas_favourable() && assessment.facts.partnered()
}

/// Single applicants use the single limit; partnered applicants without a
/// stated partner pension are treated as "partner not receiving OAS".
fn income_limit(assessment: &Assessment<'_>) -> u64 {
    let thresholds = assessment.thresholds;
    if !assessment.facts.partnered() {
        thresholds.gis_single_income_limit
    } else if assessment.facts.partner_receiving_oas == Some(true) {
        thresholds.gis_partner_with_oas_income_limit
    } else {
        thresholds.gis_partner_without_oas_income_limit
    }
}

fn income_above_limit(assessment: &Assessment<'_>) -> bool {
    let limit = income_limit(assessment);
    assessment.facts.income.is_some_and(|income| income > limit)
}

fn income_within_limit(assessment: &Assessment<'_>) -> bool {
    let limit = income_limit(assessment);
    assessment.facts.income.is_some_and(|income| income <= limit)
}
