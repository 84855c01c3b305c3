use super::super::country::CountryClass;
use super::super::domain::{Field, ResultKind, ResultReason};
use super::super::requirements::{always, Requirement, Stage};
use super::{Assessment, Rule};

pub(super) const STAGES: &[Stage] = &[
    &[Requirement {
        field: Field::Income,
        when: always,
    }],
    &[
        Requirement {
            field: Field::Age,
            when: income_within_ceiling,
        },
        Requirement {
            field: Field::LivingCountry,
            when: income_within_ceiling,
        },
        Requirement {
            field: Field::LegalStatus,
            when: income_within_ceiling,
        },
    ],
    &[Requirement {
        field: Field::YearsInCanadaSince18,
        when: residence_matters,
    }],
];

pub(super) const RULES: &[Rule] = &[
    Rule {
        applies: income_too_high,
        result: ResultKind::Ineligible,
        reason: ResultReason::Income,
        detail: "Your income is too high to be eligible for Old Age Security.",
    },
    Rule {
        applies: too_young,
        result: ResultKind::Ineligible,
        reason: ResultReason::Age,
        detail: "You must be 65 or older to receive Old Age Security. You may become eligible when you turn 65.",
    },
    Rule {
        applies: lacks_legal_status,
        result: ResultKind::Ineligible,
        reason: ResultReason::Citizen,
        detail: "You currently do not appear to be eligible for Old Age Security as you have indicated that you do not have legal status in Canada. However, you may be in the future if you obtain legal status. If you are living outside of Canada, you may be eligible if you had legal status prior to your departure.",
    },
    Rule {
        applies: meets_residence,
        result: ResultKind::Eligible,
        reason: ResultReason::None,
        detail: "Based on the information provided, you are eligible for Old Age Security!",
    },
    Rule {
        applies: short_residence_in_agreement_country,
        result: ResultKind::Conditional,
        reason: ResultReason::YearsInCanada,
        detail: "Depending on Canada's agreement with this country, you may be eligible to receive Old Age Security.",
    },
    Rule {
        applies: short_residence,
        result: ResultKind::Ineligible,
        reason: ResultReason::YearsInCanada,
        detail: "You currently do not appear to be eligible for Old Age Security as you have indicated that you have not lived in Canada for the minimum period of time or lived in a country that Canada has a social security agreement with. However, you may be in the future if you reside in Canada for the minimum required number of years.",
    },
];

fn income_within_ceiling(assessment: &Assessment<'_>) -> bool {
    assessment.income_below(assessment.thresholds.oas_income_ceiling)
}

fn residence_matters(assessment: &Assessment<'_>) -> bool {
    income_within_ceiling(assessment) && assessment.citizen_like()
}

fn income_too_high(assessment: &Assessment<'_>) -> bool {
    assessment.income_at_least(assessment.thresholds.oas_income_ceiling)
}

fn too_young(assessment: &Assessment<'_>) -> bool {
    assessment.age_below(assessment.thresholds.oas_minimum_age)
}

fn lacks_legal_status(assessment: &Assessment<'_>) -> bool {
    assessment.not_citizen_like()
}

fn meets_residence(assessment: &Assessment<'_>) -> bool {
    let thresholds = assessment.thresholds;
    let in_canada = assessment.living_in(CountryClass::Canada)
        && assessment.years_at_least(thresholds.oas_years_living_in_canada);
    let abroad = (assessment.living_in(CountryClass::Agreement)
        || assessment.living_in(CountryClass::NoAgreement))
        && assessment.years_at_least(thresholds.oas_years_living_abroad);
    in_canada || abroad
}

fn short_residence_in_agreement_country(assessment: &Assessment<'_>) -> bool {
    assessment.living_in(CountryClass::Agreement)
        && assessment.years_below(assessment.thresholds.oas_years_living_abroad)
}

// Anything left with a known residence history falls short of the minimum.
fn short_residence(assessment: &Assessment<'_>) -> bool {
    assessment.facts.years_in_canada_since_18.is_some()
}
