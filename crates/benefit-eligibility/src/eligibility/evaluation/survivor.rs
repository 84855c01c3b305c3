use super::super::country::CountryClass;
use super::super::domain::{Field, ResultKind, ResultReason};
use super::super::requirements::{always, Requirement, Stage};
use super::{Assessment, Rule};

pub(super) const STAGES: &[Stage] = &[
    &[Requirement {
        field: Field::Income,
        when: always,
    }],
    &[Requirement {
        field: Field::Age,
        when: income_within_ceiling,
    }],
    &[
        Requirement {
            field: Field::LivingCountry,
            when: in_age_window,
        },
        Requirement {
            field: Field::LegalStatus,
            when: in_age_window,
        },
        Requirement {
            field: Field::MaritalStatus,
            when: in_age_window,
        },
    ],
    &[Requirement {
        field: Field::YearsInCanadaSince18,
        when: residence_matters,
    }],
];

pub(super) const RULES: &[Rule] = &[
    Rule {
        applies: outside_age_window,
        result: ResultKind::Ineligible,
        reason: ResultReason::Age,
        detail: "You must be between 60 and 64 to be eligible for the Allowance for the Survivor.",
    },
    Rule {
        applies: income_too_high,
        result: ResultKind::Ineligible,
        reason: ResultReason::Income,
        detail: "Your income is too high to be eligible for the Allowance for the Survivor.",
    },
    Rule {
        applies: not_widowed,
        result: ResultKind::Ineligible,
        reason: ResultReason::Marital,
        detail: "You must be widowed to be eligible for the Allowance for the Survivor.",
    },
    Rule {
        applies: meets_residence,
        result: ResultKind::Eligible,
        reason: ResultReason::None,
        detail: "Based on the information provided, you are eligible for the Allowance for the Survivor!",
    },
    Rule {
        applies: short_residence_in_agreement_country,
        result: ResultKind::Conditional,
        reason: ResultReason::YearsInCanada,
        detail: "Depending on Canada's agreement with this country, you may be eligible to receive the Allowance for the Survivor.",
    },
    Rule {
        applies: short_residence,
        result: ResultKind::Ineligible,
        reason: ResultReason::YearsInCanada,
        detail: "You currently do not appear to be eligible for the Allowance for the Survivor as you have indicated that you have not lived in Canada for the minimum period of time or lived in a country that Canada has a social security agreement with. However, you may be in the future if you reside in Canada for the minimum required number of years.",
    },
    Rule {
        applies: lacks_legal_status,
        result: ResultKind::Ineligible,
        reason: ResultReason::Citizen,
        detail: "You currently do not appear to be eligible for the Allowance for the Survivor as you have indicated that you do not have legal status in Canada. However, you may be in the future if you obtain legal status.",
    },
    Rule {
        applies: outside_agreement_country,
        result: ResultKind::Ineligible,
        reason: ResultReason::SocialAgreement,
        detail: "You currently do not appear to be eligible for the Allowance for the Survivor as you are not living in Canada or in a country that Canada has a social security agreement with.",
    },
];

fn income_within_ceiling(assessment: &Assessment<'_>) -> bool {
    assessment.income_below(assessment.thresholds.survivor_income_ceiling)
}

fn in_age_window(assessment: &Assessment<'_>) -> bool {
    let thresholds = assessment.thresholds;
    income_within_ceiling(assessment)
        && assessment.age_within(
            thresholds.allowance_minimum_age,
            thresholds.allowance_maximum_age,
        )
}

fn residence_matters(assessment: &Assessment<'_>) -> bool {
    in_age_window(assessment) && assessment.citizen_like()
}

fn outside_age_window(assessment: &Assessment<'_>) -> bool {
    let thresholds = assessment.thresholds;
    assessment.age_outside(
        thresholds.allowance_minimum_age,
        thresholds.allowance_maximum_age,
    )
}

fn income_too_high(assessment: &Assessment<'_>) -> bool {
    assessment.income_at_least(assessment.thresholds.survivor_income_ceiling)
}

fn not_widowed(assessment: &Assessment<'_>) -> bool {
    assessment.facts.marital_status.is_some() && !assessment.facts.widowed()
}

fn meets_residence(assessment: &Assessment<'_>) -> bool {
    assessment.citizen_like()
        && assessment.years_at_least(assessment.thresholds.allowance_years_in_canada)
}

fn short_residence_in_agreement_country(assessment: &Assessment<'_>) -> bool {
    assessment.living_in(CountryClass::Agreement)
        && assessment.years_below(assessment.thresholds.allowance_years_in_canada)
}

fn short_residence(assessment: &Assessment<'_>) -> bool {
    assessment.years_below(assessment.thresholds.allowance_years_in_canada)
}

fn lacks_legal_status(assessment: &Assessment<'_>) -> bool {
    assessment.not_citizen_like()
}

fn outside_agreement_country(assessment: &Assessment<'_>) -> bool {
    assessment
        .facts
        .country_class()
        .is_some_and(|class| class != CountryClass::Agreement)
}
