use super::common::*;
use crate::eligibility::{
    Benefit, EligibilityReport, FactSet, LegalStatus, MaritalStatus, ResultKind, ResultReason,
};

fn outcome(report: &EligibilityReport, benefit: Benefit) -> (ResultKind, ResultReason) {
    let verdict = report.verdict(benefit);
    (verdict.result, verdict.reason)
}

#[test]
fn oas_eligible_at_minimum_residence_in_canada() {
    let report = report(&oas_applicant());

    assert_eq!(
        outcome(&report, Benefit::Oas),
        (ResultKind::Eligible, ResultReason::None)
    );
    assert!(report.oas.missing_fields.is_none());
}

#[test]
fn oas_ineligible_one_year_short_in_canada() {
    let facts = FactSet {
        years_in_canada_since_18: Some(9),
        ..oas_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::YearsInCanada)
    );
}

#[test]
fn oas_in_agreement_country_is_conditional_until_twenty_years() {
    let mut facts = FactSet {
        living_country: Some("Agreement".to_string()),
        years_in_canada_since_18: Some(19),
        ..oas_applicant()
    };
    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Conditional, ResultReason::YearsInCanada)
    );

    facts.years_in_canada_since_18 = Some(20);
    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Eligible, ResultReason::None)
    );
}

#[test]
fn oas_abroad_without_agreement_needs_twenty_years() {
    let mut facts = FactSet {
        living_country: Some("Atlantis".to_string()),
        years_in_canada_since_18: Some(15),
        ..oas_applicant()
    };
    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::YearsInCanada)
    );

    facts.years_in_canada_since_18 = Some(20);
    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Eligible, ResultReason::None)
    );
}

#[test]
fn oas_income_ceiling_is_exclusive() {
    let mut facts = FactSet {
        income: Some(129_756),
        ..oas_applicant()
    };
    assert_eq!(report(&facts).oas.result, ResultKind::Eligible);

    facts.income = Some(129_757);
    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::Income)
    );
}

#[test]
fn oas_reports_income_before_legal_status() {
    let facts = FactSet {
        income: Some(129_757),
        legal_status: Some(LegalStatus::NoneOfTheAbove),
        years_in_canada_since_18: None,
        ..oas_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::Income)
    );
}

#[test]
fn allowance_reports_age_before_income() {
    for age in [59, 65] {
        let facts = FactSet {
            income: Some(50_000),
            age: Some(age),
            ..allowance_applicant()
        };

        assert_eq!(
            outcome(&report(&facts), Benefit::Allowance),
            (ResultKind::Ineligible, ResultReason::Age),
            "age {age}"
        );
    }
}

#[test]
fn oas_rejects_applicants_under_sixty_five() {
    let facts = FactSet {
        age: Some(64),
        ..oas_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::Age)
    );
}

#[test]
fn oas_rejects_applicants_without_legal_status() {
    let facts = FactSet {
        legal_status: Some(LegalStatus::NoneOfTheAbove),
        years_in_canada_since_18: None,
        ..oas_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::Citizen)
    );
}

#[test]
fn gis_single_limit_is_inclusive() {
    let mut facts = FactSet {
        income: Some(18_216),
        marital_status: Some(MaritalStatus::Single),
        ..oas_applicant()
    };
    assert_eq!(
        outcome(&report(&facts), Benefit::Gis),
        (ResultKind::Eligible, ResultReason::None)
    );

    facts.income = Some(18_217);
    assert_eq!(
        outcome(&report(&facts), Benefit::Gis),
        (ResultKind::Ineligible, ResultReason::Income)
    );
}

#[test]
fn gis_partner_limits_depend_on_partner_pension() {
    let mut facts = FactSet {
        income: Some(24_048),
        marital_status: Some(MaritalStatus::CommonLaw),
        partner_receiving_oas: Some(true),
        ..oas_applicant()
    };
    assert_eq!(report(&facts).gis.result, ResultKind::Eligible);

    facts.income = Some(24_049);
    assert_eq!(report(&facts).gis.reason, ResultReason::Income);

    facts.partner_receiving_oas = Some(false);
    assert_eq!(report(&facts).gis.result, ResultKind::Eligible);

    facts.income = Some(43_681);
    assert_eq!(
        outcome(&report(&facts), Benefit::Gis),
        (ResultKind::Ineligible, ResultReason::Income)
    );
}

#[test]
fn gis_follows_a_conditional_oas_verdict() {
    let facts = FactSet {
        living_country: Some("Jamaica".to_string()),
        years_in_canada_since_18: Some(12),
        marital_status: Some(MaritalStatus::Widowed),
        ..oas_applicant()
    };

    let report = report(&facts);
    assert_eq!(report.oas.result, ResultKind::Conditional);
    assert_eq!(report.gis.result, ResultKind::Eligible);
}

#[test]
fn gis_is_ineligible_whenever_oas_is_not_favourable() {
    let too_young = FactSet {
        age: Some(64),
        marital_status: Some(MaritalStatus::Single),
        ..oas_applicant()
    };
    assert_eq!(
        outcome(&report(&too_young), Benefit::Gis),
        (ResultKind::Ineligible, ResultReason::Oas)
    );

    let undecided = FactSet {
        income: Some(10_000),
        ..FactSet::default()
    };
    let report = report(&undecided);
    assert_eq!(report.oas.result, ResultKind::MoreInfo);
    assert_eq!(
        outcome(&report, Benefit::Gis),
        (ResultKind::Ineligible, ResultReason::Oas)
    );
    assert!(report.gis.missing_fields.is_none());
}

#[test]
fn allowance_age_window_is_sixty_to_sixty_four() {
    for (age, expected) in [
        (59, ResultKind::Ineligible),
        (60, ResultKind::Eligible),
        (64, ResultKind::Eligible),
        (65, ResultKind::Ineligible),
    ] {
        let facts = FactSet {
            age: Some(age),
            years_in_canada_since_18: Some(20),
            ..allowance_applicant()
        };
        let verdict = report(&facts).allowance;
        assert_eq!(verdict.result, expected, "age {age}");
        if expected == ResultKind::Ineligible {
            assert_eq!(verdict.reason, ResultReason::Age);
        }
    }
}

#[test]
fn allowance_at_sixty_with_nothing_else_needs_more_information() {
    let facts = FactSet {
        income: Some(10_000),
        age: Some(60),
        ..FactSet::default()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Allowance),
        (ResultKind::MoreInfo, ResultReason::MoreInfo)
    );
}

#[test]
fn allowance_is_eligible_for_partner_of_oas_recipient() {
    let report = report(&allowance_applicant());

    assert_eq!(
        outcome(&report, Benefit::Allowance),
        (ResultKind::Eligible, ResultReason::None)
    );
    assert_eq!(
        outcome(&report, Benefit::Oas),
        (ResultKind::Ineligible, ResultReason::Age)
    );
    assert_eq!(
        outcome(&report, Benefit::AllowanceForSurvivor),
        (ResultKind::Ineligible, ResultReason::Marital)
    );
}

#[test]
fn allowance_rejections_follow_rule_order() {
    let cases = [
        (
            FactSet {
                income: Some(35_616),
                ..allowance_applicant()
            },
            ResultReason::Income,
        ),
        (
            FactSet {
                marital_status: Some(MaritalStatus::Single),
                partner_receiving_oas: None,
                ..allowance_applicant()
            },
            ResultReason::Marital,
        ),
        (
            FactSet {
                partner_receiving_oas: Some(false),
                ..allowance_applicant()
            },
            ResultReason::Oas,
        ),
        (
            FactSet {
                years_in_canada_since_18: Some(9),
                ..allowance_applicant()
            },
            ResultReason::YearsInCanada,
        ),
        (
            FactSet {
                legal_status: Some(LegalStatus::NoneOfTheAbove),
                years_in_canada_since_18: None,
                ..allowance_applicant()
            },
            ResultReason::Citizen,
        ),
    ];

    for (facts, reason) in cases {
        let verdict = report(&facts).allowance;
        assert_eq!(verdict.result, ResultKind::Ineligible, "{facts:?}");
        assert_eq!(verdict.reason, reason, "{facts:?}");
    }
}

#[test]
fn allowance_short_residence_in_agreement_country_is_conditional() {
    let facts = FactSet {
        living_country: Some("France".to_string()),
        years_in_canada_since_18: Some(5),
        ..allowance_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::Allowance),
        (ResultKind::Conditional, ResultReason::YearsInCanada)
    );
}

#[test]
fn survivor_is_eligible_when_widowed() {
    let report = report(&survivor_applicant());

    assert_eq!(
        outcome(&report, Benefit::AllowanceForSurvivor),
        (ResultKind::Eligible, ResultReason::None)
    );
    assert_eq!(
        outcome(&report, Benefit::Allowance),
        (ResultKind::Ineligible, ResultReason::Marital)
    );
}

#[test]
fn survivor_income_ceiling_is_lower_than_allowance() {
    let facts = FactSet {
        income: Some(25_920),
        ..survivor_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::AllowanceForSurvivor),
        (ResultKind::Ineligible, ResultReason::Income)
    );
}

#[test]
fn survivor_short_residence_outside_agreement_country() {
    let facts = FactSet {
        living_country: Some("Atlantis".to_string()),
        years_in_canada_since_18: Some(3),
        ..survivor_applicant()
    };

    assert_eq!(
        outcome(&report(&facts), Benefit::AllowanceForSurvivor),
        (ResultKind::Ineligible, ResultReason::YearsInCanada)
    );
}

#[test]
fn retiree_abroad_in_agreement_country_with_partner() {
    let facts = FactSet {
        income: Some(20_000),
        age: Some(66),
        living_country: Some("Jamaica".to_string()),
        legal_status: Some(LegalStatus::PermanentResident),
        years_in_canada_since_18: Some(15),
        marital_status: Some(MaritalStatus::Married),
        partner_receiving_oas: Some(true),
    };

    let report = report(&facts);
    assert_eq!(
        outcome(&report, Benefit::Oas),
        (ResultKind::Conditional, ResultReason::YearsInCanada)
    );
    assert_eq!(
        outcome(&report, Benefit::Gis),
        (ResultKind::Eligible, ResultReason::None)
    );
    assert_eq!(report.allowance.reason, ResultReason::Age);
    assert_eq!(report.afs.reason, ResultReason::Age);
    assert!(report.all_fields.iter().all(|field| facts.is_present(*field)));
}

#[test]
fn identical_facts_produce_identical_reports() {
    let facts = allowance_applicant();

    let first = serde_json::to_vec(&report(&facts)).expect("serialize");
    let second = serde_json::to_vec(&report(&facts)).expect("serialize");

    assert_eq!(first, second);
}
