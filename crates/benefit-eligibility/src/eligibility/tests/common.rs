use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{
    eligibility_router, EligibilityEngine, EligibilityReport, EligibilityService, FactSet,
    FactSubmission, LegalStatus, MaritalStatus,
};

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn service() -> Arc<EligibilityService> {
    Arc::new(EligibilityService::new(engine()))
}

pub(super) fn router() -> axum::Router {
    eligibility_router(service())
}

pub(super) fn report(facts: &FactSet) -> EligibilityReport {
    engine().evaluate(facts).expect("decision tables cover complete input")
}

/// Low-income Canadian citizen, 65, resident for the minimum ten years.
pub(super) fn oas_applicant() -> FactSet {
    FactSet {
        income: Some(10_000),
        age: Some(65),
        living_country: Some("Canada".to_string()),
        legal_status: Some(LegalStatus::CanadianCitizen),
        years_in_canada_since_18: Some(10),
        ..FactSet::default()
    }
}

/// 62-year-old citizen living in Canada, married to an OAS recipient.
pub(super) fn allowance_applicant() -> FactSet {
    FactSet {
        income: Some(20_000),
        age: Some(62),
        living_country: Some("Canada".to_string()),
        legal_status: Some(LegalStatus::CanadianCitizen),
        years_in_canada_since_18: Some(20),
        marital_status: Some(MaritalStatus::Married),
        partner_receiving_oas: Some(true),
    }
}

pub(super) fn survivor_applicant() -> FactSet {
    FactSet {
        marital_status: Some(MaritalStatus::Widowed),
        partner_receiving_oas: None,
        ..allowance_applicant()
    }
}

pub(super) fn oas_submission() -> FactSubmission {
    FactSubmission::new()
        .with("income", 10_000)
        .with("age", 65)
        .with("livingCountry", "Canada")
        .with("legalStatus", "Canadian Citizen")
        .with("yearsInCanadaSince18", 10)
        .with("maritalStatus", "Single")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
