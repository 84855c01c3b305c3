use super::common::*;
use crate::eligibility::{EligibilityError, FactSubmission, ResultKind};

#[test]
fn service_assesses_valid_submissions() {
    let report = service().assess(&oas_submission()).expect("valid submission");

    assert_eq!(report.oas.result, ResultKind::Eligible);
    assert_eq!(report.gis.result, ResultKind::Eligible);
    assert!(report.all_fields.len() >= 6);
}

#[test]
fn service_surfaces_validation_failures() {
    let submission = FactSubmission::new().with("age", 151).with("unknown", 1);

    match service().assess(&submission) {
        Err(EligibilityError::Invalid(failure)) => assert_eq!(failure.violations.len(), 2),
        other => panic!("expected validation failure, got {other:?}"),
    }
}
