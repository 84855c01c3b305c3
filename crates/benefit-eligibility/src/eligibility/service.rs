use tracing::{debug, error, info, warn};

use super::engine::{EligibilityEngine, EligibilityError};
use super::report::EligibilityReport;
use super::validation::FactSubmission;

/// Facade the transports call into. Adds structured logging around the engine.
#[derive(Debug, Clone, Default)]
pub struct EligibilityService {
    engine: EligibilityEngine,
}

impl EligibilityService {
    pub fn new(engine: EligibilityEngine) -> Self {
        Self { engine }
    }

    /// Assess a raw submission. Only field names are logged, never values.
    pub fn assess(
        &self,
        submission: &FactSubmission,
    ) -> Result<EligibilityReport, EligibilityError> {
        let fields: Vec<&str> = submission.keys().collect();
        info!(fields = ?fields, "eligibility request received");

        match self.engine.assess(submission) {
            Ok(report) => {
                for (benefit, verdict) in report.verdicts() {
                    debug!(
                        benefit = %benefit,
                        result = verdict.result.label(),
                        missing = verdict.missing().len(),
                        "benefit assessed"
                    );
                }
                Ok(report)
            }
            Err(EligibilityError::Invalid(failure)) => {
                let rejected: Vec<&str> = failure
                    .violations
                    .iter()
                    .map(|violation| violation.field.as_str())
                    .collect();
                warn!(fields = ?rejected, "eligibility request rejected");
                Err(EligibilityError::Invalid(failure))
            }
            Err(EligibilityError::RuleGap(gap)) => {
                error!(benefit = %gap.benefit, error = %gap, "decision table exhausted");
                Err(EligibilityError::RuleGap(gap))
            }
        }
    }
}
