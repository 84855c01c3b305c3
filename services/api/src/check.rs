use crate::infra::eligibility_service;
use benefit_eligibility::config::AppConfig;
use benefit_eligibility::eligibility::{EligibilityService, FactSubmission, Field};
use benefit_eligibility::error::AppError;
use clap::Args;
use serde::Serialize;

/// Facts for a one-off assessment. Omitted flags are treated as unanswered.
#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Annual net income in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: Option<i64>,
    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: Option<i64>,
    /// Country of residence, e.g. "Canada" or "Jamaica"
    #[arg(long)]
    pub(crate) living_country: Option<String>,
    /// Legal status, e.g. "Canadian Citizen" or "None of the above"
    #[arg(long)]
    pub(crate) legal_status: Option<String>,
    /// Years lived in Canada since turning 18
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) years_in_canada: Option<i64>,
    /// Marital status, e.g. "Single", "Married" or "Widowed"
    #[arg(long)]
    pub(crate) marital_status: Option<String>,
    /// Whether the partner receives Old Age Security (true/false)
    #[arg(long)]
    pub(crate) partner_receiving_oas: Option<bool>,
}

impl CheckArgs {
    pub(crate) fn submission(&self) -> FactSubmission {
        let mut submission = FactSubmission::new();
        if let Some(income) = self.income {
            submission = submission.with(Field::Income.key(), income);
        }
        if let Some(age) = self.age {
            submission = submission.with(Field::Age.key(), age);
        }
        if let Some(country) = &self.living_country {
            submission = submission.with(Field::LivingCountry.key(), country.as_str());
        }
        if let Some(status) = &self.legal_status {
            submission = submission.with(Field::LegalStatus.key(), status.as_str());
        }
        if let Some(years) = self.years_in_canada {
            submission = submission.with(Field::YearsInCanadaSince18.key(), years);
        }
        if let Some(status) = &self.marital_status {
            submission = submission.with(Field::MaritalStatus.key(), status.as_str());
        }
        if let Some(flag) = self.partner_receiving_oas {
            submission = submission.with(Field::PartnerReceivingOas.key(), flag);
        }
        submission
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = eligibility_service(&config.engine);
    check(&service, &args)
}

/// Prints the report, or the error payload before failing so the process exits non-zero.
pub(crate) fn check(service: &EligibilityService, args: &CheckArgs) -> Result<(), AppError> {
    match service.assess(&args.submission()) {
        Ok(report) => {
            print_json(&report);
            Ok(())
        }
        Err(err) => {
            print_json(&err.payload());
            Err(err.into())
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("report unavailable: {err}"),
    }
}
