use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{FactSet, Field, LegalStatus, MaritalStatus};

const MAX_AGE: i64 = 150;
const ADULTHOOD_AGE: i64 = 18;

/// Raw, untyped facts as delivered by a transport (JSON body or query string).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSubmission(Map<String, Value>);

impl FactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by the CLI and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Query-string values arrive as text and are coerced during validation.
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Known, non-null fields in the order the transport delivered them.
    pub fn supplied_fields(&self) -> Vec<Field> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(key, _)| Field::from_key(key))
            .collect()
    }
}

impl From<Map<String, Value>> for FactSubmission {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Category of a structural problem with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    UnknownField,
    NotAnInteger,
    NotAString,
    NotABoolean,
    EmptyString,
    BelowMinimum,
    AboveMaximum,
    UnknownOption,
    YearsExceedAdultLife,
    PartnerWithoutPartnership,
}

/// One failed constraint, reported alongside every other failure in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Aggregate rejection carrying all violations found in a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request is invalid ({} violation(s))", .violations.len())]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

/// Checks types, ranges and cross-field constraints, collecting every violation.
pub fn validate(submission: &FactSubmission) -> Result<FactSet, ValidationFailure> {
    let mut violations = Vec::new();

    for key in submission.keys() {
        if Field::from_key(key).is_none() {
            violations.push(Violation::new(
                key,
                ViolationKind::UnknownField,
                format!("\"{key}\" is not allowed"),
            ));
        }
    }

    let income = submission
        .get(Field::Income.key())
        .and_then(|value| non_negative(Field::Income, value, &mut violations));

    let age = submission
        .get(Field::Age.key())
        .and_then(|value| integer(Field::Age, value, &mut violations))
        .and_then(|age| {
            if age > MAX_AGE {
                violations.push(Violation::new(
                    Field::Age.key(),
                    ViolationKind::AboveMaximum,
                    format!("\"age\" must be less than or equal to {MAX_AGE}"),
                ));
                None
            } else {
                Some(age)
            }
        });

    let living_country = submission
        .get(Field::LivingCountry.key())
        .and_then(|value| text(Field::LivingCountry, value, &mut violations));

    let legal_status = submission
        .get(Field::LegalStatus.key())
        .and_then(|value| text(Field::LegalStatus, value, &mut violations))
        .and_then(|label| {
            let parsed = LegalStatus::from_label(&label);
            if parsed.is_none() {
                violations.push(unknown_option(
                    Field::LegalStatus,
                    LegalStatus::ALL.map(LegalStatus::label).as_slice(),
                ));
            }
            parsed
        });

    let years_in_canada_since_18 = submission
        .get(Field::YearsInCanadaSince18.key())
        .and_then(|value| non_negative(Field::YearsInCanadaSince18, value, &mut violations));

    let marital_status = submission
        .get(Field::MaritalStatus.key())
        .and_then(|value| text(Field::MaritalStatus, value, &mut violations))
        .and_then(|label| {
            let parsed = MaritalStatus::from_label(&label);
            if parsed.is_none() {
                violations.push(unknown_option(
                    Field::MaritalStatus,
                    MaritalStatus::ALL.map(MaritalStatus::label).as_slice(),
                ));
            }
            parsed
        });

    let partner_receiving_oas = submission
        .get(Field::PartnerReceivingOas.key())
        .and_then(|value| boolean(Field::PartnerReceivingOas, value, &mut violations));

    if let (Some(years), Some(age)) = (years_in_canada_since_18, age) {
        if i64::try_from(years).map_or(true, |years| years > age.saturating_sub(ADULTHOOD_AGE)) {
            violations.push(Violation::new(
                Field::YearsInCanadaSince18.key(),
                ViolationKind::YearsExceedAdultLife,
                "Years in Canada should be no more than age minus 18",
            ));
        }
    }

    if let (Some(true), Some(status)) = (partner_receiving_oas, marital_status) {
        if !status.is_partnered() {
            violations.push(Violation::new(
                Field::PartnerReceivingOas.key(),
                ViolationKind::PartnerWithoutPartnership,
                format!(
                    "\"partnerReceivingOas\" can only be true when married or common-law (found {})",
                    status.label()
                ),
            ));
        }
    }

    if !violations.is_empty() {
        return Err(ValidationFailure { violations });
    }

    Ok(FactSet {
        income,
        age,
        living_country,
        legal_status,
        years_in_canada_since_18,
        marital_status,
        partner_receiving_oas,
    })
}

fn integer(field: Field, value: &Value, violations: &mut Vec<Violation>) -> Option<i64> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().and_then(integral)),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };

    if parsed.is_none() {
        violations.push(Violation::new(
            field.key(),
            ViolationKind::NotAnInteger,
            format!("\"{field}\" must be an integer"),
        ));
    }
    parsed
}

// `65.0` counts as 65 whether it arrives as a JSON number or as query text.
fn integral(float: f64) -> Option<i64> {
    (float.is_finite() && float.fract() == 0.0 && float.abs() <= i64::MAX as f64)
        .then_some(float as i64)
}

fn non_negative(field: Field, value: &Value, violations: &mut Vec<Violation>) -> Option<u64> {
    let number = integer(field, value, violations)?;
    match u64::try_from(number) {
        Ok(number) => Some(number),
        Err(_) => {
            violations.push(Violation::new(
                field.key(),
                ViolationKind::BelowMinimum,
                format!("\"{field}\" must be greater than or equal to 0"),
            ));
            None
        }
    }
}

fn text(field: Field, value: &Value, violations: &mut Vec<Violation>) -> Option<String> {
    match value {
        Value::String(raw) if raw.is_empty() => {
            violations.push(Violation::new(
                field.key(),
                ViolationKind::EmptyString,
                format!("\"{field}\" is not allowed to be empty"),
            ));
            None
        }
        Value::String(raw) => Some(raw.clone()),
        _ => {
            violations.push(Violation::new(
                field.key(),
                ViolationKind::NotAString,
                format!("\"{field}\" must be a string"),
            ));
            None
        }
    }
}

fn boolean(field: Field, value: &Value, violations: &mut Vec<Violation>) -> Option<bool> {
    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    };

    if parsed.is_none() {
        violations.push(Violation::new(
            field.key(),
            ViolationKind::NotABoolean,
            format!("\"{field}\" must be a boolean"),
        ));
    }
    parsed
}

fn unknown_option(field: Field, options: &[&str]) -> Violation {
    Violation::new(
        field.key(),
        ViolationKind::UnknownOption,
        format!("\"{field}\" must be one of [{}]", options.join(", ")),
    )
}
