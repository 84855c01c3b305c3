use serde::{Deserialize, Serialize};
use std::fmt;

use super::country::{classify, CountryClass};

/// Named inputs accepted by the engine, in the order benefits ask for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Income,
    Age,
    LivingCountry,
    LegalStatus,
    YearsInCanadaSince18,
    MaritalStatus,
    PartnerReceivingOas,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Income,
        Field::Age,
        Field::LivingCountry,
        Field::LegalStatus,
        Field::YearsInCanadaSince18,
        Field::MaritalStatus,
        Field::PartnerReceivingOas,
    ];

    /// Wire name used in requests, `missingFields` and `allFields`.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Age => "age",
            Field::LivingCountry => "livingCountry",
            Field::LegalStatus => "legalStatus",
            Field::YearsInCanadaSince18 => "yearsInCanadaSince18",
            Field::MaritalStatus => "maritalStatus",
            Field::PartnerReceivingOas => "partnerReceivingOas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalStatus {
    #[serde(rename = "Canadian Citizen")]
    CanadianCitizen,
    #[serde(rename = "Permanent Resident")]
    PermanentResident,
    #[serde(rename = "Status Indian")]
    StatusIndian,
    #[serde(rename = "Temporary Resident")]
    TemporaryResident,
    #[serde(rename = "None of the above")]
    NoneOfTheAbove,
}

impl LegalStatus {
    pub const ALL: [LegalStatus; 5] = [
        LegalStatus::CanadianCitizen,
        LegalStatus::PermanentResident,
        LegalStatus::StatusIndian,
        LegalStatus::TemporaryResident,
        LegalStatus::NoneOfTheAbove,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LegalStatus::CanadianCitizen => "Canadian Citizen",
            LegalStatus::PermanentResident => "Permanent Resident",
            LegalStatus::StatusIndian => "Status Indian",
            LegalStatus::TemporaryResident => "Temporary Resident",
            LegalStatus::NoneOfTheAbove => "None of the above",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// Every status except "None of the above" grants access to the benefits.
    pub const fn is_citizen_like(self) -> bool {
        !matches!(self, LegalStatus::NoneOfTheAbove)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    #[serde(rename = "Common-law")]
    CommonLaw,
    Widowed,
    Divorced,
    #[serde(alias = "Seperated")]
    Separated,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 6] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::CommonLaw,
        MaritalStatus::Widowed,
        MaritalStatus::Divorced,
        MaritalStatus::Separated,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::CommonLaw => "Common-law",
            MaritalStatus::Widowed => "Widowed",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Separated => "Separated",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == "Seperated" {
            return Some(MaritalStatus::Separated);
        }
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    pub const fn is_partnered(self) -> bool {
        matches!(self, MaritalStatus::Married | MaritalStatus::CommonLaw)
    }
}

/// Validated, read-only facts for a single request. Absent facts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_status: Option<LegalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_in_canada_since_18: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_receiving_oas: Option<bool>,
}

impl FactSet {
    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Income => self.income.is_some(),
            Field::Age => self.age.is_some(),
            Field::LivingCountry => self.living_country.is_some(),
            Field::LegalStatus => self.legal_status.is_some(),
            Field::YearsInCanadaSince18 => self.years_in_canada_since_18.is_some(),
            Field::MaritalStatus => self.marital_status.is_some(),
            Field::PartnerReceivingOas => self.partner_receiving_oas.is_some(),
        }
    }

    /// Supplied fields in canonical order.
    pub fn supplied_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.is_present(*field))
            .collect()
    }

    pub fn country_class(&self) -> Option<CountryClass> {
        self.living_country.as_deref().map(classify)
    }

    pub fn citizen_like(&self) -> Option<bool> {
        self.legal_status.map(LegalStatus::is_citizen_like)
    }

    pub fn partnered(&self) -> bool {
        self.marital_status
            .map(MaritalStatus::is_partnered)
            .unwrap_or(false)
    }

    pub fn widowed(&self) -> bool {
        self.marital_status == Some(MaritalStatus::Widowed)
    }
}

/// The four benefits assessed for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Benefit {
    Oas,
    Gis,
    Allowance,
    AllowanceForSurvivor,
}

impl Benefit {
    pub const ALL: [Benefit; 4] = [
        Benefit::Oas,
        Benefit::Gis,
        Benefit::Allowance,
        Benefit::AllowanceForSurvivor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Benefit::Oas => "Old Age Security",
            Benefit::Gis => "Guaranteed Income Supplement",
            Benefit::Allowance => "Allowance",
            Benefit::AllowanceForSurvivor => "Allowance for the Survivor",
        }
    }
}

impl fmt::Display for Benefit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKind {
    #[serde(rename = "Eligible!")]
    Eligible,
    #[serde(rename = "Ineligible!")]
    Ineligible,
    #[serde(rename = "Conditionally eligible...")]
    Conditional,
    #[serde(rename = "Need more information...")]
    MoreInfo,
    #[serde(rename = "Request is invalid!")]
    Invalid,
}

impl ResultKind {
    pub const fn label(self) -> &'static str {
        match self {
            ResultKind::Eligible => "Eligible!",
            ResultKind::Ineligible => "Ineligible!",
            ResultKind::Conditional => "Conditionally eligible...",
            ResultKind::MoreInfo => "Need more information...",
            ResultKind::Invalid => "Request is invalid!",
        }
    }

    /// Eligible or conditionally eligible; the gate GIS applies to the OAS verdict.
    pub const fn is_favourable(self) -> bool {
        matches!(self, ResultKind::Eligible | ResultKind::Conditional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultReason {
    #[serde(rename = "You meet the criteria")]
    None,
    #[serde(rename = "Age does not meet requirement for this benefit")]
    Age,
    #[serde(rename = "Not enough years in Canada")]
    YearsInCanada,
    #[serde(rename = "Not a Canadian citizen")]
    Citizen,
    #[serde(rename = "Not in a country with a social agreement")]
    SocialAgreement,
    #[serde(rename = "Need more information...")]
    MoreInfo,
    #[serde(rename = "Not eligible for OAS")]
    Oas,
    #[serde(rename = "Income too high")]
    Income,
    #[serde(rename = "Your marital status does not meet the requirement for this benefit")]
    Marital,
    #[serde(rename = "Entered data is invalid")]
    Invalid,
}

/// Per-benefit outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub result: ResultKind,
    pub reason: ResultReason,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<Field>>,
}

impl Verdict {
    pub fn eligible(detail: impl Into<String>) -> Self {
        Self::decided(ResultKind::Eligible, ResultReason::None, detail)
    }

    pub fn ineligible(reason: ResultReason, detail: impl Into<String>) -> Self {
        Self::decided(ResultKind::Ineligible, reason, detail)
    }

    pub fn conditional(reason: ResultReason, detail: impl Into<String>) -> Self {
        Self::decided(ResultKind::Conditional, reason, detail)
    }

    pub fn needs_more_info(missing_fields: Vec<Field>) -> Self {
        Self {
            result: ResultKind::MoreInfo,
            reason: ResultReason::MoreInfo,
            detail: "Please answer the remaining questions to determine eligibility.".to_string(),
            missing_fields: Some(missing_fields),
        }
    }

    pub(crate) fn decided(
        result: ResultKind,
        reason: ResultReason,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            result,
            reason,
            detail: detail.into(),
            missing_fields: None,
        }
    }

    pub fn missing(&self) -> &[Field] {
        self.missing_fields.as_deref().unwrap_or(&[])
    }
}
