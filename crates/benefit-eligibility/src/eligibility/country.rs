use serde::{Deserialize, Serialize};

/// How a country of residence affects the years-in-Canada requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryClass {
    Canada,
    Agreement,
    NoAgreement,
}

/// Countries with a social security agreement with Canada.
///
/// "Agreement" is the placeholder option offered by intake forms that do not
/// list every country individually.
const AGREEMENT_COUNTRIES: &[&str] = &[
    "Agreement",
    "Antigua and Barbuda",
    "Australia",
    "Austria",
    "Barbados",
    "Belgium",
    "Brazil",
    "Bulgaria",
    "Chile",
    "China",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Dominica",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Grenada",
    "Hungary",
    "Iceland",
    "India",
    "Ireland",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jersey and Guernsey",
    "Korea",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "North Macedonia",
    "Norway",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Serbia",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "Switzerland",
    "Trinidad and Tobago",
    "Turkey",
    "United Kingdom",
    "United States",
    "Uruguay",
];

/// Unrecognised names fall back to [`CountryClass::NoAgreement`].
pub fn classify(country: &str) -> CountryClass {
    if country == "Canada" {
        CountryClass::Canada
    } else if AGREEMENT_COUNTRIES.contains(&country) {
        CountryClass::Agreement
    } else {
        CountryClass::NoAgreement
    }
}
