use serde::{Deserialize, Serialize};

use super::domain::{Benefit, Field, Verdict};

/// Which benefits contribute missing fields to `allFields`.
///
/// `Observed` leaves the Allowance for the Survivor out of the union, matching
/// the report clients already consume. `AllBenefits` includes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldScope {
    #[default]
    Observed,
    AllBenefits,
}

impl FieldScope {
    pub fn includes(self, benefit: Benefit) -> bool {
        match self {
            FieldScope::Observed => benefit != Benefit::AllowanceForSurvivor,
            FieldScope::AllBenefits => true,
        }
    }
}

/// Combined outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub oas: Verdict,
    pub gis: Verdict,
    pub allowance: Verdict,
    pub afs: Verdict,
    pub all_fields: Vec<Field>,
}

impl EligibilityReport {
    pub(crate) fn assemble(
        supplied: Vec<Field>,
        scope: FieldScope,
        [oas, gis, allowance, afs]: [Verdict; 4],
    ) -> Self {
        let mut report = Self {
            oas,
            gis,
            allowance,
            afs,
            all_fields: Vec::new(),
        };
        report.all_fields = report.field_union(supplied, scope);
        report
    }

    pub fn verdict(&self, benefit: Benefit) -> &Verdict {
        match benefit {
            Benefit::Oas => &self.oas,
            Benefit::Gis => &self.gis,
            Benefit::Allowance => &self.allowance,
            Benefit::AllowanceForSurvivor => &self.afs,
        }
    }

    pub fn verdicts(&self) -> impl Iterator<Item = (Benefit, &Verdict)> {
        Benefit::ALL
            .into_iter()
            .map(move |benefit| (benefit, self.verdict(benefit)))
    }

    // Supplied fields first, then missing fields in benefit order, first occurrence wins.
    fn field_union(&self, supplied: Vec<Field>, scope: FieldScope) -> Vec<Field> {
        let missing = self
            .verdicts()
            .filter(|(benefit, _)| scope.includes(*benefit))
            .flat_map(|(_, verdict)| verdict.missing().iter().copied());

        let mut fields: Vec<Field> = Vec::new();
        for field in supplied.into_iter().chain(missing) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}
