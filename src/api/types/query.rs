//! Query parameters shared by the data endpoints

use serde::Deserialize;

use crate::domain::generator::SeedValue;

/// Raw query string values; parsing and validation happen in the handlers
/// so error messages can quote the input as given
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataQuery {
    pub count: Option<String>,
    pub locale: Option<String>,
    pub seed: Option<String>,
    /// Card issuer on `/payment/card`, text unit on `/lorem`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub format: Option<String>,
    pub years: Option<String>,
    #[serde(rename = "refDate")]
    pub ref_date: Option<String>,
    pub num: Option<String>,
    pub context: Option<String>,
}

impl DataQuery {
    pub fn seed_value(&self) -> Option<SeedValue> {
        self.seed.as_deref().map(SeedValue::from)
    }
}
