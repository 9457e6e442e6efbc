use serde::{Deserialize, Serialize};

/// Staff member certifying a delivery; printed on the acta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub nombre: String,
    pub cargo: String,
}

/// Item ids for one combined delivery receipt, partitioned by kind. Field
/// names match the acta endpoint's expected body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItems {
    #[serde(rename = "equiposIds")]
    pub equipos_ids: Vec<i64>,
    #[serde(rename = "objetosIds")]
    pub objetos_ids: Vec<i64>,
}

impl ReceiptItems {
    pub fn is_empty(&self) -> bool {
        self.equipos_ids.is_empty() && self.objetos_ids.is_empty()
    }
}
