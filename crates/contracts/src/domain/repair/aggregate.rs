use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::equipment::IntakeEvent;

/// One attribute modified during a repair, raw values as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub antes: String,
    pub despues: String,
}

/// Outcome of one completed repair cycle. Created once by
/// `POST /api/reparaciones/iniciar`, immutable afterward; `createdAt` doubles
/// as the cycle's delivery time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub id_equipo: i64,
    /// Technician identifier.
    #[serde(default)]
    pub rut: Option<String>,
    /// Free-text technician note.
    #[serde(default)]
    pub obs: Option<String>,
    #[serde(default)]
    pub cambios: BTreeMap<String, FieldChange>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for starting (and in the same call completing) a repair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRepairRequest {
    pub id_equipo: i64,
    pub cambios: BTreeMap<String, FieldChange>,
    pub obs: String,
    pub rut: String,
}

/// Combined history response: repairs and intake events come from the same
/// endpoint but are two independently ordered lists with no correlation key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepairHistory {
    #[serde(default)]
    pub historial_reparaciones: Vec<RepairRecord>,
    #[serde(default)]
    pub historial_ingresos: Vec<IntakeEvent>,
}
