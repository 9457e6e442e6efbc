//! REST client for the repair endpoints.

use contracts::domain::repair::{RepairHistory, RepairRecord, StartRepairRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Start a repair cycle: records the field diff, flips the equipment to
/// "en proceso de reparacion" and appends the intake event server-side.
pub async fn iniciar_reparacion(payload: &StartRepairRequest) -> Result<RepairRecord, String> {
    let response = Request::post(&api_url("/api/reparaciones/iniciar"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize repair: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to start repair: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Repair start failed with status: {}",
            response.status()
        ));
    }

    response
        .json::<RepairRecord>()
        .await
        .map_err(|e| format!("Failed to parse repair response: {}", e))
}

/// Repairs plus intake events for one equipment, as two uncorrelated lists.
/// Pairing into service cycles happens client-side.
pub async fn obtener_historial(id_equipo: i64) -> Result<RepairHistory, String> {
    let response = Request::get(&api_url("/api/reparaciones"))
        .query([("id_equipo", id_equipo.to_string())])
        .send()
        .await
        .map_err(|e| format!("Failed to fetch history: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "History fetch failed with status: {}",
            response.status()
        ));
    }

    response
        .json::<RepairHistory>()
        .await
        .map_err(|e| format!("Failed to parse history: {}", e))
}
