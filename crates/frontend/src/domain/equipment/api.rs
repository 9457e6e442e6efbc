//! REST client for the equipment endpoints.

use std::collections::BTreeMap;

use contracts::domain::equipment::{Equipment, EquipmentFilters, NewEquipment, SearchResponse};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::api_url;

/// Filtered, paginated search. Empty filter fields are omitted from the body.
pub async fn buscar_equipos(filtros: &EquipmentFilters) -> Result<SearchResponse, String> {
    let response = Request::post(&api_url("/api/equipos/buscar"))
        .json(filtros)
        .map_err(|e| format!("Failed to serialize filters: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to search equipment: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed with status: {}", response.status()));
    }

    response
        .json::<SearchResponse>()
        .await
        .map_err(|e| format!("Failed to parse search response: {}", e))
}

pub async fn crear_equipo(equipo: &NewEquipment) -> Result<(), String> {
    let response = Request::post(&api_url("/api/equipos/crear"))
        .json(equipo)
        .map_err(|e| format!("Failed to serialize equipment: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create equipment: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Create failed with status: {}",
            response.status()
        ));
    }
    Ok(())
}

pub async fn eliminar_equipo(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/equipos/eliminar/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to delete equipment: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Delete failed with status: {}",
            response.status()
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    id: i64,
    changes: &'a BTreeMap<String, String>,
}

/// Partial field update, `PUT /api/equipos/actualizar` with `{ id, changes }`.
/// Used for the delivery transition (`estado` back to "entregado") among
/// other direct edits.
pub async fn actualizar_campos(id: i64, changes: &BTreeMap<String, String>) -> Result<(), String> {
    let response = Request::put(&api_url("/api/equipos/actualizar"))
        .json(&UpdateBody { id, changes })
        .map_err(|e| format!("Failed to serialize update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update equipment: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Update failed with status: {}",
            response.status()
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct IntakeBody<'a> {
    estado: &'a str,
}

/// Append an intake event and move the equipment into the given state.
pub async fn registrar_ingreso(id: i64, estado: &str) -> Result<Equipment, String> {
    let response = Request::post(&api_url(&format!("/api/equipos/ingreso/{}", id)))
        .json(&IntakeBody { estado })
        .map_err(|e| format!("Failed to serialize intake: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to register intake: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Intake failed with status: {}",
            response.status()
        ));
    }

    response
        .json::<Equipment>()
        .await
        .map_err(|e| format!("Failed to parse intake response: {}", e))
}

#[derive(Debug, Deserialize)]
struct Unidad {
    nombre_u: String,
}

/// Organizational unit names for the search and registration selects.
pub async fn obtener_unidades() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/api/unidades"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch units: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Units fetch failed with status: {}",
            response.status()
        ));
    }

    let unidades = response
        .json::<Vec<Unidad>>()
        .await
        .map_err(|e| format!("Failed to parse units: {}", e))?;
    Ok(unidades.into_iter().map(|u| u.nombre_u).collect())
}
