//! REST client for the misc-object catalog.

use contracts::domain::misc_object::{
    CreateMiscObject, MiscObject, MiscObjectFilters, MiscObjectsResponse, UpdateMiscObject,
};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::shared::api_utils::api_url;

/// Single-object envelope the write endpoints answer with.
#[derive(Debug, Deserialize)]
struct DataEnvelope {
    data: MiscObject,
}

fn query_pairs(filtros: &MiscObjectFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(unidad) = filtros.unidad.as_deref().filter(|s| !s.trim().is_empty()) {
        pairs.push(("unidad", unidad.to_string()));
    }
    if let Some(buscar) = filtros.buscar.as_deref().filter(|s| !s.trim().is_empty()) {
        pairs.push(("buscar", buscar.to_string()));
    }
    if let Some(inicio) = filtros.fecha_inicio.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("fechaInicio", inicio.to_string()));
    }
    if let Some(fin) = filtros.fecha_fin.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("fechaFin", fin.to_string()));
    }
    pairs.push(("pagina", filtros.pagina.to_string()));
    pairs.push(("limit", filtros.limit.to_string()));
    pairs
}

pub async fn obtener_objetos(filtros: &MiscObjectFilters) -> Result<MiscObjectsResponse, String> {
    let response = Request::get(&api_url("/api/objetos-varios"))
        .query(query_pairs(filtros))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch objects: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Objects fetch failed with status: {}",
            response.status()
        ));
    }

    response
        .json::<MiscObjectsResponse>()
        .await
        .map_err(|e| format!("Failed to parse objects response: {}", e))
}

pub async fn crear_objeto(objeto: &CreateMiscObject) -> Result<MiscObject, String> {
    let response = Request::post(&api_url("/api/objetos-varios"))
        .json(objeto)
        .map_err(|e| format!("Failed to serialize object: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create object: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Create failed with status: {}",
            response.status()
        ));
    }

    let envelope = response
        .json::<DataEnvelope>()
        .await
        .map_err(|e| format!("Failed to parse create response: {}", e))?;
    Ok(envelope.data)
}

pub async fn actualizar_objeto(id: i64, objeto: &UpdateMiscObject) -> Result<MiscObject, String> {
    let response = Request::put(&api_url(&format!("/api/objetos-varios/{}", id)))
        .json(objeto)
        .map_err(|e| format!("Failed to serialize object: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update object: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Update failed with status: {}",
            response.status()
        ));
    }

    let envelope = response
        .json::<DataEnvelope>()
        .await
        .map_err(|e| format!("Failed to parse update response: {}", e))?;
    Ok(envelope.data)
}

pub async fn eliminar_objeto(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/objetos-varios/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to delete object: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Delete failed with status: {}",
            response.status()
        ));
    }
    Ok(())
}
