//! Delivery-receipt ("acta") generation. Both endpoints answer with a binary
//! .docx that is handed straight to the browser as a download.

use contracts::domain::receipt::{ReceiptItems, StaffProfile};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;
use crate::shared::download::{download_bytes, filename_from_content_disposition};

async fn save_document(response: Response, fallback_name: &str) -> Result<(), String> {
    let filename = response
        .headers()
        .get("content-disposition")
        .as_deref()
        .and_then(filename_from_content_disposition)
        .unwrap_or_else(|| fallback_name.to_string());

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read document body: {}", e))?;

    download_bytes(&bytes, &filename)
}

/// Acta for a single equipment, signed by the given staff member.
pub async fn generar_acta(id_equipo: i64, perfil: &StaffProfile) -> Result<(), String> {
    let response = Request::get(&api_url(&format!(
        "/api/actas/acta-entrega/{}",
        id_equipo
    )))
    .query([
        ("encargado", perfil.nombre.as_str()),
        ("cargo", perfil.cargo.as_str()),
    ])
    .send()
    .await
    .map_err(|e| format!("Failed to generate receipt: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Receipt generation failed with status: {}",
            response.status()
        ));
    }

    save_document(response, &format!("acta-entrega-{}.docx", id_equipo)).await
}

/// Combined acta for the cart contents.
pub async fn generar_acta_multiple(
    items: &ReceiptItems,
    perfil: &StaffProfile,
) -> Result<(), String> {
    let response = Request::post(&api_url("/api/actas/acta-entrega-multiple"))
        .query([
            ("encargado", perfil.nombre.as_str()),
            ("cargo", perfil.cargo.as_str()),
        ])
        .json(items)
        .map_err(|e| format!("Failed to serialize receipt items: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to generate receipt: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Receipt generation failed with status: {}",
            response.status()
        ));
    }

    save_document(response, "acta-entrega-multiple.docx").await
}
