use serde::{Deserialize, Serialize};

/// Non-equipment inventoriable item (router, projector, ...). No lifecycle:
/// misc objects are always eligible for a delivery receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiscObject {
    pub id: i64,
    pub nombre: String,
    pub unidad: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMiscObject {
    pub nombre: String,
    pub unidad: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMiscObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
}

/// Query-string filters for the misc-object listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscObjectFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buscar: Option<String>,
    #[serde(rename = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(rename = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    pub pagina: usize,
    pub limit: usize,
}

impl Default for MiscObjectFilters {
    fn default() -> Self {
        Self {
            unidad: None,
            buscar: None,
            fecha_inicio: None,
            fecha_fin: None,
            pagina: 1,
            limit: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub pagina: usize,
    #[serde(default, rename = "totalPaginas")]
    pub total_paginas: usize,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiscObjectsResponse {
    #[serde(default)]
    pub data: Vec<MiscObject>,
    #[serde(default)]
    pub paginacion: Pagination,
}
