use serde::{Deserialize, Serialize};

use super::{Equipment, EquipmentCategory};

fn skip_empty(value: &Option<String>) -> bool {
    match value {
        Some(v) => v.trim().is_empty(),
        None => true,
    }
}

/// Search payload for `POST /api/equipos/buscar`. Empty filters are omitted
/// from the body entirely; the backend treats absence as "no filter".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFilters {
    /// Absent means "all categories".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_equipo: Option<EquipmentCategory>,
    /// Free text over num_inv / serie / ip / nombre_equipo.
    #[serde(skip_serializing_if = "skip_empty")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub nombre_unidad: Option<String>,
    /// Single-day search sends the same date in both bounds.
    #[serde(rename = "fechaInicio", skip_serializing_if = "skip_empty")]
    pub fecha_inicio: Option<String>,
    #[serde(rename = "fechaFin", skip_serializing_if = "skip_empty")]
    pub fecha_fin: Option<String>,

    // PC / notebook
    #[serde(skip_serializing_if = "skip_empty")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub almacenamiento: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub tipo_almacenamiento: Option<String>,

    // Impresora
    #[serde(skip_serializing_if = "skip_empty")]
    pub toner: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub drum: Option<String>,
    #[serde(skip_serializing_if = "skip_empty")]
    pub conexion: Option<String>,

    pub pagina: usize,
    pub limit: usize,
}

impl Default for EquipmentFilters {
    fn default() -> Self {
        Self {
            tipo_equipo: None,
            query: None,
            marca: None,
            nombre_unidad: None,
            fecha_inicio: None,
            fecha_fin: None,
            ram: None,
            cpu: None,
            almacenamiento: None,
            tipo_almacenamiento: None,
            toner: None,
            drum: None,
            conexion: None,
            pagina: 1,
            limit: 6,
        }
    }
}

/// Paginated search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub equipos: Vec<Equipment>,
    #[serde(default, rename = "totalPaginas")]
    pub total_paginas: usize,
    #[serde(default, rename = "paginaActual")]
    pub pagina_actual: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_are_omitted_from_the_body() {
        let filtros = EquipmentFilters {
            marca: Some("  ".to_string()),
            query: Some("SRV-01".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filtros).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("marca"));
        assert!(!obj.contains_key("tipo_equipo"));
        assert!(!obj.contains_key("toner"));
        assert_eq!(obj["query"], "SRV-01");
        assert_eq!(obj["pagina"], 1);
        assert_eq!(obj["limit"], 6);
    }

    #[test]
    fn date_bounds_use_backend_names() {
        let filtros = EquipmentFilters {
            fecha_inicio: Some("2024-03-01".to_string()),
            fecha_fin: Some("2024-03-15".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filtros).unwrap();
        assert_eq!(json["fechaInicio"], "2024-03-01");
        assert_eq!(json["fechaFin"], "2024-03-15");
    }
}
