use serde::{Deserialize, Serialize};

use super::{ESTADO_EN_PROCESO, EquipmentState};

/// Device category. The backend stores it as a lowercase Spanish string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Pc,
    Notebook,
    Impresora,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 3] = [
        EquipmentCategory::Pc,
        EquipmentCategory::Notebook,
        EquipmentCategory::Impresora,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Pc => "pc",
            EquipmentCategory::Notebook => "notebook",
            EquipmentCategory::Impresora => "impresora",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentCategory::Pc => "PC",
            EquipmentCategory::Notebook => "Notebook",
            EquipmentCategory::Impresora => "Impresora",
        }
    }

    /// PCs and notebooks share the computer attribute set.
    pub fn is_computer(&self) -> bool {
        matches!(self, EquipmentCategory::Pc | EquipmentCategory::Notebook)
    }
}

/// One moment the equipment entered (or left) repair custody. Embedded in the
/// equipment record, append-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeEvent {
    /// ISO-8601 timestamp.
    pub fecha: String,
    /// Conventionally `en proceso de reparacion` or `entregado`.
    pub estado: String,
}

impl IntakeEvent {
    pub fn entered_repair(&self) -> bool {
        self.estado == ESTADO_EN_PROCESO
    }
}

/// Equipment record as served by the backend: one flat document with a field
/// superset across all categories. [`Equipment::specs`] narrows it to the
/// category-specific variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub tipo_equipo: Option<EquipmentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_equipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_inv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_unidad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
    /// Free text; conventionally contains "entregado", "en proceso" or
    /// "espera". Classified through [`EquipmentState`], never re-parsed
    /// elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historial_ingresos: Vec<IntakeEvent>,

    // PC / notebook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver_win: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antivirus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub almacenamiento: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_almacenamiento: Option<String>,

    // Impresora
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conexion: Option<String>,

    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        rename = "updatedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

/// Category-specific attribute set, derived from the flat wire record at the
/// boundary so the rest of the code can match on a variant instead of probing
/// optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySpecs {
    Computer {
        usuario: Option<String>,
        windows: Option<String>,
        ver_win: Option<String>,
        antivirus: Option<String>,
        cpu: Option<String>,
        ram: Option<u32>,
        almacenamiento: Option<u32>,
        tipo_almacenamiento: Option<String>,
    },
    Printer {
        toner: Option<String>,
        drum: Option<String>,
        conexion: Option<String>,
    },
}

impl Equipment {
    pub fn state(&self) -> EquipmentState {
        EquipmentState::classify(self.estado.as_deref().unwrap_or(""))
    }

    /// Display name: equipment name if present, otherwise the category label.
    pub fn display_name(&self) -> String {
        match self.nombre_equipo.as_deref() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => self
                .tipo_equipo
                .map(|t| t.label().to_string())
                .unwrap_or_else(|| "Equipo".to_string()),
        }
    }

    pub fn specs(&self) -> Option<CategorySpecs> {
        match self.tipo_equipo? {
            EquipmentCategory::Pc | EquipmentCategory::Notebook => {
                Some(CategorySpecs::Computer {
                    usuario: self.nombre_usuario.clone(),
                    windows: self.windows.clone(),
                    ver_win: self.ver_win.clone(),
                    antivirus: self.antivirus.clone(),
                    cpu: self.cpu.clone(),
                    ram: self.ram,
                    almacenamiento: self.almacenamiento,
                    tipo_almacenamiento: self.tipo_almacenamiento.clone(),
                })
            }
            EquipmentCategory::Impresora => Some(CategorySpecs::Printer {
                toner: self.toner.clone(),
                drum: self.drum.clone(),
                conexion: self.conexion.clone(),
            }),
        }
    }
}

/// Creation payload. Always enters the inventory in repair, with one seeded
/// intake event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEquipment {
    pub tipo_equipo: EquipmentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_equipo: Option<String>,
    pub marca: String,
    pub modelo: String,
    pub serie: String,
    pub num_inv: String,
    pub ip: String,
    pub nombre_unidad: String,
    pub comentarios: String,
    pub estado: String,
    pub historial_ingresos: Vec<IntakeEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver_win: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antivirus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub almacenamiento: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_almacenamiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conexion: Option<String>,
}

impl NewEquipment {
    /// Seed a creation payload for the given category: status in repair and
    /// one intake event dated `now` (ISO-8601).
    pub fn seeded(tipo_equipo: EquipmentCategory, now_iso: String) -> Self {
        Self {
            tipo_equipo,
            nombre_equipo: None,
            marca: String::new(),
            modelo: String::new(),
            serie: String::new(),
            num_inv: String::new(),
            ip: String::new(),
            nombre_unidad: String::new(),
            comentarios: String::new(),
            estado: ESTADO_EN_PROCESO.to_string(),
            historial_ingresos: vec![IntakeEvent {
                fecha: now_iso,
                estado: ESTADO_EN_PROCESO.to_string(),
            }],
            windows: None,
            ver_win: None,
            antivirus: None,
            nombre_usuario: None,
            cpu: None,
            ram: None,
            almacenamiento: None,
            tipo_almacenamiento: None,
            toner: None,
            drum: None,
            conexion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_as_lowercase() {
        let json = serde_json::to_string(&EquipmentCategory::Impresora).unwrap();
        assert_eq!(json, "\"impresora\"");
        let back: EquipmentCategory = serde_json::from_str("\"notebook\"").unwrap();
        assert_eq!(back, EquipmentCategory::Notebook);
    }

    #[test]
    fn specs_narrow_by_category() {
        let mut eq = Equipment {
            id: 1,
            tipo_equipo: Some(EquipmentCategory::Impresora),
            toner: Some("TN-1060".to_string()),
            ..Default::default()
        };
        match eq.specs() {
            Some(CategorySpecs::Printer { toner, .. }) => {
                assert_eq!(toner.as_deref(), Some("TN-1060"))
            }
            other => panic!("expected printer specs, got {:?}", other),
        }

        eq.tipo_equipo = Some(EquipmentCategory::Pc);
        assert!(matches!(eq.specs(), Some(CategorySpecs::Computer { .. })));
    }

    #[test]
    fn seeded_payload_starts_in_repair() {
        let nuevo = NewEquipment::seeded(
            EquipmentCategory::Pc,
            "2024-01-05T10:00:00.000Z".to_string(),
        );
        assert_eq!(nuevo.estado, ESTADO_EN_PROCESO);
        assert_eq!(nuevo.historial_ingresos.len(), 1);
        assert!(nuevo.historial_ingresos[0].entered_repair());
    }
}
