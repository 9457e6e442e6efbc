//! Form state behind the search page, kept as plain data so building the
//! request payload stays testable.

use contracts::domain::equipment::{EquipmentCategory, EquipmentFilters};

/// Everything the search panel edits. `categoria: None` is the "todos" tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub categoria: Option<EquipmentCategory>,
    pub query: String,
    pub marca: String,
    pub unidad: String,
    /// Off: a single `fecha_inicio` searches that one day. On: both bounds.
    pub usar_rango: bool,
    pub fecha_inicio: String,
    pub fecha_fin: String,

    pub ram: String,
    pub cpu: String,
    pub almacenamiento: String,
    pub tipo_almacenamiento: String,

    pub toner: String,
    pub drum: String,
    pub conexion: String,

    pub pagina: usize,
    pub limit: usize,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            categoria: None,
            query: String::new(),
            marca: String::new(),
            unidad: String::new(),
            usar_rango: false,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            ram: String::new(),
            cpu: String::new(),
            almacenamiento: String::new(),
            tipo_almacenamiento: String::new(),
            toner: String::new(),
            drum: String::new(),
            conexion: String::new(),
            pagina: 1,
            limit: 6,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl FilterForm {
    /// Build the request payload. Category-specific fields are sent only for
    /// the matching category; in single-day mode the chosen date fills both
    /// bounds.
    pub fn to_filters(&self) -> EquipmentFilters {
        let mut filtros = EquipmentFilters {
            tipo_equipo: self.categoria,
            query: non_empty(&self.query),
            marca: non_empty(&self.marca),
            nombre_unidad: non_empty(&self.unidad),
            pagina: self.pagina,
            limit: self.limit,
            ..Default::default()
        };

        if self.usar_rango {
            filtros.fecha_inicio = non_empty(&self.fecha_inicio);
            filtros.fecha_fin = non_empty(&self.fecha_fin);
        } else if let Some(dia) = non_empty(&self.fecha_inicio) {
            filtros.fecha_inicio = Some(dia.clone());
            filtros.fecha_fin = Some(dia);
        }

        match self.categoria {
            Some(cat) if cat.is_computer() => {
                filtros.ram = non_empty(&self.ram);
                filtros.cpu = non_empty(&self.cpu);
                filtros.almacenamiento = non_empty(&self.almacenamiento);
                filtros.tipo_almacenamiento = non_empty(&self.tipo_almacenamiento);
            }
            Some(EquipmentCategory::Impresora) => {
                filtros.toner = non_empty(&self.toner);
                filtros.drum = non_empty(&self.drum);
                filtros.conexion = non_empty(&self.conexion);
            }
            _ => {}
        }

        filtros
    }

    /// Back to defaults except the page size, which the user chose.
    pub fn reset(&mut self) {
        *self = FilterForm {
            limit: self.limit,
            ..Default::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_mode_duplicates_the_date_into_both_bounds() {
        let form = FilterForm {
            fecha_inicio: "2024-03-01".to_string(),
            ..Default::default()
        };
        let filtros = form.to_filters();
        assert_eq!(filtros.fecha_inicio.as_deref(), Some("2024-03-01"));
        assert_eq!(filtros.fecha_fin.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn range_mode_sends_each_bound_as_entered() {
        let form = FilterForm {
            usar_rango: true,
            fecha_inicio: "2024-03-01".to_string(),
            fecha_fin: "2024-03-15".to_string(),
            ..Default::default()
        };
        let filtros = form.to_filters();
        assert_eq!(filtros.fecha_inicio.as_deref(), Some("2024-03-01"));
        assert_eq!(filtros.fecha_fin.as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn category_filters_only_apply_to_the_matching_category() {
        let mut form = FilterForm {
            categoria: Some(EquipmentCategory::Pc),
            ram: "8".to_string(),
            toner: "TN-1060".to_string(),
            ..Default::default()
        };
        let filtros = form.to_filters();
        assert_eq!(filtros.ram.as_deref(), Some("8"));
        assert!(filtros.toner.is_none());

        form.categoria = Some(EquipmentCategory::Impresora);
        let filtros = form.to_filters();
        assert!(filtros.ram.is_none());
        assert_eq!(filtros.toner.as_deref(), Some("TN-1060"));

        form.categoria = None;
        let filtros = form.to_filters();
        assert!(filtros.ram.is_none());
        assert!(filtros.toner.is_none());
    }

    #[test]
    fn blank_text_never_reaches_the_payload() {
        let form = FilterForm {
            query: "   ".to_string(),
            marca: " HP ".to_string(),
            ..Default::default()
        };
        let filtros = form.to_filters();
        assert!(filtros.query.is_none());
        assert_eq!(filtros.marca.as_deref(), Some("HP"));
    }

    #[test]
    fn reset_keeps_the_page_size() {
        let mut form = FilterForm {
            query: "x".to_string(),
            pagina: 4,
            limit: 20,
            ..Default::default()
        };
        form.reset();
        assert_eq!(form, FilterForm { limit: 20, ..Default::default() });
    }
}
