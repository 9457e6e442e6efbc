//! Minimal-change computation for the repair form.
//!
//! The technician edits a copy of the equipment's attributes; only fields
//! whose normalized value actually differs from the snapshot taken when the
//! modal opened are persisted into the repair record's changes map.

use std::collections::BTreeMap;

use super::FieldChange;
use crate::domain::equipment::Equipment;

/// Normalization applied before comparing: trim, absent counts as empty.
fn normalize(value: &str) -> &str {
    value.trim()
}

/// Compare an edited form snapshot against the original one; emit raw
/// before/after pairs for the fields that differ after normalization.
pub fn compute_changes(
    original: &BTreeMap<String, String>,
    edited: &BTreeMap<String, String>,
) -> BTreeMap<String, FieldChange> {
    let mut cambios = BTreeMap::new();
    for (campo, nuevo) in edited {
        let antes = original.get(campo).map(String::as_str).unwrap_or("");
        if normalize(antes) != normalize(nuevo) {
            cambios.insert(
                campo.clone(),
                FieldChange {
                    antes: antes.to_string(),
                    despues: nuevo.clone(),
                },
            );
        }
    }
    cambios
}

/// Client-side gate: an empty change set with an empty note would create a
/// no-op repair record, so it is rejected before any network call.
pub fn validate_submission(
    cambios: &BTreeMap<String, FieldChange>,
    obs: &str,
) -> Result<(), &'static str> {
    if cambios.is_empty() && obs.trim().is_empty() {
        return Err("No hay cambios ni observaciones para registrar.");
    }
    Ok(())
}

fn put(campos: &mut BTreeMap<String, String>, nombre: &str, valor: &Option<String>) {
    campos.insert(nombre.to_string(), valor.clone().unwrap_or_default());
}

fn put_num(campos: &mut BTreeMap<String, String>, nombre: &str, valor: Option<u32>) {
    campos.insert(
        nombre.to_string(),
        valor.map(|v| v.to_string()).unwrap_or_default(),
    );
}

impl Equipment {
    /// Editable fields as a name → value snapshot, the shape both sides of
    /// [`compute_changes`] use. Category-specific fields are included only
    /// for the matching category.
    pub fn field_snapshot(&self) -> BTreeMap<String, String> {
        let mut campos = BTreeMap::new();

        put(&mut campos, "marca", &self.marca);
        put(&mut campos, "modelo", &self.modelo);
        put(&mut campos, "serie", &self.serie);
        put(&mut campos, "num_inv", &self.num_inv);
        put(&mut campos, "ip", &self.ip);

        match self.tipo_equipo {
            Some(t) if t.is_computer() => {
                put(&mut campos, "nombre_equipo", &self.nombre_equipo);
                put(&mut campos, "nombre_usuario", &self.nombre_usuario);
                put(&mut campos, "windows", &self.windows);
                put(&mut campos, "ver_win", &self.ver_win);
                put(&mut campos, "antivirus", &self.antivirus);
                put(&mut campos, "cpu", &self.cpu);
                put_num(&mut campos, "ram", self.ram);
                put_num(&mut campos, "almacenamiento", self.almacenamiento);
                put(&mut campos, "tipo_almacenamiento", &self.tipo_almacenamiento);
            }
            Some(_) => {
                put(&mut campos, "toner", &self.toner);
                put(&mut campos, "drum", &self.drum);
                put(&mut campos, "conexion", &self.conexion);
            }
            None => {}
        }

        campos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::EquipmentCategory;

    fn snapshot(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn trimmed_equal_values_are_not_changes() {
        let original = snapshot(&[("marca", "HP")]);
        let edited = snapshot(&[("marca", "HP "), ("modelo", "X")]);
        let cambios = compute_changes(&original, &edited);
        assert_eq!(cambios.len(), 1);
        let cambio = &cambios["modelo"];
        assert_eq!(cambio.antes, "");
        assert_eq!(cambio.despues, "X");
    }

    #[test]
    fn raw_values_survive_into_the_change_pair() {
        let original = snapshot(&[("ip", "10.0.0.1")]);
        let edited = snapshot(&[("ip", " 10.0.0.9 ")]);
        let cambios = compute_changes(&original, &edited);
        assert_eq!(cambios["ip"].antes, "10.0.0.1");
        assert_eq!(cambios["ip"].despues, " 10.0.0.9 ");
    }

    #[test]
    fn empty_changes_and_empty_note_are_rejected() {
        let vacios = BTreeMap::new();
        assert!(validate_submission(&vacios, "   ").is_err());
        assert!(validate_submission(&vacios, "se limpió el ventilador").is_ok());

        let con_cambios = compute_changes(
            &snapshot(&[("marca", "HP")]),
            &snapshot(&[("marca", "Dell")]),
        );
        assert!(validate_submission(&con_cambios, "").is_ok());
    }

    #[test]
    fn snapshot_includes_only_matching_category_fields() {
        let eq = Equipment {
            id: 7,
            tipo_equipo: Some(EquipmentCategory::Impresora),
            marca: Some("Brother".to_string()),
            toner: Some("TN-1060".to_string()),
            cpu: Some("i5".to_string()), // stale computer field on a printer
            ..Default::default()
        };
        let campos = eq.field_snapshot();
        assert_eq!(campos["marca"], "Brother");
        assert_eq!(campos["toner"], "TN-1060");
        assert!(!campos.contains_key("cpu"));
    }

    #[test]
    fn computer_snapshot_mixes_text_and_numeric_fields() {
        let eq = Equipment {
            id: 3,
            tipo_equipo: Some(EquipmentCategory::Notebook),
            cpu: Some("i7".to_string()),
            ram: Some(16),
            almacenamiento: Some(512),
            tipo_almacenamiento: Some("SSD".to_string()),
            ..Default::default()
        };
        let campos = eq.field_snapshot();
        assert_eq!(campos["cpu"], "i7");
        assert_eq!(campos["ram"], "16");
        assert_eq!(campos["almacenamiento"], "512");
        assert_eq!(campos["tipo_almacenamiento"], "SSD");
    }

    #[test]
    fn numeric_fields_compare_as_text() {
        let eq = Equipment {
            id: 1,
            tipo_equipo: Some(EquipmentCategory::Pc),
            ram: Some(8),
            ..Default::default()
        };
        let original = eq.field_snapshot();
        let mut edited = original.clone();
        edited.insert("ram".to_string(), "16".to_string());
        let cambios = compute_changes(&original, &edited);
        assert_eq!(cambios["ram"].antes, "8");
        assert_eq!(cambios["ram"].despues, "16");
    }
}
