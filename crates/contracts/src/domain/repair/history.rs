//! Service-cycle reconstruction from the two-source repair history.
//!
//! The backend serves repairs and intake events as two independently ordered
//! lists with no shared correlation key. Pairing is positional: after keeping
//! only "entered repair" events and re-sorting them newest-first, the Nth
//! repair is matched with the Nth intake. This is a known approximation of
//! the source data model, not something the client can fix; when the counts
//! diverge the result carries a mismatch flag and unmatched repairs render an
//! unknown entry date.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use super::{FieldChange, RepairRecord};
use crate::domain::equipment::IntakeEvent;

/// One "came in → went out" turnaround, paired for display.
#[derive(Debug, Clone)]
pub struct ServiceCycle {
    pub id: String,
    pub obs: String,
    pub cambios: BTreeMap<String, FieldChange>,
    /// `None` when no intake event could be matched positionally.
    pub fecha_ingreso: Option<String>,
    /// The repair record's creation time, treated as delivery time.
    pub fecha_salida: String,
}

impl ServiceCycle {
    pub fn elapsed(&self) -> ElapsedDays {
        match &self.fecha_ingreso {
            Some(ingreso) => ElapsedDays::between(ingreso, &self.fecha_salida),
            None => ElapsedDays::Unknown,
        }
    }
}

/// Days a unit spent in custody, classified for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedDays {
    Days(i64),
    LessThanOneDay,
    /// Exit precedes entry; reported explicitly, never as a negative count.
    DateError,
    /// Either endpoint missing or unparseable.
    Unknown,
}

impl ElapsedDays {
    pub fn between(ingreso: &str, salida: &str) -> Self {
        let (Some(entrada), Some(salida)) = (parse_instant(ingreso), parse_instant(salida))
        else {
            return ElapsedDays::Unknown;
        };
        let segundos = (salida - entrada).num_seconds();
        if segundos < 0 {
            return ElapsedDays::DateError;
        }
        // Ceiling of the duration in whole days.
        let dias = (segundos + 86_399) / 86_400;
        if dias == 0 {
            ElapsedDays::LessThanOneDay
        } else {
            ElapsedDays::Days(dias)
        }
    }
}

impl fmt::Display for ElapsedDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElapsedDays::Days(n) => write!(f, "{} día(s)", n),
            ElapsedDays::LessThanOneDay => write!(f, "Menos de 1 día"),
            ElapsedDays::DateError => write!(f, "Error en fechas"),
            ElapsedDays::Unknown => write!(f, "—"),
        }
    }
}

/// Reconciled history, ready for display in served (newest-first) order.
#[derive(Debug, Clone, Default)]
pub struct ReconciledHistory {
    pub cycles: Vec<ServiceCycle>,
    /// Set when repair count ≠ qualifying intake count. Rendering stays
    /// best-effort; the UI only adds a note.
    pub pairing_mismatch: bool,
}

/// Pair repair records with qualifying intake events by position.
///
/// Repairs are kept in their served order (the backend sends them descending
/// by creation time, which is also the display order). The intake subset is
/// re-sorted descending by timestamp client-side rather than trusting the
/// backend's ordering, since the two lists originate from different storage
/// paths with different sort guarantees.
pub fn reconcile(repairs: &[RepairRecord], intakes: &[IntakeEvent]) -> ReconciledHistory {
    let mut ingresos: Vec<&IntakeEvent> =
        intakes.iter().filter(|i| i.entered_repair()).collect();
    ingresos.sort_by(|a, b| sort_key(&b.fecha).cmp(&sort_key(&a.fecha)));

    let cycles = repairs
        .iter()
        .enumerate()
        .map(|(idx, repa)| ServiceCycle {
            id: repa.id.clone(),
            obs: repa.obs.clone().unwrap_or_default(),
            cambios: repa.cambios.clone(),
            fecha_ingreso: ingresos.get(idx).map(|i| i.fecha.clone()),
            fecha_salida: repa.created_at.clone(),
        })
        .collect();

    ReconciledHistory {
        cycles,
        pairing_mismatch: repairs.len() != ingresos.len(),
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // Bare dates ("2024-01-05") count as midnight UTC.
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// Unparseable timestamps sort last (as the epoch) instead of aborting.
fn sort_key(value: &str) -> i64 {
    parse_instant(value).map(|dt| dt.timestamp()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::ESTADO_EN_PROCESO;

    fn ingreso(fecha: &str) -> IntakeEvent {
        IntakeEvent {
            fecha: fecha.to_string(),
            estado: ESTADO_EN_PROCESO.to_string(),
        }
    }

    fn entregado(fecha: &str) -> IntakeEvent {
        IntakeEvent {
            fecha: fecha.to_string(),
            estado: "entregado".to_string(),
        }
    }

    fn reparacion(id: &str, created_at: &str) -> RepairRecord {
        RepairRecord {
            id: id.to_string(),
            id_equipo: 1,
            rut: None,
            obs: None,
            cambios: BTreeMap::new(),
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn empty_inputs_give_empty_history() {
        let historia = reconcile(&[], &[]);
        assert!(historia.cycles.is_empty());
        assert!(!historia.pairing_mismatch);
    }

    #[test]
    fn single_cycle_pairs_and_counts_days() {
        let historia = reconcile(
            &[reparacion("r1", "2024-01-10")],
            &[ingreso("2024-01-05")],
        );
        assert_eq!(historia.cycles.len(), 1);
        let ciclo = &historia.cycles[0];
        assert_eq!(ciclo.fecha_ingreso.as_deref(), Some("2024-01-05"));
        assert_eq!(ciclo.fecha_salida, "2024-01-10");
        assert_eq!(ciclo.elapsed(), ElapsedDays::Days(5));
        assert_eq!(ciclo.elapsed().to_string(), "5 día(s)");
        assert!(!historia.pairing_mismatch);
    }

    #[test]
    fn delivered_markers_are_filtered_out() {
        let historia = reconcile(
            &[reparacion("r1", "2024-01-10")],
            &[entregado("2024-01-10"), ingreso("2024-01-05")],
        );
        assert_eq!(
            historia.cycles[0].fecha_ingreso.as_deref(),
            Some("2024-01-05")
        );
        assert!(!historia.pairing_mismatch);
    }

    #[test]
    fn intakes_are_resorted_descending_before_pairing() {
        // Backend delivered intakes oldest-first; pairing must still match
        // the newest repair with the newest intake.
        let historia = reconcile(
            &[
                reparacion("nuevo", "2024-03-20T12:00:00Z"),
                reparacion("viejo", "2024-01-10T12:00:00Z"),
            ],
            &[ingreso("2024-01-05"), ingreso("2024-03-15")],
        );
        assert_eq!(
            historia.cycles[0].fecha_ingreso.as_deref(),
            Some("2024-03-15")
        );
        assert_eq!(
            historia.cycles[1].fecha_ingreso.as_deref(),
            Some("2024-01-05")
        );
    }

    #[test]
    fn unmatched_repairs_get_unknown_entry_and_flag_mismatch() {
        let historia = reconcile(
            &[
                reparacion("r2", "2024-03-20"),
                reparacion("r1", "2024-01-10"),
            ],
            &[ingreso("2024-03-15")],
        );
        assert_eq!(
            historia.cycles[0].fecha_ingreso.as_deref(),
            Some("2024-03-15")
        );
        assert_eq!(historia.cycles[1].fecha_ingreso, None);
        assert_eq!(historia.cycles[1].elapsed(), ElapsedDays::Unknown);
        assert!(historia.pairing_mismatch);
    }

    #[test]
    fn exit_before_entry_is_a_date_error_not_negative() {
        assert_eq!(
            ElapsedDays::between("2024-01-10", "2024-01-05"),
            ElapsedDays::DateError
        );
        assert_eq!(
            ElapsedDays::between("2024-01-10", "2024-01-05").to_string(),
            "Error en fechas"
        );
    }

    #[test]
    fn same_day_is_less_than_one_day() {
        assert_eq!(
            ElapsedDays::between("2024-01-05T08:00:00Z", "2024-01-05T08:00:00Z"),
            ElapsedDays::LessThanOneDay
        );
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(
            ElapsedDays::between("2024-01-05T20:00:00Z", "2024-01-06T02:00:00Z"),
            ElapsedDays::Days(1)
        );
        assert_eq!(
            ElapsedDays::between("2024-01-05T08:00:00Z", "2024-01-06T09:00:00Z"),
            ElapsedDays::Days(2)
        );
    }

    #[test]
    fn unparseable_dates_report_unknown() {
        assert_eq!(
            ElapsedDays::between("no-es-fecha", "2024-01-05"),
            ElapsedDays::Unknown
        );
    }
}
