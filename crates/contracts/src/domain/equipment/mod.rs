pub mod aggregate;
pub mod filters;
pub mod state;

pub use aggregate::{CategorySpecs, Equipment, EquipmentCategory, IntakeEvent, NewEquipment};
pub use filters::{EquipmentFilters, SearchResponse};
pub use state::EquipmentState;

/// Conventional intake status label used by the legacy backend for a unit
/// entering repair custody.
pub const ESTADO_EN_PROCESO: &str = "en proceso de reparacion";

/// Conventional status label for a delivered unit.
pub const ESTADO_ENTREGADO: &str = "entregado";
