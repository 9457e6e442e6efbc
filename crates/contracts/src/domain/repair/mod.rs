pub mod aggregate;
pub mod diff;
pub mod history;

pub use aggregate::{FieldChange, RepairHistory, RepairRecord, StartRepairRequest};
pub use diff::{compute_changes, validate_submission};
pub use history::reconcile;
pub use history::{ElapsedDays, ReconciledHistory, ServiceCycle};
