pub mod equipment;
pub mod misc_object;
pub mod receipt;
pub mod repair;
