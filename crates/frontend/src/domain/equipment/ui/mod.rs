pub mod card;
pub mod history_modal;
pub mod intake_button;
pub mod list;
pub mod register;
pub mod repair_modal;
