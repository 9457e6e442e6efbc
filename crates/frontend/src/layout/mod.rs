pub mod cart_panel;
pub mod context;
pub mod navbar;
pub mod profile_selector;
