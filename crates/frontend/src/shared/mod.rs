pub mod api_utils;
pub mod cart;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod download;
pub mod error;
pub mod modal;
