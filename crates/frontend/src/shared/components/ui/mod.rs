mod input;
mod select;
mod textarea;

pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
