pub mod edit;
pub mod picker;

pub use edit::Edit;
pub use picker::Picker;
