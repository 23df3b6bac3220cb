pub mod dropdown;
pub mod toast;

pub use toast::Toasts;
