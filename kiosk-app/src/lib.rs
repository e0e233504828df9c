pub mod app_config;
pub mod error;
pub mod input;
pub mod kiosk;

pub use error::KioskError;
pub use input::{ConsoleInput, Selection};
pub use kiosk::Kiosk;
