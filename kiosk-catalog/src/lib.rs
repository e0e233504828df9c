pub mod item;
pub mod menu;
pub mod catalog;

pub use item::{format_price, MenuItem};
pub use menu::Menu;
pub use catalog::{default_catalog, validate_catalog, CatalogError};
