pub mod discount;
pub mod models;
pub mod cart;

pub use discount::DiscountType;
pub use models::{OrderLine, OrderSummary, Receipt};
pub use cart::{Order, OrderError};
