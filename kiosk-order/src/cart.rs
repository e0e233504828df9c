use kiosk_catalog::MenuItem;
use crate::discount::DiscountType;
use crate::models::{OrderSummary, Receipt};

/// The customer's cart for the whole kiosk session.
///
/// An order is either empty or active (holding at least one item). Adding
/// makes it active; completing or cancelling empties it again.
#[derive(Debug, Clone, Default)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the cart
    pub fn add_item(&mut self, item: MenuItem) {
        tracing::info!(item = item.name(), price = item.price(), "Item added to cart");
        self.items.push(item);
    }

    /// Snapshot of the cart contents
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    /// Sum of all item prices; zero for an empty cart
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// Grouped view of the cart for checkout
    pub fn display_order_details(&self) -> Result<OrderSummary, OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(OrderSummary::from_items(&self.items))
    }

    /// Finalize with a discount and clear the cart.
    ///
    /// Emptiness is not re-checked here; the checkout flow only reaches this
    /// after `display_order_details` succeeded.
    pub fn complete_order(&mut self, discount: DiscountType) -> Receipt {
        let receipt = Receipt::new(std::mem::take(&mut self.items), discount);
        tracing::info!(
            order_id = %receipt.order_id,
            discount = ?receipt.discount,
            subtotal = receipt.subtotal,
            final_price = receipt.final_price,
            completed_at = %receipt.completed_at,
            "Order completed"
        );
        receipt
    }

    /// Transition: Active → Empty
    pub fn cancel_order(&mut self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::NothingToCancel);
        }
        let dropped = self.items.len();
        self.items.clear();
        tracing::info!(items = dropped, "Order cancelled");
        Ok(())
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("The cart is empty.")]
    EmptyCart,

    #[error("There is no order to cancel.")]
    NothingToCancel,
}
