use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use kiosk_catalog::{format_price, MenuItem};
use std::fmt;
use crate::discount::DiscountType;

/// One group of identical items in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Display string of the item, used as the grouping key
    pub label: String,
    pub quantity: usize,
}

/// Cart contents as shown before checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: f64,
}

impl OrderSummary {
    /// Group items by display string, keeping first-seen order
    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut lines: Vec<OrderLine> = Vec::new();
        for item in items {
            let label = item.to_string();
            match lines.iter_mut().find(|line| line.label == label) {
                Some(line) => line.quantity += 1,
                None => lines.push(OrderLine { label, quantity: 1 }),
            }
        }

        Self {
            lines,
            total: items.iter().map(MenuItem::price).sum(),
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Would you like to place the following order?")?;
        writeln!(f, "[ Orders ]")?;
        for line in &self.lines {
            writeln!(f, "{} - {}", line.label, line.quantity)?;
        }
        writeln!(f, "[ Total ]")?;
        writeln!(f, "{}", format_price(self.total))
    }
}

/// Record of a completed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub items: Vec<MenuItem>,
    pub subtotal: f64,
    pub discount: DiscountType,
    pub final_price: f64,
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(items: Vec<MenuItem>, discount: DiscountType) -> Self {
        let subtotal: f64 = items.iter().map(MenuItem::price).sum();
        Self {
            order_id: Uuid::new_v4(),
            items,
            subtotal,
            discount,
            final_price: discount.calculate_discounted_price(subtotal),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_groups_identical_items() {
        let burger = MenuItem::new("ShackBurger", 6.9, "Cheeseburger");
        let soda = MenuItem::new("Fountain Soda", 2.7, "Cola");
        let summary = OrderSummary::from_items(&[burger.clone(), soda.clone(), burger.clone()]);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0], OrderLine { label: burger.to_string(), quantity: 2 });
        assert_eq!(summary.lines[1], OrderLine { label: soda.to_string(), quantity: 1 });
        assert!((summary.total - 16.5).abs() < 1e-9);
    }

    #[test]
    fn test_summary_keeps_differently_described_items_apart() {
        let a = MenuItem::new("Floats", 5.9, "Root beer");
        let b = MenuItem::new("Floats", 5.9, "Purple cow");
        let summary = OrderSummary::from_items(&[a, b]);
        assert_eq!(summary.lines.len(), 2);
    }

    #[test]
    fn test_summary_rendering() {
        let summary = OrderSummary::from_items(&[MenuItem::new("Hamburger", 5.4, "Beef")]);
        let text = summary.to_string();
        assert!(text.contains("[ Orders ]\nHamburger | W 5.4 | Beef - 1\n"));
        assert!(text.ends_with("[ Total ]\nW 5.4\n"));
    }

    #[test]
    fn test_receipt_is_stamped_at_completion() {
        let before = Utc::now();
        let receipt = Receipt::new(vec![MenuItem::new("Hamburger", 5.4, "Beef")], DiscountType::None);
        let after = Utc::now();

        assert!(receipt.completed_at >= before && receipt.completed_at <= after);
        let other = Receipt::new(Vec::new(), DiscountType::None);
        assert_ne!(receipt.order_id, other.order_id);
    }

    #[test]
    fn test_receipt_applies_discount() {
        let receipt = Receipt::new(
            vec![
                MenuItem::new("ShackBurger", 6.9, "Cheeseburger"),
                MenuItem::new("Hamburger", 5.4, "Beef"),
            ],
            DiscountType::Student,
        );
        assert!((receipt.subtotal - 12.3).abs() < 1e-9);
        assert!((receipt.final_price - 11.931).abs() < 1e-9);
        assert_eq!(format_price(receipt.final_price), "W 11.9");
        assert_eq!(receipt.discount, DiscountType::Student);
    }
}
