use serde::{Deserialize, Serialize};

/// Discount tiers offered at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Veteran,
    Military,
    Student,
    None,
}

impl DiscountType {
    /// Every tier, in code order
    pub fn all() -> [DiscountType; 4] {
        [
            DiscountType::Veteran,
            DiscountType::Military,
            DiscountType::Student,
            DiscountType::None,
        ]
    }

    /// Look up a tier by its menu code. Unknown codes get no discount.
    pub fn from_code(code: i64) -> Self {
        Self::all()
            .into_iter()
            .find(|d| i64::from(d.code()) == code)
            .unwrap_or(DiscountType::None)
    }

    pub fn code(&self) -> u8 {
        match self {
            DiscountType::Veteran => 1,
            DiscountType::Military => 2,
            DiscountType::Student => 3,
            DiscountType::None => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Veteran => "Veteran",
            DiscountType::Military => "Military",
            DiscountType::Student => "Student",
            DiscountType::None => "General",
        }
    }

    /// Discount rate as a fraction (0.10 for 10%)
    pub fn rate(&self) -> f64 {
        match self {
            DiscountType::Veteran => 0.10,
            DiscountType::Military => 0.05,
            DiscountType::Student => 0.03,
            DiscountType::None => 0.0,
        }
    }

    /// Price after the discount. Not rounded; rounding happens at display.
    pub fn calculate_discounted_price(&self, price: f64) -> f64 {
        price * (1.0 - self.rate())
    }

    /// The discount prompt listing, one tier per line
    pub fn display_options() -> String {
        let mut out = String::from("Please select a discount type.\n");
        for discount in Self::all() {
            out.push_str(&format!(
                "{}. {} : {:.0}%\n",
                discount.code(),
                discount.label(),
                discount.rate() * 100.0
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_codes() {
        assert_eq!(DiscountType::from_code(1), DiscountType::Veteran);
        assert_eq!(DiscountType::from_code(2), DiscountType::Military);
        assert_eq!(DiscountType::from_code(3), DiscountType::Student);
        assert_eq!(DiscountType::from_code(4), DiscountType::None);
    }

    #[test]
    fn test_from_code_is_total() {
        for code in [-1, 0, 5, 99, i64::MAX, i64::MIN] {
            assert_eq!(DiscountType::from_code(code), DiscountType::None);
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for discount in DiscountType::all() {
            assert_eq!(DiscountType::from_code(discount.code().into()), discount);
        }
    }

    #[test]
    fn test_discounted_price() {
        assert!((DiscountType::Veteran.calculate_discounted_price(100.0) - 90.0).abs() < 1e-9);
        assert!((DiscountType::Student.calculate_discounted_price(12.3) - 11.931).abs() < 1e-9);
        assert_eq!(DiscountType::None.calculate_discounted_price(12.3), 12.3);
    }

    #[test]
    fn test_display_options_uses_whole_percentages() {
        let listing = DiscountType::display_options();
        assert!(listing.contains("1. Veteran : 10%"));
        assert!(listing.contains("2. Military : 5%"));
        assert!(listing.contains("3. Student : 3%"));
        assert!(listing.contains("4. General : 0%"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DiscountType::Veteran).unwrap();
        assert_eq!(json, "\"VETERAN\"");
        let parsed: DiscountType = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(parsed, DiscountType::Student);
    }
}
