use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency literal printed in front of every price
pub const CURRENCY: &str = "W";

/// Render a price the way the kiosk shows it, e.g. `W 6.9`.
///
/// Rounds half-up on the shortest decimal form of the value, so 3.15 shows
/// as `W 3.2` even though the nearest double sits just below 3.15.
pub fn format_price(price: f64) -> String {
    format!("{} {}", CURRENCY, round_one_decimal(price))
}

fn round_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // `Display` for f64 gives the shortest round-trip digits without exponent
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut frac = frac_part.bytes();
    let tenths = frac.next().unwrap_or(b'0');
    let round_up = frac.next().is_some_and(|d| d >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, b'1');
                break;
            }
            idx -= 1;
            if digits[idx] == b'9' {
                digits[idx] = b'0';
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let (whole, tenth) = digits.split_at(digits.len() - 1);
    let sign = if value.is_sign_negative() && digits.iter().any(|d| *d != b'0') {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(tenth)
    )
}

/// A single sellable item on a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: f64,
    description: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, format_price(self.price), self.description)
    }
}
