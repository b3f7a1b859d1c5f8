use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, ProductId, ValueObject};

/// Categories used by the generated demo catalog.
pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Books", "Home & Garden", "Sports"];

/// Non-negative price, held in the smallest currency unit (cents).
///
/// On the wire a price is a plain decimal number (`129.99`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    /// Largest representable amount, kept well inside `f64`'s exact integer range.
    const MAX_CENTS: u64 = 1 << 52;

    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Tolerance for binary float noise when checking for whole cents.
    const CENT_EPSILON: f64 = 1e-6;

    /// Convert a decimal amount. Amounts finer than a cent are rejected.
    pub fn from_decimal(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if cents > Self::MAX_CENTS as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        if (scaled - cents).abs() > Self::CENT_EPSILON {
            return Err(DomainError::validation(
                "price must have at most two decimal places",
            ));
        }
        Ok(Self { cents: cents as u64 })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("'{s}' is not a number")))?;
        Self::from_decimal(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Customer rating on a 0.0–5.0 scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl ValueObject for Rating {}

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between 0 and {}, got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Pin `value` into range; for trusted, generated input.
    pub(crate) fn clamped(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// How the rating renders as five stars: whole stars, at most one half
    /// star (fraction >= 0.5), and the remaining empty stars.
    pub fn stars(&self) -> StarBreakdown {
        let full = self.0.floor() as u8;
        let half = u8::from(full < 5 && self.0.fract() >= 0.5);
        StarBreakdown {
            full,
            half,
            empty: 5 - full - half,
        }
    }
}

impl TryFrom<f64> for Rating {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Star rendering of a [`Rating`]; the three counts always add up to five.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Catalog product record.
///
/// Records are built once when the catalog snapshot is loaded and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
    pub rating: Rating,
    pub review_count: u32,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Case-insensitive substring match over name, description and category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::sequential(1),
            name: "Trail Runner".to_string(),
            description: "Lightweight shoe for rough terrain".to_string(),
            price: Price::from_cents(8999),
            category: "Sports".to_string(),
            image_url: "https://placehold.co/300x300?text=Product+1".to_string(),
            in_stock: true,
            rating: Rating::new(4.5).unwrap(),
            review_count: 12,
        }
    }

    #[test]
    fn price_parses_whole_cents() {
        assert_eq!("49.99".parse::<Price>().unwrap().cents(), 4999);
        assert_eq!("10".parse::<Price>().unwrap().cents(), 1000);
        assert_eq!("0.1".parse::<Price>().unwrap().cents(), 10);
        assert_eq!("129.990".parse::<Price>().unwrap().cents(), 12999);
        assert_eq!(" 150 ".parse::<Price>().unwrap(), Price::from_cents(15000));
    }

    #[test]
    fn price_rejects_sub_cent_amounts() {
        for bad in ["0.005", "10.004", "99.999"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(DomainError::Validation(_))),
                "expected {bad:?} to be rejected"
            );
        }
        assert!(Price::from_decimal(10.004).is_err());
    }

    #[test]
    fn price_rejects_malformed_input() {
        for bad in ["abc", "", "-1", "NaN", "inf", "1e300"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(DomainError::Validation(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(Price::from_cents(1005).to_string(), "10.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn rating_bounds_are_enforced() {
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
        assert!(Rating::new(5.1).is_err());
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(f64::NAN).is_err());
    }

    #[test]
    fn stars_split_into_full_half_and_empty() {
        let stars = |r: f64| Rating::new(r).unwrap().stars();
        assert_eq!(stars(4.5), StarBreakdown { full: 4, half: 1, empty: 0 });
        assert_eq!(stars(3.2), StarBreakdown { full: 3, half: 0, empty: 2 });
        assert_eq!(stars(5.0), StarBreakdown { full: 5, half: 0, empty: 0 });
        assert_eq!(stars(0.0), StarBreakdown { full: 0, half: 0, empty: 5 });
    }

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "prod-1");
        assert_eq!(json["price"], 89.99);
        assert_eq!(json["imageUrl"], "https://placehold.co/300x300?text=Product+1");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["rating"], 4.5);
        assert_eq!(json["reviewCount"], 12);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn deserializing_rejects_out_of_range_values() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["rating"] = serde_json::json!(7.0);
        assert!(serde_json::from_value::<Product>(json.clone()).is_err());

        json["rating"] = serde_json::json!(4.0);
        json["price"] = serde_json::json!(-3.5);
        assert!(serde_json::from_value::<Product>(json).is_err());
    }

    #[test]
    fn search_matches_any_text_field() {
        let p = sample();
        assert!(p.matches_search("trail"));
        assert!(p.matches_search("rough terrain"));
        assert!(p.matches_search("sports"));
        assert!(!p.matches_search("electronics"));
    }

    #[test]
    fn identity_is_the_product_id() {
        let a = sample();
        let mut b = sample();
        b.name = "Renamed".to_string();
        assert!(a.same_identity_as(&b));
        assert_ne!(a, b);
    }
}
