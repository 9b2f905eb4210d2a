use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a stored product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// A fresh time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Always positive, with two fractional digits
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product from validated input with fresh id and timestamps.
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the supplied fields and bumps `updated_at`.
    pub fn apply_changes(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated input for a new product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

/// Validated partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Product {
        Product::new(NewProduct {
            name: "Huevito Kinder".to_string(),
            price: dec!(9.30),
        })
    }

    #[test]
    fn test_new_product_has_matching_timestamps() {
        let product = sample();
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_changes_keeps_unsupplied_fields() {
        let mut product = sample();
        let created_at = product.created_at;

        product.apply_changes(ProductChanges {
            name: None,
            price: Some(dec!(12.50)),
        });

        assert_eq!(product.name, "Huevito Kinder");
        assert_eq!(product.price.to_string(), "12.50");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn test_product_id_parses_and_displays() {
        let id = ProductId::generate();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("24".parse::<ProductId>().is_err());
    }
}
