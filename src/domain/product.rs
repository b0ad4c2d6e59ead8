//! The product entity and the validated field set used to write it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::domain::validation::numeric_value;

/// Storage-assigned identifier.
pub type ProductId = i64;

/// A product row as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub availability: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrites the writable fields with `fields`.
    ///
    /// `availability` is only touched when the request carried it.
    pub fn apply(&mut self, fields: &ProductFields) {
        self.name = fields.name.clone();
        self.price = fields.price;
        self.quantity = fields.quantity;
        if let Some(availability) = fields.availability {
            self.availability = availability;
        }
    }
}

/// Writable product fields, extracted from a payload that already passed the product rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub availability: Option<bool>,
}

impl ProductFields {
    /// Reads the writable fields out of a request body.
    ///
    /// Returns `None` when a required field is missing or non-numeric, which cannot happen
    /// for a body accepted by [`crate::domain::validation::check_product_payload`].
    pub fn from_payload(body: &JsonValue) -> Option<Self> {
        let name = match body.get("name")? {
            JsonValue::String(s) => s.clone(),
            JsonValue::Null => return None,
            other => other.to_string(),
        };
        let price = numeric_value(body.get("price"))?;
        let quantity = numeric_value(body.get("quantity"))?;
        let availability = body.get("availability").and_then(availability_value);

        Some(Self {
            name,
            price,
            quantity,
            availability,
        })
    }

    /// Availability for a newly created row.
    pub fn availability_or_default(&self) -> bool {
        self.availability.unwrap_or(true)
    }
}

// Unrecognised values are ignored so the column default (or current value) stays in place.
fn availability_value(v: &JsonValue) -> Option<bool> {
    match v {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        JsonValue::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "t" | "1" => Some(true),
            "false" | "f" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_accepted_as_numbers() {
        let fields = ProductFields::from_payload(&json!({
            "name": "Mouse",
            "price": 220,
            "quantity": "23",
            "availability": true
        }))
        .unwrap();
        assert_eq!(fields.price, 220.0);
        assert_eq!(fields.quantity, 23.0);
        assert_eq!(fields.availability, Some(true));
    }

    #[test]
    fn missing_availability_defaults_to_available() {
        let fields = ProductFields::from_payload(&json!({
            "name": "Teclado",
            "price": 10.5,
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(fields.availability, None);
        assert!(fields.availability_or_default());
    }

    #[test]
    fn apply_keeps_availability_when_not_supplied() {
        let now = Utc::now();
        let mut product = Product {
            id: 1,
            name: "Old".to_string(),
            price: 1.0,
            quantity: 1.0,
            availability: false,
            created_at: now,
            updated_at: now,
        };
        product.apply(&ProductFields {
            name: "New".to_string(),
            price: 2.0,
            quantity: 3.0,
            availability: None,
        });
        assert_eq!(product.name, "New");
        assert_eq!(product.price, 2.0);
        assert_eq!(product.quantity, 3.0);
        assert!(!product.availability);
    }

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let now = Utc::now();
        let product = Product {
            id: 7,
            name: "Monitor".to_string(),
            price: 300.0,
            quantity: 4.0,
            availability: true,
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&product).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
        assert_eq!(v["availability"], json!(true));
    }
}
