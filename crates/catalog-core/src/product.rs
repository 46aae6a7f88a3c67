//! # Product Types
//!
//! Product records held by the catalog, plus the validated shapes used to
//! create and merge-update them from partner-supplied JSON.

use crate::error::{CatalogError, CatalogResult, MISSING_FIELDS_MESSAGE, NEGATIVE_PRICE_MESSAGE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Open mapping of extra product attributes (description, sku, ...)
pub type Attributes = Map<String, Value>;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, immutable once assigned
    pub id: u64,

    /// Display name (never empty)
    pub name: String,

    /// Price exactly as the partner sent it (never negative).
    /// Integers stay integers; large values are not rounded through `f64`.
    pub price: Number,

    /// Everything else the partner sent, passed through untouched
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Product {
    /// Build a stored record from a validated draft
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            attributes: new.attributes,
        }
    }

    /// Merge a patch into this record. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.attributes.extend(patch.attributes);
    }

    /// Case-insensitive substring match against the name
    pub fn name_contains(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

fn is_negative(price: &Number) -> bool {
    price.as_f64().is_some_and(|p| p < 0.0)
}

/// Validated payload for creating a product (no id yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Number,
    pub attributes: Attributes,
}

impl TryFrom<Value> for NewProduct {
    type Error = CatalogError;

    fn try_from(value: Value) -> CatalogResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(CatalogError::validation(MISSING_FIELDS_MESSAGE));
        };

        // Identifiers are assigned by the store only
        fields.remove("id");

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(CatalogError::validation(MISSING_FIELDS_MESSAGE)),
        };

        let price = match fields.remove("price") {
            Some(Value::Number(price)) => price,
            _ => return Err(CatalogError::validation(MISSING_FIELDS_MESSAGE)),
        };

        if is_negative(&price) {
            return Err(CatalogError::validation(NEGATIVE_PRICE_MESSAGE));
        }

        Ok(Self {
            name,
            price,
            attributes: fields,
        })
    }
}

/// Partial update payload (merge semantics)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Number>,
    pub attributes: Attributes,
}

impl ProductPatch {
    /// True if applying this patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.attributes.is_empty()
    }
}

impl TryFrom<Value> for ProductPatch {
    type Error = CatalogError;

    fn try_from(value: Value) -> CatalogResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(CatalogError::validation(
                "O corpo da requisição deve ser um objeto JSON.",
            ));
        };

        fields.remove("id");

        let name = match fields.remove("name") {
            None => None,
            Some(Value::String(name)) if !name.is_empty() => Some(name),
            Some(_) => {
                return Err(CatalogError::validation(
                    "O nome do produto não pode ser vazio.",
                ))
            }
        };

        let price = match fields.remove("price") {
            None => None,
            Some(Value::Number(price)) if is_negative(&price) => {
                return Err(CatalogError::validation(NEGATIVE_PRICE_MESSAGE))
            }
            Some(Value::Number(price)) => Some(price),
            Some(_) => {
                return Err(CatalogError::validation(
                    "O preço do produto deve ser numérico.",
                ))
            }
        };

        Ok(Self {
            name,
            price,
            attributes: fields,
        })
    }
}
