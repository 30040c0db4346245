//! Product Model

use super::{CombinationMap, VariantOption};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Discount method: percentage of price or a flat amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountMethod {
    Pct,
    Flat,
}

/// Discount applied to the product price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Discount {
    pub method: DiscountMethod,
    #[validate(range(min = 0.0, message = "Discount value must be positive"))]
    pub value: f64,
}

impl Default for Discount {
    /// No-op discount, applied when the operator enters none.
    fn default() -> Self {
        Self {
            method: DiscountMethod::Pct,
            value: 0.0,
        }
    }
}

/// Product entity
///
/// Immutable once assembled; created only by the product assembler at wizard
/// completion and owned by the in-memory catalog (append-only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category reference (String ID)
    pub category: String,
    pub brand: String,
    /// Image URL or data reference
    pub image: String,
    pub variants: Vec<VariantOption>,
    pub combinations: CombinationMap,
    pub price_inr: f64,
    pub discount: Discount,
}
