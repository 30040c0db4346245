//! Step-form validation schemas
//!
//! One form type per wizard step, with declarative field rules. Validation
//! produces a structured `ValidationErrors` collection (field path ->
//! message list); errors are resolved at the active step and never bubble
//! past it. Each form converts into a [`DraftData`] patch for merging.

use crate::models::{Combination, Discount, DraftData, VariantOption};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Step 1: Description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BasicInfoForm {
    #[validate(length(min = 1, max = 50, message = "Product name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(min = 2, max = 100, message = "Brand must be 2-100 characters"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Please select a category"))]
    pub category: String,
    #[validate(url(message = "Please provide a valid image URL"))]
    pub image: String,
}

/// Step 2: Variants
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VariantsForm {
    #[validate(
        length(min = 1, message = "At least one variant option is required"),
        nested
    )]
    pub variants: Vec<VariantOption>,
}

/// Step 3: Combinations
///
/// Only the at-least-one rule lives here; per-record and cross-record rules
/// (SKU presence, stock/quantity coupling, duplicate SKUs) are the
/// combination validator's job in the engine crate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CombinationsForm {
    #[validate(length(min = 1, message = "Add at least one combination"))]
    pub combinations: Vec<Combination>,
}

/// Step 4: Price Info
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingForm {
    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    pub price_inr: f64,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl From<BasicInfoForm> for DraftData {
    fn from(form: BasicInfoForm) -> Self {
        DraftData {
            name: Some(form.name),
            brand: Some(form.brand),
            category: Some(form.category),
            image: Some(form.image),
            ..Default::default()
        }
    }
}

impl From<VariantsForm> for DraftData {
    fn from(form: VariantsForm) -> Self {
        DraftData {
            variants: Some(form.variants),
            ..Default::default()
        }
    }
}

impl From<CombinationsForm> for DraftData {
    fn from(form: CombinationsForm) -> Self {
        DraftData {
            combinations: Some(form.combinations),
            ..Default::default()
        }
    }
}

impl From<PricingForm> for DraftData {
    fn from(form: PricingForm) -> Self {
        DraftData {
            price_inr: Some(form.price_inr),
            discount: form.discount,
            ..Default::default()
        }
    }
}
