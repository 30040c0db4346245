//! Draft Model
//!
//! A draft is a persisted, resumable snapshot of in-progress wizard input:
//! the step the operator was on plus the merged partial form data captured
//! so far.

use super::{Combination, Discount, VariantOption};
use serde::{Deserialize, Serialize};

/// Partial union of all step forms, accumulated as the wizard advances.
///
/// Each step submission produces a patch holding only its own fields;
/// [`DraftData::merged_with`] folds the patch into a fresh value
/// (whole-object replacement, never partial in-place edits).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinations: Option<Vec<Combination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl DraftData {
    /// New value with `patch`'s present fields layered over `self`.
    pub fn merged_with(&self, patch: DraftData) -> DraftData {
        DraftData {
            name: patch.name.or_else(|| self.name.clone()),
            brand: patch.brand.or_else(|| self.brand.clone()),
            category: patch.category.or_else(|| self.category.clone()),
            image: patch.image.or_else(|| self.image.clone()),
            variants: patch.variants.or_else(|| self.variants.clone()),
            combinations: patch.combinations.or_else(|| self.combinations.clone()),
            price_inr: patch.price_inr.or(self.price_inr),
            discount: patch.discount.or_else(|| self.discount.clone()),
        }
    }
}

/// Persisted draft record, keyed by `id` in the draft store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    /// Wizard step the operator will resume on (1-4)
    pub step: u8,
    pub data: DraftData,
    /// Milliseconds since the UNIX epoch
    pub created_at: i64,
    pub updated_at: i64,
}

impl Draft {
    pub fn new(id: impl Into<String>, step: u8, data: DraftData) -> Self {
        let now = crate::util::now_millis();
        Self {
            id: id.into(),
            step,
            data,
            created_at: now,
            updated_at: now,
        }
    }
}
