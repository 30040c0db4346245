//! Wizard session tests
//!
//! Shared fixtures; the scenarios live in the `test_*` modules.

use super::*;
use crate::catalog::CatalogService;
use crate::drafts::DraftStore;
use shared::models::{Category, CategoryCreate, Combination, VariantOption};
use shared::validation::{BasicInfoForm, CombinationsForm, PricingForm, VariantsForm};

mod test_drafts;

/// Catalog with one category, an in-memory draft store and a fresh session.
fn create_test_session() -> (CatalogService, DraftStore, WizardSession, Category) {
    let catalog = CatalogService::new();
    let category = catalog
        .add_category(CategoryCreate {
            name: "Shoes".into(),
        })
        .unwrap();
    let drafts = DraftStore::in_memory();
    let session = WizardSession::new(catalog.clone(), drafts.clone());
    (catalog, drafts, session, category)
}

fn description(category_id: &str) -> BasicInfoForm {
    BasicInfoForm {
        name: "Nike Air Jordan Shoes".into(),
        brand: "Nike".into(),
        category: category_id.into(),
        image: "https://example.com/jordan.jpg".into(),
    }
}

fn size_and_color() -> VariantsForm {
    VariantsForm {
        variants: vec![
            VariantOption::new("Size", vec!["M".into(), "L".into()]),
            VariantOption::new("Color", vec!["Black".into(), "Red".into()]),
        ],
    }
}

/// Fill the generated combinations with valid SKUs and quantities.
fn filled(combinations: &[Combination]) -> CombinationsForm {
    CombinationsForm {
        combinations: combinations
            .iter()
            .enumerate()
            .map(|(idx, combo)| Combination {
                sku: format!("SKU-{idx}"),
                quantity: Some(idx as i64 + 1),
                ..combo.clone()
            })
            .collect(),
    }
}

fn pricing() -> PricingForm {
    PricingForm {
        price_inr: 500.0,
        discount: None,
    }
}
