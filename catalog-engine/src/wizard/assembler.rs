//! Product assembler
//!
//! Pure transform from validated draft data to the final immutable
//! [`Product`]. Side effects (catalog append, draft deletion) stay in the
//! session controller.

use shared::models::{CombinationMap, DraftData, Product};
use shared::util::resource_id;
use thiserror::Error;

/// Assembly failures. Rare after step validation, but the assembler
/// re-checks its own preconditions since it can be fed drafts directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("product has no combinations")]
    NoCombinations,

    #[error("price must be greater than zero")]
    InvalidPrice,
}

/// Assemble a product from fully captured draft data.
///
/// The combination list becomes a map keyed `c1..cN` in list order, so
/// regenerating the map from the same list is stable. The product id is
/// freshly generated on every call.
pub fn assemble(data: &DraftData) -> Result<Product, AssemblyError> {
    let name = data
        .name
        .clone()
        .ok_or(AssemblyError::MissingField("name"))?;
    let brand = data
        .brand
        .clone()
        .ok_or(AssemblyError::MissingField("brand"))?;
    let category = data
        .category
        .clone()
        .ok_or(AssemblyError::MissingField("category"))?;
    let image = data
        .image
        .clone()
        .ok_or(AssemblyError::MissingField("image"))?;
    let variants = data
        .variants
        .clone()
        .ok_or(AssemblyError::MissingField("variants"))?;
    let combinations = data
        .combinations
        .as_deref()
        .ok_or(AssemblyError::MissingField("combinations"))?;
    let price_inr = data
        .price_inr
        .ok_or(AssemblyError::MissingField("priceInr"))?;

    if combinations.is_empty() {
        return Err(AssemblyError::NoCombinations);
    }
    if !(price_inr > 0.0) {
        return Err(AssemblyError::InvalidPrice);
    }

    Ok(Product {
        id: resource_id("product"),
        name,
        category,
        brand,
        image,
        variants,
        combinations: CombinationMap::from_list(combinations),
        price_inr,
        discount: data.discount.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Combination, DiscountMethod, VariantOption};

    fn complete_draft() -> DraftData {
        DraftData {
            name: Some("Nike Air Jordan Shoes".into()),
            brand: Some("Nike".into()),
            category: Some("category_1".into()),
            image: Some("https://example.com/jordan.jpg".into()),
            variants: Some(vec![VariantOption::new(
                "Size",
                vec!["M".into(), "L".into()],
            )]),
            combinations: Some(vec![
                Combination {
                    name: "M".into(),
                    sku: "ABC12".into(),
                    quantity: Some(4),
                    in_stock: true,
                },
                Combination {
                    name: "L".into(),
                    sku: "ABC13".into(),
                    quantity: None,
                    in_stock: false,
                },
            ]),
            price_inr: Some(500.0),
            discount: None,
        }
    }

    #[test]
    fn keys_combinations_in_list_order() {
        let product = assemble(&complete_draft()).unwrap();
        let keys: Vec<&str> = product.combinations.keys().collect();
        assert_eq!(keys, vec!["c1", "c2"]);
        assert_eq!(product.combinations.get("c1").unwrap().sku, "ABC12");
        assert_eq!(product.combinations.get("c2").unwrap().sku, "ABC13");
    }

    #[test]
    fn map_order_is_deterministic_across_assemblies() {
        let draft = complete_draft();
        let a = assemble(&draft).unwrap();
        let b = assemble(&draft).unwrap();
        let keys_a: Vec<&str> = a.combinations.keys().collect();
        let keys_b: Vec<&str> = b.combinations.keys().collect();
        assert_eq!(keys_a, keys_b);
        assert_eq!(a.combinations, b.combinations);
    }

    #[test]
    fn ids_are_unique_across_repeated_assemblies() {
        let draft = complete_draft();
        let ids: std::collections::HashSet<String> =
            (0..20).map(|_| assemble(&draft).unwrap().id).collect();
        assert_eq!(ids.len(), 20);
        assert!(ids.iter().all(|id| id.starts_with("product_")));
    }

    #[test]
    fn missing_brand_is_reported_by_name() {
        let mut draft = complete_draft();
        draft.brand = None;
        assert_eq!(
            assemble(&draft).unwrap_err(),
            AssemblyError::MissingField("brand")
        );
    }

    #[test]
    fn empty_combination_list_is_rejected() {
        let mut draft = complete_draft();
        draft.combinations = Some(vec![]);
        assert_eq!(assemble(&draft).unwrap_err(), AssemblyError::NoCombinations);
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut draft = complete_draft();
        draft.price_inr = Some(0.0);
        assert_eq!(assemble(&draft).unwrap_err(), AssemblyError::InvalidPrice);
    }

    #[test]
    fn absent_discount_defaults_to_zero_percent() {
        let product = assemble(&complete_draft()).unwrap();
        assert_eq!(product.discount.method, DiscountMethod::Pct);
        assert_eq!(product.discount.value, 0.0);
    }
}
