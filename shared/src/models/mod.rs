//! Domain models
//!
//! Entities and their payload types. Persisted/exported field names are
//! camelCase so records stay structurally identical to the JSON shapes the
//! browser tool produced.

mod category;
mod combination;
mod draft;
mod product;
mod variant;

pub use category::{Category, CategoryCreate};
pub use combination::{Combination, CombinationMap};
pub use draft::{Draft, DraftData};
pub use product::{Discount, DiscountMethod, Product};
pub use variant::VariantOption;
