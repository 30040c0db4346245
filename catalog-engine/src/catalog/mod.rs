//! Catalog Service - in-memory category and product collections
//!
//! Session-lifetime state: categories created by the operator and products
//! appended by the wizard on completion. No persistence; a new process
//! starts empty. Presentation code gets cloned read-only views; mutation
//! goes through the operations below only.

use parking_lot::RwLock;
use shared::models::{Category, CategoryCreate, Product};
use shared::util::resource_id;
use shared::{AppError, AppResult};
use std::sync::Arc;
use validator::Validate;

/// Unified in-memory catalog of categories and products
#[derive(Clone, Default)]
pub struct CatalogService {
    categories: Arc<RwLock<Vec<Category>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing categories (e.g. fixtures)
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(categories)),
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a category from a validated payload
    pub fn add_category(&self, payload: CategoryCreate) -> AppResult<Category> {
        payload.validate()?;
        let category = Category {
            id: resource_id("category"),
            name: payload.name,
        };
        self.categories.write().push(category.clone());
        tracing::info!(category_id = %category.id, name = %category.name, "category added");
        Ok(category)
    }

    /// All categories, in creation order
    pub fn categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    pub fn category_exists(&self, id: &str) -> bool {
        self.categories.read().iter().any(|c| c.id == id)
    }

    pub fn get_category(&self, id: &str) -> Option<Category> {
        self.categories.read().iter().find(|c| c.id == id).cloned()
    }

    /// Append a finished product. Products are immutable once added.
    pub fn add_product(&self, product: Product) {
        tracing::info!(
            product_id = %product.id,
            name = %product.name,
            combinations = product.combinations.len(),
            "product added"
        );
        self.products.write().push(product);
    }

    /// All products, in creation order
    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn product_count(&self) -> usize {
        self.products.read().len()
    }

    /// Products grouped per category, in the categories' creation order.
    /// Categories without products appear with an empty list.
    pub fn products_by_category(&self) -> Vec<(Category, Vec<Product>)> {
        let categories = self.categories.read();
        let products = self.products.read();
        categories
            .iter()
            .map(|category| {
                let members = products
                    .iter()
                    .filter(|p| p.category == category.id)
                    .cloned()
                    .collect();
                (category.clone(), members)
            })
            .collect()
    }
}
