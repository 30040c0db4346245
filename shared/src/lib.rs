//! Shared domain types for the catalog wizard
//!
//! This crate holds the data model (categories, variants, combinations,
//! products, drafts), the step-form validation schemas, and small shared
//! utilities. The engine crate (`catalog-engine`) builds the wizard flow,
//! combination algorithms and draft persistence on top of these types.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

pub use error::{AppError, AppResult};
