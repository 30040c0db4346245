//! Catalog wizard engine
//!
//! This crate holds the behavioral core of the catalog tool:
//! - `combinations` — Cartesian generation of variant combinations, the
//!   edit-preserving reconciler, and per/cross-record validation
//! - `catalog` — in-memory category and product collections
//! - `drafts` — redb-backed draft persistence with a lazy store handle
//! - `wizard` — the four-step session controller and the product assembler
//!
//! # Wizard Flow
//!
//! ```text
//! submit_description(form)
//!     ├─ schema validation + category existence check
//!     ├─ merge into draft data, advance to Variants
//!     └─ persist draft (best-effort, non-fatal)
//! submit_variants(form)
//!     ├─ schema validation
//!     ├─ generate tuples, reconcile against prior combinations
//!     └─ advance to Combinations, persist
//! submit_combinations(form)
//!     ├─ per-record + duplicate-SKU validation (warnings pass through)
//!     └─ advance to Pricing, persist
//! submit_pricing(form)
//!     ├─ schema validation, assemble immutable Product
//!     ├─ append to catalog, delete draft (best-effort)
//!     └─ reset session
//! ```

pub mod catalog;
pub mod combinations;
pub mod drafts;
pub mod wizard;

pub use catalog::CatalogService;
pub use drafts::{DraftStore, DraftStorage, StorageError};
pub use wizard::{WizardError, WizardSession, WizardStep};
