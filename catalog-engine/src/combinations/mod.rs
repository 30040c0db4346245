//! Variant combination engine
//!
//! The pipeline: a variant set goes through [`generator::generate`] to
//! produce ordered tuples, [`reconciler::reconcile`] merges those tuples
//! with previously entered per-combination data, and [`validator::validate`]
//! gates step advancement.

pub mod generator;
pub mod reconciler;
pub mod validator;

pub use generator::{CombinationTuple, TupleEntry, generate, tuple_name};
pub use reconciler::{ReconcileStrategy, reconcile, reconcile_with};
pub use validator::{Issue, Severity, ValidationReport, validate};
