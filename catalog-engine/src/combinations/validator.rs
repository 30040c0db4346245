//! Combination validator
//!
//! Per-record rules (SKU presence, stock/quantity coupling) and the
//! cross-record duplicate-SKU check. Duplicate SKUs are advisory
//! (`Severity::Warning`): they are flagged on every record sharing the SKU
//! but do not block step advancement. Everything else is `Severity::Error`
//! and blocks.

use shared::models::Combination;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Issue severity. Warnings are surfaced but never gate advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One field-level finding on a combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Validation result: combination index -> issues. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: BTreeMap<usize, Vec<Issue>>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// True if any issue blocks step advancement.
    pub fn has_blocking(&self) -> bool {
        self.issues
            .values()
            .flatten()
            .any(|issue| issue.severity == Severity::Error)
    }

    pub fn for_index(&self, index: usize) -> &[Issue] {
        self.issues.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Issue])> {
        self.issues.iter().map(|(idx, v)| (*idx, v.as_slice()))
    }

    fn push(&mut self, index: usize, issue: Issue) {
        self.issues.entry(index).or_default().push(issue);
    }
}

/// Validate the active combination collection.
pub fn validate(combinations: &[Combination]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (idx, combo) in combinations.iter().enumerate() {
        if combo.name.is_empty() {
            // Names are derived; an empty one means generation was bypassed.
            report.push(idx, Issue::error("name", "Combination name is required"));
        }
        if combo.sku.is_empty() {
            report.push(idx, Issue::error("sku", "SKU is required"));
        }
        if combo.in_stock && combo.quantity.is_none() {
            report.push(idx, Issue::error("quantity", "Please enter the quantity"));
        }
        if !combo.in_stock && combo.quantity.is_some() {
            report.push(
                idx,
                Issue::error("quantity", "Quantity must be empty when out of stock"),
            );
        }
    }

    // Duplicate SKUs: flag every record sharing a SKU. Empty SKUs already
    // carry a "required" error and are not counted as duplicates of each
    // other.
    let mut sku_positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, combo) in combinations.iter().enumerate() {
        if !combo.sku.is_empty() {
            sku_positions.entry(combo.sku.as_str()).or_default().push(idx);
        }
    }
    for (sku, positions) in sku_positions {
        if positions.len() > 1 {
            for idx in positions {
                report.push(idx, Issue::warning("sku", format!("Duplicate SKU: {sku}")));
            }
        }
    }

    report
}
