//! Combination reconciler
//!
//! Converts freshly generated tuples into the live combination list while
//! preserving the operator's prior edits (SKU, stock flag, quantity) for
//! tuples that still exist. Names are always recomputed fresh from the
//! tuple, never reused from stale state.

use super::generator::{CombinationTuple, tuple_name};
use shared::models::Combination;
use std::collections::HashMap;

/// How previous entries are matched against freshly generated tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileStrategy {
    /// Match the previous entry at the same list position. This is the
    /// compatibility policy: it preserves edits when values are appended or
    /// only labels change, but can misattribute edits when options are
    /// reordered or values are inserted/removed from the middle.
    #[default]
    Positional,
    /// Match the previous entry whose derived name equals the tuple's new
    /// name. Stricter: edits survive reordering, but any rename (even a
    /// label fix) drops the entry's data. Not wire-compatible with the
    /// positional behavior.
    ByName,
}

/// Reconcile with the default positional strategy.
///
/// Idempotent: reconciling an already-reconciled list against its own
/// tuples is a no-op.
pub fn reconcile(tuples: &[CombinationTuple], previous: &[Combination]) -> Vec<Combination> {
    reconcile_with(tuples, previous, ReconcileStrategy::Positional)
}

/// Reconcile the generated tuples against the previous combination list.
///
/// Each output entry takes its `name` from the tuple; `sku`, `quantity` and
/// `in_stock` are carried over from the matched previous entry, or
/// defaulted (`sku = ""`, `in_stock = true`, `quantity = 0`) when no match
/// exists.
pub fn reconcile_with(
    tuples: &[CombinationTuple],
    previous: &[Combination],
    strategy: ReconcileStrategy,
) -> Vec<Combination> {
    let by_name: HashMap<&str, &Combination> = match strategy {
        ReconcileStrategy::ByName => previous.iter().map(|c| (c.name.as_str(), c)).collect(),
        ReconcileStrategy::Positional => HashMap::new(),
    };

    let merged: Vec<Combination> = tuples
        .iter()
        .enumerate()
        .map(|(idx, tuple)| {
            let name = tuple_name(tuple);
            let matched = match strategy {
                ReconcileStrategy::Positional => previous.get(idx),
                ReconcileStrategy::ByName => by_name.get(name.as_str()).copied(),
            };
            match matched {
                Some(prev) => Combination {
                    name,
                    sku: prev.sku.clone(),
                    quantity: prev.quantity,
                    in_stock: prev.in_stock,
                },
                None => Combination::new(name),
            }
        })
        .collect();

    if merged.len() != previous.len() {
        tracing::debug!(
            previous = previous.len(),
            current = merged.len(),
            "combination count changed, positions beyond the old list defaulted"
        );
    }
    merged
}
