//! Combination Model
//!
//! A combination is one concrete point in the Cartesian product of all
//! variant options, carrying the operator-entered SKU, stock flag and
//! quantity. [`CombinationMap`] is the insertion-ordered `"c1".."cN"` keyed
//! form used on assembled products.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Combination entity (per generated tuple, user-editable)
///
/// Invariant: `in_stock == true` requires `quantity` to be present;
/// `in_stock == false` requires `quantity` to be `None`. The transition
/// helper [`Combination::set_in_stock`] maintains the second half; the
/// combination validator re-checks both independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    /// Derived display name: tuple values joined by "/" in option order.
    /// Recomputed on every generation pass, never hand-edited.
    pub name: String,
    pub sku: String,
    pub quantity: Option<i64>,
    pub in_stock: bool,
}

impl Combination {
    /// Fresh combination for a newly generated tuple.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: String::new(),
            quantity: Some(0),
            in_stock: true,
        }
    }

    /// Toggle the stock flag. Going out of stock clears the quantity.
    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
        if !in_stock {
            self.quantity = None;
        }
    }
}

/// Insertion-ordered map of synthetic keys (`"c1".."cN"`) to combinations.
///
/// A plain `BTreeMap` would serialize `"c10"` before `"c2"`, breaking the
/// stable key order the assembler guarantees, so this keeps the entries in a
/// `Vec` and hand-rolls the serde map impls (document order in, document
/// order out).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombinationMap(Vec<(String, Combination)>);

impl CombinationMap {
    /// Key the list `c1..cN` in list order.
    pub fn from_list(combinations: &[Combination]) -> Self {
        Self(
            combinations
                .iter()
                .enumerate()
                .map(|(idx, combo)| (format!("c{}", idx + 1), combo.clone()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Combination> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Combination)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Combination> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl Serialize for CombinationMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CombinationMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CombinationMapVisitor;

        impl<'de> Visitor<'de> for CombinationMapVisitor {
            type Value = CombinationMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of combination keys to combinations")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Combination>()? {
                    entries.push((key, value));
                }
                Ok(CombinationMap(entries))
            }
        }

        deserializer.deserialize_map(CombinationMapVisitor)
    }
}
