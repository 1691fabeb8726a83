//! Catalog item type.

use serde::{Deserialize, Serialize};

/// One equipment/supply item from the catalog.
///
/// The engine treats items as read-only reference data: quotations point at
/// an item through its `code`, which is expected to be unique within a
/// catalog (uniqueness is the catalog owner's responsibility, not enforced
/// here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable identifier assigned by whatever system manages the catalog.
    #[serde(default)]
    pub id: String,
    /// Unique item code referenced by quotations.
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-text technical specification.
    #[serde(default)]
    pub specs: String,
}

impl Item {
    /// Convenience constructor for a catalog item.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        specs: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            id: code.clone(),
            code,
            name: name.into(),
            specs: specs.into(),
        }
    }
}
