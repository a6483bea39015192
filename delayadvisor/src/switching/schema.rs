//! Serde schema for transistor catalog files.

use serde::{Deserialize, Serialize};

/// One selectable switching transistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransistorPart {
    /// Part number as it appears in the bill of materials (e.g. "TIP41")
    pub part_number: String,

    /// Short description (e.g. "Power NPN transistor")
    pub description: String,

    /// Exclusive lower bound of the load-current bracket, in milliamps.
    /// A part matches when `load_current_ma > min_load_ma`. The catalog
    /// fallback entry uses 0.0 and catches everything down to zero load.
    pub min_load_ma: f64,
}

impl TransistorPart {
    /// Display label: `"BC548 (Low power NPN transistor)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.part_number, self.description)
    }
}

/// Top-level catalog file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransistorPartList {
    /// Catalog name, shown in logs when a custom catalog is loaded
    pub name: String,

    /// Parts in any order; the catalog sorts them by threshold
    pub parts: Vec<TransistorPart>,
}
