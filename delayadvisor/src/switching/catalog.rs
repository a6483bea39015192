//! Builtin and External Transistor Catalogs
//!
//! The default selection table is embedded JSON compiled into the binary.
//! Users can point the CLI at their own JSON file to add or replace parts
//! without recompiling the tool.

use std::path::Path;

use crate::core::AdvisorError;
use crate::switching::schema::{TransistorPart, TransistorPartList};

// Embedded default table, the fallback when no catalog file is given
const EMBEDDED_TRANSISTORS: &str = include_str!("../../parts/transistors.json");

/// Threshold catalog mapping load current to a switching transistor.
///
/// Parts are held sorted by `min_load_ma` descending so selection is a
/// single forward scan: the first bracket the load exceeds wins, which
/// makes every lower bound exclusive (exactly 1500mA lands in the >800
/// bracket, not the >1500 one).
#[derive(Debug, Clone)]
pub struct TransistorCatalog {
    name: String,
    parts: Vec<TransistorPart>,
}

impl TransistorCatalog {
    /// Catalog with the builtin embedded parts table.
    pub fn with_builtin_parts() -> Self {
        // The embedded table is validated by tests; a parse failure here
        // is a build defect, not a runtime condition.
        Self::from_part_list(
            serde_json::from_str(EMBEDDED_TRANSISTORS)
                .unwrap_or_else(|e| panic!("embedded transistor table is invalid: {}", e)),
        )
    }

    /// Load a catalog from a user-supplied JSON file.
    ///
    /// A usable catalog needs every threshold finite and non-negative, and
    /// a fallback entry with `min_load_ma = 0` so selection stays total.
    pub fn from_json_file(path: &Path) -> Result<Self, AdvisorError> {
        let content = std::fs::read_to_string(path)?;
        let list: TransistorPartList = serde_json::from_str(&content)?;
        if list.parts.is_empty() {
            return Err(AdvisorError::InvalidInput(format!(
                "catalog {} contains no parts",
                path.display()
            )));
        }
        for part in &list.parts {
            if !part.min_load_ma.is_finite() || part.min_load_ma < 0.0 {
                return Err(AdvisorError::InvalidInput(format!(
                    "catalog {} part {} has invalid threshold {} mA",
                    path.display(),
                    part.part_number,
                    part.min_load_ma
                )));
            }
        }
        if !list.parts.iter().any(|p| p.min_load_ma == 0.0) {
            return Err(AdvisorError::InvalidInput(format!(
                "catalog {} has no fallback part with a 0 mA threshold",
                path.display()
            )));
        }
        tracing::info!(
            "Loaded transistor catalog '{}' with {} parts from {}",
            list.name,
            list.parts.len(),
            path.display()
        );
        Ok(Self::from_part_list(list))
    }

    fn from_part_list(list: TransistorPartList) -> Self {
        let mut parts = list.parts;
        parts.sort_by(|a, b| {
            b.min_load_ma
                .partial_cmp(&a.min_load_ma)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            name: list.name,
            parts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parts in selection order (highest threshold first).
    pub fn parts(&self) -> &[TransistorPart] {
        &self.parts
    }

    /// Select the transistor for a load current in milliamps.
    ///
    /// Total over all finite inputs: brackets are scanned highest first
    /// and the last entry (threshold 0) catches any load that exceeds no
    /// bracket, including zero and negative values.
    pub fn select(&self, load_current_ma: f64) -> &TransistorPart {
        for part in &self.parts {
            if load_current_ma > part.min_load_ma {
                tracing::debug!(
                    "Selected {} for {}mA load (bracket >{}mA)",
                    part.part_number,
                    load_current_ma,
                    part.min_load_ma
                );
                return part;
            }
        }
        // Load <= every threshold, including 0
        self.parts
            .last()
            .unwrap_or_else(|| unreachable!("catalog is never constructed empty"))
    }
}

impl Default for TransistorCatalog {
    fn default() -> Self {
        Self::with_builtin_parts()
    }
}
