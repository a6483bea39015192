//! Core advisor logic shared by the library API and the CLI.
//! No terminal or argument-parsing dependencies.

use serde::Serialize;

use crate::switching::catalog::TransistorCatalog;
use crate::switching::schema::TransistorPart;
use crate::timing::{capacitor_microfarads, TIMING_RESISTOR_OHMS};

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Delay must be greater than zero seconds, got {0}")]
    DegenerateDelay(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// The three scalars a run starts from. Built once per run, immutable.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitRequest {
    pub delay_seconds: f64,
    pub voltage: f64,
    pub load_current_ma: f64,
}

impl CircuitRequest {
    /// Reject inputs the timing formula or the selection table cannot
    /// meaningfully answer. A non-positive delay would yield a non-positive
    /// capacitor, so it is refused before any computation runs.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if !self.delay_seconds.is_finite()
            || !self.voltage.is_finite()
            || !self.load_current_ma.is_finite()
        {
            return Err(AdvisorError::InvalidInput(
                "all inputs must be finite numbers".to_string(),
            ));
        }
        if self.delay_seconds <= 0.0 {
            return Err(AdvisorError::DegenerateDelay(self.delay_seconds));
        }
        if self.voltage <= 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "voltage must be greater than zero volts, got {}",
                self.voltage
            )));
        }
        if self.load_current_ma <= 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "load current must be greater than zero milliamps, got {}",
                self.load_current_ma
            )));
        }
        Ok(())
    }
}

/// Component values derived from a [`CircuitRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct CircuitRecommendation {
    /// Timing capacitor for the fixed resistor, in microfarads
    pub capacitor_microfarads: f64,
    /// Fixed timing resistor, always 100kΩ
    pub resistor_ohms: f64,
    /// Switching transistor matched to the load current
    pub transistor: TransistorPart,
}

/// Core advisor API used by both the library consumers and the CLI.
pub struct DelayAdvisor;

impl DelayAdvisor {
    /// Compute a recommendation using the builtin transistor catalog.
    pub fn recommend(request: &CircuitRequest) -> Result<CircuitRecommendation, AdvisorError> {
        Self::recommend_with_catalog(request, &TransistorCatalog::with_builtin_parts())
    }

    /// Compute a recommendation against an explicit catalog.
    pub fn recommend_with_catalog(
        request: &CircuitRequest,
        catalog: &TransistorCatalog,
    ) -> Result<CircuitRecommendation, AdvisorError> {
        request.validate()?;

        let capacitor = capacitor_microfarads(request.delay_seconds);
        let transistor = catalog.select(request.load_current_ma).clone();

        tracing::debug!(
            "Recommendation for {}s delay: {:.1}µF capacitor, {} transistor",
            request.delay_seconds,
            capacitor,
            transistor.part_number
        );

        Ok(CircuitRecommendation {
            capacitor_microfarads: capacitor,
            resistor_ohms: TIMING_RESISTOR_OHMS,
            transistor,
        })
    }
}
