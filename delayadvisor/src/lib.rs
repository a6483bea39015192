//! DelayAdvisor - 555 timer monostable delay circuit calculator library
//!
//! This library computes passive-component values for a 555-timer monostable
//! delay circuit: the timing capacitor for a fixed 100kΩ resistor, a switching
//! transistor matched to the load current, and a full bill of materials with
//! a pin-to-pin wiring guide.
//!
//! # Quick Start
//!
//! ```
//! use delayadvisor::{CircuitRequest, DelayAdvisor};
//!
//! let request = CircuitRequest {
//!     delay_seconds: 1.0,
//!     voltage: 12.0,
//!     load_current_ma: 30.0,
//! };
//! let recommendation = DelayAdvisor::recommend(&request).unwrap();
//!
//! assert_eq!(recommendation.transistor.part_number, "BC548");
//! println!("{:.1} µF", recommendation.capacitor_microfarads);
//! ```
//!
//! # Features
//!
//! - **Timing math**: standard 555 monostable pulse-width equation `t = 1.1·R·C`
//! - **Transistor selection**: load-current threshold catalog, user-extensible via JSON
//! - **Report building**: bill of materials and 8-pin wiring guide rendering

pub mod core;
pub mod report;
pub mod switching;
pub mod timing;

// Re-export main types
pub use core::{AdvisorError, CircuitRecommendation, CircuitRequest, DelayAdvisor};
pub use report::{BomEntry, Report, WiringStep, WIRING_GUIDE};
pub use switching::catalog::TransistorCatalog;
pub use switching::schema::TransistorPart;
pub use timing::{capacitor_farads, capacitor_microfarads, TIMING_RESISTOR_OHMS};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AdvisorError, CircuitRecommendation, CircuitRequest, DelayAdvisor, Report,
        TransistorCatalog, TransistorPart,
    };
}
