//! Report building and rendering.
//!
//! Turns a request/recommendation pair into a fixed-structure report: input
//! echo, computed values, full bill of materials, and the 8-line pin-to-pin
//! wiring guide for the 555. The wiring text is static; only the computed
//! component values vary with input.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{CircuitRecommendation, CircuitRequest};

/// One wiring instruction for a 555 pin.
#[derive(Debug, Clone, Serialize)]
pub struct WiringStep {
    pub pin: u8,
    pub name: &'static str,
    pub instruction: &'static str,
}

/// Pin-to-pin wiring for the 555 in monostable mode, one entry per pin.
pub const WIRING_GUIDE: [WiringStep; 8] = [
    WiringStep {
        pin: 1,
        name: "GND",
        instruction: "Connect to battery negative",
    },
    WiringStep {
        pin: 2,
        name: "Trigger",
        instruction: "Push button to ground",
    },
    WiringStep {
        pin: 3,
        name: "Output",
        instruction: "To transistor base via 1kΩ resistor",
    },
    WiringStep {
        pin: 4,
        name: "Reset",
        instruction: "Tie to VCC (12V)",
    },
    WiringStep {
        pin: 5,
        name: "Control Voltage",
        instruction: "0.01µF capacitor to ground",
    },
    WiringStep {
        pin: 6,
        name: "Threshold",
        instruction: "Connect to pin 7 and capacitor junction",
    },
    WiringStep {
        pin: 7,
        name: "Discharge",
        instruction: "Connect to resistor to VCC",
    },
    WiringStep {
        pin: 8,
        name: "VCC",
        instruction: "Connect to 12V DC",
    },
];

/// Bill of materials line: a part and what to buy.
#[derive(Debug, Clone, Serialize)]
pub struct BomEntry {
    pub part: String,
    pub value: String,
}

/// Complete advisor report, renderable as text or serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub request: CircuitRequest,
    pub recommendation: CircuitRecommendation,
    pub bill_of_materials: Vec<BomEntry>,
    pub wiring_guide: Vec<WiringStep>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Build the report for a computed recommendation.
    pub fn build(request: &CircuitRequest, recommendation: &CircuitRecommendation) -> Self {
        let bom = vec![
            BomEntry {
                part: "IC 555 Timer".to_string(),
                value: "Monostable Mode".to_string(),
            },
            BomEntry {
                part: "Resistor".to_string(),
                value: "100kΩ".to_string(),
            },
            BomEntry {
                part: "Capacitor".to_string(),
                value: format!("{:.1} µF", recommendation.capacitor_microfarads),
            },
            BomEntry {
                part: "Transistor".to_string(),
                value: recommendation.transistor.label(),
            },
            BomEntry {
                part: "Relay".to_string(),
                value: "12V SPDT, ~30mA coil".to_string(),
            },
            BomEntry {
                part: "Diode".to_string(),
                value: "1N4007 (Flyback protection)".to_string(),
            },
            BomEntry {
                part: "Indicator LED".to_string(),
                value: "2V with 470Ω resistor".to_string(),
            },
            BomEntry {
                part: "Push Button".to_string(),
                value: "Momentary NO".to_string(),
            },
            BomEntry {
                part: "Power".to_string(),
                value: "12V DC".to_string(),
            },
        ];

        Self {
            request: request.clone(),
            recommendation: recommendation.clone(),
            bill_of_materials: bom,
            wiring_guide: WIRING_GUIDE.to_vec(),
            generated_at: Utc::now(),
        }
    }

    /// Render the human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("=== 555 TIMER CONFIGURATION ===\n\n");
        out.push_str(&format!("Delay: {} s\n", self.request.delay_seconds));
        out.push_str(&format!("Voltage: {} V\n", self.request.voltage));
        out.push_str(&format!(
            "Load Current: {} mA\n",
            self.request.load_current_ma
        ));
        out.push_str(&format!(
            "Recommended Transistor: {}\n",
            self.recommendation.transistor.label()
        ));
        out.push_str(&format!(
            "Required Capacitor: {:.1} µF for 100kΩ resistor\n",
            self.recommendation.capacitor_microfarads
        ));

        out.push_str("\n=== FULL COMPONENT LIST ===\n");
        for entry in &self.bill_of_materials {
            out.push_str(&format!("• {}: {}\n", entry.part, entry.value));
        }

        out.push_str("\n=== 555 PIN TO PIN WIRING ===\n");
        for step in &self.wiring_guide {
            out.push_str(&format!(
                "Pin {} ({}): {}\n",
                step.pin, step.name, step.instruction
            ));
        }

        out
    }
}
