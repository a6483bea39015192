//! 555 monostable timing math.
//!
//! The monostable pulse width is `t = 1.1 * R * C`. The advisor fixes R at
//! 100kΩ and solves for C, so every delay maps to exactly one capacitor.

/// Fixed timing resistor used by the advisor, in ohms.
pub const TIMING_RESISTOR_OHMS: f64 = 100_000.0;

/// Solve `t = 1.1 * R * C` for C, in farads.
///
/// Degenerate for `delay_seconds <= 0` or `resistor_ohms <= 0`; callers
/// validate before computing (see [`crate::CircuitRequest::validate`]).
pub fn capacitor_farads(delay_seconds: f64, resistor_ohms: f64) -> f64 {
    delay_seconds / (1.1 * resistor_ohms)
}

/// Capacitor value in microfarads for the fixed 100kΩ timing resistor.
pub fn capacitor_microfarads(delay_seconds: f64) -> f64 {
    capacitor_farads(delay_seconds, TIMING_RESISTOR_OHMS) * 1e6
}
