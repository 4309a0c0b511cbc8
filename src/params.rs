//! Derived FM quantities: deviation, modulation index, Carson bandwidth.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FmError, Result};

/// Immutable snapshot of the modulation settings and what follows from them.
///
/// Recompute on every parameter change; nothing here is ever mutated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationParameters {
    /// Carrier frequency fc (Hz)
    pub carrier_hz: f64,
    /// Message frequency fm (Hz)
    pub message_hz: f64,
    /// Message amplitude Am (V)
    pub amplitude: f64,
    /// Frequency sensitivity kf (Hz/V)
    pub sensitivity: f64,
    /// Odd-harmonic count H
    pub harmonics: u32,
    /// Peak frequency deviation Δf = kf·Am (Hz)
    pub delta_f: f64,
    /// Modulation index β = Δf/fm, +∞ when fm = 0
    pub beta: f64,
    /// Highest significant message frequency H·fm (Hz)
    pub fm_max: f64,
    /// Carson bandwidth 2·(Δf + fm_max) (Hz)
    pub carson_bandwidth: f64,
}

impl ModulationParameters {
    /// Derive Δf, β, fm_max and the Carson bandwidth.
    pub fn compute(fc: f64, fm: f64, am: f64, kf: f64, harmonics: u32) -> Result<Self> {
        let fc = ensure_non_negative("fc", fc)?;
        let fm = ensure_non_negative("fm", fm)?;
        let am = ensure_non_negative("amplitude", am)?;
        let kf = ensure_non_negative("kf", kf)?;
        if harmonics == 0 || harmonics % 2 == 0 {
            return Err(FmError::invalid(
                "harmonics",
                harmonics as f64,
                "must be a positive odd count",
            ));
        }

        let delta_f = kf * am;
        let beta = if fm > 0.0 { delta_f / fm } else { f64::INFINITY };
        let fm_max = harmonics as f64 * fm;

        Ok(Self {
            carrier_hz: fc,
            message_hz: fm,
            amplitude: am,
            sensitivity: kf,
            harmonics,
            delta_f,
            beta,
            fm_max,
            carson_bandwidth: 2.0 * (delta_f + fm_max),
        })
    }

    /// Narrowband FM (β ≪ 1) behaves like AM with a quadrature carrier
    pub fn is_narrowband(&self) -> bool {
        self.beta < 0.3
    }

    pub fn delta_f_khz(&self) -> f64 {
        self.delta_f / 1_000.0
    }

    pub fn carson_bandwidth_khz(&self) -> f64 {
        self.carson_bandwidth / 1_000.0
    }

    pub fn carrier_mhz(&self) -> f64 {
        self.carrier_hz / 1_000_000.0
    }

    pub fn message_khz(&self) -> f64 {
        self.message_hz / 1_000.0
    }
}

/// Sensitivity that yields modulation index `beta`: kf = β·fm/Am.
///
/// Returns 0 when Am ≤ 0, since no sensitivity can deviate a silent message.
pub fn sensitivity_for_beta(beta: f64, fm: f64, am: f64) -> f64 {
    if am > 0.0 {
        beta * fm / am
    } else {
        0.0
    }
}
