//! Demodulation quality metrics for the FM vs AM comparison.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_same_len, Result};

/// Mean of the squared sample-wise differences.
pub fn mean_squared_error(reference: &[f64], estimate: &[f64]) -> Result<f64> {
    ensure_same_len(reference.len(), estimate.len())?;
    if reference.is_empty() {
        return Ok(0.0);
    }
    let sum: f64 = reference
        .iter()
        .zip(estimate)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum / reference.len() as f64)
}

/// How much lower the FM error is than the AM error, in percent of the AM error.
///
/// Negative when AM did better; `None` when the AM error is zero.
pub fn improvement_percent(mse_fm: f64, mse_am: f64) -> Option<f64> {
    if mse_am > 0.0 {
        Some((mse_am - mse_fm) / mse_am * 100.0)
    } else {
        None
    }
}

/// Coarse channel quality bands used to label an SNR setting
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnrQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SnrQuality {
    /// ≥ 25 dB excellent, ≥ 15 good, ≥ 10 fair, below that poor
    pub fn classify(snr_db: f64) -> Self {
        if snr_db >= 25.0 {
            SnrQuality::Excellent
        } else if snr_db >= 15.0 {
            SnrQuality::Good
        } else if snr_db >= 10.0 {
            SnrQuality::Fair
        } else {
            SnrQuality::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnrQuality::Excellent => "excellent",
            SnrQuality::Good => "good",
            SnrQuality::Fair => "fair",
            SnrQuality::Poor => "poor",
        }
    }
}

/// Outcome of demodulating the same message over FM and AM at one SNR
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemodComparison {
    pub snr_db: f64,
    pub mse_fm: f64,
    pub mse_am: f64,
    pub quality: SnrQuality,
}

impl DemodComparison {
    pub fn new(snr_db: f64, mse_fm: f64, mse_am: f64) -> Self {
        Self {
            snr_db,
            mse_fm,
            mse_am,
            quality: SnrQuality::classify(snr_db),
        }
    }

    pub fn fm_wins(&self) -> bool {
        self.mse_fm < self.mse_am
    }

    pub fn improvement_percent(&self) -> Option<f64> {
        improvement_percent(self.mse_fm, self.mse_am)
    }
}
