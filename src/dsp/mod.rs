//! Signal generation primitives: message waveforms, FM and AM modulators and
//! the noise channel.
//!
//! Each function takes immutable input buffers and returns a fresh buffer.
//! None of them keep state between calls; randomness is drawn only from a
//! generator the caller passes in or seeds explicitly.

/// Reference AM modulator.
pub mod am;
/// FM modulator and carrier.
pub mod fm;
/// SNR-calibrated white Gaussian noise.
pub mod noise;
/// Sine, square, sawtooth and triangle messages.
pub mod waveform;

pub use waveform::WaveformKind;
