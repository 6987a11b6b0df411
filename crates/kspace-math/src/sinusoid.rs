// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Sinusoid Synthesizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Real-valued 2D basis sinusoids.
//!
//! Pixel `(x, y)` gets `π·sin(2π·fx·x/Px + φx + 2π·fy·y/Py + φy)`. Used to show
//! which periodic structure a k-space coefficient encodes.

use kspace_types::config::SinusoidConfig;
use kspace_types::error::{KSpaceError, KSpaceResult};
use kspace_types::state::to_absolute_index;
use ndarray::Array2;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidParams {
    pub period_x: f64,
    pub period_y: f64,
    pub freq_x: f64,
    pub freq_y: f64,
    pub phase_x: f64,
    pub phase_y: f64,
}

impl SinusoidParams {
    /// Zero phase on both axes.
    pub fn new(period: (f64, f64), freq: (f64, f64)) -> Self {
        SinusoidParams {
            period_x: period.0,
            period_y: period.1,
            freq_x: freq.0,
            freq_y: freq.1,
            phase_x: 0.0,
            phase_y: 0.0,
        }
    }

    pub fn with_phase(mut self, phase_x: f64, phase_y: f64) -> Self {
        self.phase_x = phase_x;
        self.phase_y = phase_y;
        self
    }
}

impl From<&SinusoidConfig> for SinusoidParams {
    fn from(cfg: &SinusoidConfig) -> Self {
        SinusoidParams::new((cfg.period[0], cfg.period[1]), (cfg.freq[0], cfg.freq[1]))
            .with_phase(cfg.phase[0], cfg.phase[1])
    }
}

pub fn synthesize(shape: (usize, usize), params: &SinusoidParams) -> KSpaceResult<Array2<f64>> {
    if params.period_x == 0.0 || params.period_y == 0.0 {
        return Err(KSpaceError::DivisionByZero(format!(
            "sinusoid period ({}, {})",
            params.period_x, params.period_y
        )));
    }
    let wx = 2.0 * PI * params.freq_x / params.period_x;
    let wy = 2.0 * PI * params.freq_y / params.period_y;

    Ok(Array2::from_shape_fn(shape, |(x, y)| {
        PI * (wx * x as f64 + params.phase_x + wy * y as f64 + params.phase_y).sin()
    }))
}

/// Basis pattern for the coefficient at a center-origin k-space `position`:
/// period is the array length, frequency the signed offset from center.
pub fn basis_pattern(shape: (usize, usize), position: (isize, isize)) -> KSpaceResult<Array2<f64>> {
    to_absolute_index('x', position.0, shape.0)?;
    to_absolute_index('y', position.1, shape.1)?;
    let params = SinusoidParams::new(
        (shape.0 as f64, shape.1 as f64),
        (position.0 as f64, position.1 as f64),
    );
    synthesize(shape, &params)
}
