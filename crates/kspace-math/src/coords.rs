// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — K-Space Coordinates
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pixel index → spatial frequency.
//!
//! `K_max = 1 / (FOV / N)` is the reciprocal sample spacing, and
//! `K = K_max/2 · (i − C) / C` with real-valued center `C = N / 2`.
//! Index 0 maps to `-K_max/2` (Nyquist), the center index to 0.

use kspace_types::error::{KSpaceError, KSpaceResult};
use kspace_types::state::{center_coordinate, SpatialFrequency};
use ndarray::Array1;

/// Reciprocal of the sample spacing `fov / n`.
pub fn k_max_from_fov(fov: f64, n: usize) -> KSpaceResult<f64> {
    if fov == 0.0 || n == 0 {
        return Err(KSpaceError::DivisionByZero(format!(
            "sample spacing fov / n with fov = {fov}, n = {n}"
        )));
    }
    Ok(n as f64 / fov)
}

/// Spatial frequency of absolute `index` on an axis of length `n`.
pub fn spatial_frequency(index: usize, n: usize, k_max: f64) -> KSpaceResult<f64> {
    let center = center_coordinate(n);
    if center == 0.0 {
        return Err(KSpaceError::DivisionByZero(
            "axis center is zero (empty axis)".to_string(),
        ));
    }
    if index >= n {
        return Err(KSpaceError::OutOfRange {
            axis: '?',
            index: index as isize,
            len: n,
        });
    }
    Ok(k_max / 2.0 * (index as f64 - center) / center)
}

/// `(Kx, Ky)` for an absolute index pair.
pub fn spatial_frequency_2d(
    index: (usize, usize),
    shape: (usize, usize),
    k_max: (f64, f64),
) -> KSpaceResult<SpatialFrequency> {
    let kx = spatial_frequency(index.0, shape.0, k_max.0).map_err(|e| relabel(e, 'x'))?;
    let ky = spatial_frequency(index.1, shape.1, k_max.1).map_err(|e| relabel(e, 'y'))?;
    Ok(SpatialFrequency { kx, ky })
}

/// Frequency of every index on one axis.
pub fn frequency_axis(n: usize, k_max: f64) -> KSpaceResult<Array1<f64>> {
    let center = center_coordinate(n);
    if center == 0.0 {
        return Err(KSpaceError::DivisionByZero(
            "axis center is zero (empty axis)".to_string(),
        ));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        k_max / 2.0 * (i as f64 - center) / center
    }))
}

fn relabel(err: KSpaceError, axis: char) -> KSpaceError {
    match err {
        KSpaceError::OutOfRange { index, len, .. } => KSpaceError::OutOfRange { axis, index, len },
        other => other,
    }
}
