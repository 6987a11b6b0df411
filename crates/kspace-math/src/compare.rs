// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Spectrum Comparator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Signed magnitude difference between two reconstructions.

use kspace_types::error::{ensure_same_shape, KSpaceResult};
use ndarray::{Array2, Zip};
use num_complex::Complex64;

/// Per-pixel `|a| - |b|`. Positive where `a` is brighter.
pub fn magnitude_difference(
    image_a: &Array2<Complex64>,
    image_b: &Array2<Complex64>,
) -> KSpaceResult<Array2<f64>> {
    ensure_same_shape(image_a.dim(), image_b.dim())?;
    Ok(Zip::from(image_a)
        .and(image_b)
        .map_collect(|a, b| a.norm() - b.norm()))
}

/// Largest `||a| - |b||` over all pixels.
pub fn max_abs_difference(
    image_a: &Array2<Complex64>,
    image_b: &Array2<Complex64>,
) -> KSpaceResult<f64> {
    let diff = magnitude_difference(image_a, image_b)?;
    Ok(diff.iter().fold(0.0_f64, |acc, d| acc.max(d.abs())))
}
