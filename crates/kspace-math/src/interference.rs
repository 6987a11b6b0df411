// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Interference Injector
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic point interference in k-space.

use kspace_types::error::{ensure_non_empty, KSpaceResult};
use kspace_types::state::to_absolute_index;
use ndarray::Array2;
use num_complex::Complex64;

/// Copy of `spectrum` with the coefficient at center-origin `position`
/// overwritten by `value`.
pub fn inject_point(
    spectrum: &Array2<Complex64>,
    position: (isize, isize),
    value: Complex64,
) -> KSpaceResult<Array2<Complex64>> {
    let (nx, ny) = spectrum.dim();
    ensure_non_empty((nx, ny))?;
    let ix = to_absolute_index('x', position.0, nx)?;
    let iy = to_absolute_index('y', position.1, ny)?;

    let mut out = spectrum.clone();
    out[[ix, iy]] = value;
    Ok(out)
}
