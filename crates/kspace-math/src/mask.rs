// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Frequency Mask
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rectangular band selection over a center-origin spectrum.
//!
//! The region is `[C + OFFSET - K, C + OFFSET + K]` on each axis, inclusive,
//! with `C` the truncated center. Bounds outside `[0, n)` are rejected, never clamped.

use kspace_types::error::{ensure_non_empty, ensure_same_shape, KSpaceError, KSpaceResult};
use kspace_types::state::center_index;
use ndarray::{Array2, Zip};
use num_complex::Complex64;

/// Inclusive absolute index bounds of a rectangular mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskRegion {
    pub x: (usize, usize),
    pub y: (usize, usize),
}

impl MaskRegion {
    pub fn contains(&self, ix: usize, iy: usize) -> bool {
        ix >= self.x.0 && ix <= self.x.1 && iy >= self.y.0 && iy <= self.y.1
    }

    /// Number of coefficients inside the region, 0 if either axis is inverted.
    pub fn area(&self) -> usize {
        let span = |(lo, hi): (usize, usize)| if hi < lo { 0 } else { hi - lo + 1 };
        span(self.x) * span(self.y)
    }

    /// Boolean mask of `shape`, `true` inside the region.
    pub fn to_mask(&self, shape: (usize, usize)) -> Array2<bool> {
        Array2::from_shape_fn(shape, |(ix, iy)| self.contains(ix, iy))
    }
}

fn axis_bounds(axis: char, n: usize, offset: isize, half: usize) -> KSpaceResult<(usize, usize)> {
    let out_of_range = |index: isize| KSpaceError::OutOfRange {
        axis,
        index,
        len: n,
    };
    // Sums that leave isize are reported at the saturated edge
    let center = (center_index(n) as isize)
        .checked_add(offset)
        .ok_or_else(|| out_of_range(if offset < 0 { isize::MIN } else { isize::MAX }))?;
    let half = isize::try_from(half).map_err(|_| out_of_range(isize::MIN))?;

    let lo = center.checked_sub(half).ok_or_else(|| out_of_range(isize::MIN))?;
    if lo < 0 {
        return Err(out_of_range(lo));
    }
    let hi = center.checked_add(half).ok_or_else(|| out_of_range(isize::MAX))?;
    if hi >= n as isize {
        return Err(out_of_range(hi));
    }
    Ok((lo as usize, hi as usize))
}

/// Absolute bounds for a mask centered at `offset` (center-origin) with
/// inclusive half-extents `half_extent`.
pub fn region_bounds(
    shape: (usize, usize),
    offset: (isize, isize),
    half_extent: (usize, usize),
) -> KSpaceResult<MaskRegion> {
    ensure_non_empty(shape)?;
    Ok(MaskRegion {
        x: axis_bounds('x', shape.0, offset.0, half_extent.0)?,
        y: axis_bounds('y', shape.1, offset.1, half_extent.1)?,
    })
}

/// Boolean mask of `shape`, `true` inside the rectangle.
pub fn build_rectangular_mask(
    shape: (usize, usize),
    offset: (isize, isize),
    half_extent: (usize, usize),
) -> KSpaceResult<Array2<bool>> {
    Ok(region_bounds(shape, offset, half_extent)?.to_mask(shape))
}

/// Copy of `spectrum` with every coefficient under a `false` mask entry zeroed.
pub fn apply_mask(
    spectrum: &Array2<Complex64>,
    mask: &Array2<bool>,
) -> KSpaceResult<Array2<Complex64>> {
    ensure_same_shape(spectrum.dim(), mask.dim())?;
    Ok(Zip::from(spectrum)
        .and(mask)
        .map_collect(|&s, &keep| if keep { s } else { Complex64::new(0.0, 0.0) }))
}

pub fn retained_count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&keep| keep).count()
}
