// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spectrum data holder and the two origin conventions.
//!
//! Corner-origin: index `[[0, 0]]` holds zero spatial frequency. This is what
//! the transform pair consumes and produces.
//!
//! Center-origin: zero frequency sits at `(Nx/2, Ny/2)`. Positions in this
//! convention are signed offsets from that center and are what an operator
//! uses for masks and interference locations.
//!
//! Axis 0 is x (length Nx), axis 1 is y (length Ny).

use crate::error::{ensure_non_empty, KSpaceError, KSpaceResult};
use ndarray::Array2;
use num_complex::Complex64;

/// Integer center of an axis of length `n`, truncated toward zero.
///
/// Every cast from the real-valued center to an index goes through here.
#[inline]
pub fn center_index(n: usize) -> usize {
    n / 2
}

/// Real-valued center `n / 2` (non-integer for odd `n`).
#[inline]
pub fn center_coordinate(n: usize) -> f64 {
    n as f64 / 2.0
}

/// Converts a center-origin position on an axis of length `n` into an
/// absolute array index.
pub fn to_absolute_index(axis: char, position: isize, n: usize) -> KSpaceResult<usize> {
    let index = (center_index(n) as isize)
        .checked_add(position)
        .ok_or(KSpaceError::OutOfRange {
            axis,
            index: if position < 0 { isize::MIN } else { isize::MAX },
            len: n,
        })?;
    if index < 0 || index >= n as isize {
        return Err(KSpaceError::OutOfRange {
            axis,
            index,
            len: n,
        });
    }
    Ok(index as usize)
}

/// Inverse of [`to_absolute_index`].
pub fn to_centered_position(index: usize, n: usize) -> isize {
    index as isize - center_index(n) as isize
}

/// Continuous spatial-frequency coordinate, cycles per unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialFrequency {
    pub kx: f64,
    pub ky: f64,
}

/// Raw k-space with zero frequency at the array center.
///
/// The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredSpectrum {
    data: Array2<Complex64>,
}

impl CenteredSpectrum {
    pub fn new(data: Array2<Complex64>) -> KSpaceResult<Self> {
        ensure_non_empty(data.dim())?;
        Ok(CenteredSpectrum { data })
    }

    pub fn zeros(nx: usize, ny: usize) -> KSpaceResult<Self> {
        Self::new(Array2::zeros((nx, ny)))
    }

    /// `(Nx, Ny)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Real-valued `(Cx, Cy)`.
    pub fn center(&self) -> (f64, f64) {
        let (nx, ny) = self.shape();
        (center_coordinate(nx), center_coordinate(ny))
    }

    /// Truncated `(Cx, Cy)` as array indices.
    pub fn center_index(&self) -> (usize, usize) {
        let (nx, ny) = self.shape();
        (center_index(nx), center_index(ny))
    }

    /// Absolute index for a center-origin position.
    pub fn absolute_index(&self, position: (isize, isize)) -> KSpaceResult<(usize, usize)> {
        let (nx, ny) = self.shape();
        Ok((
            to_absolute_index('x', position.0, nx)?,
            to_absolute_index('y', position.1, ny)?,
        ))
    }

    /// Coefficient at a center-origin position.
    pub fn get_centered(&self, position: (isize, isize)) -> KSpaceResult<Complex64> {
        let (ix, iy) = self.absolute_index(position)?;
        Ok(self.data[[ix, iy]])
    }

    pub fn data(&self) -> &Array2<Complex64> {
        &self.data
    }

    pub fn into_inner(self) -> Array2<Complex64> {
        self.data
    }
}
