//! Conversion between center-origin and corner-origin layouts.
//!
//! Convention matches numpy:
//! - `shift` is `numpy.fft.ifftshift` (center → corner), rotates each axis by `n / 2`
//! - `inverse_shift` is `numpy.fft.fftshift` (corner → center), rotates by `n - n / 2`
//!
//! For odd lengths the two rotations differ by one element, so
//! `shift(shift(a)) != a` there while `shift(inverse_shift(a)) == a` always holds.
//! Both are exact permutations; values are cloned, never touched.

use ndarray::Array2;

pub use kspace_types::state::{to_absolute_index, to_centered_position};

fn rotate<T: Clone>(input: &Array2<T>, rx: usize, ry: usize) -> Array2<T> {
    let (nx, ny) = input.dim();
    Array2::from_shape_fn((nx, ny), |(ix, iy)| {
        input[[(ix + rx) % nx, (iy + ry) % ny]].clone()
    })
}

/// Center-origin → corner-origin. Output `[[0, 0]]` is input `[[Nx/2, Ny/2]]`.
pub fn shift<T: Clone>(input: &Array2<T>) -> Array2<T> {
    let (nx, ny) = input.dim();
    rotate(input, nx / 2, ny / 2)
}

/// Corner-origin → center-origin. Output `[[Nx/2, Ny/2]]` is input `[[0, 0]]`.
pub fn inverse_shift<T: Clone>(input: &Array2<T>) -> Array2<T> {
    let (nx, ny) = input.dim();
    rotate(input, nx - nx / 2, ny - ny / 2)
}
