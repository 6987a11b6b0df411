//! Orthonormal 2D FFT pair around rustfft.
//!
//! rustfft applies no scaling in either direction. Both `forward` and
//! `inverse` divide by sqrt(Nx * Ny), so:
//! - `inverse(forward(x)) == x` and `forward(inverse(x)) == x` to rounding
//! - `energy(forward(x)) == energy(x)` (Parseval)
//!
//! Matches `numpy.fft.fft2(x, norm="ortho")` / `ifft2(x, norm="ortho")`.
//! Inputs are corner-origin; run [`crate::shift::shift`] first on centered k-space.

use ndarray::{Array2, Axis};
use num_complex::Complex64;
use rustfft::{FftDirection, FftPlanner};

fn transform(input: &Array2<Complex64>, direction: FftDirection) -> Array2<Complex64> {
    let (nx, ny) = input.dim();
    let mut data = input.to_owned();
    if nx == 0 || ny == 0 {
        return data;
    }

    let mut planner = FftPlanner::new();
    for (axis, n) in [(Axis(0), nx), (Axis(1), ny)] {
        let fft = planner.plan_fft(n, direction);
        let mut buffer = vec![Complex64::new(0.0, 0.0); n];
        let mut scratch = vec![Complex64::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        // Lanes along an axis are strided for axis 0, so copy through a buffer
        for mut lane in data.lanes_mut(axis) {
            for (b, v) in buffer.iter_mut().zip(lane.iter()) {
                *b = *v;
            }
            fft.process_with_scratch(&mut buffer, &mut scratch);
            for (v, b) in lane.iter_mut().zip(buffer.iter()) {
                *v = *b;
            }
        }
    }

    let scale = 1.0 / ((nx * ny) as f64).sqrt();
    data.mapv_inplace(|c| c * scale);
    data
}

/// Orthonormal forward 2D DFT (kernel `exp(-2πi k·x / N)`).
pub fn forward(input: &Array2<Complex64>) -> Array2<Complex64> {
    transform(input, FftDirection::Forward)
}

/// Orthonormal inverse 2D DFT (kernel `exp(+2πi k·x / N)`).
pub fn inverse(input: &Array2<Complex64>) -> Array2<Complex64> {
    transform(input, FftDirection::Inverse)
}

/// Sum of squared magnitudes.
pub fn energy(input: &Array2<Complex64>) -> f64 {
    input.iter().map(|c| c.norm_sqr()).sum()
}
