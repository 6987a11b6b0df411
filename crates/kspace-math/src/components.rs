//! Elementwise real views of a complex image for display.

use ndarray::Array2;
use num_complex::Complex64;

/// Four-quadrant phase, exactly 0 at the complex origin (either zero sign).
#[inline]
pub fn phase_of(c: Complex64) -> f64 {
    if c.re == 0.0 && c.im == 0.0 {
        0.0
    } else {
        c.im.atan2(c.re)
    }
}

pub fn real_part(image: &Array2<Complex64>) -> Array2<f64> {
    image.mapv(|c| c.re)
}

pub fn imag_part(image: &Array2<Complex64>) -> Array2<f64> {
    image.mapv(|c| c.im)
}

pub fn magnitude(image: &Array2<Complex64>) -> Array2<f64> {
    image.mapv(|c| c.norm())
}

pub fn phase(image: &Array2<Complex64>) -> Array2<f64> {
    image.mapv(phase_of)
}

/// Real, imaginary, magnitude and phase of one image.
#[derive(Debug, Clone)]
pub struct ImageComponents {
    pub real: Array2<f64>,
    pub imag: Array2<f64>,
    pub magnitude: Array2<f64>,
    pub phase: Array2<f64>,
}

impl ImageComponents {
    pub fn from_image(image: &Array2<Complex64>) -> Self {
        ImageComponents {
            real: real_part(image),
            imag: imag_part(image),
            magnitude: magnitude(image),
            phase: phase(image),
        }
    }
}
