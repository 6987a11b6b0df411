// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Reconstructor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reconstructor: runs one configured experiment on a centered spectrum.
//!
//! Stages, in order:
//! 1. Optional rectangular band-pass mask
//! 2. Optional point interference (applied after masking so the spike survives)
//! 3. Center → corner shift
//! 4. Orthonormal inverse FFT
//! 5. Real/imag/magnitude/phase extraction
//!
//! Nothing is cached between calls; the same reconstructor can be reused on
//! any number of spectra of any shape.

use kspace_math::compare::magnitude_difference;
use kspace_math::components::ImageComponents;
use kspace_math::coords::k_max_from_fov;
use kspace_math::fft::{energy, forward, inverse};
use kspace_math::interference::inject_point;
use kspace_math::mask::{apply_mask, region_bounds, retained_count, MaskRegion};
use kspace_math::shift::{inverse_shift, shift};
use kspace_math::sinusoid::{basis_pattern, synthesize, SinusoidParams};
use kspace_types::config::ReconConfig;
use kspace_types::error::KSpaceResult;
use kspace_types::state::CenteredSpectrum;
use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, info};

/// Center-origin k-space → complex image.
pub fn reconstruct_image(spectrum: &Array2<Complex64>) -> Array2<Complex64> {
    inverse(&shift(spectrum))
}

/// Complex image → center-origin k-space. Inverse of [`reconstruct_image`].
pub fn acquire_spectrum(image: &Array2<Complex64>) -> Array2<Complex64> {
    inverse_shift(&forward(image))
}

/// Output of one reconstruction.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Center-origin spectrum after masking and interference.
    pub spectrum: Array2<Complex64>,
    pub image: Array2<Complex64>,
    pub components: ImageComponents,
    pub mask: Option<Array2<bool>>,
    pub region: Option<MaskRegion>,
    /// Basis sinusoid for the configured frequency, mask offset or spike.
    pub basis: Option<Array2<f64>>,
    /// Reciprocal sample spacing per axis.
    pub k_max: (f64, f64),
    /// Image-domain energy; equals spectrum energy by Parseval.
    pub energy: f64,
}

/// Baseline vs configured reconstruction of the same raw data.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub baseline: Reconstruction,
    pub modified: Reconstruction,
    /// `|modified| - |baseline|`, signed.
    pub difference: Array2<f64>,
}

pub struct Reconstructor {
    config: ReconConfig,
}

impl Reconstructor {
    pub fn new(config: ReconConfig) -> KSpaceResult<Self> {
        config.validate()?;
        Ok(Reconstructor { config })
    }

    pub fn from_file(path: &str) -> KSpaceResult<Self> {
        let config = ReconConfig::from_file(path)?;
        Self::new(config)
    }

    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    pub fn reconstruct(&self, raw: &CenteredSpectrum) -> KSpaceResult<Reconstruction> {
        let shape = raw.shape();
        info!(
            name = %self.config.name,
            nx = shape.0,
            ny = shape.1,
            mask = self.config.mask.is_some(),
            interference = self.config.interference.is_some(),
            "Reconstructing spectrum"
        );

        let k_max = (
            k_max_from_fov(self.config.field_of_view[0], shape.0)?,
            k_max_from_fov(self.config.field_of_view[1], shape.1)?,
        );

        let mut spectrum = raw.data().clone();
        let mut mask = None;
        let mut region = None;

        if let Some(mc) = &self.config.mask {
            let offset = (mc.offset[0], mc.offset[1]);
            let half = (mc.half_extent[0], mc.half_extent[1]);
            let r = region_bounds(shape, offset, half)?;
            let m = r.to_mask(shape);
            spectrum = apply_mask(&spectrum, &m)?;
            debug!(
                retained = retained_count(&m),
                total = shape.0 * shape.1,
                "Applied rectangular mask"
            );
            region = Some(r);
            mask = Some(m);
        }

        if let Some(ic) = &self.config.interference {
            let value = Complex64::new(ic.re, ic.im);
            spectrum = inject_point(&spectrum, (ic.position[0], ic.position[1]), value)?;
            debug!(
                x = ic.position[0],
                y = ic.position[1],
                magnitude = value.norm(),
                "Injected point interference"
            );
        }

        let basis = self.basis(shape)?;

        let spectrum_energy = energy(&spectrum);
        let image = reconstruct_image(&spectrum);
        let image_energy = energy(&image);
        debug!(spectrum_energy, image_energy, "Inverse transform complete");

        let components = ImageComponents::from_image(&image);
        Ok(Reconstruction {
            spectrum,
            image,
            components,
            mask,
            region,
            basis,
            k_max,
            energy: image_energy,
        })
    }

    /// Reconstructs `raw` twice, once untouched and once as configured.
    pub fn reconstruct_pair(&self, raw: &CenteredSpectrum) -> KSpaceResult<Comparison> {
        let plain = Reconstructor::new(ReconConfig::new(
            &format!("{}-baseline", self.config.name),
            self.config.field_of_view,
        ))?;
        let baseline = plain.reconstruct(raw)?;
        let modified = self.reconstruct(raw)?;
        let difference = magnitude_difference(&modified.image, &baseline.image)?;
        Ok(Comparison {
            baseline,
            modified,
            difference,
        })
    }

    fn basis(&self, shape: (usize, usize)) -> KSpaceResult<Option<Array2<f64>>> {
        if let Some(sc) = &self.config.sinusoid {
            return synthesize(shape, &SinusoidParams::from(sc)).map(Some);
        }
        if let Some(ic) = &self.config.interference {
            return basis_pattern(shape, (ic.position[0], ic.position[1])).map(Some);
        }
        if let Some(mc) = &self.config.mask {
            if mc.offset != [0, 0] {
                return basis_pattern(shape, (mc.offset[0], mc.offset[1])).map(Some);
            }
        }
        Ok(None)
    }
}
