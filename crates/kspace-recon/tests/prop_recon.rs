// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Property-Based Tests (proptest) for kspace-recon
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pipeline-level properties and config-driven runs.

use kspace_math::fft::energy;
use kspace_recon::reconstructor::{acquire_spectrum, reconstruct_image, Reconstructor};
use kspace_types::config::ReconConfig;
use kspace_types::state::CenteredSpectrum;
use ndarray::Array2;
use num_complex::Complex64;
use proptest::prelude::*;
use std::path::PathBuf;

fn config_path(relative: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(relative)
        .to_string_lossy()
        .to_string()
}

fn disk_phantom(n: usize) -> CenteredSpectrum {
    let c = n as f64 / 2.0;
    let r = n as f64 / 3.0;
    let image = Array2::from_shape_fn((n, n), |(x, y)| {
        let d = ((x as f64 - c).powi(2) + (y as f64 - c).powi(2)).sqrt();
        Complex64::new(if d < r { 1.0 } else { 0.0 }, 0.0)
    });
    CenteredSpectrum::new(acquire_spectrum(&image)).unwrap()
}

proptest! {
    /// Acquire then reconstruct returns the image, any shape.
    #[test]
    fn acquire_reconstruct_roundtrip(nx in 1usize..20, ny in 1usize..20, seed in -3.0f64..3.0) {
        let image = Array2::from_shape_fn((nx, ny), |(x, y)| {
            Complex64::new((seed + x as f64).cos(), (seed * y as f64).sin())
        });
        let back = reconstruct_image(&acquire_spectrum(&image));
        for (a, b) in image.iter().zip(back.iter()) {
            prop_assert!((a - b).norm() < 1e-10);
        }
    }

    /// Pipeline energy never exceeds the raw energy under a mask.
    #[test]
    fn masked_energy_bounded(k in 0usize..8, ox in -4isize..=3) {
        let raw = disk_phantom(24);
        let cfg: ReconConfig = serde_json::from_str(&format!(r#"{{
            "name": "prop-mask",
            "field_of_view": [0.24, 0.24],
            "mask": {{ "offset": [{ox}, 0], "half_extent": [{k}, {k}] }}
        }}"#)).unwrap();
        let recon = Reconstructor::new(cfg).unwrap().reconstruct(&raw).unwrap();
        prop_assert!(recon.energy <= energy(raw.data()) + 1e-9);
        prop_assert!((recon.energy - energy(&recon.spectrum)).abs() < 1e-9 * recon.energy.max(1.0));
    }
}

#[test]
fn test_default_config_reconstructs_phantom() {
    let raw = disk_phantom(64);
    let recon = Reconstructor::from_file(&config_path("configs/default_recon.json"))
        .unwrap()
        .reconstruct(&raw)
        .unwrap();
    // Center pixel of the disk
    assert!((recon.components.magnitude[[32, 32]] - 1.0).abs() < 1e-10);
    assert!(recon.components.magnitude[[0, 0]] < 1e-10);
    assert!((recon.k_max.0 - 64.0 / 0.24).abs() < 1e-9);
}

#[test]
fn test_band_pass_config_blurs_phantom() {
    let raw = disk_phantom(64);
    let recon = Reconstructor::from_file(&config_path("configs/band_pass.json"))
        .unwrap()
        .reconstruct(&raw)
        .unwrap();
    let region = recon.region.unwrap();
    assert_eq!(region.x, (16, 48));
    assert_eq!(region.y, (16, 48));
    assert!(recon.basis.is_some());
    assert!(recon.energy < energy(raw.data()));
}

#[test]
fn test_spike_config_overlays_stripes() {
    let raw = disk_phantom(64);
    let cmp = Reconstructor::from_file(&config_path("configs/spike_artifact.json"))
        .unwrap()
        .reconstruct_pair(&raw)
        .unwrap();
    let spike = Complex64::new(5000.0, 5000.0);
    assert_eq!(cmp.modified.spectrum[[37, 29]], spike);
    assert_eq!(cmp.baseline.spectrum, *raw.data());
    // Spike amplitude |v| / 64 swamps the unit disk everywhere
    assert!(cmp.difference.iter().all(|&d| d > 100.0));
}
