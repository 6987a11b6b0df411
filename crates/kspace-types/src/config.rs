// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{KSpaceError, KSpaceResult};

/// One reconstruction experiment.
/// Every optional block is skipped by the pipeline when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconConfig {
    pub name: String,
    /// Physical field of view per axis [x, y], same length unit as K_max^-1.
    pub field_of_view: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interference: Option<InterferenceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sinusoid: Option<SinusoidConfig>,
}

/// Rectangular band selection, center-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// [OFFSETx, OFFSETy] relative to the spectrum center.
    #[serde(default)]
    pub offset: [isize; 2],
    /// [Kx_half_side, Ky_half_side], inclusive.
    pub half_extent: [usize; 2],
}

/// Single-coefficient overwrite, center-origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterferenceConfig {
    pub position: [isize; 2],
    pub re: f64,
    #[serde(default)]
    pub im: f64,
}

/// Basis sinusoid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinusoidConfig {
    pub period: [f64; 2],
    pub freq: [f64; 2],
    #[serde(default)]
    pub phase: [f64; 2],
}

impl ReconConfig {
    /// Plain reconstruction: no mask, no interference, no basis render.
    pub fn new(name: &str, field_of_view: [f64; 2]) -> Self {
        ReconConfig {
            name: name.to_string(),
            field_of_view,
            mask: None,
            interference: None,
            sinusoid: None,
        }
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> KSpaceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KSpaceResult<()> {
        for (axis, fov) in ['x', 'y'].iter().zip(self.field_of_view) {
            if !fov.is_finite() || fov <= 0.0 {
                return Err(KSpaceError::ConfigError(format!(
                    "field_of_view on axis {axis} must be finite and > 0, got {fov}"
                )));
            }
        }
        if let Some(interference) = &self.interference {
            if !interference.re.is_finite() || !interference.im.is_finite() {
                return Err(KSpaceError::ConfigError(
                    "interference value must be finite".to_string(),
                ));
            }
        }
        if let Some(sinusoid) = &self.sinusoid {
            if sinusoid.period.iter().any(|&p| p == 0.0) {
                return Err(KSpaceError::DivisionByZero(
                    "sinusoid period must be non-zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/kspace-types/ at compile time,
    /// so the workspace root is two levels up.
    fn config_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_default_config() {
        let cfg = ReconConfig::from_file(&config_path("configs/default_recon.json")).unwrap();
        assert_eq!(cfg.name, "Brain-Slice-Baseline");
        assert!((cfg.field_of_view[0] - 0.24).abs() < 1e-12);
        assert!(cfg.mask.is_none());
        assert!(cfg.interference.is_none());
    }

    #[test]
    fn test_load_band_pass_config() {
        let cfg = ReconConfig::from_file(&config_path("configs/band_pass.json")).unwrap();
        let mask = cfg.mask.unwrap();
        assert_eq!(mask.offset, [0, 0]);
        assert_eq!(mask.half_extent, [16, 16]);
        let sinusoid = cfg.sinusoid.unwrap();
        assert_eq!(sinusoid.phase, [0.0, 0.0]);
    }

    #[test]
    fn test_load_interference_config() {
        let cfg = ReconConfig::from_file(&config_path("configs/spike_artifact.json")).unwrap();
        let spike = cfg.interference.unwrap();
        assert_eq!(spike.position, [5, -3]);
        assert!((spike.re - 5000.0).abs() < 1e-12);
        assert!((spike.im - 5000.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ReconConfig::from_file(&config_path("configs/does_not_exist.json")).unwrap_err();
        assert!(matches!(err, KSpaceError::Io(_)));
    }

    #[test]
    fn test_rejects_non_positive_fov() {
        let cfg = ReconConfig::new("bad", [0.24, 0.0]);
        assert!(matches!(cfg.validate(), Err(KSpaceError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_zero_period() {
        let json = r#"{
            "name": "zero-period",
            "field_of_view": [0.2, 0.2],
            "sinusoid": { "period": [0.0, 4.0], "freq": [1.0, 0.0] }
        }"#;
        let cfg: ReconConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(cfg.validate(), Err(KSpaceError::DivisionByZero(_))));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut cfg = ReconConfig::new("roundtrip", [0.25, 0.2]);
        cfg.mask = Some(MaskConfig {
            offset: [2, -1],
            half_extent: [3, 4],
        });
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(!json.contains("interference"));
        let cfg2: ReconConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.name, cfg2.name);
        assert_eq!(cfg.mask, cfg2.mask);
        assert!(cfg2.interference.is_none());
    }
}
