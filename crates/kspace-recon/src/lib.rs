// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — K-Space Reconstruction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-slice Cartesian reconstruction pipeline.
//!
//! raw spectrum → mask / interference → shift → inverse FFT → image components

pub mod reconstructor;
