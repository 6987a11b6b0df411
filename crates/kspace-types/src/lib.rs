// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — K-Space Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Data model shared by the k-space reconstruction crates.

pub mod config;
pub mod error;
pub mod state;
