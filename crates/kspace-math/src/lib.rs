// ─────────────────────────────────────────────────────────────────────
// SCPN K-Space Core — K-Space Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical core of the k-space reconstruction engine.
//!
//! All functions are pure: they borrow their inputs and return new arrays.

pub mod compare;
pub mod components;
pub mod coords;
pub mod fft;
pub mod interference;
pub mod mask;
pub mod shift;
pub mod sinusoid;
