//! # benekli-core
//!
//! Colorimetric core of the benekli soft proofing tool.
//!
//! The ICC transform pipeline itself (profile parsing, rendering intents,
//! black point compensation) is left to an external color management
//! library. This crate covers what happens around it:
//!
//! - **Conversions**: XYZ, normalized XYZ, ICC PCS XYZ, xyY, Lab, LCh
//! - **Illuminants**: A, D50 and D65 for the 2° and 10° observers
//! - **Color difference**: CIE76, CIE94, CIEDE2000, CMC l:c
//! - **Difference maps**: per-pixel delta E between an image and its proof
//!
//! ## Quick Start
//!
//! ```
//! use benekli_core::{Lab, WhitePoint, Xyz, delta_e_2000};
//!
//! let original = Lab::from_xyz(Xyz::new(0.41, 0.35, 0.12), &WhitePoint::PCS);
//! let proofed = Lab::from_xyz(Xyz::new(0.40, 0.35, 0.13), &WhitePoint::PCS);
//!
//! let de = delta_e_2000(original, proofed);
//! assert!(de > 0.0);
//! ```
//!
//! All functions are pure; the illuminant table and PCS white are immutable
//! statics, so everything here is safe to call from any number of threads.

pub mod batch;
pub mod color;
pub mod delta_e;
pub mod difference;
pub mod error;

pub use color::{
    Chromaticity, Illuminant, Lab, Lch, Observer, PCS_WHITE, WhitePoint, XyY, Xyz,
    nxyz_to_pcs_xyz, pcs_xyz_to_nxyz,
};
pub use delta_e::{
    Cie94Params, CmcParams, DeltaEFormula, delta_e_2000, delta_e_76, delta_e_94,
    delta_e_94_graphic_arts, delta_e_94_textiles, delta_e_cmc,
};
pub use difference::{DeltaEStats, DifferenceMap, DifferenceOptions, difference_map};
pub use error::{Error, Result};

/// Version of benekli-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
