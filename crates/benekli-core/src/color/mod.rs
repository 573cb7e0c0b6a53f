//! Color space types and conversions
//!
//! This module provides:
//! - CIE XYZ and xyY
//! - ICC PCS XYZ scaling against a media white
//! - CIELAB (L*a*b*) and its polar form LCh
//! - Standard illuminants and white points

pub mod illuminant;
pub mod lab;
pub mod lch;
pub mod pcs;
pub mod white_point;
pub mod xyy;
pub mod xyz;

pub use illuminant::{Chromaticity, ILLUMINANTS, Illuminant, IlluminantEntry, Observer};
pub use lab::Lab;
pub use lch::Lch;
pub use pcs::{nxyz_to_pcs_xyz, pcs_xyz_to_nxyz};
pub use white_point::{PCS_WHITE, PCS_WHITE_ABSOLUTE, WhitePoint, white_points_equal};
pub use xyy::XyY;
pub use xyz::Xyz;
