//! Reference whites
//!
//! A white point is the XYZ of the "white" that Lab and xyY are computed
//! against. Components must be strictly positive since every conversion
//! divides by them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Xyz;
use crate::{Error, Result};

/// ICC.1:2010 PCS illuminant (D50), normalized so Y = 1.0
pub const PCS_WHITE: Xyz = Xyz::new(0.9642, 1.0, 0.8249);

/// ICC PCS illuminant scaled so Y = 100.0
pub const PCS_WHITE_ABSOLUTE: Xyz = Xyz::new(96.42, 100.0, 82.49);

/// A validated reference white
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WhitePoint {
    /// CIE XYZ coordinates of the white
    pub xyz: Xyz,
}

impl WhitePoint {
    /// The ICC Profile Connection Space white
    pub const PCS: WhitePoint = WhitePoint { xyz: PCS_WHITE };

    /// Create a white point, rejecting zero, negative or non-finite components
    pub fn new(xyz: Xyz) -> Result<Self> {
        let valid = [xyz.x, xyz.y, xyz.z]
            .iter()
            .all(|c| c.is_finite() && *c > 0.0);

        if !valid {
            return Err(Error::domain(
                "white_point",
                "components must be finite and greater than zero",
            ));
        }

        Ok(Self { xyz })
    }

    /// Get the conventional chromaticity coordinates (x, y) with y = Y / (X + Y + Z)
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.xyz.x + self.xyz.y + self.xyz.z;
        (self.xyz.x / sum, self.xyz.y / sum)
    }
}

impl TryFrom<Xyz> for WhitePoint {
    type Error = Error;

    fn try_from(xyz: Xyz) -> Result<Self> {
        Self::new(xyz)
    }
}

/// Check if two white points are approximately equal
pub fn white_points_equal(a: &WhitePoint, b: &WhitePoint, epsilon: f64) -> bool {
    a.xyz.approx_eq(&b.xyz, epsilon)
}
