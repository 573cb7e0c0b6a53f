//! xyY chromaticity plus luminance

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Xyz;
use crate::{Error, Result};

/// Two chromaticity coordinates and a luminance.
///
/// See [`Xyz::to_xyy`] for how `y` is defined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XyY {
    /// First chromaticity coordinate, X / (X + Y + Z)
    pub x: f64,
    /// Second chromaticity coordinate
    pub y: f64,
    /// Luminance (Y tristimulus value)
    pub luminance: f64,
}

impl XyY {
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }

    /// Convert back to XYZ: `X = Y/y * x`, `Z = Y/y * (1 - x - y)`.
    ///
    /// Fails when `y` is zero.
    pub fn to_xyz(&self) -> Result<Xyz> {
        if self.y == 0.0 {
            return Err(Error::domain("xyy_to_xyz", "y chromaticity is zero"));
        }

        let ratio = self.luminance / self.y;
        Ok(Xyz::new(
            ratio * self.x,
            self.luminance,
            ratio * (1.0 - self.x - self.y),
        ))
    }
}

impl From<[f64; 3]> for XyY {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<XyY> for [f64; 3] {
    fn from(xyy: XyY) -> Self {
        xyy.to_array()
    }
}
