//! CIE XYZ tristimulus values
//!
//! XYZ is the hub every other space in this crate converts through.
//! Values are either normalized (white Y = 1.0) or absolute (white Y = 100.0);
//! the type does not track which, callers do.

use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{WhitePoint, XyY};
use crate::{Error, Result};

/// CIE 1931 XYZ tristimulus values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True for absolute black (all three components exactly zero)
    #[inline]
    pub fn is_black(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Normalize so Y = 1.0
    #[inline]
    pub fn normalize(&self) -> Self {
        if self.y > 0.0 {
            self.scale(1.0 / self.y)
        } else {
            *self
        }
    }

    /// Convert to xyY.
    ///
    /// The second chromaticity coordinate follows the ICC formulation this
    /// crate reproduces: it is `Z / (X + Y + Z)`, not the textbook
    /// `Y / (X + Y + Z)`. Luminance is passed through unchanged.
    ///
    /// Absolute black has no chromaticity of its own, so the white point's
    /// chromaticity is reported instead (with luminance still 0).
    pub fn to_xyy(&self, white: &WhitePoint) -> Result<XyY> {
        let chroma_source = if self.is_black() { white.xyz } else { *self };

        let sum = chroma_source.x + chroma_source.y + chroma_source.z;
        if sum == 0.0 {
            return Err(Error::domain("xyz_to_xyy", "X + Y + Z is zero"));
        }

        Ok(XyY::new(
            chroma_source.x / sum,
            chroma_source.z / sum,
            self.y,
        ))
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
