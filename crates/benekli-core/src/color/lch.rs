//! CIE LCh(ab): CIELAB in polar coordinates
//!
//! Lightness is shared with Lab; chroma is the distance from the neutral
//! axis and hue the angle in the a*b* plane, in degrees [0, 360).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Lab;

/// CIE LCh(ab) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma (>= 0)
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl Lch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Back to rectangular a*b*
    #[inline]
    pub fn to_lab(&self) -> Lab {
        let (sin_h, cos_h) = self.h.to_radians().sin_cos();
        Lab::new(self.l, self.c * cos_h, self.c * sin_h)
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        lab.to_lch()
    }
}

impl From<[f64; 3]> for Lch {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lch> for [f64; 3] {
    fn from(lch: Lch) -> Self {
        lch.to_array()
    }
}
