//! CIE Standard Illuminants
//!
//! Chromaticity coordinates for the CIE 1931 (2°) and CIE 1964 (10°)
//! standard observers, plus the correlated color temperature.
//!
//! - A: incandescent / tungsten
//! - D50: horizon light, the ICC profile connection space illuminant
//! - D65: noon daylight, television and sRGB

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{WhitePoint, Xyz};
use crate::{Error, Result};

/// CIE standard observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Observer {
    /// CIE 1931 2° standard observer
    #[default]
    Cie1931,
    /// CIE 1964 10° supplementary standard observer
    Cie1964,
}

/// Chromaticity coordinates (x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tristimulus values of this chromaticity at Y = 1.0
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
    }
}

/// One row of the illuminant table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlluminantEntry {
    pub name: &'static str,
    /// 2° observer chromaticity
    pub cie1931: Chromaticity,
    /// 10° observer chromaticity
    pub cie1964: Chromaticity,
    /// Correlated color temperature in kelvin
    pub cct_kelvin: u32,
}

/// Standard illuminant table, in the order of [`Illuminant`]
pub static ILLUMINANTS: [IlluminantEntry; 3] = [
    IlluminantEntry {
        name: "A",
        cie1931: Chromaticity::new(0.44758, 0.40745),
        cie1964: Chromaticity::new(0.45117, 0.40594),
        cct_kelvin: 2856,
    },
    IlluminantEntry {
        name: "D50",
        cie1931: Chromaticity::new(0.34567, 0.35850),
        cie1964: Chromaticity::new(0.34773, 0.35962),
        cct_kelvin: 5003,
    },
    IlluminantEntry {
        name: "D65",
        cie1931: Chromaticity::new(0.31272, 0.32903),
        cie1964: Chromaticity::new(0.31382, 0.33100),
        cct_kelvin: 6504,
    },
];

/// A named standard illuminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Illuminant {
    A,
    D50,
    D65,
}

impl Illuminant {
    /// All illuminants in table order
    pub const ALL: [Illuminant; 3] = [Illuminant::A, Illuminant::D50, Illuminant::D65];

    /// The table row for this illuminant
    pub fn entry(&self) -> &'static IlluminantEntry {
        match self {
            Illuminant::A => &ILLUMINANTS[0],
            Illuminant::D50 => &ILLUMINANTS[1],
            Illuminant::D65 => &ILLUMINANTS[2],
        }
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    pub fn chromaticity(&self, observer: Observer) -> Chromaticity {
        let entry = self.entry();
        match observer {
            Observer::Cie1931 => entry.cie1931,
            Observer::Cie1964 => entry.cie1964,
        }
    }

    pub fn cct_kelvin(&self) -> u32 {
        self.entry().cct_kelvin
    }

    /// Reference white (Y = 1.0) for this illuminant and observer
    pub fn white_point(&self, observer: Observer) -> WhitePoint {
        WhitePoint {
            xyz: self.chromaticity(observer).to_xyz(),
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Illuminant::A),
            "D50" => Ok(Illuminant::D50),
            "D65" => Ok(Illuminant::D65),
            _ => Err(Error::UnknownIlluminant(s.to_string())),
        }
    }
}
