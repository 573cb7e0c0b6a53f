//! CIE94 color difference
//!
//! Weights chroma and hue differences by the chroma of the first
//! (reference) color, so the formula is not symmetric in general.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::delta_e::hue_difference;

/// Application-specific CIE94 weighting constants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cie94Params {
    /// Lightness weight
    pub k_l: f64,
    /// Chroma weighting slope
    pub k1: f64,
    /// Hue weighting slope
    pub k2: f64,
}

impl Cie94Params {
    /// Graphic arts weighting
    pub const GRAPHIC_ARTS: Cie94Params = Cie94Params {
        k_l: 1.0,
        k1: 0.045,
        k2: 0.015,
    };

    /// Textiles weighting
    pub const TEXTILES: Cie94Params = Cie94Params {
        k_l: 2.0,
        k1: 0.048,
        k2: 0.014,
    };
}

impl Default for Cie94Params {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

/// Calculate the CIE94 color difference with `lab1` as the reference color
pub fn delta_e_94(lab1: Lab, lab2: Lab, params: Cie94Params) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();

    let delta_l = lab1.l - lab2.l;
    let delta_c = c1 - c2;
    let delta_h = hue_difference(lab1, lab2, delta_c);

    // kC = kH = 1
    let s_l = 1.0;
    let s_c = 1.0 + params.k1 * c1;
    let s_h = 1.0 + params.k2 * c1;

    let term_l = delta_l / (params.k_l * s_l);
    let term_c = delta_c / s_c;
    let term_h = delta_h / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}

/// CIE94 with graphic arts weighting
#[inline]
pub fn delta_e_94_graphic_arts(lab1: Lab, lab2: Lab) -> f64 {
    delta_e_94(lab1, lab2, Cie94Params::GRAPHIC_ARTS)
}

/// CIE94 with textiles weighting
#[inline]
pub fn delta_e_94_textiles(lab1: Lab, lab2: Lab) -> f64 {
    delta_e_94(lab1, lab2, Cie94Params::TEXTILES)
}
