//! CMC l:c (1984) color difference
//!
//! Like CIE94 the weighting follows the reference color, with an extra
//! hue-dependent term. Acceptability (2:1) is the usual choice for
//! pass/fail decisions, perceptibility (1:1) for threshold work.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::delta_e::hue_difference;

/// Lightness and chroma weights for CMC l:c
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CmcParams {
    pub l: f64,
    pub c: f64,
}

impl CmcParams {
    /// CMC 2:1
    pub const ACCEPTABILITY: CmcParams = CmcParams { l: 2.0, c: 1.0 };

    /// CMC 1:1
    pub const PERCEPTIBILITY: CmcParams = CmcParams { l: 1.0, c: 1.0 };
}

impl Default for CmcParams {
    fn default() -> Self {
        Self::ACCEPTABILITY
    }
}

/// Calculate the CMC l:c color difference with `lab1` as the reference color
pub fn delta_e_cmc(lab1: Lab, lab2: Lab, params: CmcParams) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();

    let delta_l = lab1.l - lab2.l;
    let delta_c = c1 - c2;
    let delta_h = hue_difference(lab1, lab2, delta_c);

    let s_l = if lab1.l < 16.0 {
        0.511
    } else {
        0.040975 * lab1.l / (1.0 + 0.01765 * lab1.l)
    };
    let s_c = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let h1 = lab1.hue_degrees();
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let s_h = s_c * (f * t + 1.0 - f);

    let term_l = delta_l / (params.l * s_l);
    let term_c = delta_c / (params.c * s_c);
    let term_h = delta_h / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}
