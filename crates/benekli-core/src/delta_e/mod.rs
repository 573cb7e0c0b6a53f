//! Color difference (delta E) formulas
//!
//! All formulas take two Lab colors and return a non-negative scalar.
//! CIE94 and CMC treat the first argument as the reference color.
//!
//! | Formula | Symmetric | Metric |
//! |---|---|---|
//! | CIE76 | yes | yes |
//! | CIE94 | no | no |
//! | CIEDE2000 | yes | no |
//! | CMC l:c | no | no |

mod cie76;
mod cie94;
mod ciede2000;
mod cmc;

pub use cie76::delta_e_76;
pub use cie94::{Cie94Params, delta_e_94, delta_e_94_graphic_arts, delta_e_94_textiles};
pub use ciede2000::delta_e_2000;
pub use cmc::{CmcParams, delta_e_cmc};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::{Error, Result};

/// ΔH*ab recovered from Δa, Δb and ΔC*ab.
///
/// Δa² + Δb² − ΔC² is never negative in exact arithmetic but cancellation
/// can push it slightly below zero when the hues nearly coincide; it is
/// clamped to zero.
#[inline]
pub(crate) fn hue_difference(lab1: Lab, lab2: Lab, delta_c: f64) -> f64 {
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    let delta_h_sq = da * da + db * db - delta_c * delta_c;

    if delta_h_sq < 0.0 {
        tracing::trace!(delta_h_sq, "clamping negative ΔH² to zero");
        0.0
    } else {
        delta_h_sq.sqrt()
    }
}

/// A selectable color difference formula with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeltaEFormula {
    /// CIE76 Euclidean distance
    #[default]
    Cie76,
    /// CIE94 with the given weighting
    Cie94(Cie94Params),
    /// CIEDE2000
    Ciede2000,
    /// CMC l:c (1984)
    Cmc(CmcParams),
}

impl DeltaEFormula {
    /// Names accepted by [`FromStr`], in display order
    pub const NAMES: [&'static str; 6] = [
        "cie76",
        "cie94",
        "cie94-textiles",
        "ciede2000",
        "cmc84",
        "cmc84-perceptibility",
    ];

    /// Compute the difference between a reference and a sample color
    #[inline]
    pub fn compute(&self, reference: Lab, sample: Lab) -> f64 {
        match self {
            DeltaEFormula::Cie76 => delta_e_76(reference, sample),
            DeltaEFormula::Cie94(params) => delta_e_94(reference, sample, *params),
            DeltaEFormula::Ciede2000 => delta_e_2000(reference, sample),
            DeltaEFormula::Cmc(params) => delta_e_cmc(reference, sample, *params),
        }
    }

    /// Whether swapping the arguments is guaranteed to give the same value
    pub fn is_symmetric(&self) -> bool {
        matches!(self, DeltaEFormula::Cie76 | DeltaEFormula::Ciede2000)
    }
}

impl fmt::Display for DeltaEFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaEFormula::Cie76 => write!(f, "cie76"),
            DeltaEFormula::Cie94(p) if *p == Cie94Params::GRAPHIC_ARTS => write!(f, "cie94"),
            DeltaEFormula::Cie94(p) if *p == Cie94Params::TEXTILES => {
                write!(f, "cie94-textiles")
            }
            DeltaEFormula::Cie94(p) => write!(f, "cie94(kL={}, K1={}, K2={})", p.k_l, p.k1, p.k2),
            DeltaEFormula::Ciede2000 => write!(f, "ciede2000"),
            DeltaEFormula::Cmc(p) if *p == CmcParams::ACCEPTABILITY => write!(f, "cmc84"),
            DeltaEFormula::Cmc(p) if *p == CmcParams::PERCEPTIBILITY => {
                write!(f, "cmc84-perceptibility")
            }
            DeltaEFormula::Cmc(p) => write!(f, "cmc84({}:{})", p.l, p.c),
        }
    }
}

impl FromStr for DeltaEFormula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cie76" | "de76" => Ok(DeltaEFormula::Cie76),
            "cie94" | "de94" | "cie94-graphic-arts" => {
                Ok(DeltaEFormula::Cie94(Cie94Params::GRAPHIC_ARTS))
            }
            "cie94-textiles" => Ok(DeltaEFormula::Cie94(Cie94Params::TEXTILES)),
            "ciede2000" | "de2000" => Ok(DeltaEFormula::Ciede2000),
            "cmc84" | "cmc" | "cmc84-acceptability" => {
                Ok(DeltaEFormula::Cmc(CmcParams::ACCEPTABILITY))
            }
            "cmc84-perceptibility" => Ok(DeltaEFormula::Cmc(CmcParams::PERCEPTIBILITY)),
            _ => Err(Error::UnknownFormula(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_and_display() {
        for name in DeltaEFormula::NAMES {
            let formula: DeltaEFormula = name.parse().unwrap();
            assert_eq!(formula.to_string(), name);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("DE2000".parse::<DeltaEFormula>().unwrap(), DeltaEFormula::Ciede2000);
        assert_eq!(
            "cie94-graphic-arts".parse::<DeltaEFormula>().unwrap(),
            DeltaEFormula::Cie94(Cie94Params::GRAPHIC_ARTS)
        );
        assert!(matches!(
            "cie2001".parse::<DeltaEFormula>(),
            Err(Error::UnknownFormula(_))
        ));
    }

    #[test]
    fn test_default_is_cie76() {
        assert_eq!(DeltaEFormula::default(), DeltaEFormula::Cie76);
    }

    #[test]
    fn test_compute_dispatch() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(60.0, 0.0, 0.0);
        assert_eq!(DeltaEFormula::Cie76.compute(a, b), delta_e_76(a, b));
        assert_eq!(
            DeltaEFormula::Cie94(Cie94Params::TEXTILES).compute(a, b),
            delta_e_94_textiles(a, b)
        );
        assert_eq!(DeltaEFormula::Ciede2000.compute(a, b), delta_e_2000(a, b));
        assert_eq!(
            DeltaEFormula::Cmc(CmcParams::ACCEPTABILITY).compute(a, b),
            delta_e_cmc(a, b, CmcParams::ACCEPTABILITY)
        );
    }

    #[test]
    fn test_hue_difference_clamps() {
        // ΔC² slightly larger than Δa² + Δb² through rounding
        let a = Lab::new(50.0, 3.0, 4.0);
        let b = Lab::new(50.0, 6.0, 8.0);
        let delta_c = a.chroma() - b.chroma() - 1e-9;
        assert_eq!(hue_difference(a, b, delta_c), 0.0);
    }
}
