//! CIELAB relative to an arbitrary reference white
//!
//! Proof comparisons happen here: both the original and the proofed color
//! are brought to Lab against the same white before a delta E is taken.
//! The companding function is piecewise, and each axis picks its branch
//! independently.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{Lch, WhitePoint, Xyz};
use crate::{Error, Result};

/// 6/29, the companding knee in f-space
const DELTA: f64 = 6.0 / 29.0;
/// (6/29)³ ≈ 0.008856, the companding knee in ratio space
const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;
/// Slope of the linear segment, 1 / (3 δ²)
const LINEAR_SLOPE: f64 = 841.0 / 108.0;
const LINEAR_OFFSET: f64 = 4.0 / 29.0;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to the given white
    pub fn from_xyz(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert from PCS XYZ (ICC D50 white)
    pub fn from_pcs_xyz(xyz: Xyz) -> Self {
        Self::from_xyz(xyz, &WhitePoint::PCS)
    }

    /// Convert to XYZ relative to the given white
    pub fn to_xyz(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    /// Convert to PCS XYZ (ICC D50 white)
    pub fn to_pcs_xyz(&self) -> Xyz {
        self.to_xyz(&WhitePoint::PCS)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in degrees, in [0, 360).
    ///
    /// Neutral colors (a = b = 0) report 0.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        normalize_degrees(self.b.atan2(self.a).to_degrees())
    }

    /// Hue angle in degrees, failing for neutral colors whose hue is undefined
    pub fn hue_angle(&self) -> Result<f64> {
        if self.a == 0.0 && self.b == 0.0 {
            return Err(Error::domain("lab_hue", "hue is undefined at zero chroma"));
        }
        Ok(self.hue_degrees())
    }

    /// Restate in polar form
    #[inline]
    pub fn to_lch(&self) -> Lch {
        Lch::new(self.l, self.chroma(), self.hue_degrees())
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub(crate) fn normalize_degrees(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-15 + 360.0 rounds to 360.0
    if h >= 360.0 { 0.0 } else { h }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(f: f64) -> f64 {
    if f > DELTA {
        f * f * f
    } else {
        (f - LINEAR_OFFSET) / LINEAR_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        lch.to_lab()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_pcs_xyz(WhitePoint::PCS.xyz);
        assert!((lab.l - 100.0).abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
        assert!(lab.b.abs() < EPSILON);
    }

    #[test]
    fn test_black_is_0() {
        let lab = Lab::from_pcs_xyz(Xyz::new(0.0, 0.0, 0.0));
        assert!(lab.l.abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
        assert!(lab.b.abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let original = Lab::new(50.0, 25.0, -30.0);
        let roundtrip = Lab::from_pcs_xyz(original.to_pcs_xyz());

        assert!(
            original.approx_eq(&roundtrip, 1e-9),
            "Roundtrip failed: {:?} vs {:?}",
            original,
            roundtrip
        );
    }

    #[test]
    fn test_dark_roundtrip_uses_linear_segment() {
        // Y ratio well below the knee on every axis
        let xyz = Xyz::new(0.001, 0.002, 0.0015);
        let lab = Lab::from_pcs_xyz(xyz);
        assert!(lab.l < 8.0);
        assert!(lab.to_pcs_xyz().approx_eq(&xyz, 1e-12));
    }

    #[test]
    fn test_mixed_branches_per_axis() {
        // X and Y above the knee, Z below
        let white = WhitePoint::PCS;
        let xyz = Xyz::new(0.5, 0.4, 0.001);
        let lab = Lab::from_xyz(xyz, &white);
        assert!(lab.to_xyz(&white).approx_eq(&xyz, 1e-12));
        assert!(lab.b > 0.0);
    }

    #[test]
    fn test_companding_continuous_at_knee() {
        let cube_branch = DELTA_CUBED.cbrt();
        let linear_branch = LINEAR_SLOPE * DELTA_CUBED + LINEAR_OFFSET;
        assert!((cube_branch - linear_branch).abs() < 1e-15);
        assert!((lab_f(DELTA_CUBED) - DELTA).abs() < 1e-15);

        let above = lab_f(DELTA_CUBED * (1.0 + 1e-12));
        let below = lab_f(DELTA_CUBED * (1.0 - 1e-12));
        assert!((above - below).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_continuous_at_knee() {
        assert!((lab_f_inv(DELTA) - DELTA_CUBED).abs() < 1e-15);
        assert!((DELTA * DELTA * DELTA - (DELTA - LINEAR_OFFSET) / LINEAR_SLOPE).abs() < 1e-15);
    }

    #[test]
    fn test_chroma() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_hue_quadrants() {
        assert!(Lab::new(50.0, 1.0, 0.0).hue_degrees().abs() < EPSILON);
        assert!((Lab::new(50.0, 0.0, 1.0).hue_degrees() - 90.0).abs() < EPSILON);
        assert!((Lab::new(50.0, -1.0, 0.0).hue_degrees() - 180.0).abs() < EPSILON);
        assert!((Lab::new(50.0, 0.0, -1.0).hue_degrees() - 270.0).abs() < EPSILON);
        assert!((Lab::new(50.0, -1.0, -1.0).hue_degrees() - 225.0).abs() < EPSILON);
    }

    #[test]
    fn test_strict_hue_on_neutral() {
        assert!(matches!(
            Lab::new(50.0, 0.0, 0.0).hue_angle(),
            Err(Error::Domain { .. })
        ));
        assert!((Lab::new(50.0, 0.0, 2.0).hue_angle().unwrap() - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}
