//! CIEDE2000 color difference
//!
//! Reference: G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.
//!
//! Hue angles are handled in degrees throughout, matching the paper.

use crate::color::Lab;

/// 25⁷
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle in degrees [0, 360), 0 for a neutral color
#[inline]
fn hue_prime(a_prime: f64, b: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        0.0
    } else {
        let h = b.atan2(a_prime).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }
}

/// Calculate CIEDE2000 color difference (kL = kC = kH = 1)
///
/// A difference of 1.0 is approximately the just-noticeable difference.
/// Symmetric in its arguments.
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // Step 1: C', h'
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = (c1 + c2) / 2.0;

    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);

    let h1_prime = hue_prime(a1_prime, b1);
    let h2_prime = hue_prime(a2_prime, b2);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    let chroma_product = c1_prime * c2_prime;
    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };

    let delta_big_h_prime =
        2.0 * chroma_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Step 3: weighting functions
    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    let h_bar_prime = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();

    let l_offset_sq = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let term_l = delta_l_prime / s_l;
    let term_c = delta_c_prime / s_c;
    let term_h = delta_big_h_prime / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h)
        .max(0.0)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_delta_e_identical() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert!(delta_e_2000(lab, lab).abs() < EPSILON);
    }

    #[test]
    fn test_first_sharma_pair() {
        let de = delta_e_2000(
            Lab::new(50.0, 2.6772, -79.7751),
            Lab::new(50.0, 0.0, -82.7485),
        );
        assert!((de - 2.0425).abs() < 1e-4, "got {}", de);
    }

    #[test]
    fn test_neutral_pair() {
        // Sharma pair 7: one neutral color, hue of the other taken alone
        let de = delta_e_2000(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, -1.0, 2.0));
        assert!((de - 2.3669).abs() < 1e-4, "got {}", de);
    }

    #[test]
    fn test_hue_wraparound() {
        // Sharma pairs 9 and 11 straddle the mean-hue branch
        let de9 = delta_e_2000(
            Lab::new(50.0, 2.49, -0.001),
            Lab::new(50.0, -2.49, 0.0009),
        );
        let de11 = delta_e_2000(
            Lab::new(50.0, 2.49, -0.001),
            Lab::new(50.0, -2.49, 0.0011),
        );
        assert!((de9 - 7.1792).abs() < 1e-4, "got {}", de9);
        assert!((de11 - 7.2195).abs() < 1e-4, "got {}", de11);
    }

    #[test]
    fn test_lightness_only() {
        // Neutral pair: only S_L matters, and L̄ = 55 keeps S_L close to 1
        let de = delta_e_2000(Lab::new(50.0, 0.0, 0.0), Lab::new(60.0, 0.0, 0.0));
        let l_offset_sq = 25.0;
        let s_l = 1.0 + 0.015 * l_offset_sq / (20.0_f64 + l_offset_sq).sqrt();
        assert!((de - 10.0 / s_l).abs() < EPSILON);
    }

    #[test]
    fn test_symmetric() {
        let a = Lab::new(60.2574, -34.0099, 36.2677);
        let b = Lab::new(60.4626, -34.1751, 39.4387);
        assert!((delta_e_2000(a, b) - delta_e_2000(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_delta_e_perceptible() {
        let red = Lab::new(50.0, 50.0, 0.0);
        let green = Lab::new(50.0, -50.0, 0.0);
        assert!(delta_e_2000(red, green) > 50.0);
    }
}
