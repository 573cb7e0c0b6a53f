//! Sample generation
//!
//! Deterministic sets of XYZ and Lab colors for property and parity tests.

use benekli_core::{Lab, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Lab sample set types
#[derive(Debug, Clone, Copy)]
pub enum LabPattern {
    /// Neutral axis, L from 0 to 100
    NeutralAxis,
    /// Full hue circle at L = 50 and the given chroma
    HueRing(f64),
    /// Uniform random over L [0, 100], a and b [-128, 127]
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near the usual gamut boundary
    HighChroma,
}

/// Generate `count` Lab colors following `pattern`
pub fn generate_lab(pattern: LabPattern, count: usize) -> Vec<Lab> {
    match pattern {
        LabPattern::NeutralAxis => (0..count)
            .map(|i| Lab::new(100.0 * i as f64 / count.max(2) as f64, 0.0, 0.0))
            .collect(),
        LabPattern::HueRing(chroma) => (0..count)
            .map(|i| {
                let hue = (360.0 * i as f64 / count as f64).to_radians();
                Lab::new(50.0, chroma * hue.cos(), chroma * hue.sin())
            })
            .collect(),
        LabPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Lab::new(
                        rng.gen_range(0.0..100.0),
                        rng.gen_range(-128.0..127.0),
                        rng.gen_range(-128.0..127.0),
                    )
                })
                .collect()
        }
        LabPattern::SkinTones => {
            let tones = [
                Lab::new(90.7, 2.3, 13.9),
                Lab::new(81.2, 7.9, 32.4),
                Lab::new(74.0, 10.2, 35.7),
                Lab::new(60.5, 15.8, 38.1),
                Lab::new(40.3, 16.5, 30.9),
                Lab::new(24.6, 15.2, 9.8),
            ];
            (0..count).map(|i| tones[i % tones.len()]).collect()
        }
        LabPattern::HighChroma => {
            let colors = [
                Lab::new(53.2, 80.1, 67.2),
                Lab::new(87.7, -86.2, 83.2),
                Lab::new(32.3, 79.2, -107.9),
                Lab::new(97.1, -21.6, 94.5),
                Lab::new(60.3, 98.2, -60.8),
                Lab::new(91.1, -48.1, -14.1),
            ];
            (0..count).map(|i| colors[i % colors.len()]).collect()
        }
    }
}

/// Random XYZ with every component in (`min`, `max`)
pub fn random_xyz(seed: u64, count: usize, min: f64, max: f64) -> Vec<Xyz> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Xyz::new(
                rng.gen_range(min..max),
                rng.gen_range(min..max),
                rng.gen_range(min..max),
            )
        })
        .collect()
}

/// Flatten Lab colors into an interleaved `[L, a, b, L, a, b, ...]` buffer
pub fn interleave(colors: &[Lab]) -> Vec<f64> {
    colors.iter().flat_map(|lab| lab.to_array()).collect()
}
