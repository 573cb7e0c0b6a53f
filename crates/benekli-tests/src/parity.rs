//! Parity with an independent implementation
//!
//! Compares benekli-core against the `palette` crate on the same inputs.

use benekli_core::{Lab, WhitePoint, Xyz, delta_e_2000};
use palette::color_difference::Ciede2000;
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;

type PaletteLab = palette::Lab<D65, f64>;
type PaletteXyz = palette::Xyz<D65, f64>;

/// `palette`'s D65 white, so both sides normalize against the same numbers
pub fn palette_d65_white() -> WhitePoint {
    WhitePoint {
        xyz: Xyz::new(0.95047, 1.0, 1.08883),
    }
}

/// Summary of absolute differences between two implementations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParityStats {
    /// Largest absolute difference
    pub max_abs_diff: f64,
    /// Mean absolute difference
    pub mean_abs_diff: f64,
    /// Index of the sample with the largest difference
    pub worst_index: usize,
    /// Number of samples compared
    pub count: usize,
}

impl ParityStats {
    fn from_diffs(diffs: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = ParityStats {
            max_abs_diff: 0.0,
            mean_abs_diff: 0.0,
            worst_index: 0,
            count: 0,
        };
        let mut sum = 0.0;

        for (i, diff) in diffs.into_iter().enumerate() {
            if diff > stats.max_abs_diff {
                stats.max_abs_diff = diff;
                stats.worst_index = i;
            }
            sum += diff;
            stats.count += 1;
        }

        if stats.count > 0 {
            stats.mean_abs_diff = sum / stats.count as f64;
        }
        stats
    }

    /// Check if all differences are below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_abs_diff < tolerance
    }
}

fn to_palette(lab: Lab) -> PaletteLab {
    PaletteLab::new(lab.l, lab.a, lab.b)
}

/// Compare CIEDE2000 over pairs drawn from two equally long sample sets
pub fn compare_ciede2000(first: &[Lab], second: &[Lab]) -> ParityStats {
    ParityStats::from_diffs(first.iter().zip(second.iter()).map(|(a, b)| {
        let ours = delta_e_2000(*a, *b);
        let theirs = to_palette(*a).difference(to_palette(*b));
        (ours - theirs).abs()
    }))
}

/// Compare XYZ → Lab (D65) conversion, largest per-channel difference per sample
///
/// `palette`'s clamping `FromColor` limits a* and b* to [-128, 127]; the
/// unclamped conversion is used so saturated samples compare like for like.
pub fn compare_lab_from_xyz(samples: &[Xyz]) -> ParityStats {
    let white = palette_d65_white();

    ParityStats::from_diffs(samples.iter().map(|xyz| {
        let ours = Lab::from_xyz(*xyz, &white);
        let theirs = PaletteLab::from_color_unclamped(PaletteXyz::new(xyz.x, xyz.y, xyz.z));
        (ours.l - theirs.l)
            .abs()
            .max((ours.a - theirs.a).abs())
            .max((ours.b - theirs.b).abs())
    }))
}
