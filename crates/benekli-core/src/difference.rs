//! Per-pixel color difference maps
//!
//! Given the Lab rendering of an original image and of its soft proof,
//! computes one delta E value per pixel plus summary statistics. The map
//! can be rendered to 8-bit grayscale for the caller to encode as an image.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rayon::prelude::*;

use crate::color::Lab;
use crate::delta_e::DeltaEFormula;
use crate::{Error, Result};

/// Options for difference map computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DifferenceOptions {
    /// Color difference formula
    pub formula: DeltaEFormula,
    /// Evaluate pixels on the rayon thread pool
    pub parallel: bool,
}

impl Default for DifferenceOptions {
    fn default() -> Self {
        Self {
            formula: DeltaEFormula::default(),
            parallel: true,
        }
    }
}

/// Statistics from a delta E comparison
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeltaEStats {
    /// Mean delta E across all samples
    pub mean: f64,
    /// Maximum delta E
    pub max: f64,
    /// 95th percentile delta E
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of differences; all zeros for an empty set
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let max = sorted[sorted.len() - 1];
        // Nearest rank: ceil(0.95 n), 1-based
        let p95_idx = (sorted.len() * 95).div_ceil(100) - 1;

        Self {
            mean,
            max,
            p95: sorted[p95_idx],
            count: sorted.len(),
        }
    }

    /// Check if all differences are imperceptible (delta E < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (delta E < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }

    /// Check if differences are acceptable (delta E < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }
}

/// Row-major grid of per-pixel differences
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceMap {
    width: usize,
    height: usize,
    formula: DeltaEFormula,
    values: Vec<f64>,
}

impl DifferenceMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Formula the map was computed with
    pub fn formula(&self) -> DeltaEFormula {
        self.formula
    }

    /// All differences, row-major
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Difference at pixel (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    pub fn stats(&self) -> DeltaEStats {
        DeltaEStats::from_values(&self.values)
    }

    /// Render as 8-bit grayscale: 0 for no difference, 255 for `max_delta`
    /// or more. A non-positive `max_delta` scales to the map's own maximum.
    pub fn to_gray8(&self, max_delta: f64) -> Vec<u8> {
        let scale_max = if max_delta > 0.0 {
            max_delta
        } else {
            self.stats().max
        };

        if scale_max <= 0.0 {
            return vec![0; self.values.len()];
        }

        self.values
            .iter()
            .map(|de| ((de / scale_max).clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
            .collect()
    }
}

fn lab_pixels<'a>(buffer: &'a [f64], expected: usize) -> Result<&'a [[f64; 3]]> {
    if buffer.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: buffer.len(),
        });
    }
    bytemuck::try_cast_slice(buffer).map_err(|_| Error::BufferSize {
        expected,
        actual: buffer.len(),
    })
}

/// Compute the per-pixel difference between two interleaved Lab images.
///
/// Both buffers hold `width * height` pixels of `[L, a, b]`. `reference`
/// is passed as the first argument of the formula.
pub fn difference_map(
    reference: &[f64],
    proof: &[f64],
    width: usize,
    height: usize,
    options: DifferenceOptions,
) -> Result<DifferenceMap> {
    let expected = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(Error::BufferSize {
            expected: usize::MAX,
            actual: reference.len(),
        })?;
    let reference = lab_pixels(reference, expected)?;
    let proof = lab_pixels(proof, expected)?;

    let formula = options.formula;
    let pixel_delta =
        |(r, p): (&[f64; 3], &[f64; 3])| formula.compute(Lab::from_array(*r), Lab::from_array(*p));

    let values: Vec<f64> = if options.parallel {
        reference.par_iter().zip(proof.par_iter()).map(pixel_delta).collect()
    } else {
        reference.iter().zip(proof.iter()).map(pixel_delta).collect()
    };

    if let Some(bad) = values.iter().copied().find(|de| !de.is_finite()) {
        tracing::warn!(%formula, value = bad, "non-finite color difference");
        return Err(Error::NumericInstability {
            operation: "difference_map",
            value: bad,
        });
    }

    let map = DifferenceMap {
        width,
        height,
        formula,
        values,
    };

    let stats = map.stats();
    tracing::debug!(
        width,
        height,
        %formula,
        mean = stats.mean,
        max = stats.max,
        p95 = stats.p95,
        "computed difference map"
    );

    Ok(map)
}
