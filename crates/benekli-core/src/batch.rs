//! Batch kernels over slices of color triples
//!
//! Each kernel is compiled for several instruction sets with `multiversion`
//! and dispatches to the best one at runtime; the scalar fallback is always
//! available.

use multiversion::multiversion;

use crate::color::{Lab, WhitePoint, Xyz};
use crate::delta_e::DeltaEFormula;
use crate::{Error, Result};

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::BufferSize { expected, actual });
    }
    Ok(())
}

/// Convert a buffer of XYZ triples to Lab relative to `white`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn lab_from_xyz_batch(src: &[[f64; 3]], dst: &mut [[f64; 3]], white: &WhitePoint) -> Result<()> {
    check_len(src.len(), dst.len())?;

    for (xyz, out) in src.iter().zip(dst.iter_mut()) {
        *out = Lab::from_xyz(Xyz::from_array(*xyz), white).to_array();
    }
    Ok(())
}

/// Convert a buffer of Lab triples back to XYZ relative to `white`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn lab_to_xyz_batch(src: &[[f64; 3]], dst: &mut [[f64; 3]], white: &WhitePoint) -> Result<()> {
    check_len(src.len(), dst.len())?;

    for (lab, out) in src.iter().zip(dst.iter_mut()) {
        *out = Lab::from_array(*lab).to_xyz(white).to_array();
    }
    Ok(())
}

/// Pairwise color difference of two Lab buffers
///
/// `reference[i]` is the first argument of the formula for pixel `i`.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn delta_e_batch(
    reference: &[[f64; 3]],
    sample: &[[f64; 3]],
    dst: &mut [f64],
    formula: DeltaEFormula,
) -> Result<()> {
    check_len(reference.len(), sample.len())?;
    check_len(reference.len(), dst.len())?;

    for ((r, s), out) in reference.iter().zip(sample.iter()).zip(dst.iter_mut()) {
        *out = formula.compute(Lab::from_array(*r), Lab::from_array(*s));
    }
    Ok(())
}
