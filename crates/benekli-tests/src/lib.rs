//! # benekli-tests
//!
//! Reference-data and cross-library testing for benekli-core.
//!
//! This crate provides:
//! - The Sharma, Wu & Dalal CIEDE2000 test dataset
//! - Seeded generators for XYZ and Lab samples
//! - Parity helpers comparing against the `palette` crate
//!
//! ## Test Categories
//!
//! 1. **Reference data**: published CIEDE2000 pairs
//! 2. **Conversions**: XYZ, xyY, PCS, Lab, LCh round trips and edge cases
//! 3. **Formula properties**: symmetry, identity, triangle inequality
//! 4. **Parity**: agreement with an independent implementation
//! 5. **Difference maps**: whole-image comparisons

pub mod parity;
pub mod patterns;
pub mod reference;

pub use parity::{ParityStats, compare_ciede2000, compare_lab_from_xyz};
pub use reference::{SharmaPair, sharma_pairs};
