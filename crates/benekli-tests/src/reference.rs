//! Published reference data
//!
//! The 34 CIEDE2000 test pairs from Sharma, Wu & Dalal (2005), Table 1.
//! Expected values are given to four decimals.

use benekli_core::Lab;
use serde::Deserialize;

const SHARMA_JSON: &str = include_str!("../testdata/sharma_ciede2000.json");

/// One row of the Sharma CIEDE2000 table
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SharmaPair {
    /// Row number in the published table (1-based)
    pub pair: usize,
    pub lab1: [f64; 3],
    pub lab2: [f64; 3],
    /// Published CIEDE2000 value
    pub delta_e: f64,
}

impl SharmaPair {
    pub fn first(&self) -> Lab {
        Lab::from_array(self.lab1)
    }

    pub fn second(&self) -> Lab {
        Lab::from_array(self.lab2)
    }
}

/// Load the Sharma dataset
pub fn sharma_pairs() -> serde_json::Result<Vec<SharmaPair>> {
    serde_json::from_str(SHARMA_JSON)
}
