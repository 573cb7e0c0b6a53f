//! Normalized XYZ <-> ICC Profile Connection Space XYZ
//!
//! ICC.1:2010 3.1.24: PCSXYZ is nCIEXYZ rescaled so the profile's media
//! white lands on the PCS illuminant.

use crate::color::{PCS_WHITE, Xyz};
use crate::{Error, Result};

fn check_media_white(media_white: &Xyz, operation: &'static str) -> Result<()> {
    if media_white.x == 0.0 || media_white.y == 0.0 || media_white.z == 0.0 {
        return Err(Error::domain(operation, "media white has a zero component"));
    }
    Ok(())
}

/// Convert normalized XYZ to PCS XYZ relative to a profile's media white
pub fn nxyz_to_pcs_xyz(nxyz: Xyz, media_white: Xyz) -> Result<Xyz> {
    check_media_white(&media_white, "nxyz_to_pcs_xyz")?;

    Ok(Xyz::new(
        nxyz.x / media_white.x * PCS_WHITE.x,
        nxyz.y / media_white.y * PCS_WHITE.y,
        nxyz.z / media_white.z * PCS_WHITE.z,
    ))
}

/// Inverse of [`nxyz_to_pcs_xyz`]
pub fn pcs_xyz_to_nxyz(pcs_xyz: Xyz, media_white: Xyz) -> Result<Xyz> {
    check_media_white(&media_white, "pcs_xyz_to_nxyz")?;

    Ok(Xyz::new(
        pcs_xyz.x * media_white.x / PCS_WHITE.x,
        pcs_xyz.y * media_white.y / PCS_WHITE.y,
        pcs_xyz.z * media_white.z / PCS_WHITE.z,
    ))
}
