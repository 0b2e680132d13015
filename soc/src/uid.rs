// Licensed under the Apache-2.0 license

//! Per-chip unique id burned into the OCOTP fuses.

use crate::{family_info, PlatformIdentity};
use arrayvec::ArrayString;
use core::fmt::Write;
use mxc_boottime::{find_compatible_node, DeviceTree};
use mxc_error::SocError;
use mxc_registers::ocotp::regs::Ocotp;
use tock_registers::interfaces::Readable;

/// Room for a `u64` in hex.
pub const UNIQUE_ID_LEN: usize = 16;

/// Reads the 64-bit unique id of the running chip.
///
/// Families without a fuse-backed id give 0 without touching the tree, as do
/// a missing or unmappable fuse controller (after a warning).
pub fn get_soc_unique_id(tree: &dyn DeviceTree, identity: &PlatformIdentity) -> u64 {
    let Some(compat) = family_info(identity.chip()).and_then(|info| info.ocotp_compatible) else {
        return 0;
    };

    let Some(node) = find_compatible_node(tree, compat) else {
        log::warn!("failed to find ocotp node");
        return 0;
    };
    let ocotp = match node.iomap::<Ocotp>(0) {
        Ok(ocotp) => ocotp,
        Err(_) => {
            log::warn!("failed to map ocotp");
            return 0;
        }
    };

    let mut uid = u64::from(ocotp.cfg1.get()) << 32;
    uid |= u64::from(ocotp.cfg0.get());
    uid
}

/// Lowercase hex, no prefix and no padding.
pub fn format_unique_id(uid: u64) -> Result<ArrayString<UNIQUE_ID_LEN>, SocError> {
    let mut s = ArrayString::new();
    write!(s, "{:x}", uid)?;
    Ok(s)
}
