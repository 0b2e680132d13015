// Licensed under the Apache-2.0 license

//! Opens up the AHB-to-IP bridges so every bus master may reach every
//! peripheral behind them.

use mxc_boottime::{compatible_nodes, DeviceTree};
use mxc_registers::aips::{self, regs::Aips};
use tock_registers::interfaces::{Readable, Writeable};

/// Compatible string of the AIPS bus nodes on i.MX6 device trees.
pub const AIPS_BUS_COMPATIBLE: &str = "fsl,aips-bus";

/// Writes the permissive access template to one AIPS block.
///
/// MPROT0/1 mark every master trusted and unrestricted, OPACR0-3 open every
/// peripheral. OPACR4 is read back after those writes and rewritten with its
/// top byte cleared.
pub fn apply_bridge_protection(regs: &Aips) {
    regs.mprot[0].set(aips::MPROT_ALL_TRUSTED);
    regs.mprot[1].set(aips::MPROT_ALL_TRUSTED);

    regs.opacr[0].set(aips::OPACR_ALL_OPEN);
    regs.opacr[1].set(aips::OPACR_ALL_OPEN);
    regs.opacr[2].set(aips::OPACR_ALL_OPEN);
    regs.opacr[3].set(aips::OPACR_ALL_OPEN);
    // OPACR4 := OPACR4 & 0x00ff_ffff, low 24 bits as read.
    let reg = regs.opacr[4].get() & aips::OPACR4_WRITEBACK_MASK;
    regs.opacr[4].set(reg);
}

/// Applies [`apply_bridge_protection`] to every node compatible with
/// `compat`. Nodes whose registers cannot be mapped are skipped.
///
/// Returns the number of blocks configured.
pub fn allow_unprivileged_access(tree: &dyn DeviceTree, compat: &str) -> usize {
    let mut configured = 0;
    for node in compatible_nodes(tree, compat) {
        match node.iomap::<Aips>(0) {
            Ok(regs) => {
                apply_bridge_protection(&regs);
                log::debug!("AIPS {:?} ({}) opened", node, compat);
                configured += 1;
            }
            Err(err) => log::warn!("skipping AIPS {:?} ({}): {}", node, compat, err),
        }
    }
    configured
}
