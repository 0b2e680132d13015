// Licensed under the Apache-2.0 license

//! Boot-time device tree for a board described by a [`BoardConfig`].

use mxc_boottime::{FlatDeviceTree, NodeDesc};
use mxc_config::BoardConfig;
use mxc_error::SocError;

/// Root, two AIPS bridges and the fuse controller.
pub const BOARD_NODES: usize = 4;

pub type BoardTree<'a> = FlatDeviceTree<'a, BOARD_NODES>;

/// Builds the device tree a bootloader would pass for `config`.
///
/// # Safety
///
/// Every non-zero region of `config.memory_map` must stay valid for volatile
/// accesses while the returned tree is in use.
pub unsafe fn board_tree<'a>(config: &BoardConfig<'a>) -> Result<BoardTree<'a>, SocError> {
    let map = &config.memory_map;
    let mut tree = FlatDeviceTree::new();
    tree.add_node(NodeDesc::new("/").property("model", config.model.as_bytes())?)?;
    tree.add_node(
        NodeDesc::new("/soc/bus@2000000")
            .compatible(config.aips_compatible)?
            .reg(map.aips1_offset, map.aips1_size)?,
    )?;
    tree.add_node(
        NodeDesc::new("/soc/bus@2100000")
            .compatible(config.aips_compatible)?
            .reg(map.aips2_offset, map.aips2_size)?,
    )?;
    tree.add_node(
        NodeDesc::new("/soc/bus@2100000/efuse@21bc000")
            .compatible(config.ocotp_compatible)?
            .compatible("syscon")?
            .reg(map.ocotp_offset, map.ocotp_size)?,
    )?;
    Ok(tree)
}
