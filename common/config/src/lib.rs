// Licensed under the Apache-2.0 license

#![cfg_attr(target_os = "none", no_std)]

/// Register blocks the early boot code touches.
/// These are the i.MX6Q defaults; boards override them as needed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SocMemoryMap {
    pub aips1_offset: usize,
    pub aips1_size: usize,
    pub aips2_offset: usize,
    pub aips2_size: usize,
    pub ocotp_offset: usize,
    pub ocotp_size: usize,
}

impl Default for SocMemoryMap {
    fn default() -> Self {
        SocMemoryMap {
            aips1_offset: 0x0207_c000,
            aips1_size: 0x4000,
            aips2_offset: 0x0217_c000,
            aips2_size: 0x4000,
            ocotp_offset: 0x021b_c000,
            ocotp_size: 0x4000,
        }
    }
}

/// Describes the board the SoC sits on, as the boot-time device tree
/// would present it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardConfig<'a> {
    /// Value of the root node's `model` property.
    pub model: &'a str,
    pub aips_compatible: &'a str,
    pub ocotp_compatible: &'a str,
    pub memory_map: SocMemoryMap,
}

impl Default for BoardConfig<'static> {
    fn default() -> Self {
        BoardConfig {
            model: "Freescale i.MX6 Quad SABRE Smart Device Board",
            aips_compatible: "fsl,aips-bus",
            ocotp_compatible: "fsl,imx6q-ocotp",
            memory_map: SocMemoryMap::default(),
        }
    }
}
