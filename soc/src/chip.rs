// Licensed under the Apache-2.0 license

/// Processor family/model code, as detected by the early bus probing code.
///
/// Codes outside the known set are kept as-is and simply report as
/// unknown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ChipType(pub u32);

impl ChipType {
    /// Not yet identified.
    pub const UNSET: ChipType = ChipType(0);
    pub const MX1: ChipType = ChipType(1);
    pub const MX21: ChipType = ChipType(21);
    pub const MX25: ChipType = ChipType(25);
    pub const MX27: ChipType = ChipType(27);
    pub const MX31: ChipType = ChipType(31);
    pub const MX35: ChipType = ChipType(35);
    pub const MX51: ChipType = ChipType(51);
    pub const MX53: ChipType = ChipType(53);
    pub const IMX6SL: ChipType = ChipType(0x60);
    pub const IMX6DL: ChipType = ChipType(0x61);
    pub const IMX6SX: ChipType = ChipType(0x62);
    pub const IMX6Q: ChipType = ChipType(0x63);
    pub const IMX6UL: ChipType = ChipType(0x64);
    pub const IMX6ULL: ChipType = ChipType(0x65);
    pub const IMX6SLL: ChipType = ChipType(0x67);
    pub const IMX7D: ChipType = ChipType(0x72);

    pub fn code(self) -> u32 {
        self.0
    }

    /// All i.MX6 variants share the `0x6x` code range.
    pub fn is_imx6(self) -> bool {
        (0x60..=0x6f).contains(&self.0)
    }
}

impl From<u32> for ChipType {
    fn from(code: u32) -> ChipType {
        ChipType(code)
    }
}

/// Architecture generation code, set independently of [`ChipType`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ArchType(pub u32);

impl ArchType {
    pub const UNSET: ArchType = ArchType(0);
    pub const CORTEX_A7: ArchType = ArchType(0xc07);

    pub fn code(self) -> u32 {
        self.0
    }
}

impl From<u32> for ArchType {
    fn from(code: u32) -> ArchType {
        ArchType(code)
    }
}
