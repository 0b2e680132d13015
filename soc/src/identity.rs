// Licensed under the Apache-2.0 license

use crate::{ArchType, ChipType, SiliconRevision};

/// Collects the chip identification while early boot probes the hardware.
///
/// Each setter just records its value; the last write wins. Once probing is
/// done, [`IdentityBuilder::build`] freezes the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityBuilder {
    chip: ChipType,
    arch: ArchType,
    revision: SiliconRevision,
}

impl IdentityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_chip_type(&mut self, chip: ChipType) -> &mut Self {
        self.chip = chip;
        self
    }

    pub fn set_arch_type(&mut self, arch: ArchType) -> &mut Self {
        self.arch = arch;
        self
    }

    pub fn set_revision(&mut self, revision: SiliconRevision) -> &mut Self {
        self.revision = revision;
        self
    }

    /// The revision recorded so far, [`SiliconRevision::UNKNOWN`] if none.
    pub fn get_revision(&self) -> SiliconRevision {
        self.revision
    }

    pub fn build(&self) -> PlatformIdentity {
        PlatformIdentity {
            chip: self.chip,
            arch: self.arch,
            revision: self.revision,
        }
    }
}

/// Identity of the running chip, fixed after early boot and handed by
/// reference to everything that needs it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlatformIdentity {
    chip: ChipType,
    arch: ArchType,
    revision: SiliconRevision,
}

impl PlatformIdentity {
    pub fn chip(&self) -> ChipType {
        self.chip
    }

    pub fn arch(&self) -> ArchType {
        self.arch
    }

    pub fn revision(&self) -> SiliconRevision {
        self.revision
    }

    pub fn chip_is(&self, chip: ChipType) -> bool {
        self.chip == chip
    }

    pub fn is_imx6(&self) -> bool {
        self.chip.is_imx6()
    }

    pub fn arch_is_cortex_a7(&self) -> bool {
        self.arch == ArchType::CORTEX_A7
    }
}
