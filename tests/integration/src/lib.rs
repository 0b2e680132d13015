// Licensed under the Apache-2.0 license

mod test_boot_flow;
mod test_soc_device;

#[cfg(test)]
mod test {
    use mxc_config::{BoardConfig, SocMemoryMap};
    use mxc_soc::{IdentityBuilder, PlatformIdentity};
    use mxc_testing_common::FakeMmio;

    pub const BLOCK_SIZE: usize = 0x4000;
    pub const OCOTP_CFG0: usize = 0x410;
    pub const OCOTP_CFG1: usize = 0x420;

    /// Register memory of one board: two AIPS bridges and the fuse
    /// controller.
    pub struct FakeBoard {
        pub aips1: FakeMmio,
        pub aips2: FakeMmio,
        pub ocotp: FakeMmio,
    }

    impl FakeBoard {
        pub fn new() -> Self {
            mxc_testing_common::init_logger();
            FakeBoard {
                aips1: FakeMmio::new(BLOCK_SIZE),
                aips2: FakeMmio::new(BLOCK_SIZE),
                ocotp: FakeMmio::new(BLOCK_SIZE),
            }
        }

        pub fn burn_uid(&self, uid: u64) {
            self.ocotp.write(OCOTP_CFG1, (uid >> 32) as u32);
            self.ocotp.write(OCOTP_CFG0, uid as u32);
        }

        pub fn memory_map(&self) -> SocMemoryMap {
            SocMemoryMap {
                aips1_offset: self.aips1.base(),
                aips1_size: self.aips1.size(),
                aips2_offset: self.aips2.base(),
                aips2_size: self.aips2.size(),
                ocotp_offset: self.ocotp.base(),
                ocotp_size: self.ocotp.size(),
            }
        }

        pub fn config<'a>(&self, model: &'a str, ocotp_compatible: &'a str) -> BoardConfig<'a> {
            BoardConfig {
                model,
                ocotp_compatible,
                memory_map: self.memory_map(),
                ..BoardConfig::default()
            }
        }
    }

    pub fn identity(chip: mxc_soc::ChipType, revision: u8) -> PlatformIdentity {
        IdentityBuilder::new()
            .set_chip_type(chip)
            .set_revision(revision.into())
            .build()
    }
}
