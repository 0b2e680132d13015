// Licensed under the Apache-2.0 license

#[cfg(test)]
mod test {
    use crate::test::{identity, FakeBoard};
    use mxc_soc::board::board_tree;
    use mxc_soc::{
        early_init, soc_device_init, ChipType, IdentityBuilder, SiliconRevision, SocDeviceTable,
    };

    #[test]
    fn test_boot_flow() {
        let board = FakeBoard::new();
        for aips in [&board.aips1, &board.aips2] {
            for offset in (0..0x54).step_by(4) {
                aips.write(offset, 0xffff_ffff);
            }
        }
        board.burn_uid(0x0000_0001_0000_0002);
        let config = board.config(
            "Freescale i.MX6 SoloX SABRE Smart Device Board",
            "fsl,imx6q-ocotp",
        );
        let tree = unsafe { board_tree(&config) }.unwrap();

        // Bus probing fills the identity in piecemeal.
        let mut builder = IdentityBuilder::new();
        builder.set_chip_type(ChipType::IMX6SX);
        assert!(builder.get_revision().is_unknown());
        builder.set_revision(SiliconRevision(0x14));
        let identity = builder.build();

        assert_eq!(early_init(&tree, &identity, config.aips_compatible), 2);
        for aips in [&board.aips1, &board.aips2] {
            assert_eq!(aips.read(0x00), 0x7777_7777);
            assert_eq!(aips.read(0x04), 0x7777_7777);
            for offset in [0x40, 0x44, 0x48, 0x4c] {
                assert_eq!(aips.read(offset), 0);
            }
            assert_eq!(aips.read(0x50), 0x00ff_ffff);
        }

        let mut devices = SocDeviceTable::<'_, 1>::new();
        let id = soc_device_init(&tree, &identity, &mut devices).unwrap();
        let attrs = devices.attributes(id).unwrap();
        assert_eq!(attrs.soc_id, "i.MX6SX");
        assert_eq!(attrs.revision.as_str(), "1.4");
        assert_eq!(
            attrs.unique_id.as_ref().map(|uid| uid.as_str()),
            Some("100000002")
        );
        assert_eq!(tree.outstanding_refs(), 0);
        assert_eq!(tree.live_mappings(), 0);
    }

    #[test]
    fn test_cortex_a7_parts() {
        let board = FakeBoard::new();
        let config = board.config("i.MX7 SabreSD board", "fsl,imx7d-ocotp");
        let tree = unsafe { board_tree(&config) }.unwrap();
        let mut builder = IdentityBuilder::new();
        builder
            .set_chip_type(ChipType::IMX7D)
            .set_arch_type(mxc_soc::ArchType::CORTEX_A7);
        let identity = builder.build();
        assert!(identity.arch_is_cortex_a7());
        assert!(!identity.is_imx6());

        assert_eq!(early_init(&tree, &identity, config.aips_compatible), 2);
        let mut devices = SocDeviceTable::<'_, 1>::new();
        let id = soc_device_init(&tree, &identity, &mut devices).unwrap();
        assert_eq!(devices.attribute(id, "revision"), Ok(Some("15.15")));
    }

    #[test]
    fn test_identity_helper() {
        let identity = identity(ChipType::IMX6ULL, 0x11);
        assert!(identity.is_imx6());
        assert_eq!(identity.revision().major(), 1);
        assert_eq!(identity.revision().minor(), 1);
    }
}
