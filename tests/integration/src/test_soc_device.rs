// Licensed under the Apache-2.0 license

#[cfg(test)]
mod test {
    use crate::test::{identity, FakeBoard};
    use mxc_boottime::{FlatDeviceTree, NodeDesc};
    use mxc_error::SocError;
    use mxc_soc::board::board_tree;
    use mxc_soc::{soc_device_init, ChipType, SocDeviceMatch, SocDeviceTable};

    #[test]
    fn test_imx6ul_descriptor() {
        let board = FakeBoard::new();
        board.burn_uid(0x2c1a_0b05_d97e_11d4);
        let config = board.config("board-v1", "fsl,imx6ul-ocotp");
        let tree = unsafe { board_tree(&config) }.unwrap();
        let mut devices = SocDeviceTable::<'_, 2>::new();

        let id = soc_device_init(&tree, &identity(ChipType::IMX6UL, 0x21), &mut devices).unwrap();

        assert_eq!(devices.attribute(id, "family"), Ok(Some("Freescale i.MX")));
        assert_eq!(devices.attribute(id, "machine"), Ok(Some("board-v1")));
        assert_eq!(devices.attribute(id, "soc_id"), Ok(Some("i.MX6UL")));
        assert_eq!(devices.attribute(id, "revision"), Ok(Some("2.1")));
        assert_eq!(
            devices.attribute(id, "serial_number"),
            Ok(Some("2c1a0b05d97e11d4"))
        );
        assert_eq!(tree.outstanding_refs(), 0);
        assert_eq!(tree.live_mappings(), 0);
    }

    #[test]
    fn test_unknown_chip() {
        let board = FakeBoard::new();
        board.burn_uid(u64::MAX);
        let config = board.config("board-v1", "fsl,imx6q-ocotp");
        let tree = unsafe { board_tree(&config) }.unwrap();
        let mut devices = SocDeviceTable::<'_, 1>::new();

        let id = soc_device_init(&tree, &identity(ChipType(0x5a), 0x10), &mut devices).unwrap();

        assert_eq!(devices.attribute(id, "soc_id"), Ok(Some("Unknown")));
        assert_eq!(devices.attribute(id, "serial_number"), Ok(None));
        assert_eq!(devices.attribute(id, "revision"), Ok(Some("1.0")));
        assert_eq!(tree.outstanding_refs(), 0);
        assert_eq!(tree.live_mappings(), 0);
    }

    #[test]
    fn test_missing_fuse_controller() {
        let board = FakeBoard::new();
        // Board describes i.MX6Q fuses, chip is an i.MX7D.
        let config = board.config("board-v1", "fsl,imx6q-ocotp");
        let tree = unsafe { board_tree(&config) }.unwrap();
        let mut devices = SocDeviceTable::<'_, 1>::new();

        let id = soc_device_init(&tree, &identity(ChipType::IMX7D, 0x12), &mut devices).unwrap();

        assert_eq!(devices.attribute(id, "soc_id"), Ok(Some("i.MX7D")));
        assert_eq!(devices.attribute(id, "serial_number"), Ok(Some("0")));
        assert_eq!(tree.outstanding_refs(), 0);
    }

    #[test]
    fn test_missing_model_leaks_nothing() {
        let board = FakeBoard::new();
        let mut tree = FlatDeviceTree::<'_, 2>::new();
        tree.add_node(NodeDesc::new("/")).unwrap();
        tree.add_node(unsafe {
            NodeDesc::new("/soc/efuse@21bc000")
                .compatible("fsl,imx6q-ocotp")
                .unwrap()
                .reg(board.ocotp.base(), board.ocotp.size())
                .unwrap()
        })
        .unwrap();
        let mut devices = SocDeviceTable::<'_, 1>::new();

        let result = soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x10), &mut devices);

        assert_eq!(result, Err(SocError::PropertyMissing));
        assert!(devices.is_empty());
        assert_eq!(tree.outstanding_refs(), 0);
        assert_eq!(tree.live_mappings(), 0);
    }

    #[test]
    fn test_registry_full() {
        let board = FakeBoard::new();
        let config = board.config("board-v1", "fsl,imx6q-ocotp");
        let tree = unsafe { board_tree(&config) }.unwrap();
        let mut devices = SocDeviceTable::<'_, 1>::new();

        soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x10), &mut devices).unwrap();
        let second = soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x10), &mut devices);

        assert_eq!(second, Err(SocError::RegistryFull));
        assert_eq!(devices.len(), 1);
        assert_eq!(tree.outstanding_refs(), 0);
        assert_eq!(tree.live_mappings(), 0);
    }

    #[test]
    fn test_imx6qp_quirk_match() {
        const QUIRKS: [SocDeviceMatch<'static>; 2] = [
            SocDeviceMatch {
                machine: None,
                family: None,
                revision: None,
                soc_id: Some("i.MX6QP"),
            },
            SocDeviceMatch {
                machine: None,
                family: None,
                revision: Some("1.*"),
                soc_id: Some("i.MX6Q"),
            },
        ];

        let board = FakeBoard::new();
        let config = board.config(
            "Freescale i.MX6 Quad Plus SABRE Smart Device Board",
            "fsl,imx6q-ocotp",
        );
        let tree = unsafe { board_tree(&config) }.unwrap();

        let mut plus = SocDeviceTable::<'_, 1>::new();
        let id = soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x20), &mut plus).unwrap();
        assert_eq!(plus.attribute(id, "soc_id"), Ok(Some("i.MX6QP")));
        assert_eq!(plus.soc_device_match(&QUIRKS), Some(&QUIRKS[0]));

        let mut quad = SocDeviceTable::<'_, 1>::new();
        let id = soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x12), &mut quad).unwrap();
        assert_eq!(quad.attribute(id, "soc_id"), Ok(Some("i.MX6Q")));
        assert_eq!(quad.soc_device_match(&QUIRKS), Some(&QUIRKS[1]));

        let mut late = SocDeviceTable::<'_, 1>::new();
        soc_device_init(&tree, &identity(ChipType::IMX6Q, 0x21), &mut late).unwrap();
        assert_eq!(late.soc_device_match(&QUIRKS), None);
    }
}
