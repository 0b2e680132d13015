// Licensed under the Apache-2.0 license

//! Per-family data: display name, fuse controller and naming quirks.

use crate::{ChipType, SiliconRevision};

/// `soc_id` reported for chip codes missing from [`FAMILY_TABLE`].
pub const UNKNOWN_SOC_ID: &str = "Unknown";

/// A silicon revision that ships under a different product name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevisionOverride {
    pub revision: SiliconRevision,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FamilyInfo {
    pub chip: ChipType,
    pub name: &'static str,
    /// Compatible string of the OCOTP block holding the unique id, for the
    /// families that have one.
    pub ocotp_compatible: Option<&'static str>,
    pub revision_override: Option<RevisionOverride>,
}

impl FamilyInfo {
    const fn plain(chip: ChipType, name: &'static str) -> FamilyInfo {
        FamilyInfo {
            chip,
            name,
            ocotp_compatible: None,
            revision_override: None,
        }
    }

    const fn with_uid(chip: ChipType, name: &'static str, ocotp: &'static str) -> FamilyInfo {
        FamilyInfo {
            chip,
            name,
            ocotp_compatible: Some(ocotp),
            revision_override: None,
        }
    }

    pub fn supports_unique_id(&self) -> bool {
        self.ocotp_compatible.is_some()
    }

    /// Product name for this family at `revision`.
    pub fn soc_id(&self, revision: SiliconRevision) -> &'static str {
        match self.revision_override {
            Some(over) if over.revision == revision => over.name,
            _ => self.name,
        }
    }
}

pub const FAMILY_TABLE: [FamilyInfo; 16] = [
    FamilyInfo::plain(ChipType::MX1, "i.MX1"),
    FamilyInfo::plain(ChipType::MX21, "i.MX21"),
    FamilyInfo::plain(ChipType::MX25, "i.MX25"),
    FamilyInfo::plain(ChipType::MX27, "i.MX27"),
    FamilyInfo::plain(ChipType::MX31, "i.MX31"),
    FamilyInfo::plain(ChipType::MX35, "i.MX35"),
    FamilyInfo::plain(ChipType::MX51, "i.MX51"),
    FamilyInfo::plain(ChipType::MX53, "i.MX53"),
    FamilyInfo::with_uid(ChipType::IMX6SL, "i.MX6SL", "fsl,imx6sl-ocotp"),
    FamilyInfo::with_uid(ChipType::IMX6DL, "i.MX6DL", "fsl,imx6q-ocotp"),
    FamilyInfo::with_uid(ChipType::IMX6SX, "i.MX6SX", "fsl,imx6q-ocotp"),
    FamilyInfo {
        chip: ChipType::IMX6Q,
        name: "i.MX6Q",
        ocotp_compatible: Some("fsl,imx6q-ocotp"),
        // i.MX6QuadPlus identifies as a rev 2.0 i.MX6Q.
        revision_override: Some(RevisionOverride {
            revision: SiliconRevision::REV_2_0,
            name: "i.MX6QP",
        }),
    },
    FamilyInfo::with_uid(ChipType::IMX6UL, "i.MX6UL", "fsl,imx6ul-ocotp"),
    FamilyInfo::with_uid(ChipType::IMX6ULL, "i.MX6ULL", "fsl,imx6ull-ocotp"),
    FamilyInfo::with_uid(ChipType::IMX7D, "i.MX7D", "fsl,imx7d-ocotp"),
    FamilyInfo::plain(ChipType::IMX6SLL, "i.MX6SLL"),
];

pub fn family_info(chip: ChipType) -> Option<&'static FamilyInfo> {
    FAMILY_TABLE.iter().find(|info| info.chip == chip)
}

/// Human readable model name; never fails, unknown codes give
/// [`UNKNOWN_SOC_ID`].
pub fn soc_id_for(chip: ChipType, revision: SiliconRevision) -> &'static str {
    family_info(chip).map_or(UNKNOWN_SOC_ID, |info| info.soc_id(revision))
}
