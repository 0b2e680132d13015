// Licensed under the Apache-2.0 license

//! Builds the SoC descriptor and hands it to the descriptor registry.

use crate::uid::{format_unique_id, get_soc_unique_id, UNIQUE_ID_LEN};
use crate::{family_info, PlatformIdentity, UNKNOWN_SOC_ID};
use arrayvec::ArrayString;
use core::fmt::Write;
use mxc_boottime::{find_node_by_path, DeviceTree};
use mxc_error::SocError;

pub const SOC_FAMILY: &str = "Freescale i.MX";

/// Longest revision string, `"15.15"`, with room to spare.
pub const REVISION_LEN: usize = 8;

/// Published description of the running SoC.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SocAttributes<'a> {
    pub family: &'static str,
    /// Board name, borrowed from the root node's `model` property.
    pub machine: &'a str,
    pub soc_id: &'static str,
    /// Fuse-backed id in lowercase hex, for families that have one.
    pub unique_id: Option<ArrayString<UNIQUE_ID_LEN>>,
    pub revision: ArrayString<REVISION_LEN>,
}

/// System-wide facility the descriptor is published to.
///
/// `register` takes the attributes by value; on error they are dropped and
/// nothing stays registered.
pub trait SocDeviceRegistry<'a> {
    type Device;

    fn register(&mut self, attrs: SocAttributes<'a>) -> Result<Self::Device, SocError>;
}

/// Collects the descriptor fields for the running chip.
pub fn soc_attributes<'t>(
    tree: &'t dyn DeviceTree,
    identity: &PlatformIdentity,
) -> Result<SocAttributes<'t>, SocError> {
    let machine = {
        let root = find_node_by_path(tree, "/").ok_or(SocError::NodeNotFound)?;
        root.read_string("model")?
    };

    let family = family_info(identity.chip());
    let soc_id = family.map_or(UNKNOWN_SOC_ID, |info| info.soc_id(identity.revision()));
    let unique_id = match family {
        Some(info) if info.supports_unique_id() => {
            Some(format_unique_id(get_soc_unique_id(tree, identity))?)
        }
        _ => None,
    };

    let mut revision = ArrayString::new();
    write!(revision, "{}", identity.revision())?;

    Ok(SocAttributes {
        family: SOC_FAMILY,
        machine,
        soc_id,
        unique_id,
        revision,
    })
}

/// Describes the running SoC and registers it, returning the registry's
/// handle for the new device.
pub fn soc_device_init<'t, R>(
    tree: &'t dyn DeviceTree,
    identity: &PlatformIdentity,
    registry: &mut R,
) -> Result<R::Device, SocError>
where
    R: SocDeviceRegistry<'t>,
{
    let attrs = soc_attributes(tree, identity)?;
    registry.register(attrs)
}
