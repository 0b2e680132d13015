// Licensed under the Apache-2.0 license

//! i.MX SoC identification: chip and revision identity, AIPS bridge
//! protection, fuse-backed unique id and the published SoC descriptor.

#![cfg_attr(target_os = "none", no_std)]

mod aips;
pub use aips::*;
pub mod board;
mod boot;
pub use boot::*;
mod chip;
pub use chip::*;
mod family;
pub use family::*;
mod identity;
pub use identity::*;
mod registry;
pub use registry::*;
mod revision;
pub use revision::*;
mod soc_device;
pub use soc_device::*;
mod uid;
pub use uid::*;
