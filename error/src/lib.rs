// Licensed under the Apache-2.0 license

#![cfg_attr(target_os = "none", no_std)]

use thiserror::Error;

/// Errors raised while identifying the SoC and publishing its descriptor.
///
/// The discriminants are stable and may be reported to boot status
/// registers or over a debug channel.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SocError {
    #[error("device tree node not found")]
    NodeNotFound = 0xf000_0001,
    #[error("failed to map register region")]
    MapFailed = 0xf000_0002,
    #[error("device tree property missing")]
    PropertyMissing = 0xf000_0003,
    #[error("device tree property is not a valid string")]
    InvalidProperty = 0xf000_0004,
    #[error("out of memory")]
    NoMemory = 0xf000_0005,
    #[error("SoC device registry is full")]
    RegistryFull = 0xf000_0006,
    #[error("unknown SoC device")]
    UnknownDevice = 0xf000_0007,
}

impl From<SocError> for u32 {
    fn from(err: SocError) -> u32 {
        err as u32
    }
}

impl From<core::fmt::Error> for SocError {
    fn from(_: core::fmt::Error) -> SocError {
        // Only fixed-capacity string buffers are formatted into.
        SocError::NoMemory
    }
}
