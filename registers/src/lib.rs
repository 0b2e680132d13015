// Licensed under the Apache-2.0 license

//! Register layouts of the i.MX blocks touched during early boot.

#![cfg_attr(target_os = "none", no_std)]

pub mod aips;
pub mod ocotp;
