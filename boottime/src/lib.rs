// Licensed under the Apache-2.0 license

//! Boot-time runtime support: device tree lookups, register window mapping
//! and fixed register references.

#![cfg_attr(target_os = "none", no_std)]

mod devtree;
pub use devtree::*;
mod flat;
pub use flat::*;
mod static_ref;
pub use static_ref::*;
