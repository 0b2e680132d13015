// Licensed under the Apache-2.0 license

//! AHB-to-IP bridge (AIPS) access control.
//!
//! Both MPROT and OPACR registers pack one 4-bit field per bus master
//! (MPROT) or per peripheral slot (OPACR), eight fields per register.

/// Master buffer writable.
pub const MPROT_MBW: u32 = 1 << 3;
/// Master trusted for reads.
pub const MPROT_MTR: u32 = 1 << 2;
/// Master trusted for writes.
pub const MPROT_MTW: u32 = 1 << 1;
/// Master privilege level; when clear, accesses are forced to user mode.
pub const MPROT_MPL: u32 = 1 << 0;

/// Bufferable write.
pub const OPACR_BW: u32 = 1 << 3;
/// Supervisor protect.
pub const OPACR_SP: u32 = 1 << 2;
/// Write protect.
pub const OPACR_WP: u32 = 1 << 1;
/// Trusted protect.
pub const OPACR_TP: u32 = 1 << 0;

/// Copies a 4-bit field value into all eight nibbles of a register.
pub const fn replicate_nibble(field: u32) -> u32 {
    (field & 0xf) * 0x1111_1111
}

/// Every master: non-bufferable, trusted for R/W, not forced to user mode.
pub const MPROT_ALL_TRUSTED: u32 = replicate_nibble(MPROT_MTR | MPROT_MTW | MPROT_MPL);

/// Every peripheral: non-bufferable, no supervisor requirement, writable,
/// untrusted masters allowed.
pub const OPACR_ALL_OPEN: u32 = replicate_nibble(0);

/// Applied to OPACR4 on write-back: clears the top byte, keeps the rest.
pub const OPACR4_WRITEBACK_MASK: u32 = 0x00ff_ffff;

pub mod regs {
    use tock_registers::register_structs;
    use tock_registers::registers::ReadWrite;

    register_structs! {
        pub Aips {
            (0x00 => pub mprot: [ReadWrite<u32>; 2]),
            (0x08 => _reserved0),
            (0x40 => pub opacr: [ReadWrite<u32>; 5]),
            (0x54 => @END),
        }
    }
}
