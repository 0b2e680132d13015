// Licensed under the Apache-2.0 license

//! On-chip OTP controller. Only the shadowed unique id words are described.

pub mod regs {
    use tock_registers::register_structs;
    use tock_registers::registers::ReadOnly;

    register_structs! {
        pub Ocotp {
            (0x000 => _reserved0),
            /// Lower 32 bits of the unique id.
            (0x410 => pub cfg0: ReadOnly<u32>),
            (0x414 => _reserved1),
            /// Upper 32 bits of the unique id.
            (0x420 => pub cfg1: ReadOnly<u32>),
            (0x424 => @END),
        }
    }
}
