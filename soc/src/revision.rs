// Licensed under the Apache-2.0 license

use core::fmt;

/// Silicon revision, one byte: major in the high nibble, minor in the low.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SiliconRevision(pub u8);

impl SiliconRevision {
    pub const REV_1_0: SiliconRevision = SiliconRevision(0x10);
    pub const REV_1_1: SiliconRevision = SiliconRevision(0x11);
    pub const REV_1_2: SiliconRevision = SiliconRevision(0x12);
    pub const REV_1_3: SiliconRevision = SiliconRevision(0x13);
    pub const REV_1_4: SiliconRevision = SiliconRevision(0x14);
    pub const REV_1_5: SiliconRevision = SiliconRevision(0x15);
    pub const REV_2_0: SiliconRevision = SiliconRevision(0x20);
    pub const REV_2_1: SiliconRevision = SiliconRevision(0x21);
    pub const REV_2_2: SiliconRevision = SiliconRevision(0x22);
    pub const REV_2_3: SiliconRevision = SiliconRevision(0x23);
    pub const REV_3_0: SiliconRevision = SiliconRevision(0x30);
    pub const REV_3_1: SiliconRevision = SiliconRevision(0x31);
    pub const REV_3_2: SiliconRevision = SiliconRevision(0x32);
    pub const REV_3_3: SiliconRevision = SiliconRevision(0x33);
    pub const UNKNOWN: SiliconRevision = SiliconRevision(0xff);

    /// Encodes `major.minor`; both are truncated to a nibble.
    pub const fn new(major: u8, minor: u8) -> SiliconRevision {
        SiliconRevision(((major & 0xf) << 4) | (minor & 0xf))
    }

    pub const fn major(self) -> u8 {
        (self.0 >> 4) & 0xf
    }

    pub const fn minor(self) -> u8 {
        self.0 & 0xf
    }

    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl Default for SiliconRevision {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<u8> for SiliconRevision {
    fn from(raw: u8) -> SiliconRevision {
        SiliconRevision(raw)
    }
}

/// Formats as `major.minor`, including for [`SiliconRevision::UNKNOWN`].
impl fmt::Display for SiliconRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// The CPU identification line logged once at boot.
#[derive(Clone, Copy, Debug)]
pub struct SiliconRevLine<'a> {
    cpu: &'a str,
    revision: SiliconRevision,
}

impl fmt::Display for SiliconRevLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.revision.is_unknown() {
            write!(f, "CPU identified as {}, unknown revision", self.cpu)
        } else {
            write!(
                f,
                "CPU identified as {}, silicon rev {}",
                self.cpu, self.revision
            )
        }
    }
}

pub fn format_revision(cpu: &str, revision: SiliconRevision) -> SiliconRevLine<'_> {
    SiliconRevLine { cpu, revision }
}

pub fn print_silicon_rev(cpu: &str, revision: SiliconRevision) {
    log::info!("{}", format_revision(cpu, revision));
}
