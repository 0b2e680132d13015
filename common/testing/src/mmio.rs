// Licensed under the Apache-2.0 license

use mxc_boottime::Resource;
use std::cell::Cell;

/// Zero-initialised memory standing in for a block of device registers.
///
/// The words are interior-mutable so the block can be written through a
/// mapped register struct while the test keeps a shared handle to inspect
/// it.
pub struct FakeMmio {
    words: Box<[Cell<u32>]>,
}

impl FakeMmio {
    /// Creates a window of `size` bytes, rounded up to whole words.
    pub fn new(size: usize) -> Self {
        let words = (0..size.div_ceil(4)).map(|_| Cell::new(0)).collect();
        FakeMmio { words }
    }

    pub fn base(&self) -> usize {
        self.words.as_ptr() as usize
    }

    pub fn size(&self) -> usize {
        self.words.len() * 4
    }

    pub fn resource(&self) -> Resource {
        Resource {
            start: self.base(),
            size: self.size(),
        }
    }

    pub fn read(&self, offset: usize) -> u32 {
        self.word(offset).get()
    }

    pub fn write(&self, offset: usize, value: u32) {
        self.word(offset).set(value);
    }

    fn word(&self, offset: usize) -> &Cell<u32> {
        assert_eq!(offset % 4, 0, "unaligned register offset {:#x}", offset);
        &self.words[offset / 4]
    }
}
