// Licensed under the Apache-2.0 license

use core::ops::Deref;
use core::ptr::NonNull;

/// A pointer to a register block that stays mapped for the life of the
/// system.
#[derive(Debug)]
pub struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned, and point to memory that is valid
    /// for `T` for the rest of the program.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef {
            ptr: NonNull::new_unchecked(ptr.cast_mut()),
        }
    }

    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the constructor's contract guarantees the pointee outlives us.
        unsafe { self.ptr.as_ref() }
    }
}
