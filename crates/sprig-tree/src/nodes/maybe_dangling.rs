//! A `MaybeUninit`-backed stand-in for the `MaybeDangling` wrapper proposed in
//! <https://github.com/rust-lang/rfcs/pull/3336>.
//!
//! `VisibleChild` entries hold raw pointers into a node's child slots. Moving a
//! bare `Box` asserts unique ownership of its contents and would invalidate
//! them, so child arrays live behind this wrapper.

use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::Deref;

#[repr(transparent)]
pub(crate) struct MaybeDangling<T> {
    value: MaybeUninit<T>,
}

impl<T> MaybeDangling<T> {
    #[inline]
    pub(crate) const fn new(value: T) -> Self {
        Self { value: MaybeUninit::new(value) }
    }

    /// Unwraps the value without dropping it.
    #[inline]
    pub(crate) fn into_inner(self) -> T {
        let this = ManuallyDrop::new(self);
        // SAFETY: Initialized by `new`. `this` is never dropped, so the value
        // is moved out exactly once.
        unsafe { this.value.assume_init_read() }
    }
}

impl<T> Deref for MaybeDangling<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: Initialized by `new`, and only moved out by `into_inner`,
        // which consumes the wrapper.
        unsafe { self.value.assume_init_ref() }
    }
}

impl<T> Drop for MaybeDangling<T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: Still initialized, since `into_inner` skips this destructor.
        unsafe { self.value.assume_init_drop() }
    }
}
