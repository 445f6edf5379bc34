use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::path::PathChar;
use crate::util::error::{CapacityOverflow, ResultExtension};

/// A heap allocated run of characters that is sized at runtime. Every slot is initialized, new
/// slots are filled with [`PathChar::NUL`] as the array grows.
///
/// This is the raw storage behind [`PathBuffer`](super::PathBuffer), which is responsible for
/// tracking how much of it is in use.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* Growing writes a terminator into every new slot, so it is linear in the growth at least.
pub struct CharArray<C: PathChar> {
    pub(crate) ptr: NonNull<C>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<C>,
}

impl<C: PathChar> CharArray<C> {
    /// Creates a new CharArray with size 0. No memory is allocated until the size changes.
    pub const fn new() -> CharArray<C> {
        CharArray {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new CharArray of `size` characters, all of which are [`PathChar::NUL`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn nul_filled(size: usize) -> CharArray<C> {
        let mut arr = CharArray::new();
        arr.realloc(size);
        arr
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reallocates the array to hold exactly `new_size` characters. Existing characters up to the
    /// smaller of the two sizes are kept, any new slots are NUL.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Self::make_layout(new_size);

                // SAFETY: The layout has a non-zero size, new_size isn't zero and no PathChar is a
                // zero-sized type.
                let raw_ptr: *mut C = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with exactly this layout, and
                // self.size is non-zero so the allocation is real.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)) }

                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size);
                let new_layout = Self::make_layout(new_size);

                // SAFETY: The same layout and allocator are used as for the original allocation,
                // and the new size is > 0 and has already been checked against isize::MAX.
                let raw_ptr: *mut C = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        for i in self.size..new_size {
            // SAFETY: i is within the new allocation of new_size characters.
            unsafe { new_ptr.add(i).write(C::NUL) }
        }

        self.ptr = new_ptr;
        self.size = new_size;
    }

    /// Creates a [`Layout`] for `size` characters.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<C>(size).map_err(|_| CapacityOverflow).throw()
    }
}

impl<C: PathChar> Default for CharArray<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathChar> Drop for CharArray<C> {
    fn drop(&mut self) {
        // PathChars are Copy, so there is nothing to drop in place.
        if self.size != 0 {
            // SAFETY: ptr is always allocated in the global allocator when size is non-zero, with
            // the same layout used here.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)) }
        }
    }
}

impl<C: PathChar> Deref for CharArray<C> {
    type Target = [C];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and properly aligned for size initialized characters (or dangling
        // with size 0), and the borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<C: PathChar> DerefMut for CharArray<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with &mut self guaranteeing exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<C: PathChar> Clone for CharArray<C> {
    fn clone(&self) -> Self {
        let mut arr = CharArray::nul_filled(self.size);
        arr.copy_from_slice(self);
        arr
    }
}

// SAFETY: CharArray uniquely owns its allocation and PathChars are plain integers.
unsafe impl<C: PathChar> Send for CharArray<C> {}
// SAFETY: The safe API obeys the borrow checker, there is no interior mutability.
unsafe impl<C: PathChar> Sync for CharArray<C> {}

impl<C: PathChar> Debug for CharArray<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharArray")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
