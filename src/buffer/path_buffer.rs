use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};

use super::CharArray;
use crate::path::PathChar;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ResultExtension};

const MIN_CAP: usize = 8;

const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous character buffer that is always terminated by [`PathChar::NUL`] one past
/// its logical length.
///
/// A PathBuffer exclusively owns its storage; there is no sharing or reference counting, and
/// [`swap`](PathBuffer::swap) exchanges storage between two buffers in `O(1)`.
///
/// # Invariants
/// - Either nothing is allocated and the length is 0, or the allocation holds at least `len + 1`
///   characters.
/// - The character at index `len` is NUL whenever something is allocated.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of characters in the buffer.
/// - `m`: The number of characters being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `extend_from_slice` | `O(m)`*, `O(n+m)` |
/// | `truncate` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* If the buffer doesn't have enough capacity, it is reallocated first.
///
/// \** If the buffer has enough capacity for the additional characters already, `reserve` is
/// `O(1)`.
pub struct PathBuffer<C: PathChar> {
    pub(crate) arr: CharArray<C>,
    pub(crate) len: usize,
}

impl<C: PathChar> PathBuffer<C> {
    /// Creates a new, empty PathBuffer. Memory is allocated on the first append.
    pub const fn new() -> PathBuffer<C> {
        PathBuffer {
            arr: CharArray::new(),
            len: 0,
        }
    }

    /// Creates an empty PathBuffer which can hold `cap` characters (plus the terminator) without
    /// reallocating.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> PathBuffer<C> {
        let size = cap.checked_add(1).ok_or(CapacityOverflow).throw();
        PathBuffer {
            arr: CharArray::nul_filled(size),
            len: 0,
        }
    }

    /// Creates a PathBuffer holding a copy of `chars`.
    pub fn from_chars(chars: &[C]) -> PathBuffer<C> {
        let mut buf = PathBuffer::with_cap(chars.len());
        buf.extend_from_slice(chars);
        buf
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of characters the buffer can hold without reallocating, not counting the
    /// terminator.
    pub const fn cap(&self) -> usize {
        self.arr.size().saturating_sub(1)
    }

    /// Returns the contents of the buffer including the trailing terminator, in the manner of a C
    /// string.
    pub fn as_slice_with_nul(&self) -> &[C] {
        if self.arr.size() == 0 {
            C::NUL_SLICE
        } else {
            &self.arr[..=self.len]
        }
    }

    /// Returns a pointer to the NUL-terminated contents of the buffer. The pointer is invalidated
    /// by any mutation of the buffer.
    pub fn as_ptr(&self) -> *const C {
        self.as_slice_with_nul().as_ptr()
    }

    /// Returns the character at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not less than [`len`](PathBuffer::len).
    pub fn at(&self, index: usize) -> C {
        self.check_index(index);
        self.arr[index]
    }

    /// Appends a single character, growing the buffer if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would exceed [`isize::MAX`].
    pub fn push(&mut self, ch: C) {
        self.reserve(1);
        self.arr[self.len] = ch;
        self.len += 1;
        self.arr[self.len] = C::NUL;
    }

    /// Appends all of `chars`, growing the buffer at most once.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would exceed [`isize::MAX`].
    pub fn extend_from_slice(&mut self, chars: &[C]) {
        if chars.is_empty() {
            return;
        }
        self.reserve(chars.len());

        let end = self.len + chars.len();
        self.arr[self.len..end].copy_from_slice(chars);
        self.len = end;
        self.arr[self.len] = C::NUL;
    }

    /// Removes and returns the final character, if there is one.
    pub fn pop(&mut self) -> Option<C> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let ch = self.arr[self.len];
            self.arr[self.len] = C::NUL;
            Some(ch)
        }
    }

    /// Shortens the buffer to `new_len` characters. Has no effect if `new_len` is not less than the
    /// current length.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
            self.arr[self.len] = C::NUL;
        }
    }

    /// Sets the length of the buffer to `new_len`, either truncating or padding with NUL.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would exceed [`isize::MAX`].
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len - self.len);
        self.arr[self.len..=new_len].fill(C::NUL);
        self.len = new_len;
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the storage of two buffers. Any slices previously taken from either buffer are
    /// necessarily dead by the time this can be called.
    pub fn swap(&mut self, other: &mut PathBuffer<C>) {
        mem::swap(self, other);
    }

    /// Ensures that the buffer can hold an additional `extra` characters without reallocating.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would exceed [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        // One more slot for the terminator.
        let required = self
            .len
            .checked_add(extra)
            .and_then(|len| len.checked_add(1))
            .ok_or(CapacityOverflow)
            .throw();

        if required <= self.arr.size() {
            return;
        }

        let grown = self.arr.size().saturating_mul(GROWTH_FACTOR);
        self.arr.realloc(cmp::max(cmp::max(required, grown), MIN_CAP));
    }

    /// Shrinks the allocation so that it holds exactly the contents and the terminator.
    pub fn shrink_to_fit(&mut self) {
        if self.arr.size() != 0 {
            self.arr.realloc(self.len + 1);
        }
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<C: PathChar> Default for PathBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathChar> Deref for PathBuffer<C> {
    type Target = [C];

    fn deref(&self) -> &Self::Target {
        if self.arr.size() == 0 {
            &[]
        } else {
            &self.arr[..self.len]
        }
    }
}

impl<C: PathChar> DerefMut for PathBuffer<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        if self.arr.size() == 0 {
            &mut []
        } else {
            let len = self.len;
            &mut self.arr[..len]
        }
    }
}

impl<C: PathChar> AsRef<[C]> for PathBuffer<C> {
    fn as_ref(&self) -> &[C] {
        self.deref()
    }
}

impl<C: PathChar> Clone for PathBuffer<C> {
    fn clone(&self) -> Self {
        PathBuffer::from_chars(self)
    }
}

impl<C: PathChar> PartialEq for PathBuffer<C> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<C: PathChar> Eq for PathBuffer<C> {}

impl<C: PathChar> Hash for PathBuffer<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<C: PathChar> Debug for PathBuffer<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBuffer")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
