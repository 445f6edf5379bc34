use std::iter::FusedIterator;

use super::primitives::{get_root_len, is_path_name_separator};
use super::{Dialect, PathChar};

// TODO: DoubleEndedIterator for Components, so that parts can be walked from the entry backwards.

/// An iterator over the parts of a path: the root (if any), then each non-empty separated part.
/// Returned by [`BasicPath::components`](super::BasicPath::components).
pub struct Components<'a, C: PathChar, D: Dialect> {
    pub(crate) _dialect: std::marker::PhantomData<fn() -> D>,
    pub(crate) path: &'a [C],
    pub(crate) head: usize,
}

impl<'a, C: PathChar, D: Dialect> Components<'a, C, D> {
    pub(crate) fn new(path: &'a [C]) -> Components<'a, C, D> {
        Components {
            _dialect: std::marker::PhantomData,
            path,
            head: 0,
        }
    }
}

impl<'a, C: PathChar, D: Dialect> Iterator for Components<'a, C, D> {
    type Item = &'a [C];

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == 0 {
            let root_len = get_root_len::<D, C>(self.path);
            if root_len > 0 {
                self.head = root_len;
                return Some(&self.path[..root_len]);
            }
        }

        while let Some(&ch) = self.path.get(self.head) {
            if !is_path_name_separator::<D, C>(ch) {
                break;
            }
            self.head += 1;
        }
        if self.head >= self.path.len() {
            None?
        }

        let start = self.head;
        while let Some(&ch) = self.path.get(self.head) {
            if is_path_name_separator::<D, C>(ch) {
                break;
            }
            self.head += 1;
        }

        Some(&self.path[start..self.head])
    }
}

impl<'a, C: PathChar, D: Dialect> FusedIterator for Components<'a, C, D> {}

/// An iterator over successively longer prefixes of a path, each ending at a component boundary:
/// the root, then the root and first part, and so on up to the whole path (without any trailing
/// separator). Returned by [`BasicPath::ancestors`](super::BasicPath::ancestors).
pub struct Ancestors<'a, C: PathChar, D: Dialect> {
    pub(crate) path: &'a [C],
    pub(crate) components: Components<'a, C, D>,
}

impl<'a, C: PathChar, D: Dialect> Iterator for Ancestors<'a, C, D> {
    type Item = &'a [C];

    fn next(&mut self) -> Option<Self::Item> {
        self.components.next()?;
        Some(&self.path[..self.components.head])
    }
}

impl<'a, C: PathChar, D: Dialect> FusedIterator for Ancestors<'a, C, D> {}
