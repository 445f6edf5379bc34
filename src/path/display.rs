use std::fmt::{self, Display, Formatter};

use super::{BasicPath, Dialect, PathChar};

/// Lossy [`Display`] adapter for a path, returned by [`BasicPath::display`].
pub struct DisplayPath<'a, C: PathChar, D: Dialect> {
    pub(crate) inner: &'a BasicPath<C, D>,
}

/// Lossy [`Display`] adapter for a path that shows separators in the dialect's preferred form.
pub struct DisplayPreferred<'a, C: PathChar, D: Dialect> {
    pub(crate) inner: &'a BasicPath<C, D>,
}

impl<'a, C: PathChar, D: Dialect> DisplayPath<'a, C, D> {
    pub const fn preferred_separators(&self) -> DisplayPreferred<'a, C, D> {
        DisplayPreferred {
            inner: self.inner,
        }
    }
}

impl<'a, C: PathChar, D: Dialect> Display for DisplayPath<'a, C, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        C::fmt_lossy(self.inner.as_chars(), f)
    }
}

impl<'a, C: PathChar, D: Dialect> Display for DisplayPreferred<'a, C, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut normalized = self.inner.clone();
        normalized.normalize_separators();
        C::fmt_lossy(normalized.as_chars(), f)
    }
}
