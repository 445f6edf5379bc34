use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Index;
use std::str::FromStr;

use super::primitives::{
    find_last_path_name_separator, find_next_path_name_separator, get_root_len, has_drive_prefix,
    is_path_name_separator, kind_is_absolute, path_classify_root, path_name_separator,
    str_fs_compare, str_fs_n_compare, trim_trailing_separators,
};
use super::{
    canonical, sys, Ancestors, Classification, Components, Dialect, DisplayPath, Native,
    ParseFlags, PathChar, PathError, PathKind, PathLengthError, Unix, UnresolvableCwdError,
    Windows, path_classify,
};
use crate::buffer::PathBuffer;
use crate::util::error::ResultExtension;

/// An owned path string of characters `C`, interpreted under dialect `D`.
///
/// A BasicPath stores exactly the characters it was given; nothing is normalized until asked for
/// (see [`canonicalise`](BasicPath::canonicalise)). Every mutating operation classifies the current
/// contents afresh, builds its result off to the side and only then replaces the stored value, so
/// a failed operation leaves the path exactly as it was.
///
/// Slices returned by [`get_location`](BasicPath::get_location),
/// [`get_file`](BasicPath::get_file) and [`get_ext`](BasicPath::get_ext) borrow the path, so the
/// borrow checker rules out holding one across a mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of characters in the path.
/// - `m`: The number of characters being pushed.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` / `push_ext` | `O(n+m)` |
/// | `push_sep` | `O(n)` |
/// | `pop` / `pop_sep` / `pop_ext` | `O(n)` |
/// | `canonicalise` | `O(n)` |
/// | `make_absolute` | `O(n)`* |
/// | `get_location` / `get_file` / `get_ext` | `O(n)` |
///
/// \* Plus the cost of asking the OS for the current directory.
pub struct BasicPath<C: PathChar, D: Dialect> {
    pub(crate) _dialect: PhantomData<fn() -> D>,
    pub(crate) buffer: PathBuffer<C>,
}

/// A narrow path under the host's conventions.
pub type Path = BasicPath<u8, Native>;

/// A wide path under the host's conventions.
#[cfg(feature = "wide")]
pub type WidePath = BasicPath<u16, Native>;

pub type UnixPath = BasicPath<u8, Unix>;

pub type WindowsPath = BasicPath<u8, Windows>;

#[cfg(feature = "wide")]
pub type WideWindowsPath = BasicPath<u16, Windows>;

impl<C: PathChar, D: Dialect> BasicPath<C, D> {
    /// Creates a new, empty path.
    pub const fn new() -> BasicPath<C, D> {
        BasicPath {
            _dialect: PhantomData,
            buffer: PathBuffer::new(),
        }
    }

    /// Creates a path holding a copy of `chars`.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if `chars` is longer than the dialect allows.
    pub fn from_chars(chars: &[C]) -> Result<BasicPath<C, D>, PathError> {
        check_len::<D>(chars.len())?;
        Ok(BasicPath::from_buffer(PathBuffer::from_chars(chars)))
    }

    pub(crate) const fn from_buffer(buffer: PathBuffer<C>) -> BasicPath<C, D> {
        BasicPath {
            _dialect: PhantomData,
            buffer,
        }
    }

    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_chars(&self) -> &[C] {
        &self.buffer
    }

    /// Returns the path followed by its terminator, for handing to C-style interfaces.
    pub fn as_chars_with_nul(&self) -> &[C] {
        self.buffer.as_slice_with_nul()
    }

    /// Returns a pointer to the NUL-terminated path. The pointer is invalidated by any mutation.
    pub fn as_ptr(&self) -> *const C {
        self.buffer.as_ptr()
    }

    pub const fn display(&self) -> DisplayPath<'_, C, D> {
        DisplayPath {
            inner: self,
        }
    }

    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    pub fn swap(&mut self, other: &mut BasicPath<C, D>) {
        self.buffer.swap(&mut other.buffer);
    }

    pub fn classify(&self, flags: ParseFlags) -> Classification<'_, C> {
        path_classify::<D, C>(self.as_chars(), flags)
    }

    /// Returns the kind the path classifies as under [`ParseFlags::STRICT`].
    pub fn kind(&self) -> PathKind {
        self.classify(ParseFlags::STRICT).kind
    }

    pub fn is_rooted(&self) -> bool {
        path_classify_root::<D, C>(self.as_chars()).0.is_rooted()
    }

    pub fn is_absolute(&self) -> bool {
        kind_is_absolute::<D>(path_classify_root::<D, C>(self.as_chars()).0)
    }

    pub fn is_unc(&self) -> bool {
        matches!(
            path_classify_root::<D, C>(self.as_chars()).0,
            PathKind::UncIncomplete | PathKind::UncRooted
        )
    }

    /// Returns true if the path ends with a separator.
    pub fn has_sep(&self) -> bool {
        self.as_chars()
            .last()
            .is_some_and(|&ch| is_path_name_separator::<D, C>(ch))
    }

    pub fn get_root_len(&self) -> usize {
        get_root_len::<D, C>(self.as_chars())
    }

    pub fn root(&self) -> &[C] {
        &self.as_chars()[..self.get_root_len()]
    }

    /// Returns the root and directory of the path: everything up to and including the last
    /// separator.
    pub fn get_location(&self) -> &[C] {
        self.classify(ParseFlags::LENIENT).location
    }

    /// Returns the final component of the path, which is empty if the path ends with a separator.
    pub fn get_file(&self) -> &[C] {
        self.classify(ParseFlags::LENIENT).entry
    }

    /// Returns the extension of the final component, including its `.`, or an empty slice.
    pub fn get_ext(&self) -> &[C] {
        self.classify(ParseFlags::LENIENT).extension
    }

    /// Returns the final component without its extension.
    pub fn get_stem(&self) -> &[C] {
        self.classify(ParseFlags::LENIENT).stem
    }

    pub fn components(&self) -> Components<'_, C, D> {
        Components::new(self.as_chars())
    }

    pub fn ancestors(&self) -> Ancestors<'_, C, D> {
        Ancestors {
            path: self.as_chars(),
            components: Components::new(self.as_chars()),
        }
    }

    /// Appends `segment` to the path, or replaces the path with it if the segment stands on its
    /// own:
    ///
    /// | `segment` | `self` | Result |
    /// |-|-|-|
    /// | empty | - | unchanged |
    /// | absolute | - | `segment` |
    /// | rooted | not absolute | `segment` |
    /// | rooted | absolute | the drive or share of `self`, then `segment` |
    /// | drive relative (`X:a`) | - | `segment` |
    /// | home rooted (`~\a`) | - | `segment` |
    /// | relative | a bare drive (`X:`) | `self` directly followed by `segment` |
    /// | relative | anything else | `self`, a separator, then `segment` |
    ///
    /// A separator added between the two matches the first one already in `self`, defaulting to
    /// the dialect's preferred separator. With `add_trailing_separator`, the result is also made to
    /// end in a separator.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if the result would be longer than the dialect allows, in
    /// which case the path is unchanged.
    pub fn push(
        &mut self,
        segment: impl AsRef<[C]>,
        add_trailing_separator: bool,
    ) -> Result<&mut Self, PathError> {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return Ok(self);
        }

        let mut scratch = self.joined(segment);
        if add_trailing_separator {
            push_sep_onto::<C, D>(&mut scratch);
        }
        self.commit(scratch)
    }

    /// As [`push`](BasicPath::push), but leaves `self` alone and returns the result.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if the result would be longer than the dialect allows.
    pub fn join(&self, segment: impl AsRef<[C]>) -> Result<BasicPath<C, D>, PathError> {
        let mut joined = self.clone();
        joined.push(segment, false)?;
        Ok(joined)
    }

    fn joined(&self, segment: &[C]) -> PathBuffer<C> {
        let (segment_kind, _) = path_classify_root::<D, C>(segment);

        match segment_kind {
            kind if kind_is_absolute::<D>(kind) => PathBuffer::from_chars(segment),
            PathKind::DriveLetterRelative | PathKind::HomeRooted => PathBuffer::from_chars(segment),
            PathKind::SlashRooted if !self.is_absolute() => PathBuffer::from_chars(segment),
            PathKind::SlashRooted => {
                // Keep the drive or share, swap out everything under it.
                let root = self.root();
                let end = trim_trailing_separators::<D, C>(root, 0);
                let mut scratch = PathBuffer::with_cap(end + segment.len());
                scratch.extend_from_slice(&root[..end]);
                scratch.extend_from_slice(segment);
                scratch
            },
            _ => {
                let mut scratch = PathBuffer::with_cap(self.len() + 1 + segment.len());
                scratch.extend_from_slice(self.as_chars());

                let classification = self.classify(ParseFlags::LENIENT);
                let bare_drive = classification.kind.is_drive_letter_relative()
                    && classification.directory.is_empty()
                    && classification.entry.is_empty();
                if !bare_drive {
                    push_sep_onto::<C, D>(&mut scratch);
                }

                scratch.extend_from_slice(segment);
                scratch
            },
        }
    }

    /// Appends an extension to the final component, adding the leading `.` if `ext` doesn't start
    /// with one. Any trailing separator is removed first, and re-added afterwards if
    /// `add_trailing_separator` is set. Does nothing if the path is empty or only a root.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if the result would be longer than the dialect allows, in
    /// which case the path is unchanged.
    pub fn push_ext(
        &mut self,
        ext: impl AsRef<[C]>,
        add_trailing_separator: bool,
    ) -> Result<&mut Self, PathError> {
        let ext = ext.as_ref();
        if ext.is_empty() {
            return Ok(self);
        }

        let root_len = self.get_root_len();
        let end = trim_trailing_separators::<D, C>(self.as_chars(), root_len);
        if end == root_len {
            // No entry to extend.
            return Ok(self);
        }

        let mut scratch = PathBuffer::with_cap(end + ext.len() + 2);
        scratch.extend_from_slice(&self.as_chars()[..end]);
        if !ext[0].eq_ascii(b'.') {
            scratch.push(C::from_ascii(b'.'));
        }
        scratch.extend_from_slice(ext);
        if add_trailing_separator {
            push_sep_onto::<C, D>(&mut scratch);
        }

        self.commit(scratch)
    }

    /// Appends a separator, unless the path is empty or already ends with one. The separator
    /// matches the first one already in the path, defaulting to the dialect's preferred separator.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if the path is already as long as the dialect allows.
    pub fn push_sep(&mut self) -> Result<&mut Self, PathError> {
        if self.is_empty() || self.has_sep() {
            return Ok(self);
        }

        check_len::<D>(self.len() + 1)?;
        push_sep_onto::<C, D>(&mut self.buffer);
        Ok(self)
    }

    /// Removes the final component of the path: the entry, or the last directory part if the path
    /// ends with a separator. The root is never removed, so once nothing else is left this does
    /// nothing.
    ///
    /// With `remove_trailing_separator`, the separator left at the end of the result is removed as
    /// well, unless it belongs to the root.
    pub fn pop(&mut self, remove_trailing_separator: bool) -> &mut Self {
        if let Some(new_len) = self.popped_len(remove_trailing_separator) {
            self.buffer.truncate(new_len);
        }
        self
    }

    fn popped_len(&self, remove_trailing_separator: bool) -> Option<usize> {
        let classification = self.classify(ParseFlags::LENIENT);
        let chars = classification.input;
        let root_len = classification.root.len();

        let mut end = if classification.entry.is_empty() {
            let trimmed = trim_trailing_separators::<D, C>(chars, root_len);
            if trimmed == root_len {
                None?
            }

            match find_last_path_name_separator::<D, C>(&chars[root_len..trimmed]) {
                Some(index) => root_len + index + 1,
                None => root_len,
            }
        } else {
            classification.location.len()
        };

        if remove_trailing_separator {
            end = trim_trailing_separators::<D, C>(&chars[..end], root_len);
        }

        Some(end)
    }

    /// Removes any trailing separators, unless they belong to the root (as in `/`, `C:\` or
    /// `\\server\share\`).
    pub fn pop_sep(&mut self) -> &mut Self {
        let end = trim_trailing_separators::<D, C>(self.as_chars(), self.get_root_len());
        self.buffer.truncate(end);
        self
    }

    /// Removes the extension of the final component, if it has one.
    pub fn pop_ext(&mut self) -> &mut Self {
        let ext_len = self.get_ext().len();
        self.buffer.truncate(self.len() - ext_len);
        self
    }

    /// Rewrites every separator as the dialect's preferred separator.
    pub fn normalize_separators(&mut self) -> &mut Self {
        let sep = path_name_separator::<D, C>();
        for ch in self.buffer.iter_mut() {
            if is_path_name_separator::<D, C>(*ch) {
                *ch = sep;
            }
        }
        self
    }

    /// Removes `.` parts and resolves `..` parts against the parts before them, normalizing every
    /// separator along the way.
    ///
    /// A `..` with nothing before it to cancel is dropped if the path is rooted (there is nothing
    /// above the root) and kept if the path is relative. A relative path that resolves to nothing
    /// becomes `.`. Empty paths and paths with invalid characters are left alone.
    pub fn canonicalise(&mut self, remove_trailing_separator: bool) -> &mut Self {
        let canonical = {
            let classification = self.classify(ParseFlags::STRICT.ignore_slash_runs());
            match classification.kind {
                PathKind::Empty => None,
                kind if !kind.is_valid() => None,
                _ => Some(canonical::canonicalise::<D, C>(
                    &classification,
                    remove_trailing_separator,
                )),
            }
        };

        if let Some(canonical) = canonical {
            self.buffer = canonical;
        }
        self
    }

    /// Resolves the path against the current directory of the process and canonicalises the
    /// result. Paths that are already absolute, home rooted, empty or invalid are left alone.
    ///
    /// # Errors
    /// Fails if the OS can't report the current directory, if the current directory isn't absolute
    /// under this dialect, or if the result would be too long. The path is unchanged on failure.
    pub fn make_absolute(
        &mut self,
        remove_trailing_separator: bool,
    ) -> Result<&mut Self, PathError> {
        if !self.needs_resolution() {
            return Ok(self);
        }

        let cwd = BasicPath::<C, D>::from_buffer(sys::current_directory::<C>()?);
        self.make_absolute_in(&cwd, remove_trailing_separator)
    }

    /// As [`make_absolute`](BasicPath::make_absolute), resolving against `cwd` instead of the
    /// process's current directory.
    ///
    /// Under the Windows dialect, a rooted path (`\a`) takes the drive or share of `cwd`, and a
    /// drive relative path (`X:a`) is resolved against `cwd` if it is on the same drive and against
    /// the root of that drive otherwise.
    ///
    /// # Errors
    /// Fails if `cwd` isn't absolute, or if the result would be too long. The path is unchanged on
    /// failure.
    pub fn make_absolute_in(
        &mut self,
        cwd: &BasicPath<C, D>,
        remove_trailing_separator: bool,
    ) -> Result<&mut Self, PathError> {
        if !self.needs_resolution() {
            return Ok(self);
        }
        if !cwd.is_absolute() {
            tracing::debug!(
                dialect = D::NAME,
                cwd = %cwd.display(),
                "current directory isn't absolute",
            );
            Err(UnresolvableCwdError)?
        }

        tracing::trace!(
            dialect = D::NAME,
            path = %self.display(),
            cwd = %cwd.display(),
            "resolving path against current directory",
        );

        let chars = self.as_chars();
        let mut resolved = match path_classify_root::<D, C>(chars).0 {
            PathKind::DriveLetterRelative => {
                let (drive, rest) = chars.split_at(2);
                if has_drive_prefix::<D, C>(cwd.as_chars())
                    && str_fs_n_compare::<D, C>(drive, cwd.as_chars(), 2).is_eq()
                {
                    cwd.join(rest)?
                } else {
                    let mut drive_root = BasicPath::<C, D>::from_chars(drive)?;
                    drive_root.buffer.push(path_name_separator::<D, C>());
                    drive_root.join(rest)?
                }
            },
            // A rooted path only lands here where drives exist, and takes the drive of cwd.
            _ => cwd.join(chars)?,
        };
        resolved.canonicalise(remove_trailing_separator);

        self.commit(resolved.buffer)
    }

    fn needs_resolution(&self) -> bool {
        match self.classify(ParseFlags::STRICT.ignore_slash_runs()).kind {
            PathKind::Empty | PathKind::HomeRooted => false,
            kind if !kind.is_valid() => false,
            kind => !kind_is_absolute::<D>(kind),
        }
    }

    /// Returns true if the two paths are spelled the same, ignoring case for case-insensitive
    /// dialects.
    pub fn equal(&self, other: impl AsRef<[C]>) -> bool {
        str_fs_compare::<D, C>(self.as_chars(), other.as_ref()).is_eq()
    }

    /// Returns true if the two paths refer to the same place once both are made absolute and
    /// canonical. Neither path is modified.
    ///
    /// # Errors
    /// Fails if either path needs the current directory and it can't be determined.
    pub fn equivalent(&self, other: impl AsRef<[C]>) -> Result<bool, PathError> {
        let mut lhs = self.clone();
        let mut rhs = BasicPath::<C, D>::from_chars(other.as_ref())?;

        lhs.make_absolute(true)?.canonicalise(true);
        rhs.make_absolute(true)?.canonicalise(true);
        Ok(lhs.equal(&rhs))
    }

    /// As [`equivalent`](BasicPath::equivalent), resolving relative paths against `cwd`.
    ///
    /// # Errors
    /// Fails if either path needs resolving and `cwd` isn't absolute.
    pub fn equivalent_in(
        &self,
        other: impl AsRef<[C]>,
        cwd: &BasicPath<C, D>,
    ) -> Result<bool, PathError> {
        let mut lhs = self.clone();
        let mut rhs = BasicPath::<C, D>::from_chars(other.as_ref())?;

        lhs.make_absolute_in(cwd, true)?.canonicalise(true);
        rhs.make_absolute_in(cwd, true)?.canonicalise(true);
        Ok(lhs.equal(&rhs))
    }

    /// Replaces the stored value with `scratch`, provided it is short enough.
    fn commit(&mut self, scratch: PathBuffer<C>) -> Result<&mut Self, PathError> {
        check_len::<D>(scratch.len())?;
        self.buffer = scratch;
        Ok(self)
    }
}

fn check_len<D: Dialect>(len: usize) -> Result<(), PathLengthError> {
    if len > D::MAX_LEN {
        Err(PathLengthError {
            len,
            max: D::MAX_LEN,
        })
    } else {
        Ok(())
    }
}

/// Appends a separator to a non-empty buffer that doesn't already end with one, matching the first
/// separator already present.
fn push_sep_onto<C: PathChar, D: Dialect>(buffer: &mut PathBuffer<C>) {
    let Some(&last) = buffer.last() else {
        return;
    };
    if is_path_name_separator::<D, C>(last) {
        return;
    }

    let sep = find_next_path_name_separator::<D, C>(buffer)
        .map(|index| buffer[index])
        .unwrap_or_else(path_name_separator::<D, C>);
    buffer.push(sep);
}

impl<C: PathChar, D: Dialect> Default for BasicPath<C, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathChar, D: Dialect> Clone for BasicPath<C, D> {
    fn clone(&self) -> Self {
        BasicPath::from_buffer(self.buffer.clone())
    }
}

impl<C: PathChar, D: Dialect> AsRef<[C]> for BasicPath<C, D> {
    fn as_ref(&self) -> &[C] {
        self.as_chars()
    }
}

impl<C: PathChar, D: Dialect> Index<usize> for BasicPath<C, D> {
    type Output = C;

    /// # Panics
    /// Panics if `index` is not less than the length of the path.
    fn index(&self, index: usize) -> &Self::Output {
        self.buffer.check_index(index);
        &self.buffer[index]
    }
}

impl<C: PathChar, D: Dialect> PartialEq for BasicPath<C, D> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<C: PathChar, D: Dialect> Eq for BasicPath<C, D> {}

impl<C: PathChar, D: Dialect> PartialOrd for BasicPath<C, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PathChar, D: Dialect> Ord for BasicPath<C, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        str_fs_compare::<D, C>(self.as_chars(), other.as_chars())
    }
}

impl<D: Dialect> PartialEq<str> for BasicPath<u8, D> {
    fn eq(&self, other: &str) -> bool {
        self.equal(other)
    }
}

impl<D: Dialect> PartialEq<&str> for BasicPath<u8, D> {
    fn eq(&self, other: &&str) -> bool {
        self.equal(other)
    }
}

impl<D: Dialect> From<&str> for BasicPath<u8, D> {
    /// # Panics
    /// Panics if `value` is longer than the dialect allows. Use [`BasicPath::from_chars`] or
    /// [`str::parse`] to handle that case.
    fn from(value: &str) -> Self {
        BasicPath::from_chars(value.as_bytes()).throw()
    }
}

impl<D: Dialect> FromStr for BasicPath<u8, D> {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BasicPath::from_chars(s.as_bytes())
    }
}

#[cfg(feature = "wide")]
impl<D: Dialect> BasicPath<u16, D> {
    /// Creates a wide path from UTF-16 code units.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if `units` is longer than the dialect allows.
    pub fn from_wide(units: &[u16]) -> Result<BasicPath<u16, D>, PathError> {
        BasicPath::from_chars(units)
    }

    /// Creates a wide path by encoding `value` as UTF-16.
    ///
    /// # Errors
    /// Fails with a [`PathLengthError`] if the encoded path is longer than the dialect allows.
    pub fn from_str_wide(value: &str) -> Result<BasicPath<u16, D>, PathError> {
        let buffer = u16::buffer_from_utf8(value.as_bytes());
        check_len::<D>(buffer.len())?;
        Ok(BasicPath::from_buffer(buffer))
    }
}

impl<C: PathChar, D: Dialect> Debug for BasicPath<C, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicPath")
            .field("dialect", &D::NAME)
            .field("path", &self.display().to_string())
            .finish()
    }
}
