//! Stateless building blocks shared by the classifier and the path engine. None of these allocate,
//! and all of them take the path as a slice, which doubles as the bounded-length form of each scan.

use std::cmp::Ordering;

use super::{Dialect, PathChar, PathKind};

pub fn is_path_name_separator<D: Dialect, C: PathChar>(ch: C) -> bool {
    ch.eq_ascii(D::PREFERRED_SEPARATOR) || D::ALT_SEPARATOR.is_some_and(|alt| ch.eq_ascii(alt))
}

/// The separator the engine writes for the dialect.
pub fn path_name_separator<D: Dialect, C: PathChar>() -> C {
    C::from_ascii(D::PREFERRED_SEPARATOR)
}

pub fn find_last_path_name_separator<D: Dialect, C: PathChar>(chars: &[C]) -> Option<usize> {
    chars.iter().rposition(|&ch| is_path_name_separator::<D, C>(ch))
}

/// As [`find_last_path_name_separator`], looking at no more than the first `len` characters.
pub fn find_last_path_name_separator_len<D: Dialect, C: PathChar>(
    chars: &[C],
    len: usize,
) -> Option<usize> {
    find_last_path_name_separator::<D, C>(&chars[..len.min(chars.len())])
}

pub fn find_next_path_name_separator<D: Dialect, C: PathChar>(chars: &[C]) -> Option<usize> {
    chars.iter().position(|&ch| is_path_name_separator::<D, C>(ch))
}

/// As [`find_next_path_name_separator`], looking at no more than the first `len` characters.
pub fn find_next_path_name_separator_len<D: Dialect, C: PathChar>(
    chars: &[C],
    len: usize,
) -> Option<usize> {
    find_next_path_name_separator::<D, C>(&chars[..len.min(chars.len())])
}

/// Returns true for exactly `.` and `..`.
pub fn is_dots<C: PathChar>(chars: &[C]) -> bool {
    match chars {
        [a] => a.eq_ascii(b'.'),
        [a, b] => a.eq_ascii(b'.') && b.eq_ascii(b'.'),
        _ => false,
    }
}

pub fn is_drive_letter<C: PathChar>(ch: C) -> bool {
    ch.to_ascii().is_some_and(|byte| byte.is_ascii_alphabetic())
}

/// Returns true if `chars` begins with `X:` and the dialect has drive letters.
pub fn has_drive_prefix<D: Dialect, C: PathChar>(chars: &[C]) -> bool {
    D::DRIVE_LETTERS
        && matches!(chars, [drive, colon, ..] if is_drive_letter(*drive) && colon.eq_ascii(b':'))
}

/// Returns true if `chars` is a root and nothing else: a single separator, `X:\` or
/// `\\server\share\`, depending on what the dialect supports. Partial or over-long forms don't
/// count.
pub fn is_root_designator<D: Dialect, C: PathChar>(chars: &[C]) -> bool {
    let sep = is_path_name_separator::<D, C>;

    match chars {
        [only] => sep(*only),
        [_, _, last] if has_drive_prefix::<D, C>(chars) => sep(*last),
        _ => {
            let (kind, root_len) = path_classify_root::<D, C>(chars);
            kind == PathKind::UncRooted && root_len == chars.len()
        },
    }
}

/// Detects the root form at the start of `chars`, returning its kind and the number of characters
/// it spans. Relative paths have a root length of 0.
///
/// Only the root is examined. The returned kind is never one of the invalid kinds; that is left to
/// [`path_classify`](super::path_classify).
pub fn path_classify_root<D: Dialect, C: PathChar>(chars: &[C]) -> (PathKind, usize) {
    let sep = is_path_name_separator::<D, C>;

    match chars {
        [] => (PathKind::Empty, 0),
        [a, b, ..] if D::UNC && sep(*a) && sep(*b) => classify_unc_root::<D, C>(chars),
        [a, ..] if sep(*a) => (PathKind::SlashRooted, 1),
        [_, _, rest @ ..] if has_drive_prefix::<D, C>(chars) => match rest.first() {
            Some(ch) if sep(*ch) => (PathKind::DriveLetterRooted, 3),
            _ => (PathKind::DriveLetterRelative, 2),
        },
        [tilde, rest @ ..] if D::HOME_ROOT && tilde.eq_ascii(b'~') => match rest.first() {
            None => (PathKind::HomeRooted, 1),
            Some(ch) if sep(*ch) => (PathKind::HomeRooted, 2),
            Some(_) => (PathKind::Relative, 0),
        },
        _ => (PathKind::Relative, 0),
    }
}

/// `chars` starts with two separators. The root only becomes complete with a separator after a
/// non-empty server and a non-empty share.
fn classify_unc_root<D: Dialect, C: PathChar>(chars: &[C]) -> (PathKind, usize) {
    let after_prefix = &chars[2..];

    let server_len = match find_next_path_name_separator::<D, C>(after_prefix) {
        Some(0) => return (PathKind::UncIncomplete, 2),
        None => return (PathKind::UncIncomplete, chars.len()),
        Some(len) => len,
    };
    let share_start = 2 + server_len + 1;

    match find_next_path_name_separator::<D, C>(&chars[share_start..]) {
        None => (PathKind::UncIncomplete, chars.len()),
        Some(0) => (PathKind::UncIncomplete, share_start),
        Some(share_len) => (PathKind::UncRooted, share_start + share_len + 1),
    }
}

/// Returns the number of leading characters that make up the root of the path, which operations
/// like [`pop`](super::BasicPath::pop) will never remove.
pub fn get_root_len<D: Dialect, C: PathChar>(chars: &[C]) -> usize {
    path_classify_root::<D, C>(chars).1
}

pub fn is_path_rooted<D: Dialect, C: PathChar>(chars: &[C]) -> bool {
    path_classify_root::<D, C>(chars).0.is_rooted()
}

pub fn is_path_absolute<D: Dialect, C: PathChar>(chars: &[C]) -> bool {
    kind_is_absolute::<D>(path_classify_root::<D, C>(chars).0)
}

pub fn is_path_unc<D: Dialect, C: PathChar>(chars: &[C]) -> bool {
    matches!(
        path_classify_root::<D, C>(chars).0,
        PathKind::UncIncomplete | PathKind::UncRooted
    )
}

/// Whether a path of `kind` can be resolved without reference to a current directory.
pub fn kind_is_absolute<D: Dialect>(kind: PathKind) -> bool {
    match kind {
        // Without drives, a leading separator is all it takes.
        PathKind::SlashRooted => !D::DRIVE_LETTERS,
        PathKind::DriveLetterRooted | PathKind::UncIncomplete | PathKind::UncRooted => true,
        _ => false,
    }
}

/// Returns the length of `chars` with any trailing separators removed, never cutting into the
/// first `floor` characters.
pub fn trim_trailing_separators<D: Dialect, C: PathChar>(chars: &[C], floor: usize) -> usize {
    let mut end = chars.len();
    while end > floor && is_path_name_separator::<D, C>(chars[end - 1]) {
        end -= 1;
    }
    end
}

/// Compares two path strings the way the dialect's filesystem would: exactly, or ignoring ASCII
/// case for case-insensitive dialects.
pub fn str_fs_compare<D: Dialect, C: PathChar>(lhs: &[C], rhs: &[C]) -> Ordering {
    if D::CASE_SENSITIVE {
        lhs.cmp(rhs)
    } else {
        lhs.iter()
            .map(|ch| ch.fold_ascii_case())
            .cmp(rhs.iter().map(|ch| ch.fold_ascii_case()))
    }
}

/// As [`str_fs_compare`], considering no more than the first `len` characters of each side.
pub fn str_fs_n_compare<D: Dialect, C: PathChar>(lhs: &[C], rhs: &[C], len: usize) -> Ordering {
    str_fs_compare::<D, C>(&lhs[..len.min(lhs.len())], &rhs[..len.min(rhs.len())])
}
