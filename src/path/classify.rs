use derive_more::IsVariant;

use super::primitives::{
    find_last_path_name_separator, is_path_name_separator, path_classify_root,
};
use super::{Dialect, ParseFlags, PathChar};

/// The structural kind of a path string.
///
/// The UNIX dialect only ever produces `Empty`, `Relative`, `SlashRooted` and, for strings with an
/// embedded NUL, `Unknown`. The rest belong to the Windows dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum PathKind {
    Empty,
    /// `a\b`, `.`, `..`
    Relative,
    /// `\a`: rooted, but only absolute where there are no drives.
    SlashRooted,
    /// `C:a`
    DriveLetterRelative,
    /// `C:\a`
    DriveLetterRooted,
    /// `\\`, `\\server`, `\\server\share`
    UncIncomplete,
    /// `\\server\share\a`
    UncRooted,
    /// `~` or `~\a`
    HomeRooted,
    /// Consecutive separators after the root.
    InvalidSlashRuns,
    /// Reserved or control characters, or a misplaced `:`.
    InvalidChars,
    /// A form this grammar doesn't cover, such as the `\\.\` device namespace.
    Invalid,
    /// An embedded NUL, which can't survive being handed to the OS.
    Unknown,
}

impl PathKind {
    /// Whether the path begins with a root that [`pop`](super::BasicPath::pop) won't remove.
    pub const fn is_rooted(self) -> bool {
        matches!(
            self,
            PathKind::SlashRooted
                | PathKind::DriveLetterRooted
                | PathKind::UncIncomplete
                | PathKind::UncRooted
                | PathKind::HomeRooted
        )
    }

    /// Whether the classifier sliced the path, as opposed to rejecting it.
    pub const fn is_valid(self) -> bool {
        !matches!(
            self,
            PathKind::InvalidSlashRuns
                | PathKind::InvalidChars
                | PathKind::Invalid
                | PathKind::Unknown
        )
    }
}

/// The result of classifying a path: its kind and the slices it divides into. Every slice borrows
/// the classified characters, so a Classification can't outlive the next edit of the path it came
/// from.
///
/// For a valid path, `root + directory + entry` is the whole input, `location` is `root +
/// directory`, and `stem + extension` is `entry`. Invalid kinds leave every slice empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a, C: PathChar> {
    pub kind: PathKind,
    pub input: &'a [C],
    pub root: &'a [C],
    /// The root and directory, including the separator before the entry.
    pub location: &'a [C],
    /// Everything between the root and the entry.
    pub directory: &'a [C],
    /// The final component, which is empty if the path ends with a separator.
    pub entry: &'a [C],
    pub stem: &'a [C],
    /// The end of the entry from its last non-leading `.`, inclusive. Empty for names made only
    /// of dots.
    pub extension: &'a [C],
    /// The number of non-empty separated parts in the directory. The root never takes a slot, so
    /// `/a/b` and `a/b` both have one part; use the length of `root` to tell rooted paths apart.
    pub num_directory_parts: usize,
}

impl<'a, C: PathChar> Classification<'a, C> {
    fn unsliced(kind: PathKind, input: &'a [C]) -> Classification<'a, C> {
        let none = &input[..0];
        Classification {
            kind,
            input,
            root: none,
            location: none,
            directory: none,
            entry: none,
            stem: none,
            extension: none,
            num_directory_parts: 0,
        }
    }
}

/// Classifies `chars` under dialect `D` and divides it into its parts. Never fails: malformed input
/// is reported through one of the invalid [`PathKind`]s, which `flags` can suppress.
pub fn path_classify<D: Dialect, C: PathChar>(
    chars: &[C],
    flags: ParseFlags,
) -> Classification<'_, C> {
    let (kind, root_len) = path_classify_root::<D, C>(chars);
    if kind.is_empty() {
        return Classification::unsliced(kind, chars);
    }

    if !flags.ignores_invalid_chars() {
        if let Some(invalid) = find_invalid_chars::<D, C>(chars, kind) {
            return Classification::unsliced(invalid, chars);
        }
    }

    if D::VALIDATES_CHARS
        && !flags.ignores_slash_runs()
        && has_slash_runs::<D, C>(chars, root_len)
    {
        return Classification::unsliced(PathKind::InvalidSlashRuns, chars);
    }

    let (root, rest) = chars.split_at(root_len);
    let (directory, entry) = match find_last_path_name_separator::<D, C>(rest) {
        Some(index) => rest.split_at(index + 1),
        None => rest.split_at(0),
    };
    let location = &chars[..root_len + directory.len()];
    let (stem, extension) = entry.split_at(entry.len() - extension_len(entry));

    Classification {
        kind,
        input: chars,
        root,
        location,
        directory,
        entry,
        stem,
        extension,
        num_directory_parts: directory
            .split(|&ch| is_path_name_separator::<D, C>(ch))
            .filter(|part| !part.is_empty())
            .count(),
    }
}

fn extension_len<C: PathChar>(entry: &[C]) -> usize {
    // `...` and longer runs of dots are names, not extensions.
    if entry.iter().all(|ch| ch.eq_ascii(b'.')) {
        return 0;
    }

    match entry.iter().rposition(|ch| ch.eq_ascii(b'.')) {
        Some(index) if index > 0 => entry.len() - index,
        _ => 0,
    }
}

fn find_invalid_chars<D: Dialect, C: PathChar>(chars: &[C], kind: PathKind) -> Option<PathKind> {
    if chars.contains(&C::NUL) {
        return Some(PathKind::Unknown);
    }
    if !D::VALIDATES_CHARS {
        return None;
    }

    let drive_colon = matches!(kind, PathKind::DriveLetterRelative | PathKind::DriveLetterRooted);

    for (index, ch) in chars.iter().enumerate() {
        let Some(byte) = ch.to_ascii() else {
            continue;
        };
        let reserved = match byte {
            b'<' | b'>' | b'"' | b'|' | b'?' | b'*' => true,
            b':' => !(drive_colon && index == 1),
            byte => byte < 0x20,
        };
        if reserved {
            return Some(PathKind::InvalidChars);
        }
    }

    // The device namespace, \\.\, isn't a server.
    if matches!(kind, PathKind::UncIncomplete | PathKind::UncRooted) {
        if let [dot, rest @ ..] = &chars[2..] {
            if dot.eq_ascii(b'.')
                && rest.first().is_none_or(|&ch| is_path_name_separator::<D, C>(ch))
            {
                return Some(PathKind::Invalid);
            }
        }
    }

    None
}

/// Looks for two consecutive separators anywhere after the root, including one that follows a root
/// already ending in a separator.
fn has_slash_runs<D: Dialect, C: PathChar>(chars: &[C], root_len: usize) -> bool {
    let start = root_len.saturating_sub(1);
    chars[start..].windows(2).any(|pair| {
        is_path_name_separator::<D, C>(pair[0]) && is_path_name_separator::<D, C>(pair[1])
    })
}
