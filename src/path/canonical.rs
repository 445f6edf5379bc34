use derive_more::IsVariant;

use super::primitives::{is_path_name_separator, path_name_separator};
use super::{Classification, Dialect, PathChar};
use crate::buffer::PathBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
enum PartType {
    Normal,
    Dot,
    DotDot,
}

/// One separated segment of the path being canonicalised. Removing a part empties its slice, and
/// empty parts (including those between consecutive separators) are dropped when coalescing.
#[derive(Debug, Clone, Copy)]
struct DirectoryPart<'a, C: PathChar> {
    chars: &'a [C],
    part_type: PartType,
}

impl<'a, C: PathChar> DirectoryPart<'a, C> {
    fn new(chars: &'a [C]) -> DirectoryPart<'a, C> {
        let part_type = match chars {
            [a] if a.eq_ascii(b'.') => PartType::Dot,
            [a, b] if a.eq_ascii(b'.') && b.eq_ascii(b'.') => PartType::DotDot,
            _ => PartType::Normal,
        };

        DirectoryPart {
            chars,
            part_type,
        }
    }

    fn remove(&mut self) {
        self.chars = &self.chars[..0];
        self.part_type = PartType::Normal;
    }

    fn is_live_normal(&self) -> bool {
        self.part_type.is_normal() && !self.chars.is_empty()
    }
}

/// Writes the canonical form of a classified, valid, non-empty path into a new buffer: the root
/// with its separators normalized, followed by the parts that survive `.` and `..` resolution.
///
/// A `..` with nothing left to cancel is dropped from rooted paths and kept in relative ones. A
/// relative path that resolves to nothing becomes `.`.
pub(crate) fn canonicalise<D: Dialect, C: PathChar>(
    classification: &Classification<'_, C>,
    remove_trailing_separator: bool,
) -> PathBuffer<C> {
    let sep = path_name_separator::<D, C>();
    let is_sep = is_path_name_separator::<D, C>;

    let root = classification.root;
    let rest = &classification.input[root.len()..];
    let rooted = classification.kind.is_rooted();
    let trailing = rest.last().is_some_and(|&ch| is_sep(ch));

    let mut parts: Vec<DirectoryPart<'_, C>> = rest
        .split(|&ch| is_sep(ch))
        .map(DirectoryPart::new)
        .collect();

    for part in parts.iter_mut().filter(|part| part.part_type.is_dot()) {
        part.remove();
    }

    for index in 0..parts.len() {
        if !parts[index].part_type.is_dot_dot() {
            continue;
        }

        match (0..index).rev().find(|&prev| parts[prev].is_live_normal()) {
            Some(prev) => {
                parts[prev].remove();
                parts[index].remove();
            },
            // Nothing can sit above the root.
            None if rooted => parts[index].remove(),
            None => (),
        }
    }

    parts.retain(|part| !part.chars.is_empty());

    let mut out = PathBuffer::with_cap(classification.input.len() + 1);
    for &ch in root {
        out.push(if is_sep(ch) { sep } else { ch });
    }

    let synthesized = parts.is_empty() && root.is_empty();
    if synthesized {
        out.push(C::from_ascii(b'.'));
    }
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push(sep);
        }
        out.extend_from_slice(part.chars);
    }

    // A root-only result already ends in its own separator, if it has one.
    if trailing && !remove_trailing_separator && (synthesized || !parts.is_empty()) {
        out.push(sep);
    }

    out
}
