use std::cmp::Ordering;

use super::super::primitives::*;
use super::super::{PathKind, Unix, Windows};

#[test]
fn test_separators() {
    assert!(is_path_name_separator::<Unix, u8>(b'/'));
    assert!(!is_path_name_separator::<Unix, u8>(b'\\'), "UNIX only separates with '/'.");
    assert!(is_path_name_separator::<Windows, u8>(b'/'));
    assert!(is_path_name_separator::<Windows, u8>(b'\\'));

    assert_eq!(path_name_separator::<Unix, u8>(), b'/');
    assert_eq!(path_name_separator::<Windows, u8>(), b'\\');
}

#[test]
fn test_find_separators() {
    assert_eq!(find_last_path_name_separator::<Unix, u8>(b"a/b/c"), Some(3));
    assert_eq!(find_last_path_name_separator::<Unix, u8>(b"abc"), None);
    assert_eq!(find_next_path_name_separator::<Unix, u8>(b"a/b/c"), Some(1));
    assert_eq!(find_next_path_name_separator::<Windows, u8>(b"a\\b/c"), Some(1));

    assert_eq!(
        find_last_path_name_separator_len::<Unix, u8>(b"a/b/c", 3),
        Some(1),
        "A bounded search shouldn't look past its length."
    );
    assert_eq!(find_next_path_name_separator_len::<Unix, u8>(b"ab/c", 2), None);
    assert_eq!(find_next_path_name_separator_len::<Unix, u8>(b"a/", 100), Some(1));
}

#[test]
fn test_is_dots() {
    assert!(is_dots(b"."));
    assert!(is_dots(b".."));
    assert!(!is_dots(b"..."));
    assert!(!is_dots(b".a"));
    assert!(!is_dots::<u8>(b""));
}

#[test]
fn test_is_root_designator() {
    assert!(is_root_designator::<Unix, u8>(b"/"));
    assert!(!is_root_designator::<Unix, u8>(b"/etc"));
    assert!(!is_root_designator::<Unix, u8>(b""));
    assert!(!is_root_designator::<Unix, u8>(b"C:\\"), "UNIX has no drives.");

    assert!(is_root_designator::<Windows, u8>(b"\\"));
    assert!(is_root_designator::<Windows, u8>(b"C:\\"));
    assert!(is_root_designator::<Windows, u8>(b"c:/"));
    assert!(!is_root_designator::<Windows, u8>(b"C:\\Windows"));
    assert!(!is_root_designator::<Windows, u8>(b"C:"));
    assert!(is_root_designator::<Windows, u8>(b"\\\\server\\share\\"));
    assert!(!is_root_designator::<Windows, u8>(b"\\\\server\\share"));
    assert!(!is_root_designator::<Windows, u8>(b"\\\\server\\share\\dir"));
}

#[test]
fn test_classify_root_unix() {
    assert_eq!(path_classify_root::<Unix, u8>(b""), (PathKind::Empty, 0));
    assert_eq!(path_classify_root::<Unix, u8>(b"a/b"), (PathKind::Relative, 0));
    assert_eq!(path_classify_root::<Unix, u8>(b"/a"), (PathKind::SlashRooted, 1));
    assert_eq!(path_classify_root::<Unix, u8>(b"//a"), (PathKind::SlashRooted, 1));
    assert_eq!(path_classify_root::<Unix, u8>(b"C:\\a"), (PathKind::Relative, 0));
    assert_eq!(path_classify_root::<Unix, u8>(b"~/a"), (PathKind::Relative, 0));
}

#[test]
fn test_classify_root_windows() {
    assert_eq!(path_classify_root::<Windows, u8>(b"\\a"), (PathKind::SlashRooted, 1));
    assert_eq!(path_classify_root::<Windows, u8>(b"C:"), (PathKind::DriveLetterRelative, 2));
    assert_eq!(path_classify_root::<Windows, u8>(b"C:a"), (PathKind::DriveLetterRelative, 2));
    assert_eq!(path_classify_root::<Windows, u8>(b"C:\\a"), (PathKind::DriveLetterRooted, 3));
    assert_eq!(path_classify_root::<Windows, u8>(b"1:\\a"), (PathKind::Relative, 0));
    assert_eq!(path_classify_root::<Windows, u8>(b"~"), (PathKind::HomeRooted, 1));
    assert_eq!(path_classify_root::<Windows, u8>(b"~\\a"), (PathKind::HomeRooted, 2));
    assert_eq!(path_classify_root::<Windows, u8>(b"~a"), (PathKind::Relative, 0));
}

#[test]
fn test_classify_root_unc() {
    assert_eq!(path_classify_root::<Windows, u8>(b"\\\\"), (PathKind::UncIncomplete, 2));
    assert_eq!(path_classify_root::<Windows, u8>(b"\\\\server"), (PathKind::UncIncomplete, 8));
    assert_eq!(path_classify_root::<Windows, u8>(b"\\\\server\\"), (PathKind::UncIncomplete, 9));
    assert_eq!(
        path_classify_root::<Windows, u8>(b"\\\\server\\share"),
        (PathKind::UncIncomplete, 14)
    );
    assert_eq!(
        path_classify_root::<Windows, u8>(b"\\\\server\\share\\"),
        (PathKind::UncRooted, 15)
    );
    assert_eq!(
        path_classify_root::<Windows, u8>(b"\\\\server\\share\\a\\b"),
        (PathKind::UncRooted, 15),
        "The root should end at the separator after the share."
    );
    assert_eq!(
        path_classify_root::<Windows, u8>(b"\\\\server\\\\a"),
        (PathKind::UncIncomplete, 9),
        "An empty share should leave the root incomplete."
    );
}

#[test]
fn test_root_queries() {
    assert_eq!(get_root_len::<Windows, u8>(b"C:\\a\\b"), 3);
    assert_eq!(get_root_len::<Unix, u8>(b"a/b"), 0);

    assert!(is_path_rooted::<Windows, u8>(b"\\a"));
    assert!(
        !is_path_absolute::<Windows, u8>(b"\\a"),
        "A rooted path without a drive isn't absolute."
    );
    assert!(is_path_absolute::<Unix, u8>(b"/a"));
    assert!(is_path_absolute::<Windows, u8>(b"C:\\a"));
    assert!(!is_path_absolute::<Windows, u8>(b"C:a"));
    assert!(is_path_absolute::<Windows, u8>(b"\\\\server\\share\\a"));

    assert!(is_path_unc::<Windows, u8>(b"\\\\server"));
    assert!(!is_path_unc::<Unix, u8>(b"//server/share/"));
}

#[test]
fn test_trim_trailing_separators() {
    assert_eq!(trim_trailing_separators::<Unix, u8>(b"a//", 0), 1);
    assert_eq!(trim_trailing_separators::<Unix, u8>(b"a", 0), 1);
    assert_eq!(trim_trailing_separators::<Unix, u8>(b"/", 1), 1, "The floor should be respected.");
    assert_eq!(trim_trailing_separators::<Windows, u8>(b"a\\/", 0), 1);
}

#[test]
fn test_str_fs_compare() {
    assert_eq!(str_fs_compare::<Windows, u8>(b"C:\\ABC", b"c:\\abc"), Ordering::Equal);
    assert_eq!(str_fs_compare::<Unix, u8>(b"ABC", b"abc"), Ordering::Less);
    assert_eq!(str_fs_compare::<Unix, u8>(b"abc", b"abd"), Ordering::Less);
    assert_eq!(str_fs_compare::<Unix, u8>(b"ab", b"abc"), Ordering::Less);

    assert_eq!(str_fs_n_compare::<Unix, u8>(b"abc", b"abd", 2), Ordering::Equal);
    assert_eq!(str_fs_n_compare::<Windows, u8>(b"Ab", b"aB", 10), Ordering::Equal);
}
