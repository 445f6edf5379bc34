use super::super::{path_classify, ParseFlags, PathKind, Unix, Windows};

#[test]
fn test_classify_relative() {
    let c = path_classify::<Unix, u8>(b"a/b/c.txt", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::Relative);
    assert_eq!(c.root, b"");
    assert_eq!(c.location, b"a/b/");
    assert_eq!(c.directory, b"a/b/");
    assert_eq!(c.entry, b"c.txt");
    assert_eq!(c.stem, b"c");
    assert_eq!(c.extension, b".txt");
    assert_eq!(c.num_directory_parts, 2);
}

#[test]
fn test_classify_dots() {
    for dots in [&b"."[..], b".."] {
        let c = path_classify::<Unix, u8>(dots, ParseFlags::STRICT);
        assert_eq!(c.kind, PathKind::Relative);
        assert_eq!(c.entry, dots, "Dots should be an entry of their own.");
        assert_eq!(c.directory, b"");
        assert_eq!(c.extension, b"", "Dots don't have an extension.");
    }
}

#[test]
fn test_classify_extensions() {
    let ext = |chars: &[u8]| {
        path_classify::<Unix, u8>(chars, ParseFlags::STRICT)
            .extension
            .to_vec()
    };

    assert_eq!(ext(b"a.tar.gz"), b".gz");
    assert_eq!(ext(b".bashrc"), b"", "A leading dot doesn't start an extension.");
    assert_eq!(ext(b"dir.d/file"), b"", "Only the entry is searched.");
    assert_eq!(ext(b"a."), b".");
    assert_eq!(ext(b"dir.d/"), b"");
    assert_eq!(ext(b"..."), b"", "A name made only of dots has no extension.");
    assert_eq!(ext(b"a/...."), b"");
    assert_eq!(ext(b"..a"), b".a");
}

#[test]
fn test_classify_directory_parts() {
    let parts = |chars: &[u8]| {
        path_classify::<Unix, u8>(chars, ParseFlags::STRICT).num_directory_parts
    };

    assert_eq!(parts(b"a/b"), 1);
    assert_eq!(parts(b"/a/b"), 1, "The root shouldn't take a part of its own.");
    assert_eq!(parts(b"/"), 0);
    assert_eq!(parts(b"/a//b/c"), 2);
}

#[test]
fn test_classify_roots() {
    let c = path_classify::<Unix, u8>(b"/", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::SlashRooted);
    assert_eq!(c.root, b"/");
    assert_eq!(c.entry, b"");

    let c = path_classify::<Windows, u8>(b"C:\\dir\\file.ext", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::DriveLetterRooted);
    assert_eq!(c.root, b"C:\\");
    assert_eq!(c.directory, b"dir\\");
    assert_eq!(c.location, b"C:\\dir\\");
    assert_eq!(c.entry, b"file.ext");

    let c = path_classify::<Windows, u8>(b"\\\\server\\share\\a/b", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::UncRooted);
    assert_eq!(c.root, b"\\\\server\\share\\");
    assert_eq!(c.directory, b"a/");
    assert_eq!(c.entry, b"b");
    assert_eq!(c.num_directory_parts, 1);

    let c = path_classify::<Windows, u8>(b"~\\docs", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::HomeRooted);
    assert_eq!(c.root, b"~\\");
    assert_eq!(c.entry, b"docs");

    let c = path_classify::<Windows, u8>(b"C:file", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::DriveLetterRelative);
    assert_eq!(c.root, b"C:");
    assert_eq!(c.entry, b"file");
}

#[test]
fn test_classify_empty() {
    let c = path_classify::<Windows, u8>(b"", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::Empty);
    assert!(c.location.is_empty() && c.entry.is_empty());
}

#[test]
fn test_classify_invalid_chars() {
    assert_eq!(
        path_classify::<Windows, u8>(b"a<b", ParseFlags::STRICT).kind,
        PathKind::InvalidChars
    );
    assert_eq!(
        path_classify::<Windows, u8>(b"a\tb", ParseFlags::STRICT).kind,
        PathKind::InvalidChars
    );
    assert_eq!(
        path_classify::<Windows, u8>(b"C:a:b", ParseFlags::STRICT).kind,
        PathKind::InvalidChars,
        "Only the drive's colon is allowed."
    );

    let c = path_classify::<Windows, u8>(b"a<b", ParseFlags::STRICT.ignore_invalid_chars());
    assert_eq!(c.kind, PathKind::Relative);
    assert_eq!(c.entry, b"a<b");

    assert_eq!(
        path_classify::<Unix, u8>(b"a<b:c", ParseFlags::STRICT).kind,
        PathKind::Relative,
        "UNIX allows anything but NUL."
    );
    assert_eq!(path_classify::<Unix, u8>(b"a\0b", ParseFlags::STRICT).kind, PathKind::Unknown);
    assert_eq!(path_classify::<Unix, u8>(b"a\0b", ParseFlags::LENIENT).kind, PathKind::Relative);
}

#[test]
fn test_classify_slash_runs() {
    assert_eq!(
        path_classify::<Windows, u8>(b"a\\\\b", ParseFlags::STRICT).kind,
        PathKind::InvalidSlashRuns
    );
    assert_eq!(
        path_classify::<Windows, u8>(b"C:\\\\a", ParseFlags::STRICT).kind,
        PathKind::InvalidSlashRuns,
        "A separator after the root's own counts as a run."
    );
    assert_eq!(
        path_classify::<Windows, u8>(b"\\\\server\\share\\a", ParseFlags::STRICT).kind,
        PathKind::UncRooted,
        "The UNC prefix isn't a run."
    );

    let c = path_classify::<Windows, u8>(b"a\\\\b", ParseFlags::STRICT.ignore_slash_runs());
    assert_eq!(c.kind, PathKind::Relative);
    assert_eq!(c.directory, b"a\\\\");
    assert_eq!(c.num_directory_parts, 1);

    assert_eq!(path_classify::<Unix, u8>(b"a//b", ParseFlags::STRICT).kind, PathKind::Relative);
}

#[test]
fn test_classify_device_namespace() {
    let c = path_classify::<Windows, u8>(b"\\\\.\\pipe\\name", ParseFlags::STRICT);
    assert_eq!(c.kind, PathKind::Invalid);
    assert!(!c.kind.is_valid());
    assert!(c.entry.is_empty(), "Invalid paths aren't sliced.");
}

#[test]
fn test_kind_predicates() {
    assert!(PathKind::HomeRooted.is_rooted());
    assert!(PathKind::UncIncomplete.is_rooted());
    assert!(!PathKind::DriveLetterRelative.is_rooted());
    assert!(!PathKind::Relative.is_rooted());
    assert!(PathKind::Empty.is_valid());
    assert!(!PathKind::Unknown.is_valid());
}
