use proptest::prelude::*;

use super::*;

/// Joins a handful of parts, dots included, under an optional root.
fn unix_path() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        Just("a".to_owned()),
        Just(".".to_owned()),
        Just("..".to_owned()),
        Just(String::new()),
        "[a-z]{1,4}(\\.[a-z]{1,3})?",
    ];
    let root = prop_oneof![Just(""), Just("/")];

    (root, proptest::collection::vec(part, 0..6))
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("/")))
}

fn windows_path() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        Just("a".to_owned()),
        Just(".".to_owned()),
        Just("..".to_owned()),
        "[a-zA-Z]{1,4}(\\.[a-z]{1,3})?",
    ];
    let root = prop_oneof![
        Just(""),
        Just("\\"),
        Just("C:"),
        Just("d:"),
        Just("C:\\"),
        Just("\\\\srv\\share\\"),
    ];
    let sep = prop_oneof![Just("\\"), Just("/")];

    (root, proptest::collection::vec(part, 0..6), sep)
        .prop_map(|(root, parts, sep)| format!("{root}{}", parts.join(sep)))
}

proptest::proptest! {
    #[test]
    fn pop_sep_is_idempotent(value in unix_path()) {
        let mut once = unix(&value);
        once.pop_sep();
        let mut twice = once.clone();
        twice.pop_sep();
        prop_assert_eq!(text(&once), text(&twice));
    }

    #[test]
    fn pop_ext_is_idempotent(value in unix_path()) {
        let mut once = unix(&value);
        once.pop_ext();
        let mut twice = once.clone();
        twice.pop_ext();
        prop_assert_eq!(text(&once), text(&twice));
    }

    #[test]
    fn canonicalise_is_idempotent(value in unix_path(), remove_trailing in any::<bool>()) {
        let mut once = unix(&value);
        once.canonicalise(remove_trailing);
        let mut twice = once.clone();
        twice.canonicalise(remove_trailing);
        prop_assert_eq!(text(&once), text(&twice));
    }

    #[test]
    fn canonicalise_is_idempotent_windows(value in windows_path()) {
        let mut once = win(&value);
        once.canonicalise(true);
        let mut twice = once.clone();
        twice.canonicalise(true);
        prop_assert_eq!(text(&once), text(&twice));
    }

    #[test]
    fn push_then_pop_restores(value in unix_path(), segment in "[a-z]{1,8}") {
        let mut pushed = unix(&value);
        pushed.push(segment.as_str(), false).unwrap();
        pushed.pop(true);

        let mut expected = unix(&value);
        expected.pop_sep();
        prop_assert_eq!(text(&pushed), text(&expected));
    }

    #[test]
    fn push_then_pop_restores_windows(value in windows_path(), segment in "[a-z]{1,8}") {
        let mut pushed = win(&value);
        pushed.push(segment.as_str(), false).unwrap();
        pushed.pop(true);

        let mut expected = win(&value);
        expected.pop_sep();
        prop_assert_eq!(text(&pushed), text(&expected));
    }

    #[test]
    fn pop_keeps_the_root(value in windows_path()) {
        let mut path = win(&value);
        let root_len = path.get_root_len();
        for _ in 0..8 {
            path.pop(true);
            prop_assert_eq!(path.get_root_len(), root_len);
        }
    }

    #[test]
    fn location_and_file_partition_the_path(value in "[a-zC:/\\\\.~]{0,16}") {
        let path = win(&value);
        prop_assert_eq!(path.get_location().len() + path.get_file().len(), path.len());
        prop_assert!(path.get_file().ends_with(path.get_ext()));

        let path = unix(&value);
        prop_assert_eq!(path.get_location().len() + path.get_file().len(), path.len());
        prop_assert!(path.get_file().ends_with(path.get_ext()));
    }

    #[test]
    fn make_absolute_in_is_absolute_and_idempotent(value in unix_path()) {
        prop_assume!(!value.is_empty());
        let cwd = unix("/home/user");

        let mut once = unix(&value);
        once.make_absolute_in(&cwd, true).unwrap();
        prop_assert!(once.is_absolute());

        let mut twice = once.clone();
        twice.make_absolute_in(&cwd, true).unwrap();
        prop_assert_eq!(text(&once), text(&twice));
    }

    #[test]
    fn make_absolute_in_is_absolute_and_idempotent_windows(value in windows_path()) {
        prop_assume!(!value.is_empty());
        let cwd = win("C:\\work");

        let mut once = win(&value);
        once.make_absolute_in(&cwd, true).unwrap();
        prop_assert!(once.is_absolute(), "{} resolved to {}", value, once.display());

        let mut twice = once.clone();
        twice.make_absolute_in(&cwd, true).unwrap();
        prop_assert_eq!(text(&once), text(&twice));
    }
}
