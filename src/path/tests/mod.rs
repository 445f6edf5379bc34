#![cfg(test)]

use super::*;

mod classify;
mod primitives;
mod properties;

/// Renders a narrow path for comparison against string literals, without any case folding.
fn text<D: Dialect>(path: &BasicPath<u8, D>) -> String {
    String::from_utf8_lossy(path.as_chars()).into_owned()
}

fn unix(value: &str) -> UnixPath {
    UnixPath::from(value)
}

fn win(value: &str) -> WindowsPath {
    WindowsPath::from(value)
}
