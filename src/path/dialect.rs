use std::fmt::Debug;

use crate::util::sealed::Sealed;

/// The set of OS conventions a path is interpreted under. The classifier and the path engine are
/// generic over a Dialect rather than branching on the host OS, so both sets of rules are available
/// (and testable) on every host.
pub trait Dialect: Sealed + Debug + 'static {
    const NAME: &'static str;

    /// The separator written by the engine when it has to choose one.
    const PREFERRED_SEPARATOR: u8;

    /// A second character accepted as a separator when reading, if any.
    const ALT_SEPARATOR: Option<u8>;

    const CASE_SENSITIVE: bool;

    /// Whether `X:` prefixes denote drives.
    const DRIVE_LETTERS: bool;

    /// Whether a leading pair of separators introduces a `\\server\share\` root.
    const UNC: bool;

    /// Whether a leading `~` denotes the user's home directory.
    const HOME_ROOT: bool;

    /// Whether the classifier rejects reserved characters and runs of separators.
    const VALIDATES_CHARS: bool;

    /// The maximum number of characters in a path, excluding the terminator.
    const MAX_LEN: usize;
}

#[derive(Debug)]
pub enum Unix {}

impl Sealed for Unix {}

impl Dialect for Unix {
    const NAME: &'static str = "unix";
    const PREFERRED_SEPARATOR: u8 = b'/';
    const ALT_SEPARATOR: Option<u8> = None;
    const CASE_SENSITIVE: bool = true;
    const DRIVE_LETTERS: bool = false;
    const UNC: bool = false;
    const HOME_ROOT: bool = false;
    const VALIDATES_CHARS: bool = false;
    // PATH_MAX on Linux, less the terminator.
    const MAX_LEN: usize = 4095;
}

#[derive(Debug)]
pub enum Windows {}

impl Sealed for Windows {}

impl Dialect for Windows {
    const NAME: &'static str = "windows";
    const PREFERRED_SEPARATOR: u8 = b'\\';
    const ALT_SEPARATOR: Option<u8> = Some(b'/');
    const CASE_SENSITIVE: bool = false;
    const DRIVE_LETTERS: bool = true;
    const UNC: bool = true;
    const HOME_ROOT: bool = true;
    const VALIDATES_CHARS: bool = true;
    // The extended-length limit of the wide Win32 API, less the terminator.
    const MAX_LEN: usize = 32766;
}

/// The dialect of the host OS.
#[cfg(windows)]
pub type Native = Windows;

/// The dialect of the host OS.
#[cfg(not(windows))]
pub type Native = Unix;
