/// Options controlling how strictly [`path_classify`](super::path_classify) validates its input.
///
/// Validation only ever applies to dialects with
/// [`VALIDATES_CHARS`](super::Dialect::VALIDATES_CHARS) set, except for embedded NUL characters,
/// which are reported as [`PathKind::Unknown`](super::PathKind::Unknown) under any dialect unless
/// invalid characters are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseFlags {
    pub(crate) ignore_slash_runs: bool,
    pub(crate) ignore_invalid_chars: bool,
}

impl ParseFlags {
    /// Report every problem the dialect knows how to detect.
    pub const STRICT: ParseFlags = ParseFlags {
        ignore_slash_runs: false,
        ignore_invalid_chars: false,
    };

    /// Slice the path no matter what it contains.
    pub const LENIENT: ParseFlags = ParseFlags {
        ignore_slash_runs: true,
        ignore_invalid_chars: true,
    };

    pub const fn new() -> ParseFlags {
        ParseFlags::STRICT
    }

    /// Accept consecutive separators after the root rather than reporting
    /// [`PathKind::InvalidSlashRuns`](super::PathKind::InvalidSlashRuns).
    pub const fn ignore_slash_runs(self) -> ParseFlags {
        ParseFlags {
            ignore_slash_runs: true,
            ..self
        }
    }

    /// Accept reserved and control characters rather than reporting
    /// [`PathKind::InvalidChars`](super::PathKind::InvalidChars).
    pub const fn ignore_invalid_chars(self) -> ParseFlags {
        ParseFlags {
            ignore_invalid_chars: true,
            ..self
        }
    }

    pub const fn ignores_slash_runs(&self) -> bool {
        self.ignore_slash_runs
    }

    pub const fn ignores_invalid_chars(&self) -> bool {
        self.ignore_invalid_chars
    }
}
