//! Path manipulation and classification for UNIX and Windows path strings.
//!
//! # Purpose
//! [`BasicPath`](path::BasicPath) stores a path exactly as given and edits it through a small set
//! of operations (`push`, `pop`, `canonicalise`, `make_absolute` and friends) that understand
//! roots, drive letters, UNC shares and `.`/`..` parts. The same code serves both sets of conventions: the
//! character type and the [`Dialect`](path::Dialect) are type parameters, so a Windows path can be
//! manipulated on Linux and the other way around.
//!
//! # Method
//! Every edit classifies the path afresh, builds its result in a scratch buffer and only then
//! replaces the stored value. A failed edit leaves the path untouched. The classifier never
//! allocates; the slices it returns borrow the path they came from.
//!
//! # Error Handling
//! Malformed input isn't an error: it is reported through the [`PathKind`](path::PathKind) of a
//! classification, and the operations that care about validity leave such paths alone. Errors are
//! reserved for things that actually fail, exceeding the dialect's maximum length or failing to
//! read the current directory, and are strongly typed, with ZST or plain-data structs collected
//! into [`PathError`](path::PathError). Indexing out of bounds panics, as it does for slices.
//!
//! # Dependencies
//! [`PathBuffer`](buffer::PathBuffer) manages its own allocation rather than wrapping a [`Vec`],
//! so that the terminator is always in place. `libc` provides `getcwd` on UNIX and `tracing`
//! reports what `make_absolute` resolved against. The error types are derived with `derive_more`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod buffer;
pub mod path;

pub(crate) mod util;

pub use path::{BasicPath, Path, PathError};
