//! Path strings and the grammar they follow.
//!
//! A [`BasicPath`] is generic over its character type ([`PathChar`]) and the conventions it follows
//! ([`Dialect`]). The classifier ([`path_classify`]) and the stateless [`primitives`] it is built
//! from never allocate; the engine uses them to find the structure of the path before every edit.

mod canonical;
mod char;
mod classify;
mod dialect;
mod display;
mod error;
mod flags;
mod iter;
mod path;
pub mod primitives;
pub mod sys;
mod tests;

pub use char::*;
pub use classify::*;
pub use dialect::*;
pub use display::*;
pub use error::*;
pub use flags::*;
pub use iter::*;
pub use path::*;
