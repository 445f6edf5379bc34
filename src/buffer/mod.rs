//! The growable character storage owned by every path.
//!
//! [`PathBuffer`] is the only piece of mutable state in the crate. It keeps a NUL terminator one
//! past its logical length at all times, so the contents can be handed to C-style interfaces
//! without copying. [`CharArray`] is the raw allocation underneath it.

mod array;
mod path_buffer;

pub use array::*;
pub use path_buffer::*;
