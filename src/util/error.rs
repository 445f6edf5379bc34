use std::error::Error;

use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for path buffer with {len} characters")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], but restricted to [`Error`] types and panicking with the
    /// message of the error itself. Used for precondition violations that aren't worth forcing the
    /// caller to handle.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
