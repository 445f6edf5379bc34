use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path of {len} characters exceeds the maximum of {max}")]
pub struct PathLengthError {
    pub len: usize,
    pub max: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unable to determine the current directory, OS error code: {_0}")]
pub struct CurrentDirError(#[error(not(source))] pub i32);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("the current directory isn't absolute under the path's dialect")]
pub struct UnresolvableCwdError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum PathError {
    PathLength(PathLengthError),
    CurrentDir(CurrentDirError),
    UnresolvableCwd(UnresolvableCwdError),
}
