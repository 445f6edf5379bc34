//! The one OS capability the engine consumes: asking for the current directory.

#[cfg(unix)]
use std::io;

use super::{CurrentDirError, PathChar};
use crate::buffer::PathBuffer;

#[cfg(unix)]
const INITIAL_CWD_LEN: usize = 256;

#[cfg(unix)]
pub(crate) fn err_no() -> i32 {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Returns the working directory of the process as UTF-8 (or, on UNIX, whatever bytes the
/// filesystem holds).
#[cfg(unix)]
pub fn current_directory_bytes() -> Result<PathBuffer<u8>, CurrentDirError> {
    let mut buf = PathBuffer::<u8>::new();
    let mut len = INITIAL_CWD_LEN;

    loop {
        buf.resize(len);

        // SAFETY: buf holds len writable bytes followed by its terminator, and getcwd writes no
        // more than len bytes including its own terminator.
        let res = unsafe { libc::getcwd(buf.as_mut_ptr().cast(), len) };
        if !res.is_null() {
            let end = buf.iter().position(|&ch| ch == 0).unwrap_or(len);
            buf.truncate(end);
            return Ok(buf);
        }

        match err_no() {
            libc::ERANGE => {
                len = len.checked_mul(2).ok_or(CurrentDirError(libc::ERANGE))?;
            },
            code => return Err(CurrentDirError(code)),
        }
    }
}

/// Returns the working directory of the process as UTF-8.
#[cfg(not(unix))]
pub fn current_directory_bytes() -> Result<PathBuffer<u8>, CurrentDirError> {
    let dir = std::env::current_dir()
        .map_err(|err| CurrentDirError(err.raw_os_error().unwrap_or(0)))?;
    Ok(PathBuffer::from_chars(dir.to_string_lossy().as_bytes()))
}

/// Returns the working directory of the process in the requested character type.
pub fn current_directory<C: PathChar>() -> Result<PathBuffer<C>, CurrentDirError> {
    match current_directory_bytes() {
        Ok(bytes) => {
            tracing::trace!(len = bytes.len(), "read current directory");
            Ok(C::buffer_from_utf8(&bytes))
        },
        Err(err) => {
            tracing::debug!(code = err.0, "failed to read current directory");
            Err(err)
        },
    }
}
