#[cfg(feature = "wide")]
use std::char::REPLACEMENT_CHARACTER;
use std::fmt::{self, Debug, Formatter};
#[cfg(feature = "wide")]
use std::fmt::Write;
use std::hash::Hash;

use crate::buffer::PathBuffer;
use crate::util::sealed::Sealed;

/// A character type that paths can be built from: `u8` for narrow (UTF-8 or otherwise 8-bit) paths
/// and, with the `wide` feature, `u16` for wide paths made of UTF-16 code units.
///
/// All of the path grammar is expressed in ASCII, so the only thing the engine needs to know about
/// a character type is how to compare against ASCII and how to show it to a human.
pub trait PathChar: Sealed + Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    const NUL: Self;

    /// A terminated empty string, handed out by buffers that haven't allocated.
    const NUL_SLICE: &'static [Self];

    fn from_ascii(byte: u8) -> Self;

    /// Returns the ASCII value of this character, or None if it is outside the ASCII range.
    fn to_ascii(self) -> Option<u8>;

    /// Writes `chars` to a formatter, replacing anything that can't be decoded.
    fn fmt_lossy(chars: &[Self], f: &mut Formatter<'_>) -> fmt::Result;

    /// Converts UTF-8 bytes reported by the OS into a buffer of this character type.
    fn buffer_from_utf8(bytes: &[u8]) -> PathBuffer<Self>;

    fn eq_ascii(self, byte: u8) -> bool {
        self == Self::from_ascii(byte)
    }

    /// Lowercases ASCII letters, leaving everything else alone.
    fn fold_ascii_case(self) -> Self {
        match self.to_ascii() {
            Some(byte) => Self::from_ascii(byte.to_ascii_lowercase()),
            None => self,
        }
    }
}

impl Sealed for u8 {}

impl PathChar for u8 {
    const NUL: u8 = 0;

    const NUL_SLICE: &'static [u8] = &[0];

    fn from_ascii(byte: u8) -> u8 {
        byte
    }

    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn fmt_lossy(chars: &[u8], f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(chars))
    }

    fn buffer_from_utf8(bytes: &[u8]) -> PathBuffer<u8> {
        PathBuffer::from_chars(bytes)
    }
}

#[cfg(feature = "wide")]
impl Sealed for u16 {}

#[cfg(feature = "wide")]
impl PathChar for u16 {
    const NUL: u16 = 0;

    const NUL_SLICE: &'static [u16] = &[0];

    fn from_ascii(byte: u8) -> u16 {
        u16::from(byte)
    }

    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn fmt_lossy(chars: &[u16], f: &mut Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(chars.iter().copied()) {
            f.write_char(ch.unwrap_or(REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }

    fn buffer_from_utf8(bytes: &[u8]) -> PathBuffer<u16> {
        let decoded = String::from_utf8_lossy(bytes);
        let mut buf = PathBuffer::with_cap(decoded.len());
        for unit in decoded.encode_utf16() {
            buf.push(unit);
        }
        buf
    }
}
