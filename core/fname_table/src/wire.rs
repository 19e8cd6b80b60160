//! Binary encodings of names.
//!
//! # Entry format
//!
//! A name-table entry is written as a little-endian `i32` length followed
//! by the characters and a terminating NUL; the length counts the NUL.
//! A positive length means one byte per character (Latin-1, written only
//! for ASCII names). A negative length means `-length` UTF-16 code units.
//! The empty string is a bare length of 0.
//!
//! # Network format
//!
//! A handle whose comparison index is at or below the network watermark
//! travels as `1u8, index: u32, number: i32`; both ends share the reserved
//! table, so the index means the same thing on either side. Anything else
//! travels as `0u8`, the entry-format plain string, then `number: i32`.

use std::io::{self, Read, Write};

use crate::entry::{Encoding, NameEntry};
use crate::name::Name;
use crate::registry::{FindName, NameRegistry};

const TAG_STRING: u8 = 0;
const TAG_INDEX: u8 = 1;

/// Failure decoding a serialized name.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("serialized name of {len} characters exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },

    #[error("serialized name is not NUL-terminated")]
    MissingTerminator,

    #[error("serialized wide name is not valid UTF-16")]
    InvalidUtf16,

    #[error("name index {0} is not populated in this table")]
    UnknownIndex(u32),

    #[error("name index {index} is above the network watermark {watermark}")]
    AboveWatermark { index: u32, watermark: u32 },

    #[error("unknown name tag {0}")]
    UnknownTag(u8),
}

/// Write `text` in entry format.
pub fn write_entry_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return out.write_all(&0i32.to_le_bytes());
    }
    match Encoding::of(text) {
        Encoding::Narrow => {
            write_len(out, text.len() + 1, false)?;
            out.write_all(text.as_bytes())?;
            out.write_all(&[0])
        }
        Encoding::Wide => {
            let units: Vec<u16> = text.encode_utf16().collect();
            write_len(out, units.len() + 1, true)?;
            for unit in units.iter().chain(std::iter::once(&0)) {
                out.write_all(&unit.to_le_bytes())?;
            }
            Ok(())
        }
    }
}

fn write_len<W: Write>(out: &mut W, len: usize, wide: bool) -> io::Result<()> {
    let len = i32::try_from(len)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "name too long to serialize"))?;
    let len = if wide { -len } else { len };
    out.write_all(&len.to_le_bytes())
}

/// Read text in entry format. `max_len` bounds the character count.
pub fn read_entry_text<R: Read>(input: &mut R, max_len: usize) -> Result<String, WireError> {
    let len = read_i32(input)?;
    if len == 0 {
        return Ok(String::new());
    }
    let count = len.unsigned_abs() as usize;
    if count - 1 > max_len {
        return Err(WireError::TooLong {
            len: count - 1,
            max: max_len,
        });
    }

    if len > 0 {
        let mut bytes = vec![0u8; count];
        input.read_exact(&mut bytes)?;
        if bytes.pop() != Some(0) {
            return Err(WireError::MissingTerminator);
        }
        Ok(bytes.into_iter().map(char::from).collect())
    } else {
        let mut raw = vec![0u8; count * 2];
        input.read_exact(&mut raw)?;
        let mut units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        if units.pop() != Some(0) {
            return Err(WireError::MissingTerminator);
        }
        String::from_utf16(&units).map_err(|_| WireError::InvalidUtf16)
    }
}

fn read_i32<R: Read>(input: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_u32<R: Read>(input: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Serialized name tables and network handles.
impl NameRegistry {
    /// Write the current spelling of `entry` in entry format.
    pub fn write_entry<W: Write>(&self, out: &mut W, entry: &NameEntry) -> io::Result<()> {
        write_entry_text(out, self.entry_text(entry))
    }

    /// Read one entry-format string and intern it verbatim.
    ///
    /// Serialized tables hold strings whose numbers were split already, so
    /// a digit suffix here is part of the name.
    pub fn read_entry<R: Read>(&self, input: &mut R) -> Result<Name, WireError> {
        let text = read_entry_text(input, self.config().max_name_len)?;
        Ok(self.name_exact(&text))
    }

    /// Write `name` in network format.
    pub fn write_name<W: Write>(&self, out: &mut W, name: Name) -> io::Result<()> {
        if name.comparison_index() <= self.config().network_watermark {
            out.write_all(&[TAG_INDEX])?;
            out.write_all(&name.comparison_index().to_le_bytes())?;
        } else {
            out.write_all(&[TAG_STRING])?;
            write_entry_text(out, self.plain_name(name))?;
        }
        out.write_all(&name.number().to_le_bytes())
    }

    /// Read a name in network format.
    pub fn read_name<R: Read>(&self, input: &mut R) -> Result<Name, WireError> {
        let mut tag = [0u8; 1];
        input.read_exact(&mut tag)?;
        match tag[0] {
            TAG_INDEX => {
                let index = read_u32(input)?;
                let number = read_i32(input)?;
                let watermark = self.config().network_watermark;
                if index > watermark {
                    return Err(WireError::AboveWatermark { index, watermark });
                }
                self.name_from_index(index, number)
                    .ok_or(WireError::UnknownIndex(index))
            }
            TAG_STRING => {
                let text = read_entry_text(input, self.config().max_name_len)?;
                let number = read_i32(input)?;
                let name = self.find_or_add_exact(&text, FindName::Add);
                Ok(name.with_number(number))
            }
            other => Err(WireError::UnknownTag(other)),
        }
    }
}
