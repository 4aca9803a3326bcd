// Serialization utilities for Move call arguments (BCS)

use std::io::{self, Cursor, Read, Write};
use thiserror::Error;

/// Largest sequence length BCS allows in a length prefix (2^31 - 1)
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// Errors raised while encoding or decoding BCS values
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("sequence length {len} exceeds the maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("ULEB128 value does not fit in 32 bits")]
    Uleb128Overflow,

    #[error("non-canonical ULEB128 encoding")]
    NonCanonicalUleb128,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    #[error("invalid UTF-8 payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::UnexpectedEnd
        } else {
            CodecError::Io(e)
        }
    }
}

/// Trait for values that can be passed as pure call arguments
pub trait BcsWrite {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError>;

    fn bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        self.write_bcs(&mut buf)?;
        Ok(buf)
    }
}

/// Number of bytes `value` occupies as a ULEB128
pub fn uleb128_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        0x4000..=0x1f_ffff => 3,
        0x20_0000..=0x0fff_ffff => 4,
        _ => 5,
    }
}

/// Write an unsigned LEB128 integer.
/// Groups of 7 bits go out least-significant first; every group except
/// the last has its high bit set.
pub fn write_uleb128<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    let mut buf = [0u8; 5];
    let mut len = 0;
    let mut rest = value;

    loop {
        let group = (rest & 0x7f) as u8;
        rest >>= 7;
        if rest == 0 {
            buf[len] = group;
            len += 1;
            break;
        }
        buf[len] = group | 0x80;
        len += 1;
    }

    writer.write_all(&buf[..len])
}

/// Read an unsigned LEB128 integer, rejecting overlong or oversized forms
pub fn read_uleb128<R: Read + ?Sized>(reader: &mut R) -> Result<u32, CodecError> {
    let mut value: u64 = 0;

    for shift in (0..32).step_by(7) {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;

        let group = byte[0] & 0x7f;
        value |= (group as u64) << shift;

        if byte[0] & 0x80 == 0 {
            // A zero final group after the first is a redundant encoding
            if shift > 0 && group == 0 {
                return Err(CodecError::NonCanonicalUleb128);
            }
            return u32::try_from(value).map_err(|_| CodecError::Uleb128Overflow);
        }
    }

    Err(CodecError::Uleb128Overflow)
}

/// Check a sequence length against the BCS limit
pub fn check_length(len: usize) -> Result<u32, CodecError> {
    if len > MAX_SEQUENCE_LENGTH {
        return Err(CodecError::SequenceTooLong {
            len,
            max: MAX_SEQUENCE_LENGTH,
        });
    }
    Ok(len as u32)
}

/// Write bytes with length prefix (ULEB128 length + data)
pub fn write_var_bytes<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), CodecError> {
    let len = check_length(data.len())?;
    write_uleb128(writer, len)?;
    writer.write_all(data)?;
    Ok(())
}

/// Read bytes with length prefix
pub fn read_var_bytes<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, CodecError> {
    let len = read_uleb128(reader)? as usize;
    check_length(len)?;

    // Read through `take` so a bogus prefix cannot force a huge allocation
    let mut data = Vec::new();
    reader.take(len as u64).read_to_end(&mut data)?;
    if data.len() != len {
        return Err(CodecError::UnexpectedEnd);
    }
    Ok(data)
}

/// Encode a string as a pure Move `String` argument:
/// ULEB128 byte length followed by the UTF-8 bytes.
pub fn encode_string(text: &str) -> Result<Vec<u8>, CodecError> {
    let payload = text.as_bytes();
    let len = check_length(payload.len())?;

    let mut buf = Vec::with_capacity(uleb128_len(len) + payload.len());
    write_var_bytes(&mut buf, payload)?;

    log::debug!(
        "Encoded {} byte string, length prefix {}",
        payload.len(),
        hex::encode(&buf[..uleb128_len(len)])
    );

    Ok(buf)
}

/// Decode a buffer produced by [`encode_string`]
pub fn decode_string(data: &[u8]) -> Result<String, CodecError> {
    let mut cursor = Cursor::new(data);
    let bytes = read_var_bytes(&mut cursor)?;

    let consumed = cursor.position() as usize;
    if consumed != data.len() {
        return Err(CodecError::TrailingBytes(data.len() - consumed));
    }

    Ok(String::from_utf8(bytes)?)
}

impl BcsWrite for str {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        write_var_bytes(writer, self.as_bytes())
    }
}

impl BcsWrite for String {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        self.as_str().write_bcs(writer)
    }
}

impl BcsWrite for [u8] {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        write_var_bytes(writer, self)
    }
}

impl BcsWrite for Vec<u8> {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        self.as_slice().write_bcs(writer)
    }
}

impl BcsWrite for bool {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer.write_all(&[*self as u8])?;
        Ok(())
    }
}

macro_rules! impl_bcs_for_int {
    ($($ty:ty),*) => {
        $(
            impl BcsWrite for $ty {
                fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
                    writer.write_all(&self.to_le_bytes())?;
                    Ok(())
                }
            }
        )*
    };
}

impl_bcs_for_int!(u8, u16, u32, u64, u128);
