//! Helper functions for reading little-endian NBS fields

use std::io::{self, Read};

use crate::error::DecodeError;

/// Read a single byte
pub(crate) fn read_u8<R: Read>(reader: &mut R, field: &'static str) -> Result<u8, DecodeError> {
    let mut buf = [0u8; 1];
    reader
        .read_exact(&mut buf)
        .map_err(|e| DecodeError::new(field, e))?;
    Ok(buf[0])
}

/// Read a 16-bit little-endian integer
pub(crate) fn read_u16<R: Read>(reader: &mut R, field: &'static str) -> Result<u16, DecodeError> {
    let mut buf = [0u8; 2];
    reader
        .read_exact(&mut buf)
        .map_err(|e| DecodeError::new(field, e))?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a 32-bit little-endian integer
pub(crate) fn read_u32<R: Read>(reader: &mut R, field: &'static str) -> Result<u32, DecodeError> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| DecodeError::new(field, e))?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a byte flag (non-zero = set)
pub(crate) fn read_bool<R: Read>(reader: &mut R, field: &'static str) -> Result<bool, DecodeError> {
    Ok(read_u8(reader, field)? != 0)
}

/// Read a length-prefixed string (32-bit length, one byte per character)
pub(crate) fn read_string<R: Read>(
    reader: &mut R,
    field: &'static str,
) -> Result<String, DecodeError> {
    let len = read_u32(reader, field)?;

    // Bounded by what the source actually holds, not by the declared length
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(u64::from(len))
        .read_to_end(&mut bytes)
        .map_err(|e| DecodeError::new(field, e))?;
    if bytes.len() as u64 != u64::from(len) {
        return Err(DecodeError::new(
            field,
            io::Error::from(io::ErrorKind::UnexpectedEof),
        ));
    }

    Ok(decode_string(&bytes))
}

/// Map bytes to characters, turning carriage returns into spaces
pub(crate) fn decode_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b == b'\r' { ' ' } else { char::from(b) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_string() {
        assert_eq!(decode_string(b"Hello"), "Hello");
        assert_eq!(decode_string(b"line one\r\nline two"), "line one \nline two");
        assert_eq!(decode_string(b""), "");
        // Bytes above 0x7F map to the Latin-1 code point of the same value
        assert_eq!(decode_string(&[0x43, 0x61, 0x66, 0xE9]), "Caf\u{e9}");
    }

    #[test]
    fn test_read_integers_little_endian() {
        let data = [0x2A, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = Cursor::new(&data[..]);
        assert_eq!(read_u8(&mut cursor, "a").unwrap(), 0x2A);
        assert_eq!(read_u16(&mut cursor, "b").unwrap(), 0x1234);
        assert_eq!(read_u32(&mut cursor, "c").unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_read_u16_truncated() {
        let data = [0x01];
        let mut cursor = Cursor::new(&data[..]);
        let err = read_u16(&mut cursor, "layer count").unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.context(), "layer count");
    }

    #[test]
    fn test_read_string() {
        let mut data = 3u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"abcdef");
        let mut cursor = Cursor::new(&data[..]);
        assert_eq!(read_string(&mut cursor, "title").unwrap(), "abc");
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_read_string_truncated() {
        let mut data = 10u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"short");
        let mut cursor = Cursor::new(&data[..]);
        let err = read_string(&mut cursor, "description").unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.context(), "description");
    }

    #[test]
    fn test_read_string_huge_length_does_not_allocate_up_front() {
        let data = u32::MAX.to_le_bytes();
        let mut cursor = Cursor::new(&data[..]);
        let err = read_string(&mut cursor, "author").unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_read_bool() {
        let data = [0x00, 0x01, 0xFF];
        let mut cursor = Cursor::new(&data[..]);
        assert!(!read_bool(&mut cursor, "flag").unwrap());
        assert!(read_bool(&mut cursor, "flag").unwrap());
        assert!(read_bool(&mut cursor, "flag").unwrap());
    }
}
