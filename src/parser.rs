use crate::boxes::{BoxHeader, FourCC};
use byteorder::{BigEndian, ByteOrder};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("truncated header at offset {0}")]
    Truncated(u64),
    #[error("box at offset {0} smaller than its own header")]
    TooShort(u64),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Decode one box header at `offset` inside a region of `total` bytes.
///
/// The size field is returned resolved: `0` means the box runs to the end of
/// the region, `1` selects the 64-bit extended size read from bytes 8..16.
pub fn decode_header(data: &[u8], offset: u64, total: u64) -> Result<BoxHeader> {
    if total.saturating_sub(offset) < 8 {
        return Err(ParseError::Truncated(offset));
    }
    let o = offset as usize;
    let size32 = BigEndian::read_u32(&data[o..o + 4]);
    let typ = FourCC([data[o + 4], data[o + 5], data[o + 6], data[o + 7]]);

    let (size, header_size) = match size32 {
        0 => (total - offset, 8),
        1 => {
            if total - offset < 16 {
                return Err(ParseError::Truncated(offset));
            }
            (BigEndian::read_u64(&data[o + 8..o + 16]), 16)
        }
        n => (n as u64, 8),
    };

    if size < header_size {
        return Err(ParseError::TooShort(offset));
    }

    Ok(BoxHeader { size, typ, header_size, start: offset })
}
