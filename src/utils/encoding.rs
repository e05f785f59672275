//! Byte-level helpers: double-byte lead detection and fixed-width integers.

use serde::{Deserialize, Serialize};

/// How multi-byte characters are laid out in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Shift_JIS style: a lead byte is always followed by one trailing byte
    #[default]
    ShiftJis,
    /// Every byte is a character of its own
    SingleByte,
}

impl Encoding {
    /// Whether `byte` opens a two-byte character under this encoding
    #[inline]
    pub fn is_lead_byte(self, byte: u8) -> bool {
        match self {
            Encoding::ShiftJis => is_double_byte_lead(byte),
            Encoding::SingleByte => false,
        }
    }

    /// Width in bytes of the character starting with `byte`
    #[inline]
    pub fn char_width(self, byte: u8) -> usize {
        if self.is_lead_byte(byte) { 2 } else { 1 }
    }
}

/// Lead byte ranges of the legacy double-byte encoding
#[inline]
pub fn is_double_byte_lead(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Append a slice of u32 values as little-endian bytes
pub fn encode_u32_slice(values: &[u32], buf: &mut Vec<u8>) {
    buf.reserve(values.len() * 4);
    for &value in values {
        buf.extend_from_slice(&value.to_le_bytes());
    }
}

/// Decode little-endian u32 values
///
/// Returns `None` if the length is not a multiple of 4.
pub fn decode_u32_slice(buf: &[u8]) -> Option<Vec<u32>> {
    if buf.len() % 4 != 0 {
        return None;
    }
    Some(
        buf.chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect(),
    )
}

/// Read one little-endian u32 at `offset`
#[inline]
pub fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
