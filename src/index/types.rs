use super::error::{IndexError, Result};
use crate::utils::Encoding;
use serde::{Deserialize, Serialize};

/// Offset of a suffix in the corpus
pub type TextPosition = u32;

/// Common prefix length between two adjacent suffixes
pub type LcpValue = u32;

/// Byte value that ends every key comparison
pub const TERMINATOR: u8 = 0x00;

/// Width of the NUL-padded name field in `.idx` files
pub const NAME_FIELD_LEN: usize = 128;

/// Size of the `.idx` header: count field followed by the name field
pub const IDX_HEADER_SIZE: usize = 4 + NAME_FIELD_LEN;

/// File extension of the raw corpus
pub const CORPUS_EXT: &str = "dat";

/// File extension of the sorted offsets
pub const SUFFIX_EXT: &str = "idx";

/// File extension of the LCP values
pub const LCP_EXT: &str = "lcp";

/// Options controlling how a suffix array is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Character layout used by the position filter
    pub encoding: Encoding,
    /// Refine first-byte buckets in parallel
    pub parallel_sort: bool,
    /// Minimum position count for the parallel path
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::ShiftJis,
            parallel_sort: false,
            parallel_threshold: 100_000,
        }
    }
}

/// Check that a name can be stored in the header and used as a file stem
pub fn validate_name(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && name.len() <= NAME_FIELD_LEN
        && name != "."
        && name != ".."
        && !name.bytes().any(|b| b == 0 || b == b'/' || b == b'\\');
    if ok {
        Ok(())
    } else {
        Err(IndexError::InvalidName(name.to_string()))
    }
}

/// Encode a name into the fixed-width header field
pub fn encode_name_field(name: &str) -> [u8; NAME_FIELD_LEN] {
    let mut field = [0u8; NAME_FIELD_LEN];
    let bytes = name.as_bytes();
    let len = bytes.len().min(NAME_FIELD_LEN);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

/// Decode the name stored in a header field (up to the first NUL)
pub fn decode_name_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("corpus").is_ok());
        assert!(validate_name("news-2008_v2").is_ok());
        assert!(validate_name(&"x".repeat(NAME_FIELD_LEN)).is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\0b").is_err());
        assert!(validate_name(&"x".repeat(NAME_FIELD_LEN + 1)).is_err());
    }

    #[test]
    fn test_name_field() {
        let field = encode_name_field("banana");
        assert_eq!(&field[..6], b"banana");
        assert!(field[6..].iter().all(|&b| b == 0));
        assert_eq!(decode_name_field(&field), "banana");

        let full = "y".repeat(NAME_FIELD_LEN);
        assert_eq!(decode_name_field(&encode_name_field(&full)), full);
    }
}
