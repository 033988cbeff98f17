//! On-disk header for a committed index file (spec §4.6, §6.3).
//!
//! The body (a serialized [`crate::index::TravelIndex`]) is variable length
//! — POR records and name matrices don't have a fixed size — so this header
//! stays slim: just enough to identify the file, reject incompatible
//! versions, and verify the body wasn't truncated or corrupted before
//! `bincode` ever sees it.

use crate::core::error::{Result, TrepError};

/// Magic bytes identifying a travel index file.
pub const MAGIC_BYTES: &[u8; 8] = b"TREPIDX1";

/// Current on-disk format version.
pub const FORMAT_VERSION: u16 = 1;

/// Fixed-size header preceding the bincode-encoded [`crate::index::TravelIndex`]
/// body. 24 bytes, written and read in a known byte order so the file is
/// portable across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFileHeader {
    /// Format version the body was written with.
    pub version: u16,
    /// Length in bytes of the body that follows the header.
    pub body_len: u64,
    /// xxh3_64 checksum of the body.
    pub body_checksum: u64,
}

impl IndexFileHeader {
    /// Size of the encoded header in bytes: 8 (magic) + 2 (version) +
    /// 6 (padding) + 8 (body_len) + 8 (checksum).
    pub const ENCODED_LEN: usize = 32;

    /// Build a header describing a body of `body_len` bytes with the given
    /// checksum, at the current format version.
    pub fn new(body_len: u64, body_checksum: u64) -> Self {
        Self {
            version: FORMAT_VERSION,
            body_len,
            body_checksum,
        }
    }

    /// Serialize to the fixed-size on-disk layout.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut buf = [0u8; Self::ENCODED_LEN];
        buf[0..8].copy_from_slice(MAGIC_BYTES);
        buf[8..10].copy_from_slice(&self.version.to_le_bytes());
        // buf[10..16] reserved, left zeroed.
        buf[16..24].copy_from_slice(&self.body_len.to_le_bytes());
        buf[24..32].copy_from_slice(&self.body_checksum.to_le_bytes());
        buf
    }

    /// Parse and validate the fixed-size header from `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(TrepError::InvalidFormat(format!(
                "header truncated: {} bytes, expected {}",
                bytes.len(),
                Self::ENCODED_LEN
            )));
        }

        if &bytes[0..8] != MAGIC_BYTES {
            return Err(TrepError::InvalidFormat("bad magic bytes".to_string()));
        }

        let version = u16::from_le_bytes(bytes[8..10].try_into().unwrap());
        if version > FORMAT_VERSION {
            return Err(TrepError::UnsupportedVersion { major: version, minor: 0 });
        }

        let body_len = u64::from_le_bytes(bytes[16..24].try_into().unwrap());
        let body_checksum = u64::from_le_bytes(bytes[24..32].try_into().unwrap());

        Ok(Self {
            version,
            body_len,
            body_checksum,
        })
    }
}

/// xxh3_64 checksum of `body`, used both when writing and when verifying an
/// index file's body.
pub fn checksum(body: &[u8]) -> u64 {
    xxhash_rust::xxh3::xxh3_64(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrips_through_its_encoding() {
        let header = IndexFileHeader::new(1234, 0xdead_beef_cafe_f00d);
        let encoded = header.encode();
        let decoded = IndexFileHeader::decode(&encoded).expect("decode");
        assert_eq!(decoded, header);
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let mut encoded = IndexFileHeader::new(0, 0).encode();
        encoded[0] = b'X';
        assert!(IndexFileHeader::decode(&encoded).is_err());
    }

    #[test]
    fn decode_rejects_future_version() {
        let mut encoded = IndexFileHeader::new(0, 0).encode();
        encoded[8..10].copy_from_slice(&(FORMAT_VERSION + 1).to_le_bytes());
        assert!(matches!(
            IndexFileHeader::decode(&encoded),
            Err(TrepError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn checksum_is_sensitive_to_body_contents() {
        assert_ne!(checksum(b"abc"), checksum(b"abd"));
    }
}
