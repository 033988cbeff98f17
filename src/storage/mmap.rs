//! Memory-mapped loading of a committed index file.

use crate::core::error::{Result, TrepError};
use crate::index::TravelIndex;
use crate::logging::{debug, info, warn};
use crate::security::validate_path;
use crate::storage::file_format::{checksum, IndexFileHeader};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// A memory-mapped index file: the header is validated eagerly, the body is
/// deserialized into an owned [`TravelIndex`] once at open time.
///
/// Unlike the raw struct-array layout this module's teacher precursor used,
/// POR records and name matrices are variable length, so zero-copy access to
/// individual documents isn't practical — the win from `memmap2` here is
/// avoiding a second buffered-read copy of a potentially large file, not
/// avoiding deserialization itself.
pub struct MappedIndex {
    index: TravelIndex,
}

impl MappedIndex {
    /// Open and validate an index file at `path` (spec §6.4 load path).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        info!(path = %path_str, "opening index file");

        let safe_path = validate_path(path.as_ref(), None)?;
        debug!(validated_path = ?safe_path, "path validated");

        let file = File::open(&safe_path).map_err(|e| {
            warn!(path = %path_str, error = %e, "failed to open index file");
            TrepError::Io(e)
        })?;

        let mmap = unsafe { MmapOptions::new().map(&file).map_err(TrepError::Io)? };

        if mmap.len() < IndexFileHeader::ENCODED_LEN {
            return Err(TrepError::InvalidFormat("file too small for header".to_string()));
        }

        let header = IndexFileHeader::decode(&mmap)?;
        let body = Self::body_bytes(&mmap, &header)?;

        let index: TravelIndex = bincode::deserialize(body).map_err(|e| TrepError::InvalidFormat(e.to_string()))?;

        Ok(Self { index })
    }

    fn body_bytes<'a>(mmap: &'a Mmap, header: &IndexFileHeader) -> Result<&'a [u8]> {
        let start = IndexFileHeader::ENCODED_LEN;
        let end = start
            .checked_add(header.body_len as usize)
            .ok_or_else(|| TrepError::InvalidFormat("body length overflows file size".to_string()))?;

        let body = mmap.get(start..end).ok_or_else(|| TrepError::InvalidFormat("body shorter than header claims".to_string()))?;

        let actual = checksum(body);
        if actual != header.body_checksum {
            return Err(TrepError::ChecksumMismatch { section: "body".to_string() });
        }

        Ok(body)
    }

    /// Take ownership of the loaded index.
    pub fn into_index(self) -> TravelIndex {
        self.index
    }

    /// Borrow the loaded index without consuming the mapping.
    pub fn index(&self) -> &TravelIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::builder::persist;
    use crate::index::document::Document;
    use crate::core::types::{DocId, PorKey};
    use tempfile::TempDir;

    #[test]
    fn round_trips_an_index_through_disk() {
        let mut index = TravelIndex::new();
        index.push_document(Document {
            doc_id: DocId(0),
            key: PorKey::new("NCE", "LFMN", 6299418),
            payload: String::new(),
        });

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.trepidx");
        persist(&index, &path).expect("persist");

        let loaded = MappedIndex::open(&path).expect("open").into_index();
        assert_eq!(loaded.size(), 1);
    }

    #[test]
    fn rejects_a_truncated_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.trepidx");
        std::fs::write(&path, b"too short").unwrap();
        assert!(MappedIndex::open(&path).is_err());
    }

    #[test]
    fn rejects_a_corrupted_body() {
        let index = TravelIndex::new();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.trepidx");
        persist(&index, &path).expect("persist");

        let mut bytes = std::fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        std::fs::write(&path, bytes).unwrap();

        assert!(MappedIndex::open(&path).is_err());
    }
}
