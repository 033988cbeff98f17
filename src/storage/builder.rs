//! Writing a committed index to disk (spec §4.6: "either all documents are
//! indexed or the index is left untouched").

use crate::core::error::{Result, TrepError};
use crate::index::TravelIndex;
use crate::logging::info;
use crate::storage::file_format::{checksum, IndexFileHeader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Serialize `index` and write it to `path`, atomically.
///
/// The body is built in memory, written to a sibling temp file, then moved
/// into place with a single rename. A reader opening `path` either sees the
/// previous complete file or the new complete file, never a partial one —
/// a crash mid-write leaves the temp file orphaned and `path` untouched.
pub fn persist<P: AsRef<Path>>(index: &TravelIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let body = bincode::serialize(index).map_err(|e| TrepError::InvalidFormat(e.to_string()))?;
    let header = IndexFileHeader::new(body.len() as u64, checksum(&body));

    let tmp_path = temp_path_for(path);
    write_file(&tmp_path, &header, &body)?;

    std::fs::rename(&tmp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        TrepError::Io(e)
    })?;

    info!(path = %path.display(), documents = index.size(), bytes = body.len(), "index committed");
    Ok(())
}

fn write_file(tmp_path: &Path, header: &IndexFileHeader, body: &[u8]) -> Result<()> {
    let file = File::create(tmp_path).map_err(TrepError::Io)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&header.encode()).map_err(TrepError::Io)?;
    writer.write_all(body).map_err(TrepError::Io)?;
    writer.flush().map_err(TrepError::Io)?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, PorKey};
    use crate::index::document::Document;
    use crate::storage::mmap::MappedIndex;
    use tempfile::TempDir;

    #[test]
    fn persist_then_open_round_trips_documents() {
        let mut index = TravelIndex::new();
        index.push_document(Document {
            doc_id: DocId(0),
            key: PorKey::new("JFK", "KJFK", 5128581),
            payload: "payload".to_string(),
        });

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jfk.trepidx");
        persist(&index, &path).expect("persist");

        let loaded = MappedIndex::open(&path).expect("open").into_index();
        assert_eq!(loaded.size(), 1);
        assert_eq!(loaded.document(DocId(0)).unwrap().payload, "payload");
    }

    #[test]
    fn persist_leaves_no_temp_file_behind_on_success() {
        let index = TravelIndex::new();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clean.trepidx");
        persist(&index, &path).expect("persist");

        assert!(!temp_path_for(&path).exists());
        assert!(path.exists());
    }

    #[test]
    fn persist_overwrites_an_existing_index_atomically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overwrite.trepidx");

        let first = TravelIndex::new();
        persist(&first, &path).expect("persist first");

        let mut second = TravelIndex::new();
        second.push_document(Document {
            doc_id: DocId(0),
            key: PorKey::new("LHR", "EGLL", 2643743),
            payload: String::new(),
        });
        persist(&second, &path).expect("persist second");

        let loaded = MappedIndex::open(&path).expect("open").into_index();
        assert_eq!(loaded.size(), 1);
    }
}
