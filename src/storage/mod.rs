//! Storage layer for a committed [`crate::index::TravelIndex`] (spec §4.6,
//! §6.3).
//!
//! # File format
//!
//! ```text
//! [Header: magic, version, body length, xxh3_64 checksum]  (32 bytes)
//! [Body: bincode-encoded TravelIndex]
//! ```
//!
//! The body is read through a `memmap2` mapping to avoid a second buffered
//! copy of the file, then deserialized into an owned [`crate::index::TravelIndex`]
//! — unlike the teacher's raw struct-array layout, POR records and name
//! matrices are variable length, so the mapping itself isn't held onto for
//! zero-copy field access.
//!
//! # Examples
//!
//! ```rust,no_run
//! use trep::storage;
//! use trep::index::TravelIndex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = TravelIndex::new();
//! storage::persist(&index, "world.trepidx")?;
//! let loaded = storage::load("world.trepidx")?;
//! println!("index has {} documents", loaded.size());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod file_format;
pub mod mmap;

pub use builder::persist;
pub use file_format::{IndexFileHeader, FORMAT_VERSION};
pub use mmap::MappedIndex;

use crate::core::error::Result;
use crate::index::TravelIndex;
use std::path::Path;

/// Load a committed index file into memory (spec §6.4 load path).
pub fn load<P: AsRef<Path>>(path: P) -> Result<TravelIndex> {
    MappedIndex::open(path).map(MappedIndex::into_index)
}