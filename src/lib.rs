// Copyright 2025 Roberto Antunes
//
// Licensed under the Functional Source License, Version 1.1 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://github.com/RobAntunes/lingodb/blob/main/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # trep
//!
//! Full-text search over points of reference (airports, cities, train and
//! bus stations, ferry ports) for free-form travel queries, modeled on the
//! matching behavior of OpenTREP.
//!
//! A query like `"sna francicso rio de janero"` is normalized, tokenized,
//! sliced into independently-matchable spans, expanded into candidate
//! sub-phrase partitions, matched against a committed inverted index with
//! fuzzy (Levenshtein) spelling correction, scored across several signals,
//! and reduced to a ranked list of [`interpreter::Location`]s.
//!
//! ## Pipeline
//!
//! 1. [`text::transliterate::normalize`] — Unicode NFD/NFC, accent and
//!    punctuation stripping, non-Latin transliteration, lowercasing.
//! 2. [`text::tokenize`] — split on a fixed separator set, drop
//!    too-short/blacklisted tokens at the phrase's edges.
//! 3. [`slices::build_slices`] — break the token stream into spans that a
//!    co-match check says can be matched independently.
//! 4. [`combo::enumerate_partitions`] — for each slice, enumerate every way
//!    of grouping its tokens into contiguous sub-phrases.
//! 5. [`matcher::FullTextMatcher`] — match (and, if needed, spelling-correct)
//!    each sub-phrase against the index.
//! 6. [`result`] — score every match across several signals, combine them
//!    per partition, and pick the best partition per slice.
//! 7. [`interpreter::RequestInterpreter`] — orchestrates the above end to
//!    end and enriches the winning matches into [`interpreter::Location`]s.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use trep::service::TrepService;
//! use trep::index::builder::InMemoryCatalog;
//! use trep::core::por::PorCatalogRow;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut service = TrepService::new(3, 5.0);
//! let rows = vec![PorCatalogRow {
//!     iata_code: "NCE".to_string(),
//!     geonames_id: 6299418,
//!     name: "Nice Cote d'Azur".to_string(),
//!     iata_type: 'A',
//!     ..Default::default()
//! }];
//! service.build_index(&InMemoryCatalog(rows))?;
//!
//! let (locations, unmatched) = service.interpret("nce", None)?;
//! println!("{} locations, unmatched: {:?}", locations.len(), unmatched);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: scalar identifiers, the POR data model, the scoring model,
//!   and the crate's error taxonomy.
//! - [`text`]: transliteration and tokenization.
//! - [`combo`]: sub-phrase partition and hole-removal enumeration.
//! - [`slices`]: query-time slicing.
//! - [`index`]: the committed inverted index and its builder.
//! - [`matcher`]: per-sub-phrase fuzzy matching.
//! - [`result`]: per-slice result aggregation and partition selection.
//! - [`interpreter`]: end-to-end request orchestration.
//! - [`service`]: the public service surface (`interpret`, `build_index`,
//!   `size`, `sample`).
//! - [`storage`]: persisting and loading a committed index.
//! - [`config`]: runtime configuration, environment-variable driven.
//! - [`security`]: path/query/limit validation.
//! - [`logging`]: structured logging setup and macros.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combo;
pub mod config;
pub mod core;
pub mod index;
pub mod interpreter;
pub mod logging;
pub mod matcher;
pub mod result;
pub mod security;
pub mod service;
pub mod slices;
pub mod storage;
pub mod text;

pub use crate::core::error::{ServiceError, ServiceResult, TrepError};
pub use crate::interpreter::{Location, RequestInterpreter};
pub use crate::service::TrepService;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current on-disk index format version (spec §6.3).
pub const MAX_FILE_VERSION: (u16, u16) = (crate::storage::FORMAT_VERSION, 0);
