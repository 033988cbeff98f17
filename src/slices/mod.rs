//! Query-time slicing into independent sub-queries (spec §4.5).

pub mod query_slices;

pub use query_slices::build_slices;
