//! Index-time sub-phrase expansion (spec §4.3, §4.4).

pub mod string_partition;
pub mod word_combination;

pub use string_partition::enumerate_partitions;
pub use word_combination::WordCombinationHolder;
