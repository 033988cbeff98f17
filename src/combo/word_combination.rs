//! Index-time expansion of a name into indexable sub-phrases (spec §4.3).

use crate::combo::string_partition::enumerate_partitions;
use crate::text::tokenize::{filter_token, tokenize};
use std::collections::BTreeSet;

/// A deduplicated ordered list of indexable sub-phrases derived from one
/// name string.
#[derive(Debug, Clone, Default)]
pub struct WordCombinationHolder {
    combinations: Vec<String>,
    seen: BTreeSet<String>,
}

impl WordCombinationHolder {
    /// Build the holder for `phrase` (already normalized, spec §4.1),
    /// given the configured minimum word length (spec §4.2).
    ///
    /// Combines (a) every contiguous sub-phrase from the partition
    /// enumeration of every partition of the phrase's tokens, and (b) every
    /// "hole-removed" variant obtained by deleting one interior contiguous
    /// run of `1..n-2` tokens, provided it passes the filter against the
    /// original phrase. Both sets are deduplicated via an ordered set.
    pub fn build(phrase: &str, min_len: usize) -> Self {
        let mut holder = Self::default();
        let tokens = tokenize(phrase);
        if tokens.is_empty() {
            return holder;
        }

        for partition in enumerate_partitions(&tokens) {
            for sub_phrase in partition {
                holder.push(sub_phrase);
            }
        }

        let n = tokens.len();
        if n >= 3 {
            for hole_start in 1..n - 1 {
                for hole_len in 1..=(n - 2 - hole_start + 1) {
                    let hole_end = hole_start + hole_len;
                    if hole_end >= n {
                        continue;
                    }
                    let mut remaining: Vec<String> = tokens[..hole_start].to_vec();
                    remaining.extend_from_slice(&tokens[hole_end..]);
                    let variant = remaining.join(" ");
                    if filter_token(&variant, phrase, min_len) {
                        holder.push(variant);
                    }
                }
            }
        }

        holder
    }

    fn push(&mut self, sub_phrase: String) {
        if self.seen.insert(sub_phrase.clone()) {
            self.combinations.push(sub_phrase);
        }
    }

    /// The deduplicated, ordered sub-phrases.
    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }
}
