//! The committed full-text index: inverted postings, spelling dictionary,
//! code lookup, and document store (spec §4.6, §6.3).

pub mod builder;
pub mod document;

pub use builder::IndexBuilder;
pub use document::{decode_payload, encode_payload, Document};

use crate::core::types::DocId;
use std::collections::BTreeMap;

/// The full committed index (spec §6.3): a term set, a spelling dictionary,
/// and a document store with stable document ids within one build.
///
/// Held in memory after load; [`crate::storage`] handles persisting and
/// restoring this structure via `memmap2` + `bincode`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TravelIndex {
    documents: Vec<Document>,
    /// term -> postings list, in the order terms were first added.
    postings: BTreeMap<String, Vec<DocId>>,
    /// Every distinct term ever added, used as the spelling-correction
    /// universe for the matcher's fuzzy step.
    spelling_dictionary: BTreeMap<String, ()>,
    /// code (IATA, ICAO, or decimal geonames id), upper-cased -> doc id.
    codes: BTreeMap<String, DocId>,
}

impl TravelIndex {
    /// An empty index, ready to receive documents via [`IndexBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed documents (spec §6.3 `size(index)`).
    pub fn size(&self) -> usize {
        self.documents.len()
    }

    /// Fetch a document by id.
    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id.0 as usize)
    }

    /// Postings list for an exact term, if any were indexed under it.
    pub fn postings_for(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether `term` was indexed verbatim (used by the matcher's
    /// effective-edit-distance-0 fast path).
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Resolve a code (IATA, ICAO, or decimal geonames id) to its document,
    /// used by the orchestrator's fast path (spec §4.10 step 4).
    pub fn lookup_code(&self, code: &str) -> Option<DocId> {
        self.codes.get(&code.to_uppercase()).copied()
    }

    /// Iterate every distinct indexed term, for spelling correction.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.spelling_dictionary.keys().map(|s| s.as_str())
    }

    /// Uniform sample of up to `n` documents (spec §6.4 `sample(n)`), taken
    /// in document-id order; `n` is clamped to [`TravelIndex::size`].
    pub fn sample(&self, n: usize) -> Vec<&Document> {
        let n = n.min(self.documents.len());
        let stride = if n == 0 { 1 } else { (self.documents.len() / n).max(1) };
        self.documents.iter().step_by(stride).take(n).collect()
    }

    pub(crate) fn add_term(&mut self, term: &str, doc_id: DocId) {
        self.spelling_dictionary.entry(term.to_string()).or_insert(());
        let postings = self.postings.entry(term.to_string()).or_default();
        if postings.last() != Some(&doc_id) {
            postings.push(doc_id);
        }
    }

    pub(crate) fn add_code(&mut self, code: &str, doc_id: DocId) {
        if !code.is_empty() {
            self.codes.insert(code.to_uppercase(), doc_id);
        }
    }

    pub(crate) fn push_document(&mut self, mut document: Document) -> DocId {
        let doc_id = DocId(self.documents.len() as u32);
        document.doc_id = doc_id;
        self.documents.push(document);
        doc_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PorKey;

    #[test]
    fn sample_is_clamped_to_size() {
        let mut index = TravelIndex::new();
        for i in 0..3u32 {
            index.push_document(Document {
                doc_id: DocId(i),
                key: PorKey::new(format!("A{i:02}"), "", i),
                payload: String::new(),
            });
        }
        assert_eq!(index.sample(10).len(), 3);
    }

    #[test]
    fn code_lookup_is_case_insensitive() {
        let mut index = TravelIndex::new();
        let doc_id = index.push_document(Document {
            doc_id: DocId(0),
            key: PorKey::new("NCE", "LFMN", 1),
            payload: String::new(),
        });
        index.add_code("NCE", doc_id);
        assert_eq!(index.lookup_code("nce"), Some(doc_id));
    }
}
