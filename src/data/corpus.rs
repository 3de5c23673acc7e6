//! Session corpus: built-in entries plus merged uploads.

use indexmap::IndexMap;
use tracing::info;

use super::{builtin::builtin_entries, QnaEntry};

/// Working set of Q&A entries for one session.
///
/// Uploads are merged into `custom`, which then holds the built-in entries
/// too; retrieval uses `custom` once it is non-empty.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    builtin: Vec<QnaEntry>,
    custom: Vec<QnaEntry>,
}

impl Corpus {
    /// Corpus seeded with the shipped Q&A set.
    pub fn with_builtin() -> Self {
        Self::from_builtin(builtin_entries().to_vec())
    }

    /// Corpus with a caller-supplied base set, deduplicated.
    pub fn from_builtin(entries: Vec<QnaEntry>) -> Self {
        Self {
            builtin: dedup(entries),
            custom: Vec::new(),
        }
    }

    /// Corpus with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge newly parsed entries, returning how many were accepted.
    ///
    /// Merge order is built-in, previously accepted, then `incoming`; the
    /// first entry for each normalised question wins.
    pub fn merge(&mut self, incoming: Vec<QnaEntry>) -> usize {
        let before = self.len();
        let merged: Vec<QnaEntry> = self
            .builtin
            .iter()
            .cloned()
            .chain(std::mem::take(&mut self.custom))
            .chain(incoming)
            .collect();
        self.custom = dedup(merged);
        let accepted = self.custom.len().saturating_sub(before);
        info!(accepted, total = self.custom.len(), "merged q&a entries");
        accepted
    }

    /// Entries used for retrieval.
    pub fn active(&self) -> &[QnaEntry] {
        if self.custom.is_empty() {
            &self.builtin
        } else {
            &self.custom
        }
    }

    pub fn len(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}

/// Keep the first entry per normalised question, dropping blank keys.
pub fn dedup(entries: Vec<QnaEntry>) -> Vec<QnaEntry> {
    let mut seen = IndexMap::<String, QnaEntry>::new();
    for entry in entries {
        let key = entry.key();
        if key.is_empty() {
            continue;
        }
        seen.entry(key).or_insert(entry);
    }
    seen.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(q: &str, src: &str) -> QnaEntry {
        QnaEntry::new(q, "answer", src)
    }

    #[test]
    fn first_occurrence_wins() {
        let out = dedup(vec![
            entry("What is fever?", "a.csv"),
            entry("what is FEVER", "b.csv"),
            entry("???", "c.csv"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].source, "a.csv");
    }

    #[test]
    fn merge_keeps_builtin_first_and_counts_new_entries() {
        let mut corpus = Corpus::from_builtin(vec![entry("Does it hurt?", "builtin")]);
        assert_eq!(corpus.merge(vec![entry("What is fever?", "up.csv")]), 1);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.active()[0].source, "builtin");

        // duplicates of built-in or earlier uploads are ignored
        assert_eq!(
            corpus.merge(vec![entry("does it hurt", "x.csv"), entry("what is fever", "y.csv")]),
            0
        );
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.merge(vec![entry("What is a cold?", "z.txt")]), 1);
        assert_eq!(corpus.active()[2].source, "z.txt");
    }

    #[test]
    fn empty_merge_activates_builtin_copy() {
        let mut corpus = Corpus::with_builtin();
        let builtin_len = corpus.len();
        assert_eq!(corpus.merge(Vec::new()), 0);
        assert_eq!(corpus.len(), builtin_len);
    }

    #[test]
    fn empty_corpus_has_no_active_entries() {
        let mut corpus = Corpus::empty();
        assert!(corpus.is_empty());
        corpus.merge(vec![entry("What is fever?", "up.csv")]);
        assert_eq!(corpus.len(), 1);
    }
}
