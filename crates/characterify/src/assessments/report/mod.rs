//! Narrative report composition.
//!
//! Narratives live in read-only tables keyed by classification string. Every lookup has
//! an explicit fallback, so composing never fails for any `result_type`.

mod enneagram;
mod mbti;
mod ocean;
mod temperament;
pub mod views;

use std::collections::BTreeMap;

use super::domain::TestId;
use super::scoring::Percentages;

pub use views::{ReportContent, ReportSection};

/// Static narrative entries keyed by classification (`"INTP"`, `"C_O"`, `"8"`, ...).
#[derive(Debug)]
pub struct NarrativeTable<E: 'static> {
    entries: &'static [(&'static str, E)],
}

impl<E> NarrativeTable<E> {
    pub const fn new(entries: &'static [(&'static str, E)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&E> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, entry)| entry)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the report for a classification. Unknown keys fall back to generic text.
pub fn compose(
    test: TestId,
    result_type: &str,
    scores: &BTreeMap<String, u32>,
    percentages: &Percentages,
) -> ReportContent {
    match test {
        TestId::Mbti => mbti::compose(result_type, percentages.dimensions()),
        TestId::Ocean => ocean::compose(result_type, scores, percentages),
        TestId::Enneagram => enneagram::compose(result_type),
        TestId::Temperament => temperament::compose(result_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_test_composes_for_garbage_keys() {
        let scores = BTreeMap::new();
        let empty = Percentages::Shares(Vec::new());
        for test in TestId::ordered() {
            for key in ["", "???", "ZZZZ", "10", "O_O"] {
                let content = compose(test, key, &scores, &empty);
                assert!(!content.title.is_empty(), "{test} {key:?}");
                assert!(!content.summary_md.is_empty(), "{test} {key:?}");
                assert!(!content.sections.is_empty(), "{test} {key:?}");
                assert!(content.sections.iter().all(|s| !s.items.is_empty()));
            }
        }
    }

    #[test]
    fn narrative_table_lookup_is_exact() {
        static TABLE: NarrativeTable<u8> = NarrativeTable::new(&[("A_C", 1), ("C_O", 2)]);
        assert_eq!(TABLE.get("C_O"), Some(&2));
        assert_eq!(TABLE.get("O_C"), None);
        assert_eq!(TABLE.len(), 2);
        assert_eq!(TABLE.keys().collect::<Vec<_>>(), vec!["A_C", "C_O"]);
    }
}
