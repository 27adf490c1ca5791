//! The solving corpus
//!
//! An ordered, de-duplicated, read-only list of words. Sessions copy the
//! words they need; the corpus itself is shared freely between them.

use super::{Word, WordError};
use rustc_hash::FxHashSet;

/// Ordered set of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus, keeping the first occurrence of each word
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self { words }
    }

    /// Build a corpus from string slices
    ///
    /// # Errors
    /// Returns the first `WordError` encountered.
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "angle", "apple"]).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, WordError> {
        let words = words
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Find a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Word> {
        let word = Word::new(text).ok()?;
        self.contains(&word).then_some(word)
    }

    /// A copy of this corpus without the given words
    ///
    /// Used to drop answers of earlier puzzles, which never repeat.
    #[must_use]
    pub fn excluding(&self, excluded: &[Word]) -> Self {
        let excluded: FxHashSet<&Word> = excluded.iter().collect();
        Self {
            words: self
                .words
                .iter()
                .filter(|w| !excluded.contains(w))
                .copied()
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_position() {
        let corpus = Corpus::from_strs(&["angle", "apple", "ANGLE", "ample"]).unwrap();
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, ["angle", "apple", "ample"]);
    }

    #[test]
    fn from_strs_reports_bad_words() {
        assert_eq!(
            Corpus::from_strs(&["angle", "ang"]),
            Err(WordError::InvalidLength(3))
        );
    }

    #[test]
    fn excluding_preserves_order() {
        let corpus = Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap();
        let past = [Word::new("angle").unwrap()];
        let rest = corpus.excluding(&past);

        assert_eq!(rest.len(), 3);
        assert!(!rest.contains(&past[0]));
        assert_eq!(rest.words()[1].text(), "ankle");
        // The source corpus is untouched
        assert_eq!(corpus.len(), 4);
    }

    #[test]
    fn find_normalises_case() {
        let corpus = Corpus::from_strs(&["apple"]).unwrap();
        assert_eq!(corpus.find("APPLE"), Some(Word::new("apple").unwrap()));
        assert_eq!(corpus.find("angle"), None);
        assert_eq!(corpus.find("nope"), None);
    }
}
