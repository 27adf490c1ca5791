//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Corpus;
use loader::corpus_from_slice;

/// The embedded dictionary as a corpus
#[must_use]
pub fn default_corpus() -> Corpus {
    corpus_from_slice(DICTIONARY)
}
