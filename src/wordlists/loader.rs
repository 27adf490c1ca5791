//! Word list loading utilities
//!
//! Reads plain text word lists (one word per line) or converts the embedded
//! constants.

use crate::core::{Corpus, Word};
use crate::error::CorpusError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a corpus from a file
///
/// Blank lines and lines starting with `#` are skipped. Any other line must
/// be a 5-letter word; duplicates keep their first position.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read,
/// `CorpusError::InvalidWord` for the first malformed line, and
/// `CorpusError::Empty` if no words remain.
///
/// # Examples
/// ```no_run
/// use wordle_bot::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = parse_word_list(&content, path)?;
    debug!("Loaded {} words from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Load a list of words to leave out of a corpus
///
/// Same format as [`load_from_file`], except that a list with no words is
/// valid and yields nothing to exclude.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read and
/// `CorpusError::InvalidWord` for the first malformed line.
pub fn load_exclusions<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    match load_from_file(path) {
        Ok(corpus) => Ok(corpus.words().to_vec()),
        Err(CorpusError::Empty(path)) => {
            debug!("No words to exclude in {}", path.display());
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

fn parse_word_list(content: &str, path: &Path) -> Result<Corpus, CorpusError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| CorpusError::InvalidWord {
            path: path.to_path_buf(),
            line: index + 1,
            word: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(CorpusError::Empty(path.to_path_buf()));
    }

    Ok(Corpus::new(words))
}

/// Convert an embedded string slice to a corpus, skipping invalid entries
#[must_use]
pub fn corpus_from_slice(slice: &[&str]) -> Corpus {
    Corpus::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(content: &str) -> Result<Corpus, CorpusError> {
        parse_word_list(content, Path::new("test.txt"))
    }

    #[test]
    fn corpus_from_slice_converts_valid_words() {
        let corpus = corpus_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.words()[0].text(), "crane");
        assert_eq!(corpus.words()[2].text(), "irate");
    }

    #[test]
    fn corpus_from_slice_skips_invalid() {
        let corpus = corpus_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.words()[1].text(), "slate");
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let corpus = parse("# header\n\napple\n  angle  \n\n# more\nankle\n").unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn parse_reports_line_of_bad_word() {
        let err = parse("apple\nangle\nank1e\n").unwrap_err();
        match err {
            CorpusError::InvalidWord { line, word, .. } => {
                assert_eq!(line, 3);
                assert_eq!(word, "ank1e");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(parse("# nothing\n\n"), Err(CorpusError::Empty(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }

    fn temp_list(name: &str, content: &str) -> std::path::PathBuf {
        let file = format!("wordle_bot_{name}_{}.txt", std::process::id());
        let path = std::env::temp_dir().join(file);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn exclusions_accept_a_list_with_no_words() {
        let path = temp_list("no_exclusions", "# past answers\n\n");
        let excluded = load_exclusions(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(excluded.unwrap(), Vec::<Word>::new());
    }

    #[test]
    fn exclusions_keep_other_errors() {
        let path = temp_list("bad_exclusions", "apple\nank1e\n");
        let excluded = load_exclusions(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(excluded, Err(CorpusError::InvalidWord { line: 2, .. })));
        assert!(matches!(
            load_exclusions("definitely/not/here.txt"),
            Err(CorpusError::Io { .. })
        ));
    }

    #[test]
    fn exclusions_list_words_in_order() {
        let path = temp_list("exclusions", "angle\napple\n");
        let excluded = load_exclusions(&path);
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = excluded.as_ref().unwrap().iter().map(Word::text).collect();
        assert_eq!(texts, ["angle", "apple"]);
    }

    #[test]
    fn load_from_real_file() {
        let path = std::env::temp_dir().join(format!("wordle_bot_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "apple\nangle\napple").unwrap();
        drop(file);

        let corpus = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 2);
    }
}
