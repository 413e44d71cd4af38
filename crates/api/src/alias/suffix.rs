//! Alias suffix generation

use std::path::{Path, PathBuf};

use rand::Rng;

/// Immutable word list for randomized suffixes.
///
/// Loaded from disk once at startup and shared by reference afterwards.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file, one word per line.
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| WordListError::Read(path.to_path_buf(), source))?;

        let words = contents
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();

        Self::new(words)
    }

    /// Build a word list from already-collected words.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Pick one word uniformly at random. Words are chosen independently
    /// per call; repeats across calls are possible.
    pub fn random_word(&self) -> &str {
        let idx = rand::thread_rng().gen_range(0..self.words.len());
        &self.words[idx]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Render the suffix for one domain.
///
/// Randomized suffixes embed a word to make alias addresses hard to guess;
/// bare suffixes are just `@domain`. No uniqueness check happens here, that
/// is enforced when the alias is actually created.
pub fn make_suffix(domain: &str, randomize: bool, words: &WordList) -> String {
    if randomize {
        format!(".{}@{}", words.random_word(), domain)
    } else {
        format!("@{}", domain)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("word list contains no words")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list() -> WordList {
        WordList::new(vec![
            "falcon".to_string(),
            "meadow".to_string(),
            "quartz".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_word_list_rejected() {
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
    }

    #[test]
    fn test_bare_suffix() {
        let words = word_list();
        assert_eq!(make_suffix("example.com", false, &words), "@example.com");
    }

    #[test]
    fn test_randomized_suffix_shape() {
        let words = word_list();
        let suffix = make_suffix("example.com", true, &words);

        let word = suffix
            .strip_prefix('.')
            .and_then(|rest| rest.strip_suffix("@example.com"))
            .unwrap_or_else(|| panic!("unexpected suffix shape: {suffix}"));
        assert!(words.contains(word), "word {word:?} not from the list");
    }

    #[test]
    fn test_words_drawn_from_list() {
        let words = word_list();
        for _ in 0..50 {
            assert!(words.contains(words.random_word()));
        }
    }
}
