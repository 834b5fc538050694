//! The fixed passphrase word list.
//!
//! Compiled into the binary and parsed once on first use. After that it
//! is shared read-only by every generation call.

use std::sync::OnceLock;

const RAW_WORDS: &str = include_str!("wordlist.txt");

static WORDS: OnceLock<WordList> = OnceLock::new();

/// An immutable list of lowercase, distinct words.
#[derive(Debug)]
pub struct WordList {
    words: Vec<&'static str>,
}

impl WordList {
    /// Returns the process-wide list.
    pub fn global() -> &'static WordList {
        WORDS.get_or_init(|| {
            let words: Vec<&'static str> = RAW_WORDS
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            tracing::debug!(words = words.len(), "Word list loaded");
            WordList { words }
        })
    }

    /// All words in list order.
    #[inline]
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for the embedded list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|probe| (*probe).cmp(word)).is_ok()
    }
}
