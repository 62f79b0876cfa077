use crate::error::Error;
use crate::tiles::{parse_letters, Word};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// The number of letters in every word: one full board row.
pub const WORD_LEN: usize = 5;

/// The set of words a row can solve to.
///
/// Every entry has exactly [`WORD_LEN`] letters. The word list is external
/// static data; lookups are total and never fail.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: HashSet<Word>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not built from a file.
    wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8
    /// and have one 5-letter word per line. Blank lines are skipped.
    /// ## Errors
    /// Fails if the wordfile can not be read, or a word can not be encoded.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::encode)
            .collect::<Result<HashSet<Word>, Error>>()?;
        Ok(Wordlist {
            words,
            wordfile: String::from(wordfile),
        })
    }

    /// Build a wordlist from a list of words.
    /// ## Errors
    /// If a word is not 5 lowercase ascii letters.
    /// ## Example
    /// ```
    /// # use wordier_engine::{Wordlist, Error};
    /// let wordlist = Wordlist::from_words(&["shape", "snore"])?;
    /// assert_eq!(wordlist.word_count(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Wordlist, Error> {
        let words = words
            .iter()
            .map(|&word| Self::encode(word))
            .collect::<Result<HashSet<Word>, Error>>()?;
        Ok(Wordlist {
            words,
            wordfile: String::new(),
        })
    }

    /// Encode a string as a [`Word`].
    /// ## Errors
    /// If the string is not exactly 5 lowercase ascii letters.
    pub fn encode(word: &str) -> Result<Word, Error> {
        let letters = parse_letters(word)?;
        if letters.len() != WORD_LEN {
            return Err(Error::InvalidWordLength(String::from(word), letters.len()));
        }
        Ok(letters.into_iter().collect())
    }

    /// Returns true if `word` is in the wordlist.
    pub fn is_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The number of words in the wordlist.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Path of the wordfile this list was read from, if any.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["shape", "snore", "crane", "slate", "bread"];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_is_word() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.is_word(&Wordlist::encode(word).unwrap()));
        }
        assert!(!wordlist.is_word(&Wordlist::encode("ordre").unwrap()));
    }

    #[test]
    fn test_display() {
        let wordlist = test_wordlist();
        assert_eq!(format!("{}", wordlist), "<Wordlist: 5 words from ''>");
    }

    #[test]
    #[should_panic(expected = "InvalidWordLength")]
    fn test_encode_too_short() {
        Wordlist::encode("shap").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidLetter")]
    fn test_encode_bad_letter() {
        Wordlist::encode("shap!").unwrap();
    }

    #[test]
    fn test_duplicates_collapse() {
        let wordlist = Wordlist::from_words(&["shape", "shape"]).unwrap();
        assert_eq!(wordlist.word_count(), 1);
    }
}
