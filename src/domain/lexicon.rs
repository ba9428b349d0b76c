//! Word-list entity: parsing and normalization.

use std::path::PathBuf;

use itertools::Itertools;

use crate::domain::error::DomainError;

/// A parsed word list: one lowercase word per non-blank line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Where the words came from (kept for display and errors)
    pub path: PathBuf,
    /// Words in file order, lowercased
    pub words: Vec<String>,
}

impl Lexicon {
    /// Parse lexicon content.
    ///
    /// Every non-blank line becomes one word with surrounding whitespace
    /// stripped and the remainder lowercased, so lookups never depend on the
    /// casing of the source file. Content without a single usable word is
    /// rejected.
    ///
    /// # Arguments
    /// * `content` - File content to parse
    /// * `path` - Path the content was read from
    pub fn parse(content: &str, path: PathBuf) -> Result<Self, DomainError> {
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(DomainError::EmptyLexicon(path));
        }
        Ok(Self { path, words })
    }

    /// Total word count, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words.
    pub fn distinct_count(&self) -> usize {
        self.words.iter().unique().count()
    }

    /// Number of distinct words that occur more than once. Each repeated
    /// word becomes a separate tree node, so this is worth a log line at
    /// load time.
    pub fn duplicate_count(&self) -> usize {
        self.words.iter().duplicates().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_content_when_parsing_then_words_are_lowercased() {
        let content = "Apple\nBANANA\ncherry\n";

        let lexicon = Lexicon::parse(content, PathBuf::from("test.lex")).unwrap();

        assert_eq!(lexicon.words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn given_blank_lines_and_padding_when_parsing_then_they_are_dropped() {
        let content = "  apple  \n\n\t\nbanana\n";

        let lexicon = Lexicon::parse(content, PathBuf::from("test.lex")).unwrap();

        assert_eq!(lexicon.words, vec!["apple", "banana"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn given_empty_content_when_parsing_then_fails() {
        let result = Lexicon::parse("\n  \n", PathBuf::from("empty.lex"));

        assert!(matches!(result, Err(DomainError::EmptyLexicon(_))));
    }

    #[test]
    fn given_repeated_words_when_counting_then_duplicates_are_reported() {
        let content = "apple\nbanana\napple\nApple\ncherry\n";

        let lexicon = Lexicon::parse(content, PathBuf::from("test.lex")).unwrap();

        assert_eq!(lexicon.len(), 5);
        assert_eq!(lexicon.distinct_count(), 3);
        assert_eq!(lexicon.duplicate_count(), 1);
    }
}
