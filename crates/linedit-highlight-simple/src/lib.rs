//! `linedit-highlight-simple` - word-level highlighting for `linedit`.
//!
//! Lines are split on single spaces and tabs and each word is classified on its own text alone.
//! There is no lexer state: a `//` word is a comment but the words after it are classified
//! normally. Renderers map [`TokenClass`] to colors.

use std::ops::Range;

use linedit_core::TextBuffer;
use linedit_lang::Vocabulary;

/// Highlight category of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Member of the keyword set.
    Keyword,
    /// Member of the type-name set.
    Type,
    /// Starts with an ASCII digit.
    Number,
    /// Starts with the line comment token.
    Comment,
    /// Contains a double quote.
    StringLiteral,
    /// Anything else.
    Plain,
}

/// A classified word: byte range within its line plus class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the word.
    pub range: Range<usize>,
    /// Its class.
    pub class: TokenClass,
}

/// Classify one word. Checks run in order: keyword, type, number, comment, string.
pub fn classify(word: &str, vocab: &Vocabulary) -> TokenClass {
    if vocab.is_keyword(word) {
        TokenClass::Keyword
    } else if vocab.is_type(word) {
        TokenClass::Type
    } else if word.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        TokenClass::Number
    } else if vocab.line_comment().is_some_and(|token| word.starts_with(token)) {
        TokenClass::Comment
    } else if word.contains('"') {
        TokenClass::StringLiteral
    } else {
        TokenClass::Plain
    }
}

/// Split `line` on spaces and tabs and classify each non-empty word.
pub fn tokenize_line(line: &str, vocab: &Vocabulary) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, ch) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        if ch != ' ' && ch != '\t' {
            continue;
        }
        if start < idx {
            let word = &line[start..idx];
            tokens.push(Token {
                range: start..idx,
                class: classify(word, vocab),
            });
        }
        start = idx + 1;
    }
    tokens
}

/// Highlighter bound to one vocabulary.
#[derive(Debug, Clone)]
pub struct SimpleHighlighter {
    vocab: Vocabulary,
}

impl Default for SimpleHighlighter {
    fn default() -> Self {
        Self::new(Vocabulary::c_family())
    }
}

impl SimpleHighlighter {
    /// Highlighter for `vocab`.
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Vocabulary in use.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Classified tokens of one line.
    pub fn highlight_line(&self, line: &str) -> Vec<Token> {
        tokenize_line(line, &self.vocab)
    }

    /// Tokens for `count` lines starting at `start_row` (the visible slice).
    pub fn highlight_rows(
        &self,
        buffer: &TextBuffer,
        start_row: usize,
        count: usize,
    ) -> Vec<Vec<Token>> {
        buffer
            .lines()
            .iter()
            .skip(start_row)
            .take(count)
            .map(|line| self.highlight_line(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(line: &str) -> Vec<(&str, TokenClass)> {
        let vocab = Vocabulary::c_family();
        tokenize_line(line, &vocab)
            .into_iter()
            .map(|t| (&line[t.range], t.class))
            .collect()
    }

    #[test]
    fn test_classify_precedence() {
        let vocab = Vocabulary::c_family();
        assert_eq!(classify("string", &vocab), TokenClass::Keyword);
        assert_eq!(classify("Document", &vocab), TokenClass::Type);
        assert_eq!(classify("42px", &vocab), TokenClass::Number);
        assert_eq!(classify("//todo", &vocab), TokenClass::Comment);
        assert_eq!(classify("\"hi\";", &vocab), TokenClass::StringLiteral);
        assert_eq!(classify("x/2", &vocab), TokenClass::Plain);
        assert_eq!(classify("1\"", &vocab), TokenClass::Number);
    }

    #[test]
    fn test_tokenize_line_word_ranges() {
        assert_eq!(
            classes("\tint x = 0; // done"),
            vec![
                ("int", TokenClass::Keyword),
                ("x", TokenClass::Plain),
                ("=", TokenClass::Plain),
                ("0;", TokenClass::Number),
                ("//", TokenClass::Comment),
                ("done", TokenClass::Plain),
            ]
        );
    }

    #[test]
    fn test_tokenize_handles_runs_of_spaces_and_multibyte() {
        let line = "  \"héllo\"   vector";
        let vocab = Vocabulary::c_family();
        let tokens = tokenize_line(line, &vocab);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].range, 2..10);
        assert_eq!(tokens[0].class, TokenClass::StringLiteral);
        assert_eq!(&line[tokens[1].range.clone()], "vector");
        assert!(tokenize_line("", &vocab).is_empty());
    }

    #[test]
    fn test_highlight_rows_slices_buffer() {
        let buffer = TextBuffer::from_text("int a;\nreturn a;\n// end");
        let highlighter = SimpleHighlighter::default();
        let rows = highlighter.highlight_rows(&buffer, 1, 5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].class, TokenClass::Keyword);
        assert_eq!(rows[1][0].class, TokenClass::Comment);
    }
}
