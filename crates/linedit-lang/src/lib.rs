#![warn(missing_docs)]
//! `linedit-lang` - data-driven language vocabularies for `linedit`.
//!
//! A [`Vocabulary`] is plain data: the words a highlighter should treat as keywords or type
//! names, plus the line comment token. It carries no parsing logic of its own.

use std::collections::HashSet;

/// Keyword and type-name sets for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    types: HashSet<String>,
    line_comment: Option<String>,
}

impl Vocabulary {
    /// Build a vocabulary from word lists. No comment token is set.
    pub fn new<K, T>(keywords: K, types: T) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            types: types.into_iter().map(Into::into).collect(),
            line_comment: None,
        }
    }

    /// Set the line comment token (e.g. `//`, `#`).
    pub fn with_line_comment(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.line_comment = (!token.is_empty()).then_some(token);
        self
    }

    /// The C/C++ vocabulary the editor ships with.
    pub fn c_family() -> Self {
        Self::new(C_FAMILY_KEYWORDS.iter().copied(), C_FAMILY_TYPES.iter().copied())
            .with_line_comment("//")
    }

    /// `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// `word` is a known type name.
    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    /// Line comment token, if the language has one.
    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }
}

const C_FAMILY_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "return", "using", "namespace", "class", "true", "false", "new",
    "delete", "include", "void", "int", "float", "double", "bool", "char", "string", "vector",
    "auto", "template", "typename", "const", "static", "public", "private", "std",
];

// `string` and `vector` appear in both lists; keywords win when classifying.
const C_FAMILY_TYPES: &[&str] = &[
    "Editor",
    "FileManager",
    "Terminal",
    "Theme",
    "Document",
    "vector",
    "string",
    "map",
    "uint8_t",
    "cout",
    "cin",
    "endl",
];
