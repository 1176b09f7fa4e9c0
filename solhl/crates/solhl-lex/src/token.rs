//! Token definitions.
//!
//! A [`Token`] is a classified slice of the input. The [`TokenKind`]
//! enumeration is closed: renderers map each kind to a display style, either
//! through the dotted [`TokenKind::qualname`] (`"Keyword.Type"`) or the short
//! CSS-style class returned by [`TokenKind::short_name`] (`"kt"`).

use std::fmt;

use solhl_util::Span;

/// Classification label attached to a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Language keyword (`contract`, `function`, `returns`, ...)
    Keyword,
    /// Elementary type name (`uint`, `address`, `bytes32`, ...)
    KeywordType,
    /// Reserved word with no current meaning (`switch`, `typeof`, ...)
    KeywordReserved,
    /// Ether and time unit (`wei`, `ether`, `days`, ...)
    KeywordConstant,
    /// Builtin value (`true`, `false`, `NULL`)
    NameBuiltin,
    /// Plain identifier
    Name,
    /// Name of a function in a definition or declaration
    NameFunction,
    /// Statement label at the beginning of a line
    NameLabel,
    /// Hexadecimal integer literal
    NumHex,
    /// Octal integer literal
    NumOctal,
    /// Decimal integer literal
    NumInteger,
    /// String literal text and quotes
    Str,
    /// Character literal
    StrChar,
    /// Escape sequence inside a string literal
    StrEscape,
    /// Operator character
    Operator,
    /// Punctuation (brackets, separators, statement terminators)
    Punctuation,
    /// Comment without a more specific kind (excluded `#if 0` blocks)
    Comment,
    /// `//` comment
    CommentSingle,
    /// `/* */` comment
    CommentMultiline,
    /// Preprocessor-style `#` line
    CommentPreproc,
    /// Whitespace and line continuations
    Text,
    /// Input no rule could classify
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 22] = [
        TokenKind::Keyword,
        TokenKind::KeywordType,
        TokenKind::KeywordReserved,
        TokenKind::KeywordConstant,
        TokenKind::NameBuiltin,
        TokenKind::Name,
        TokenKind::NameFunction,
        TokenKind::NameLabel,
        TokenKind::NumHex,
        TokenKind::NumOctal,
        TokenKind::NumInteger,
        TokenKind::Str,
        TokenKind::StrChar,
        TokenKind::StrEscape,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Comment,
        TokenKind::CommentSingle,
        TokenKind::CommentMultiline,
        TokenKind::CommentPreproc,
        TokenKind::Text,
        TokenKind::Error,
    ];

    /// Dotted, hierarchical name of the kind.
    ///
    /// Prefixes of the name are themselves meaningful to a renderer: a theme
    /// without an entry for `Literal.Number.Hex` can fall back to
    /// `Literal.Number` and then `Literal`.
    ///
    /// # Example
    ///
    /// ```
    /// use solhl_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::KeywordType.qualname(), "Keyword.Type");
    /// assert_eq!(TokenKind::NumHex.qualname(), "Literal.Number.Hex");
    /// ```
    pub const fn qualname(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordType => "Keyword.Type",
            TokenKind::KeywordReserved => "Keyword.Reserved",
            TokenKind::KeywordConstant => "Keyword.Constant",
            TokenKind::NameBuiltin => "Name.Builtin",
            TokenKind::Name => "Name",
            TokenKind::NameFunction => "Name.Function",
            TokenKind::NameLabel => "Name.Label",
            TokenKind::NumHex => "Literal.Number.Hex",
            TokenKind::NumOctal => "Literal.Number.Oct",
            TokenKind::NumInteger => "Literal.Number.Integer",
            TokenKind::Str => "Literal.String",
            TokenKind::StrChar => "Literal.String.Char",
            TokenKind::StrEscape => "Literal.String.Escape",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Comment => "Comment",
            TokenKind::CommentSingle => "Comment.Single",
            TokenKind::CommentMultiline => "Comment.Multiline",
            TokenKind::CommentPreproc => "Comment.Preproc",
            TokenKind::Text => "Text",
            TokenKind::Error => "Error",
        }
    }

    /// Short style class, as used in HTML highlighter stylesheets.
    ///
    /// `Text` has an empty class: it is rendered unstyled.
    pub const fn short_name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "k",
            TokenKind::KeywordType => "kt",
            TokenKind::KeywordReserved => "kr",
            TokenKind::KeywordConstant => "kc",
            TokenKind::NameBuiltin => "nb",
            TokenKind::Name => "n",
            TokenKind::NameFunction => "nf",
            TokenKind::NameLabel => "nl",
            TokenKind::NumHex => "mh",
            TokenKind::NumOctal => "mo",
            TokenKind::NumInteger => "mi",
            TokenKind::Str => "s",
            TokenKind::StrChar => "sc",
            TokenKind::StrEscape => "se",
            TokenKind::Operator => "o",
            TokenKind::Punctuation => "p",
            TokenKind::Comment => "c",
            TokenKind::CommentSingle => "c1",
            TokenKind::CommentMultiline => "cm",
            TokenKind::CommentPreproc => "cp",
            TokenKind::Text => "",
            TokenKind::Error => "err",
        }
    }

    /// Returns true for the comment family.
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::Comment
                | TokenKind::CommentSingle
                | TokenKind::CommentMultiline
                | TokenKind::CommentPreproc
        )
    }

    /// Returns true for the keyword family.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Keyword
                | TokenKind::KeywordType
                | TokenKind::KeywordReserved
                | TokenKind::KeywordConstant
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualname())
    }
}

/// A classified lexeme.
///
/// `text` borrows from the tokenized source; `offset` is the byte offset of
/// `text` within that source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification of the lexeme
    pub kind: TokenKind,
    /// The lexeme itself
    pub text: &'a str,
    /// Byte offset of the lexeme in the source
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[inline]
    pub const fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Self { kind, text, offset }
    }

    /// Byte offset one past the end of the lexeme.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Source span covered by the lexeme.
    #[inline]
    pub const fn span(&self) -> Span {
        Span::with_len(self.offset, self.text.len())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.text, self.offset)
    }
}
