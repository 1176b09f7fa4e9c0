//! Word classification.
//!
//! Identifiers matched by the lexer are looked up in five disjoint sets. The
//! first set containing the word decides its kind, in the order keywords,
//! types, constants, reserved words, builtins; anything else is a plain
//! [`TokenKind::Name`].
//!
//! The sized elementary types (`uint8` .. `uint256`, `bytes1` .. `bytes32`,
//! `fixed128x18` and friends) are generated rather than listed.

use std::sync::LazyLock;

use solhl_util::FxHashSet;

use crate::token::TokenKind;

/// Language keywords.
pub const KEYWORDS: &[&str] = &[
    "anonymous", "as", "assembly", "break", "constant", "continue", "contract", "delete", "do",
    "else", "enum", "event", "external", "for", "function", "hex", "if", "import", "indexed",
    "interface", "internal", "is", "library", "mapping", "memory", "modifier", "new", "payable",
    "pragma", "private", "public", "return", "returns", "storage", "struct", "throw", "using",
    "var", "while",
];

/// Unsized elementary type names.
pub const BASE_TYPES: &[&str] = &[
    "address", "bool", "byte", "bytes", "int", "string", "uint", "fixed", "ufixed",
];

/// Ether denominations and time units.
pub const CONSTANTS: &[&str] = &[
    "wei", "finney", "szabo", "ether", "seconds", "minutes", "hours", "days", "weeks", "years",
];

/// Words reserved for future use.
pub const RESERVED: &[&str] = &[
    "abstract", "after", "case", "catch", "default", "final", "in", "inline", "let", "match",
    "null", "of", "pure", "relocatable", "static", "switch", "try", "type", "typeof", "view",
];

/// Builtin names. Solidity currently defines none that are highlighted
/// this way; `true`, `false` and `NULL` have a rule of their own.
pub const BUILTINS: &[&str] = &[];

/// The complete set of elementary type names, including sized variants.
pub fn type_names() -> Vec<String> {
    let mut names: Vec<String> = BASE_TYPES.iter().map(|s| s.to_string()).collect();
    for bits in (8..=256).step_by(8) {
        names.push(format!("int{bits}"));
        names.push(format!("uint{bits}"));
    }
    for len in 1..=32 {
        names.push(format!("bytes{len}"));
    }
    for bits in (8..=256).step_by(8) {
        for decimals in 0..=80 {
            names.push(format!("fixed{bits}x{decimals}"));
            names.push(format!("ufixed{bits}x{decimals}"));
        }
    }
    names
}

/// Lookup tables for [`classify`].
pub struct WordSets {
    keywords: FxHashSet<&'static str>,
    types: FxHashSet<Box<str>>,
    constants: FxHashSet<&'static str>,
    reserved: FxHashSet<&'static str>,
    builtins: FxHashSet<&'static str>,
}

impl WordSets {
    fn new() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            types: type_names().into_iter().map(String::into_boxed_str).collect(),
            constants: CONSTANTS.iter().copied().collect(),
            reserved: RESERVED.iter().copied().collect(),
            builtins: BUILTINS.iter().copied().collect(),
        }
    }

    /// Kind of `word`, by set priority.
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if self.types.contains(word) {
            TokenKind::KeywordType
        } else if self.constants.contains(word) {
            TokenKind::KeywordConstant
        } else if self.reserved.contains(word) {
            TokenKind::KeywordReserved
        } else if self.builtins.contains(word) {
            TokenKind::NameBuiltin
        } else {
            TokenKind::Name
        }
    }
}

/// Shared word tables, built on first use.
pub static WORDS: LazyLock<WordSets> = LazyLock::new(WordSets::new);

/// Classifies an identifier.
///
/// # Example
///
/// ```
/// use solhl_lex::{keywords, TokenKind};
///
/// assert_eq!(keywords::classify("mapping"), TokenKind::Keyword);
/// assert_eq!(keywords::classify("bytes32"), TokenKind::KeywordType);
/// assert_eq!(keywords::classify("ether"), TokenKind::KeywordConstant);
/// assert_eq!(keywords::classify("typeof"), TokenKind::KeywordReserved);
/// assert_eq!(keywords::classify("owner"), TokenKind::Name);
/// ```
#[inline]
pub fn classify(word: &str) -> TokenKind {
    WORDS.classify(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_are_disjoint() {
        let types = type_names();
        let groups: [Vec<&str>; 5] = [
            KEYWORDS.to_vec(),
            types.iter().map(String::as_str).collect(),
            CONSTANTS.to_vec(),
            RESERVED.to_vec(),
            BUILTINS.to_vec(),
        ];
        for (i, a) in groups.iter().enumerate() {
            for b in &groups[i + 1..] {
                for word in a {
                    assert!(!b.contains(word), "{word} appears in two sets");
                }
            }
        }
    }

    #[test]
    fn test_type_count() {
        // 9 base names, 64 sized integers, 32 byte arrays, 2 * 32 * 81 fixed-point
        assert_eq!(WORDS.types.len(), 9 + 64 + 32 + 2 * 32 * 81);
    }

    #[test]
    fn test_sized_types() {
        for word in ["int8", "uint256", "bytes1", "bytes32", "fixed8x0", "ufixed256x80"] {
            assert_eq!(classify(word), TokenKind::KeywordType, "{word}");
        }
        for word in ["int7", "uint264", "bytes0", "bytes33", "fixed8x81", "ufixed7x1"] {
            assert_eq!(classify(word), TokenKind::Name, "{word}");
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("Contract"), TokenKind::Name);
        assert_eq!(classify("UINT"), TokenKind::Name);
    }

    #[test]
    fn test_true_is_not_a_keyword() {
        assert_eq!(classify("true"), TokenKind::Name);
    }
}
