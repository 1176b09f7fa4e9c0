//! Language metadata and content sniffing.
//!
//! A highlighter host picks a lexer by file name, MIME type, or by looking
//! at the text itself. [`SOLIDITY`] carries the lookup keys and
//! [`analyze_text`] does the sniffing.

use std::path::Path;

/// Identification of a language a lexer handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Short machine name
    pub tag: &'static str,
    /// Human-readable name
    pub title: &'static str,
    /// One-line description
    pub desc: &'static str,
    /// Alternative names accepted for `tag`
    pub aliases: &'static [&'static str],
    /// File name globs
    pub filenames: &'static [&'static str],
    /// MIME types
    pub mimetypes: &'static [&'static str],
}

/// The Solidity language.
pub const SOLIDITY: LanguageInfo = LanguageInfo {
    tag: "solidity",
    title: "Solidity",
    desc: "Solidity, an Ethereum smart contract programming language",
    aliases: &[],
    filenames: &["*.sol", "*.solidity"],
    mimetypes: &["text/solidity"],
};

impl LanguageInfo {
    /// Returns true if the file name of `path` matches one of the globs.
    ///
    /// # Example
    ///
    /// ```
    /// use solhl_lex::SOLIDITY;
    ///
    /// assert!(SOLIDITY.matches_filename("contracts/Token.sol"));
    /// assert!(!SOLIDITY.matches_filename("Token.sol.bak"));
    /// ```
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames.iter().any(|glob| glob_match(glob, name))
    }

    /// Returns true if `mime` is one of the language's MIME types.
    pub fn matches_mimetype(&self, mime: &str) -> bool {
        self.mimetypes.iter().any(|m| m.eq_ignore_ascii_case(mime.trim()))
    }

    /// Returns true if `name` is the tag or an alias.
    pub fn matches_name(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Matches `name` against a glob with `*` (any run) and `?` (any one
/// character) wildcards.
pub fn glob_match(glob: &str, name: &str) -> bool {
    let glob: Vec<char> = glob.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let (mut g, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match glob.get(g) {
            Some('*') => {
                star = Some((g, n));
                g += 1;
            },
            Some(&c) if c == '?' || c == name[n] => {
                g += 1;
                n += 1;
            },
            _ => match star {
                Some((sg, sn)) => {
                    g = sg + 1;
                    n = sn + 1;
                    star = Some((sg, sn + 1));
                },
                None => return false,
            },
        }
    }
    glob[g..].iter().all(|&c| c == '*')
}

/// Confidence that `sample` is Solidity.
///
/// Returns `Some(1.0)` when the text, after an optional byte order mark and
/// leading whitespace, opens with `pragma solidity`, or when its first line
/// is a `#!` line mentioning `pragma solidity`. Otherwise `None`.
///
/// # Example
///
/// ```
/// use solhl_lex::analyze_text;
///
/// assert_eq!(analyze_text("pragma solidity ^0.8.0;"), Some(1.0));
/// assert_eq!(analyze_text("contract A {}"), None);
/// ```
pub fn analyze_text(sample: &str) -> Option<f32> {
    const MARKER: &str = "pragma solidity";

    let text = sample.strip_prefix('\u{feff}').unwrap_or(sample);
    let trimmed = text.trim_start();
    if trimmed.starts_with(MARKER) {
        return Some(1.0);
    }
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.starts_with("#!") && first_line.contains(MARKER) {
        return Some(1.0);
    }
    None
}
