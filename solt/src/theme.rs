//! Terminal styles for token kinds.
//!
//! Theme entries map a qualified kind name (`Keyword.Type`) or one of its
//! prefixes (`Literal`) to a style written as space-separated words, such as
//! `"bold blue"` or `"bright-magenta"`, or as raw SGR parameters like
//! `"38;5;208"`. A kind without an entry of its own takes the style of its
//! nearest listed prefix.

use indexmap::IndexMap;
use solhl_lex::TokenKind;
use solhl_util::FxHashMap;

use crate::error::{Result, SoltError};

/// Resolved styles, one SGR parameter string per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    styles: FxHashMap<TokenKind, String>,
}

impl Theme {
    /// Builds a theme from configuration entries.
    pub fn from_entries(entries: &IndexMap<String, String>) -> Result<Self> {
        let mut parsed = FxHashMap::default();
        for (name, style) in entries {
            if !is_known_name(name) {
                return Err(SoltError::Theme(format!("unknown token kind `{name}`")));
            }
            parsed.insert(name.as_str(), parse_style(style).map_err(|word| {
                SoltError::Theme(format!("unknown style `{word}` for `{name}`"))
            })?);
        }

        let mut styles = FxHashMap::default();
        for kind in TokenKind::ALL {
            if let Some(sgr) = lookup(&parsed, kind.qualname()) {
                styles.insert(kind, sgr.clone());
            }
        }
        Ok(Self { styles })
    }

    /// SGR parameters for `kind`, if it is styled.
    pub fn style(&self, kind: TokenKind) -> Option<&str> {
        self.styles.get(&kind).map(String::as_str).filter(|sgr| !sgr.is_empty())
    }

    /// Writes `text` wrapped in the style for `kind`.
    ///
    /// Every line is wrapped on its own so that a style never spans a line
    /// break.
    pub fn paint(&self, kind: TokenKind, text: &str, out: &mut String) {
        let Some(sgr) = self.style(kind) else {
            out.push_str(text);
            return;
        };
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                out.push_str("\x1b[");
                out.push_str(sgr);
                out.push('m');
                out.push_str(line);
                out.push_str("\x1b[0m");
            }
        }
    }
}

/// Walks from `qualname` up through its prefixes.
fn lookup<'a>(parsed: &'a FxHashMap<&str, String>, qualname: &str) -> Option<&'a String> {
    let mut name = qualname;
    loop {
        if let Some(sgr) = parsed.get(name) {
            return Some(sgr);
        }
        name = &name[..name.rfind('.')?];
    }
}

/// Returns true for a kind name or a prefix of one.
fn is_known_name(name: &str) -> bool {
    TokenKind::ALL.iter().any(|kind| {
        let qualname = kind.qualname();
        qualname == name || (qualname.starts_with(name) && qualname[name.len()..].starts_with('.'))
    })
}

/// Parses a style into SGR parameters; on failure returns the offending word.
fn parse_style(style: &str) -> std::result::Result<String, String> {
    let mut codes = Vec::new();
    for word in style.split_whitespace() {
        if !word.is_empty() && word.split(';').all(|n| n.parse::<u8>().is_ok()) {
            codes.push(word.to_string());
            continue;
        }
        let code = match word {
            "bold" => 1,
            "dim" => 2,
            "italic" => 3,
            "underline" => 4,
            "reverse" => 7,
            _ => {
                let (bright, color) = match word.strip_prefix("bright-") {
                    Some(color) => (true, color),
                    None => (false, word),
                };
                let base = color_index(color).ok_or_else(|| word.to_string())?;
                if bright {
                    90 + base
                } else {
                    30 + base
                }
            },
        };
        codes.push(code.to_string());
    }
    Ok(codes.join(";"))
}

fn color_index(color: &str) -> Option<u8> {
    let index = match color {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    };
    Some(index)
}
