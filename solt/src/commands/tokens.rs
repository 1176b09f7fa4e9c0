//! Tokens command implementation.
//!
//! Prints one line per token: `line:column`, the qualified kind name, and
//! the lexeme as an escaped, quoted string.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use solhl_lex::{tokenize, Lexer, Token};
use solhl_util::SourceFile;
use tracing::debug;

use crate::commands::common::{for_each_file, read_source};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Files to tokenize.
    pub files: Vec<PathBuf>,
    /// Merge adjacent tokens of the same kind.
    pub coalesce: bool,
    /// Number of files lexed at once.
    pub jobs: u32,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let listings = for_each_file(&args.files, args.jobs, |path| {
        let file = read_source(path)?;
        render_listing(&file, args.coalesce)
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let multiple = args.files.len() > 1;
    for (path, listing) in args.files.iter().zip(&listings) {
        if multiple {
            writeln!(out, "==> {} <==", path.display())?;
        }
        out.write_all(listing.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the token listing of one file.
pub fn render_listing(file: &SourceFile, coalesce: bool) -> Result<String> {
    let content = file.content();
    let tokens: Box<dyn Iterator<Item = Token<'_>> + '_> = if coalesce {
        Box::new(tokenize(content))
    } else {
        Box::new(Lexer::new(content))
    };

    let mut listing = String::new();
    let mut count = 0usize;
    for token in tokens {
        listing.push_str(&format_token(file, &token)?);
        listing.push('\n');
        count += 1;
    }
    debug!(file = file.name(), tokens = count, coalesce, "lexed");
    Ok(listing)
}

/// Formats one listing line.
pub fn format_token(file: &SourceFile, token: &Token<'_>) -> Result<String> {
    let (line, column) = file.offset_to_line_col(token.offset)?;
    Ok(format!(
        "{}:{}\t{}\t{:?}",
        line,
        column,
        token.kind.qualname(),
        token.text
    ))
}
