//! Highlight command implementation.
//!
//! Writes a source file back out with ANSI styles around its tokens.

use std::io::{self, Write};
use std::path::PathBuf;

use solhl_lex::tokenize;
use tracing::debug;

use crate::commands::common::read_source;
use crate::error::Result;
use crate::theme::Theme;

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// File to highlight.
    pub file: PathBuf,
    /// Emit ANSI styles; when false the source is copied through.
    pub color: bool,
    /// Styles to apply.
    pub theme: Theme,
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    let file = read_source(&args.file)?;
    let rendered = render_highlighted(file.content(), &args.theme, args.color);
    debug!(file = file.name(), bytes = rendered.len(), "highlighted");

    let mut out = io::stdout().lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Renders `source` with the styles of `theme`.
pub fn render_highlighted(source: &str, theme: &Theme, color: bool) -> String {
    if !color {
        return source.to_string();
    }
    let mut out = String::with_capacity(source.len() * 2);
    for token in tokenize(source) {
        theme.paint(token.kind, token.text, &mut out);
    }
    out
}
