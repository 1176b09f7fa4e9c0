//! The Solidity rule table.
//!
//! Lexing starts in `root` with `bol` on top, so a label or preprocessor
//! line is recognized on the very first line. `root` itself never pops.
//!
//! Top-level text is either a function shape (definition or declaration,
//! see [`crate::lexer::signature`]) or a statement that runs to its `;`.
//! Function bodies nest through `function` pushing itself on `{`.

use std::sync::LazyLock;

use crate::error::TableResult;
use crate::lexer::signature::Terminator;
use crate::lexer::{comment, identifier, number, operator, string};
use crate::rules::{RuleTable, StateId, TableBuilder};
use crate::token::TokenKind;

/// Builds the Solidity rule table.
pub fn build() -> TableResult<RuleTable> {
    use StateId::*;
    use TokenKind::*;

    let mut b = TableBuilder::new([Root, Bol]);

    b.state(Bol).emit(identifier::label, NameLabel).mixin(ExprBol);

    b.state(ExprBol)
        .mixin(InlineWhitespace)
        .emit_push(comment::if0_open, Comment, If0)
        .emit_push(comment::hash, CommentPreproc, Macro)
        .pop_empty();

    b.mixin_only(InlineWhitespace)
        .emit(comment::inline_spaces, Text)
        .emit(comment::line_continuation, Text)
        .emit(comment::block_comment, CommentMultiline);

    b.mixin_only(Whitespace)
        .emit_push(comment::newlines, Text, Bol)
        .emit_push(comment::line_comment, CommentSingle, Bol)
        .mixin(InlineWhitespace);

    b.mixin_only(ExprWhitespace)
        .emit_push(comment::newlines, Text, ExprBol)
        .mixin(Whitespace);

    b.state(Root)
        .mixin(ExprWhitespace)
        .signature(Terminator::Brace, Function)
        .signature(Terminator::Semicolon, Statement)
        .push_empty(Statement);

    b.state(Statement)
        .emit_pop(operator::semicolon, Punctuation)
        .mixin(ExprWhitespace)
        .mixin(Statements)
        .emit(operator::brace, Punctuation)
        .catch_all();

    b.state(Function)
        .mixin(Whitespace)
        .mixin(Statements)
        .emit(operator::semicolon, Punctuation)
        .emit_push(operator::open_brace, Punctuation, Function)
        .emit_pop(operator::close_brace, Punctuation)
        .catch_all();

    b.mixin_only(Statements)
        .mixin(Whitespace)
        .emit_push(string::open_double, Str, StringDouble)
        .emit(string::char_literal, StrChar)
        .emit_push(string::open_single, Str, StringSingle)
        .emit(number::hex, NumHex)
        .emit(number::octal, NumOctal)
        .emit(number::decimal, NumInteger)
        .emit(operator::comment_close, Error)
        .emit(operator::operator, Operator)
        .emit(operator::punctuation, Punctuation)
        .emit_push(identifier::case_keyword, Keyword, Case)
        .emit(identifier::builtin_literal, NameBuiltin)
        .classify(identifier::identifier);

    b.state(Case)
        .emit_pop(operator::colon, Punctuation)
        .mixin(Statements)
        .catch_all();

    // a pop from here lands back on `bol`
    b.state(Macro)
        .emit_pop(comment::newline, CommentPreproc)
        .emit(comment::macro_text, CommentPreproc)
        .emit(comment::macro_escape, CommentPreproc)
        .mixin(InlineWhitespace)
        .emit(comment::slash, CommentPreproc)
        .catch_all();

    // `#if` without a word boundary so `#ifdef` and `#ifndef` nest too
    b.state(If0)
        .emit_push(comment::if0_nested, Comment, If0)
        .emit_pop(comment::if0_else, Comment)
        .emit_pop(comment::if0_endif, Comment)
        .rest_of_line(Comment);

    b.mixin_only(StringCommon)
        .emit(string::escape, StrEscape)
        .emit(string::text, Str)
        .emit(comment::line_continuation, Str)
        .emit(string::backslash, Str);

    b.state(StringDouble)
        .emit_pop(string::double_quote, Str)
        .mixin(StringCommon)
        .emit(string::single_quote, Str)
        .catch_all();

    b.state(StringSingle)
        .emit_pop(string::single_quote, Str)
        .mixin(StringCommon)
        .emit(string::double_quote, Str)
        .catch_all();

    b.build()
}

/// The process-wide Solidity table, built on first use.
pub static SOLIDITY_TABLE: LazyLock<TableResult<RuleTable>> = LazyLock::new(build);

/// Returns the shared Solidity table.
///
/// # Panics
///
/// Panics if the built-in table fails validation, which the test suite
/// rules out.
pub fn table() -> &'static RuleTable {
    match &*SOLIDITY_TABLE {
        Ok(table) => table,
        Err(err) => panic!("built-in Solidity rule table is invalid: {err}"),
    }
}
