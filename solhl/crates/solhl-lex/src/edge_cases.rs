//! Edge case tests for solhl-lex
