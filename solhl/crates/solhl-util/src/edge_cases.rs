//! Edge case tests for solhl-util
