//! Edge case tests for larkc-lex
