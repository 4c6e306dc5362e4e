//! Lexer module.
//!
//! - `core` - the [`Lexer`] driver loop
//! - `identify` - ordered matcher dispatch
//! - `comment` - block and line comments
//! - `number` - float and integer literals
//! - `identifier` - names and reserved words
//! - `punctuation` - single-character punctuation
//! - `string` - string literals and escape decoding

mod comment;
mod core;
mod identifier;
mod identify;
mod number;
mod punctuation;
mod string;

pub use self::core::Lexer;
pub use comment::{match_block_comment, match_line_comment};
pub use identifier::match_identifier;
pub use identify::{identify, step, Matcher, Step, MATCHERS};
pub use number::{match_float, match_int};
pub use punctuation::match_punctuation;
pub use string::{match_string, parse_string_body};
