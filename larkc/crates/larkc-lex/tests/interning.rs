//! Interner growth while scanning.
//!
//! Kept as the only test in this binary so no other test touches the
//! global string table while the counts are compared.

use larkc_lex::{scan, Token};
use larkc_util::Symbol;

#[test]
fn test_only_names_reach_the_interner() {
    let literals: String = (0..1000)
        .map(|i| format!("\"literal payload {}\" ", i))
        .collect();

    let before = Symbol::stats();
    let tokens = scan(&literals);
    let after_literals = Symbol::stats();

    assert_eq!(tokens.len(), 1000);
    assert!(matches!(&tokens[999], Token::String(text) if text == "literal payload 999"));
    assert_eq!(after_literals.count, before.count);

    let tokens = scan("first_interned_name second_interned_name first_interned_name");
    let after_names = Symbol::stats();

    assert_eq!(tokens.len(), 3);
    assert_eq!(after_names.count, after_literals.count + 2);
}
