#![no_main]

use libfuzzer_sys::fuzz_target;
use minus::{Token, TokenKind, parser, token_file};

fuzz_target!(|data: &[u8]| {
    // One token per byte; the kind is picked from the registry order
    let tokens: Vec<Token> = data
        .iter()
        .map(|byte| match TokenKind::ALL[usize::from(*byte) % TokenKind::ALL.len()] {
            TokenKind::Id => Token::id("v"),
            TokenKind::Number => Token::number(byte.to_string()),
            fixed => Token::symbol(fixed),
        })
        .collect();

    if let Ok(tree) = parser::parse(&tokens) {
        assert_eq!(tree.leaves().len(), tokens.len());
    }
    let _ = parser::parse_program(&tokens);

    // Also fuzz the token-file decoder on the raw bytes
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = token_file::parse_token_list(text);
    }
});
