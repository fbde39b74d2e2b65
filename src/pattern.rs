use std::collections::HashSet;
use std::fmt;

use crate::consts::PATTERN_SYMBOLS;
use crate::locale::LocaleTokenSet;
use crate::token::Token;

pub(crate) fn is_pattern_symbol(ch: char) -> bool {
    PATTERN_SYMBOLS.contains(ch)
}

/// The ordered token list compiled from one pattern string.
///
/// Tokens preserve the exact substrings they were compiled from, in
/// order, so concatenating every token's text reconstructs the pattern
/// losslessly. Both rendering and parsing replay the tokens in this
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    tokens: Vec<Token>,
}

impl CompiledPattern {
    /// Compiles a pattern by grouping consecutive identical field symbols
    /// into one token each and collapsing every span of non-symbol
    /// characters into a single literal token.
    pub fn compile(pattern: &str, token_set: &LocaleTokenSet) -> Self {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            let mut run = String::new();
            run.push(ch);
            if is_pattern_symbol(ch) {
                while chars.peek() == Some(&ch) {
                    run.push(ch);
                    chars.next();
                }
                tokens.push(token_set.token(&run));
            } else {
                while let Some(&next) = chars.peek() {
                    if is_pattern_symbol(next) {
                        break;
                    }
                    run.push(next);
                    chars.next();
                }
                tokens.push(Token::literal(run));
            }
        }
        Self { tokens }
    }

    /// The compiled tokens, in pattern order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the pattern
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The delimiter alphabet used to segment parser input: the first
    /// character of every literal token's text.
    ///
    /// Only single-character delimiters are supported; a longer literal
    /// run still contributes just its first character, so inputs
    /// containing the rest of the run segment on that character alone.
    pub fn literal_delimiters(&self) -> HashSet<char> {
        self.tokens
            .iter()
            .filter(|token| token.is_literal())
            .filter_map(|token| token.text().chars().next())
            .collect()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}
