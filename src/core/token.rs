//! Tokens: the symbols that occupy cells.
//!
//! A token is an opaque kind drawn from a fixed palette. The engine never
//! interprets the raw value; matching only compares kinds for equality.
//! Games (or the presentation layer) decide which gem/color each kind maps to.

use serde::{Deserialize, Serialize};

/// Token kind identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(pub u8);

impl Token {
    /// Create a new token kind.
    #[must_use]
    pub const fn new(kind: u8) -> Self {
        Self(kind)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// A palette of `count` consecutive kinds starting at 0.
    ///
    /// ```
    /// use rust_match3::core::Token;
    ///
    /// let palette = Token::palette(3);
    /// assert_eq!(palette, vec![Token::new(0), Token::new(1), Token::new(2)]);
    /// ```
    pub fn palette(count: u8) -> Vec<Token> {
        (0..count).map(Token).collect()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}
