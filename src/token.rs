use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen,
    LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus,
    Semicolon, Slash, Star,

    // One or two character tokens.
    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    // Literals.
    Identifier, String_, Number,

    // Keywords.
    And, Class, Else, False, Fun,
    For, If, Nil, Or, Print, Return,
    Super, This, True, Var, While,

    Eof,
}

/// `Literal` represents the decoded value of a `String_` or `Number` token.
/// `Null` marks the kinds that carry no value, so an absent payload can never
/// be mistaken for a string that happens to be empty.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    String_(String),
    Null,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub type_: TokenType,  // Type of token.
    pub lexeme: String,  // The 'original' from the source code.
    pub literal: Literal,  // The literal value (number/string/null if N/A) the token represents.
    pub line: usize,  // The line number the token was completed on.
}

impl fmt::Display for Token {
    /// Debug form: type, lexeme and literal separated by single spaces, the
    /// literal part empty when there is none. Not part of any wire contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Literal::Number(n) => write!(f, "{:?} {} {}", self.type_, self.lexeme, n),
            Literal::String_(s) => write!(f, "{:?} {} {}", self.type_, self.lexeme, s),
            Literal::Null => write!(f, "{:?} {} ", self.type_, self.lexeme),
        }
    }
}
