use crate::error::ErrorReporter;
use crate::token::{Literal, Token, TokenType};

pub struct Scanner<'a> {
    source: &'a str,  // Source code.
    bytes: &'a [u8],  // Byte view of the source; the cursor works in bytes.
    reporter: &'a mut dyn ErrorReporter,  // Where lexical faults go.
    tokens: Vec<Token>,  // Tokens that have been scanned from source code.
    start: usize,  // Points to the start of the current lexeme.
    current: usize,  // Points to the *next* byte to be scanned.
    line: usize,  // Keeps track of the current line number.
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a mut dyn ErrorReporter) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Interface function.
    /// Scans the whole source and returns every token, terminated by `Eof`.
    /// Never fails: lexical faults go through the reporter and scanning
    /// resumes at the next byte.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            // Keep scanning until we reach the end of the file.
            self.start = self.current;  // Update the start of the current lexeme.
            self.scan_token();
        }

        self.tokens.push(Token {
            type_: TokenType::Eof,
            lexeme: String::from(""),
            literal: Literal::Null,
            line: self.line,
        });

        self.tokens
    }

    /// Attempts to build a token from the current byte(s) in the source code.
    /// Each call emits zero or one token.
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Single-character tokens.
            b'(' => self.add_token(TokenType::LeftParen),
            b')' => self.add_token(TokenType::RightParen),
            b'{' => self.add_token(TokenType::LeftBrace),
            b'}' => self.add_token(TokenType::RightBrace),
            b',' => self.add_token(TokenType::Comma),
            b'.' => self.add_token(TokenType::Dot),
            b'-' => self.add_token(TokenType::Minus),
            b'+' => self.add_token(TokenType::Plus),
            b';' => self.add_token(TokenType::Semicolon),
            b'*' => self.add_token(TokenType::Star),

            // One or two character tokens. The next byte has to be taken into
            // consideration through `match_next()`.
            b'!' => {
                if self.match_next(b'=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            },
            b'=' => {
                if self.match_next(b'=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            },
            b'>' => {
                if self.match_next(b'=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            },
            b'<' => {
                if self.match_next(b'=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            },

            b'/' => {
                if self.match_next(b'/') {
                    // A comment runs until the end of the line. The newline
                    // itself is left for the main loop to count.
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash);
                }
            },

            // Literals.
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),

            // Identifiers or keywords.
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(),

            // Ignore these hidden characters. `\r` makes `\r\n` line endings
            // work without counting an extra line.
            b' ' | b'\r' | b'\t' => (),

            // Increment line number.
            b'\n' => self.line += 1,

            _ => {
                // The byte does not start any lexeme. Report, discard it and
                // carry on with the next byte. A multibyte code point lands
                // here once per byte.
                self.reporter.report(self.line, "Unexpected character.");
            },
        };
    }

    /// Processes string literals.
    fn string(&mut self) {
        while self.peek() != b'"' && !self.is_at_end() {
            // Newlines are allowed inside a string; they still count as lines.
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            // We have reached the end and there was no closing `"`.
            self.reporter.report(self.line, "Unterminated string.");
            return;
        }

        // Consume the closing `"`.
        self.advance();

        // The literal is the substring strictly between the quotes. No escape
        // sequences are recognised; the bytes are stored as-is.
        let literal = Literal::String_(self.source[self.start + 1..self.current - 1].to_owned());
        self.add_token_with_literal(TokenType::String_, literal);
    }

    /// Processes number literals.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            // Consume the `.` as part of the number only if a digit follows.
            // A trailing `.` is left alone and later surfaces as `Dot`.
            self.advance();

            while self.peek().is_ascii_digit() {
                // Consume fractional part.
                self.advance();
            }
        }

        // Cannot fail: the lexeme is digits with at most one interior dot.
        let value = self.source[self.start..self.current].parse().unwrap();
        self.add_token_with_literal(TokenType::Number, Literal::Number(value));
    }

    /// Processes identifiers and keywords.
    fn word(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == b'_' {
            // Allow ASCII alphanumeric characters and `_` in identifiers.
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];

        // Check if the lexeme is a keyword. If so, process as keyword.
        // Otherwise, process as identifier.
        let type_ = match lexeme {
            "and" => TokenType::And,
            "class" => TokenType::Class,
            "else" => TokenType::Else,
            "false" => TokenType::False,
            "for" => TokenType::For,
            "fun" => TokenType::Fun,
            "if" => TokenType::If,
            "nil" => TokenType::Nil,
            "or" => TokenType::Or,
            "print" => TokenType::Print,
            "return" => TokenType::Return,
            "super" => TokenType::Super,
            "this" => TokenType::This,
            "true" => TokenType::True,
            "var" => TokenType::Var,
            "while" => TokenType::While,
            _ => TokenType::Identifier,
        };

        self.add_token(type_);
    }

    /// Consumes and returns the byte pointed to by `current`. Callers ensure
    /// the cursor is in range.
    fn advance(&mut self) -> u8 {
        let c = self.bytes[self.current];
        self.current += 1;
        c
    }

    /// Checks if the byte pointed to by `current` is `expected`. If so,
    /// consumes it and returns true. Nothing is consumed otherwise.
    fn match_next(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.bytes[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    /// Returns the byte at `current`, or `0` at the end of input.
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.bytes[self.current]
        }
    }

    /// Returns the byte after `current`, or `0` if there is none.
    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.bytes.len() {
            0
        } else {
            self.bytes[self.current + 1]
        }
    }

    /// Helper function for better readability. Returns whether `current` is
    /// out of range (we have reached the end).
    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Adds a token that does not represent a literal value.
    fn add_token(&mut self, token_type: TokenType) {
        self.add_token_with_literal(token_type, Literal::Null);
    }

    /// Adds an entire token. The lexeme is the span from `start` up to but
    /// not including `current`; the line is the one the token ended on.
    fn add_token_with_literal(&mut self, token_type: TokenType, literal: Literal) {
        self.tokens.push(Token {
            type_: token_type,
            lexeme: String::from(&self.source[self.start..self.current]),
            literal,
            line: self.line,
        });
    }
}
