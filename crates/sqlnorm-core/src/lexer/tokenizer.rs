//! SQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};
use crate::dialect::{Dialect, GenericDialect};

/// A lexer that tokenizes SQL input.
///
/// Lexing never fails: anything that cannot be classified becomes a
/// [`TokenKind::Error`] token and is reported by the parser.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Controls which delimiters open strings and quoted identifiers.
    dialect: &'a dyn Dialect,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input using the generic dialect.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_dialect(input, &GenericDialect)
    }

    /// Creates a new lexer for the given input and dialect.
    #[must_use]
    pub fn with_dialect(input: &'a str, dialect: &'a dyn Dialect) -> Self {
        Self {
            input,
            dialect,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` positions ahead without advancing.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- comment
            if self.peek() == Some('-') && self.peek_nth(1) == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* comment */
            if self.peek() == Some('/') && self.peek_nth(1) == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans a bare identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a delimited identifier. A doubled delimiter stands for one
    /// literal delimiter character.
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        self.advance();
        let mut name = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                        name.push(quote);
                    } else {
                        break;
                    }
                }
                Some(c) => name.push(c),
                None => return self.error("Unterminated quoted identifier"),
            }
        }

        if name.is_empty() {
            return self.error("Empty quoted identifier");
        }
        self.make_token(TokenKind::QuotedIdentifier(name))
    }

    /// Returns true if the input at the current position starts an
    /// exponent: `e`/`E`, an optional sign, then at least one digit.
    fn at_exponent(&self) -> bool {
        if !matches!(self.peek(), Some('e' | 'E')) {
            return false;
        }
        match self.peek_nth(1) {
            Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Scans an unsigned numeric literal.
    ///
    /// `1.` is an integer, `.5` is the decimal `0.5`, and an exponent
    /// makes the literal approximate.
    fn scan_number(&mut self) -> Token {
        let whole_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let whole = match &self.input[whole_start..self.pos] {
            "" => "0",
            digits => digits,
        };

        let mut fraction = "";
        if self.peek() == Some('.') {
            self.advance();
            let fraction_start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            fraction = &self.input[fraction_start..self.pos];
        }

        if self.at_exponent() {
            self.advance();
            let exponent_start = self.pos;
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            let exponent = String::from(&self.input[exponent_start..self.pos]);
            let mantissa = if fraction.is_empty() {
                String::from(whole)
            } else {
                format!("{whole}.{fraction}")
            };
            return self.make_token(TokenKind::Approximate { mantissa, exponent });
        }

        if fraction.is_empty() {
            self.make_token(TokenKind::Integer(String::from(whole)))
        } else {
            self.make_token(TokenKind::Decimal {
                whole: String::from(whole),
                fraction: String::from(fraction),
            })
        }
    }

    /// Scans a string literal.
    ///
    /// Two escape conventions are accepted: a doubled delimiter, and a
    /// backslash before the delimiter or a single quote. A backslash pair
    /// is kept verbatim so that it never escapes a following delimiter.
    /// A stored value never holds a lone backslash before `'`.
    fn scan_string(&mut self, quote: char) -> Token {
        self.advance();
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        break;
                    }
                }
                Some('\\') => match self.peek() {
                    Some(c) if c == quote || c == '\'' => {
                        self.advance();
                        value.push(c);
                    }
                    Some('\\') => {
                        self.advance();
                        value.push_str("\\\\");
                    }
                    _ => value.push('\\'),
                },
                Some(c) => value.push(c),
                None => return self.error("Unterminated string literal"),
            }
        }

        self.make_token(TokenKind::String(value))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        if self.dialect.is_identifier_quote(c) {
            return self.scan_quoted_identifier(c);
        }
        if self.dialect.is_string_quote(c) {
            return self.scan_string(c);
        }
        if c.is_ascii_digit() || (c == '.' && self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()))
        {
            return self.scan_number();
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_identifier();
        }

        self.advance();
        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' => self.make_token(TokenKind::Dot),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.error("Unexpected character: !")
                }
            }
            _ => self.error(format!("Unexpected character: {c}")),
        }
    }

    /// Tokenizes the entire input. The last token is always [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
