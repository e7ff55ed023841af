//! Lexer (scanner) for AcDc source code
//!
//! Produces one [`Lexeme`] at a time on demand. The parser drives it and may
//! hand a whole lexeme back with [`Lexer::unread`], which pushes its text onto
//! the input in reverse order so the next scan reproduces it exactly.
//! Keyword/identifier disambiguation and expression termination both rely on
//! that full-lexeme lookahead.

use super::ast::SourceLocation;
use crate::config::MAX_LEXEME_LEN;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Lexeme classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    // Keywords (single reserved letters)
    FloatDeclaration,   // f
    IntegerDeclaration, // i
    Print,              // p

    // Operators
    Assign, // =
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /

    // Values
    Identifier,
    IntLiteral,
    FloatLiteral,

    Eof,
}

/// Value of a numeric literal, converted once while scanning
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i32),
    Float(f32),
}

/// A classified run of source characters
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
    pub location: SourceLocation,
    /// Set for int and float literals only
    pub literal: Option<Literal>,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            literal: None,
        }
    }

    fn numeric(text: String, location: SourceLocation, literal: Literal) -> Self {
        let kind = match literal {
            Literal::Int(_) => LexemeKind::IntLiteral,
            Literal::Float(_) => LexemeKind::FloatLiteral,
        };
        Self {
            kind,
            text,
            location,
            literal: Some(literal),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == LexemeKind::Eof
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexemeKind::Eof => write!(f, "end of file"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexer error type. Every variant is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Invalid character '{ch}' at {location}")]
    InvalidCharacter { ch: char, location: SourceLocation },

    #[error("Expect a digit after '.', found {found} at {location}")]
    MalformedFloat {
        found: String,
        location: SourceLocation,
    },

    #[error("Lexeme longer than {limit} characters at {location}")]
    TooLong {
        limit: usize,
        location: SourceLocation,
    },

    #[error("Integer literal {text} out of range at {location}")]
    IntegerOutOfRange {
        text: String,
        location: SourceLocation,
    },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::InvalidCharacter { location, .. }
            | LexError::MalformedFloat { location, .. }
            | LexError::TooLong { location, .. }
            | LexError::IntegerOutOfRange { location, .. } => *location,
        }
    }
}

/// On-demand lexer over any character stream
pub struct Lexer<I: Iterator<Item = char>> {
    input: Peekable<I>,
    /// Characters handed back by [`Lexer::unread`]; the top of the stack is read next
    pushback: Vec<(char, SourceLocation)>,
    /// Location of the next character still in `input`
    location: SourceLocation,
}

impl<'a> Lexer<Chars<'a>> {
    /// Create a new lexer for the given source string.
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn from_chars(chars: I) -> Self {
        Self {
            input: chars.peekable(),
            pushback: Vec::new(),
            location: SourceLocation::new(1, 1),
        }
    }

    /// Scan the next lexeme
    pub fn next_lexeme(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(Lexeme::new(LexemeKind::Eof, "", loc));
        };

        match ch {
            '0'..='9' => self.number_literal(ch, loc),
            'a'..='z' => self.identifier_or_keyword(ch, loc),
            '=' => Ok(Lexeme::new(LexemeKind::Assign, "=", loc)),
            '+' => Ok(Lexeme::new(LexemeKind::Plus, "+", loc)),
            '-' => Ok(Lexeme::new(LexemeKind::Minus, "-", loc)),
            '*' => Ok(Lexeme::new(LexemeKind::Star, "*", loc)),
            '/' => Ok(Lexeme::new(LexemeKind::Slash, "/", loc)),
            _ => Err(LexError::InvalidCharacter { ch, location: loc }),
        }
    }

    /// Return a whole lexeme to the input.
    ///
    /// Characters go back last-first, each with its original location, so
    /// the next [`Lexer::next_lexeme`] yields an identical lexeme.
    pub fn unread(&mut self, lexeme: &Lexeme) {
        let start = lexeme.location;
        let chars: Vec<char> = lexeme.text.chars().collect();
        for (offset, &ch) in chars.iter().enumerate().rev() {
            self.pushback
                .push((ch, SourceLocation::new(start.line, start.column + offset)));
        }
    }

    /// Scan the whole input, stopping after the first EOF lexeme
    pub fn tokenize(&mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();
        loop {
            let lexeme = self.next_lexeme()?;
            let done = lexeme.is_eof();
            lexemes.push(lexeme);
            if done {
                return Ok(lexemes);
            }
        }
    }

    /// Parse numeric literal: `[0-9]+` or `[0-9]+\.[0-9]+`
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Lexeme, LexError> {
        let mut text = String::new();
        text.push(first_digit);
        self.take_while_into(&mut text, |c| c.is_ascii_digit(), loc)?;

        if self.peek() != Some('.') {
            return match text.parse::<i32>() {
                Ok(value) => Ok(Lexeme::numeric(text, loc, Literal::Int(value))),
                Err(_) => Err(LexError::IntegerOutOfRange { text, location: loc }),
            };
        }

        self.advance();
        text.push('.');

        match self.peek() {
            Some(c) if c.is_ascii_digit() => {}
            other => {
                return Err(LexError::MalformedFloat {
                    found: other.map_or_else(|| "end of file".to_string(), |c| format!("'{c}'")),
                    location: self.current_location(),
                });
            }
        }

        self.take_while_into(&mut text, |c| c.is_ascii_digit(), loc)?;
        match text.parse::<f32>() {
            Ok(value) => Ok(Lexeme::numeric(text, loc, Literal::Float(value))),
            Err(_) => Err(LexError::MalformedFloat {
                found: text,
                location: loc,
            }),
        }
    }

    /// Parse a lowercase run, reclassifying the reserved single letters
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Result<Lexeme, LexError> {
        let mut text = String::new();
        text.push(first_char);
        self.take_while_into(&mut text, |c| c.is_ascii_lowercase(), loc)?;

        let kind = match text.as_str() {
            "f" => LexemeKind::FloatDeclaration,
            "i" => LexemeKind::IntegerDeclaration,
            "p" => LexemeKind::Print,
            _ => LexemeKind::Identifier,
        };

        Ok(Lexeme::new(kind, text, loc))
    }

    fn take_while_into(
        &mut self,
        text: &mut String,
        accept: impl Fn(char) -> bool,
        start: SourceLocation,
    ) -> Result<(), LexError> {
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            if text.len() >= MAX_LEXEME_LEN {
                return Err(LexError::TooLong {
                    limit: MAX_LEXEME_LEN,
                    location: start,
                });
            }
            text.push(ch);
            self.advance();
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_c_space) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&mut self) -> Option<char> {
        match self.pushback.last() {
            Some(&(ch, _)) => Some(ch),
            None => self.input.peek().copied(),
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if let Some((ch, _)) = self.pushback.pop() {
            return Some(ch);
        }

        let ch = self.input.next()?;
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(ch)
    }

    /// Location of the next character to be read
    fn current_location(&self) -> SourceLocation {
        match self.pushback.last() {
            Some(&(_, loc)) => loc,
            None => self.location,
        }
    }
}

/// The six ASCII characters C's `isspace` accepts
fn is_c_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<LexemeKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|l| l.kind)
            .collect()
    }

    #[test]
    fn test_simple_program() {
        let lexemes = Lexer::new("i a\na = 1 + 2.5").tokenize().unwrap();

        assert_eq!(lexemes[0].kind, LexemeKind::IntegerDeclaration);
        assert!(matches!(&lexemes[1], l if l.kind == LexemeKind::Identifier && l.text == "a"));
        assert_eq!(lexemes[2].kind, LexemeKind::Identifier);
        assert_eq!(lexemes[3].kind, LexemeKind::Assign);
        assert!(matches!(&lexemes[4], l if l.kind == LexemeKind::IntLiteral && l.text == "1"));
        assert_eq!(lexemes[5].kind, LexemeKind::Plus);
        assert!(matches!(&lexemes[6], l if l.kind == LexemeKind::FloatLiteral && l.text == "2.5"));
        assert_eq!(lexemes[7].kind, LexemeKind::Eof);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("= + - * /"),
            vec![
                LexemeKind::Assign,
                LexemeKind::Plus,
                LexemeKind::Minus,
                LexemeKind::Star,
                LexemeKind::Slash,
                LexemeKind::Eof,
            ]
        );
    }

    #[test]
    fn test_reserved_letters_only_when_alone() {
        assert_eq!(
            kinds("f i p fi pi ip x"),
            vec![
                LexemeKind::FloatDeclaration,
                LexemeKind::IntegerDeclaration,
                LexemeKind::Print,
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::Eof,
            ]
        );
    }

    #[test]
    fn test_adjacent_lexemes_without_spaces() {
        let lexemes = Lexer::new("ab=12*cd").tokenize().unwrap();
        let texts: Vec<&str> = lexemes.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "=", "12", "*", "cd", ""]);
    }

    #[test]
    fn test_malformed_float() {
        let err = Lexer::new("3.x").tokenize().unwrap_err();
        match err {
            LexError::MalformedFloat { found, .. } => assert_eq!(found, "'x'"),
            other => panic!("Expected malformed float, got {other:?}"),
        }

        let err = Lexer::new("3.").tokenize().unwrap_err();
        assert!(matches!(
            err,
            LexError::MalformedFloat { ref found, .. } if found == "end of file"
        ));
    }

    #[test]
    fn test_invalid_character() {
        let err = Lexer::new("i a\nA").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacter {
                ch: 'A',
                location: SourceLocation::new(2, 1),
            }
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = Lexer::new("99999999999").tokenize().unwrap_err();
        assert!(matches!(err, LexError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn test_too_long_lexeme() {
        let source = "a".repeat(MAX_LEXEME_LEN + 1);
        let err = Lexer::new(&source).tokenize().unwrap_err();
        assert!(matches!(err, LexError::TooLong { limit: MAX_LEXEME_LEN, .. }));
    }

    #[test]
    fn test_unread_reproduces_lexeme() {
        let mut lexer = Lexer::new("  abc = 4.25");
        let first = lexer.next_lexeme().unwrap();
        assert_eq!(first.location, SourceLocation::new(1, 3));

        lexer.unread(&first);
        let again = lexer.next_lexeme().unwrap();
        assert_eq!(again, first);

        let assign = lexer.next_lexeme().unwrap();
        assert_eq!(assign.kind, LexemeKind::Assign);
        assert_eq!(assign.location, SourceLocation::new(1, 7));
    }

    #[test]
    fn test_unread_multichar_lexemes_in_order() {
        let mut lexer = Lexer::new("abc 12.5 p");
        let name = lexer.next_lexeme().unwrap();
        let number = lexer.next_lexeme().unwrap();

        lexer.unread(&number);
        lexer.unread(&name);

        assert_eq!(lexer.next_lexeme().unwrap(), name);
        let again = lexer.next_lexeme().unwrap();
        assert_eq!(again, number);
        assert_eq!(again.literal, Some(Literal::Float(12.5)));
        assert_eq!(again.location, SourceLocation::new(1, 5));
        assert_eq!(lexer.next_lexeme().unwrap().kind, LexemeKind::Print);
    }

    #[test]
    fn test_literal_values() {
        let lexemes = Lexer::new("42 0.5 x").tokenize().unwrap();
        assert_eq!(lexemes[0].literal, Some(Literal::Int(42)));
        assert_eq!(lexemes[1].literal, Some(Literal::Float(0.5)));
        assert_eq!(lexemes[2].literal, None);
    }

    #[test]
    fn test_ascii_whitespace_only() {
        assert_eq!(
            kinds("i\ta\r\n\x0Bp\x0Ca"),
            vec![
                LexemeKind::IntegerDeclaration,
                LexemeKind::Identifier,
                LexemeKind::Print,
                LexemeKind::Identifier,
                LexemeKind::Eof,
            ]
        );

        let err = Lexer::new("i a\u{00a0}a = 1").tokenize().unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { ch: '\u{00a0}', .. }));
    }

    #[test]
    fn test_unread_eof_is_sticky() {
        let mut lexer = Lexer::new("   ");
        let eof = lexer.next_lexeme().unwrap();
        assert!(eof.is_eof());
        lexer.unread(&eof);
        assert!(lexer.next_lexeme().unwrap().is_eof());
        assert!(lexer.next_lexeme().unwrap().is_eof());
    }

    #[test]
    fn test_locations_across_lines() {
        let lexemes = Lexer::new("i a\n  p a").tokenize().unwrap();
        assert_eq!(lexemes[2].location, SourceLocation::new(2, 3));
        assert_eq!(lexemes[3].location, SourceLocation::new(2, 5));
    }
}
