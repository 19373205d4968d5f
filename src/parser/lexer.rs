//! Lexer for normalized declaration bodies
//!
//! Converts the output of [`normalize`](super::normalize::normalize) into a
//! flat [`Token`] stream consumed by the signature parser. Pointer markers
//! are already glued to their type by normalization, so a word may end in
//! one or more `*` characters (`lua_State*`, `char**`).

use crate::transcoder::errors::TranscodeError;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the 1-based column in the normalized body where
/// it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Type keyword, identifier, or pointer-qualified type
    Word(String, usize),
    LParen(usize), // (
    RParen(usize), // )
    Comma(usize),  // ,
    Eof(usize),
}

impl Token {
    /// Returns the column where this token appears.
    pub fn column(&self) -> usize {
        match self {
            Token::Word(_, col)
            | Token::LParen(col)
            | Token::RParen(col)
            | Token::Comma(col)
            | Token::Eof(col) => *col,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s, _) => write!(f, "'{}'", s),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of declaration"),
        }
    }
}

/// Lexer for a normalized declaration body
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, TranscodeError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.column()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, TranscodeError> {
        let col = self.column();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::Eof(col)),
        };

        match ch {
            '(' => Ok(Token::LParen(col)),
            ')' => Ok(Token::RParen(col)),
            ',' => Ok(Token::Comma(col)),
            c if is_word_char(c) => Ok(self.word(c, col)),
            _ => Err(TranscodeError::UnexpectedCharacter { ch, column: col }),
        }
    }

    /// Identifier characters followed by any trailing pointer markers
    fn word(&mut self, first_char: char, col: usize) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if is_word_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        while self.peek() == Some('*') {
            word.push('*');
            self.advance();
        }

        Token::Word(word, col)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn column(&self) -> usize {
        self.position + 1
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("void lua_pop (lua_State* L, int n");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Word(ref s, 1) if s == "void"));
        assert!(matches!(tokens[1], Token::Word(ref s, _) if s == "lua_pop"));
        assert!(matches!(tokens[2], Token::LParen(14)));
        assert!(matches!(tokens[3], Token::Word(ref s, _) if s == "lua_State*"));
        assert!(matches!(tokens[4], Token::Word(ref s, _) if s == "L"));
        assert!(matches!(tokens[5], Token::Comma(_)));
        assert!(matches!(tokens[6], Token::Word(ref s, _) if s == "int"));
        assert!(matches!(tokens[7], Token::Word(ref s, _) if s == "n"));
        assert!(matches!(tokens[8], Token::Eof(_)));
    }

    #[test]
    fn test_multi_level_pointer() {
        let mut lexer = Lexer::new("char** p");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Word(ref s, _) if s == "char**"));
        assert!(matches!(tokens[1], Token::Word(ref s, _) if s == "p"));
    }

    #[test]
    fn test_parenthesized_name() {
        let mut lexer = Lexer::new("int (lua_gettop) (lua_State* L");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[1], Token::LParen(_)));
        assert!(matches!(tokens[2], Token::Word(ref s, _) if s == "lua_gettop"));
        assert!(matches!(tokens[3], Token::RParen(_)));
        assert!(matches!(tokens[4], Token::LParen(_)));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("cchar* lua_pushfstring (lua_State* L, cchar* fmt, ...");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(
            err,
            TranscodeError::UnexpectedCharacter {
                ch: '.',
                column: 51
            }
        );
    }
}
