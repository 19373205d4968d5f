//! Structural parser for normalized declarations
//!
//! Turns the token stream of one declaration body into a
//! [`ParsedSignature`].
//!
//! # Grammar
//!
//! ```text
//! signature ::= WORD name "(" handle ( "," argument )* EOF
//! name      ::= WORD | "(" WORD ")"
//! handle    ::= "lua_State*" [WORD]
//! argument  ::= WORD WORD
//! ```
//!
//! The closing `)` of the parameter list is removed during normalization,
//! so the stream ends right after the last argument.

use crate::constants::{HANDLE_IDENT, HANDLE_TYPE};
use crate::parser::ast::{Argument, ParsedSignature};
use crate::parser::lexer::{Lexer, Token};
use crate::transcoder::errors::TranscodeError;

/// Recursive descent parser over one declaration body
pub struct SignatureParser {
    tokens: Vec<Token>,
    position: usize,
}

impl SignatureParser {
    pub fn new(body: &str) -> Result<Self, TranscodeError> {
        let mut lexer = Lexer::new(body);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the whole body into a signature
    pub fn parse_signature(&mut self) -> Result<ParsedSignature, TranscodeError> {
        let return_type = self
            .expect_word()
            .map_err(|found| TranscodeError::MissingReturnType { found })?;
        let full_name = self.parse_function_name()?;

        if !self.match_token(&Token::LParen(0)) {
            return Err(TranscodeError::MissingParameterList {
                found: self.peek().to_string(),
            });
        }

        let mut arguments = vec![self.parse_handle()?];
        while self.match_token(&Token::Comma(0)) {
            let position = arguments.len() + 1;
            arguments.push(self.parse_argument(position)?);
        }

        if !self.is_at_end() {
            return Err(TranscodeError::TrailingToken {
                found: self.peek().to_string(),
            });
        }

        Ok(ParsedSignature {
            return_type,
            full_name,
            arguments,
        })
    }

    /// Function name, bare or wrapped in parentheses: `lua_pop` / `(lua_pop)`
    fn parse_function_name(&mut self) -> Result<String, TranscodeError> {
        let wrapped = matches!(self.peek(), Token::LParen(_))
            && matches!(self.peek_ahead(1), Some(Token::Word(..)))
            && matches!(self.peek_ahead(2), Some(Token::RParen(_)));

        if wrapped {
            self.advance();
        }
        let name = self
            .expect_word()
            .map_err(|found| TranscodeError::MissingFunctionName { found })?;
        if wrapped {
            self.advance();
        }
        Ok(name)
    }

    /// The leading `lua_State*` parameter. Its name is optional in the
    /// source; the wrapper always forwards [`HANDLE_IDENT`].
    fn parse_handle(&mut self) -> Result<Argument, TranscodeError> {
        let expected = format!("{HANDLE_TYPE}*");
        if !matches!(self.peek(), Token::Word(ty, _) if *ty == expected) {
            return Err(TranscodeError::HandleNotFirst {
                found: self.peek().to_string(),
            });
        }
        self.advance();

        let name = match self.peek() {
            Token::Word(name, _) => {
                let name = name.clone();
                self.advance();
                name
            }
            _ => HANDLE_IDENT.to_string(),
        };

        Ok(Argument::new(expected, name))
    }

    /// One `TYPE NAME` parameter up to the next comma or the end
    fn parse_argument(&mut self, position: usize) -> Result<Argument, TranscodeError> {
        let mut fields = Vec::new();
        while let Token::Word(word, _) = self.peek() {
            fields.push(word.clone());
            self.advance();
        }

        match <[String; 2]>::try_from(fields) {
            Ok([ty, name]) => Ok(Argument { ty, name }),
            Err(fields) => Err(TranscodeError::UnpairedArgument { position, fields }),
        }
    }

    // ===== Helper methods =====

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Consume a word, or return the display text of whatever is there
    fn expect_word(&mut self) -> Result<String, String> {
        if let Token::Word(word, _) = self.peek() {
            let word = word.clone();
            self.advance();
            Ok(word)
        } else {
            Err(self.peek().to_string())
        }
    }
}

/// Parse a normalized body in one call
pub fn parse_signature(body: &str) -> Result<ParsedSignature, TranscodeError> {
    SignatureParser::new(body)?.parse_signature()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_signature() {
        let sig = parse_signature("void lua_pop (lua_State* L, int n").unwrap();

        assert_eq!(sig.return_type, "void");
        assert_eq!(sig.full_name, "lua_pop");
        assert_eq!(
            sig.arguments,
            vec![Argument::new("lua_State*", "L"), Argument::new("int", "n")]
        );
        assert_eq!(sig.forwarded_arguments().len(), sig.arguments.len() - 1);
    }

    #[test]
    fn test_parse_handle_only() {
        let sig = parse_signature("int lua_gettop (lua_State* L").unwrap();

        assert_eq!(sig.arguments.len(), 1);
        assert!(sig.forwarded_arguments().is_empty());
    }

    #[test]
    fn test_parse_parenthesized_name() {
        let sig = parse_signature("cchar* (lua_typename) (lua_State* L, int tp").unwrap();

        assert_eq!(sig.return_type, "cchar*");
        assert_eq!(sig.full_name, "lua_typename");
        assert_eq!(sig.arguments[1], Argument::new("int", "tp"));
    }

    #[test]
    fn test_parse_unnamed_handle() {
        let sig = parse_signature("int lua_gettop (lua_State*").unwrap();
        assert_eq!(sig.arguments, vec![Argument::new("lua_State*", "L")]);
    }

    #[test]
    fn test_handle_must_come_first() {
        let err = parse_signature("int lua_absindex (int idx, lua_State* L").unwrap_err();
        assert_eq!(
            err,
            TranscodeError::HandleNotFirst {
                found: "'int'".to_string()
            }
        );

        let err = parse_signature("int lua_gettop (lua_State L").unwrap_err();
        assert!(matches!(err, TranscodeError::HandleNotFirst { .. }));
    }

    #[test]
    fn test_unpaired_argument() {
        let err = parse_signature("void lua_settop (lua_State* L, unsigned int idx").unwrap_err();
        assert_eq!(
            err,
            TranscodeError::UnpairedArgument {
                position: 2,
                fields: vec![
                    "unsigned".to_string(),
                    "int".to_string(),
                    "idx".to_string()
                ],
            }
        );

        let err = parse_signature("void lua_settop (lua_State* L, int").unwrap_err();
        assert!(matches!(err, TranscodeError::UnpairedArgument { position: 2, .. }));
    }

    #[test]
    fn test_missing_parts() {
        let err = parse_signature("").unwrap_err();
        assert!(matches!(err, TranscodeError::MissingReturnType { .. }));

        let err = parse_signature("int (lua_State* L").unwrap_err();
        assert!(matches!(err, TranscodeError::MissingFunctionName { .. }));

        let err = parse_signature("int lua_gettop lua_State* L").unwrap_err();
        assert!(matches!(err, TranscodeError::MissingParameterList { .. }));
    }

    #[test]
    fn test_trailing_token() {
        let err = parse_signature("int lua_gettop (lua_State* L) (").unwrap_err();
        assert_eq!(
            err,
            TranscodeError::TrailingToken {
                found: "')'".to_string()
            }
        );
    }
}
