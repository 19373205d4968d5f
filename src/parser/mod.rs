//! Declaration parser
//!
//! This module turns one raw declaration line into a [`ParsedSignature`]:
//! - [`normalize`]: canonical spacing, type-phrase tokens, pointer markers
//! - [`lexer`]: tokenization (normalized body → tokens)
//! - [`parser`]: parsing (tokens → signature)
//! - [`ast`]: the parsed signature record
//!
//! # Accepted shape
//!
//! ```text
//! RET NAME (lua_State *L, TYPE NAME, ...);
//! RET (NAME) (lua_State *L, TYPE NAME, ...);
//! ```
//!
//! Types are single tokens once normalized. Multi-word types outside the
//! table in [`crate::constants::TYPE_PHRASES`] are rejected.

pub mod ast;
pub mod lexer;
pub mod normalize;
pub mod parser;

pub use ast::{Argument, ParsedSignature};
pub use normalize::normalize;
pub use parser::{parse_signature, SignatureParser};
