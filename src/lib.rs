//! # Introduction
//!
//! luawrap reads a listing of Lua C API signatures, one declaration per
//! line, and generates a C++ forwarding method for each one. Every
//! generated method drops the leading `lua_State *L` parameter and passes
//! a member `L` in its place:
//!
//! ```text
//! int luaL_loadstring (lua_State *L, const char *s);
//!   →     int L_loadstring(cchar* s) { return luaL_loadstring(L, s); }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Line → Normalizer → Lexer → Parser → Name mapper → Emitter → Sink
//! ```
//!
//! 1. [`parser`] — canonicalizes the line and parses it into a
//!    [`parser::ParsedSignature`].
//! 2. [`codegen`] — derives the wrapper name and builds the output line.
//! 3. [`transcoder`] — runs the pipeline over a whole input, skipping
//!    blank and `#` lines, and writes results to a
//!    [`transcoder::sink::WrapperSink`].
//! 4. [`constants`] — the fixed naming conventions and type-phrase table.
//!
//! Any malformed declaration or unrecognized function name stops the run
//! unless keep-going mode is enabled.

pub mod codegen;
pub mod constants;
pub mod parser;
pub mod transcoder;

pub use transcoder::{transcode_line, TranscodeOptions, Transcoder};
