//! Error types for the transcoder
//!
//! [`TranscodeError`] names every precondition a single declaration can
//! violate. [`LineError`] attaches the input line it came from, and
//! [`RunError`] is what a whole batch returns.
//!
//! Every error is fatal to the batch unless the driver runs in keep-going
//! mode, in which case failures are collected and reported together.

use crate::constants::{AUX_PREFIX, CORE_PREFIX, HANDLE_TYPE};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The two failure classes a declaration can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line does not have the `RET NAME(lua_State*, TYPE NAME, ...);` shape
    MalformedLine,
    /// The function name has neither namespace prefix
    UnrecognizedName,
}

/// A precondition violated while transcoding one declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    #[error("declaration must end with ')' once the ';' is dropped, found `{found}`")]
    MissingCloseParen { found: String },

    #[error("unexpected character '{ch}' at column {column}")]
    UnexpectedCharacter { ch: char, column: usize },

    #[error("expected return type, found {found}")]
    MissingReturnType { found: String },

    #[error("expected function name, found {found}")]
    MissingFunctionName { found: String },

    #[error("expected '(' after function name, found {found}")]
    MissingParameterList { found: String },

    #[error("first parameter must be a `{handle}*`, found {found}", handle = HANDLE_TYPE)]
    HandleNotFirst { found: String },

    #[error(
        "parameter {position} is not a single (type, name) pair: `{}`",
        .fields.join(" ")
    )]
    UnpairedArgument {
        position: usize,
        fields: Vec<String>,
    },

    #[error("unexpected {found} after the parameter list")]
    TrailingToken { found: String },

    #[error(
        "function name '{name}' starts with neither '{core}' nor '{aux}'",
        core = CORE_PREFIX,
        aux = AUX_PREFIX
    )]
    UnrecognizedName { name: String },
}

impl TranscodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranscodeError::UnrecognizedName { .. } => ErrorKind::UnrecognizedName,
            TranscodeError::MissingCloseParen { .. }
            | TranscodeError::UnexpectedCharacter { .. }
            | TranscodeError::MissingReturnType { .. }
            | TranscodeError::MissingFunctionName { .. }
            | TranscodeError::MissingParameterList { .. }
            | TranscodeError::HandleNotFirst { .. }
            | TranscodeError::UnpairedArgument { .. }
            | TranscodeError::TrailingToken { .. } => ErrorKind::MalformedLine,
        }
    }
}

/// A [`TranscodeError`] tied to the input line that raised it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number in the input
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
    pub source: TranscodeError,
}

impl LineError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Errors returned by a batch run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read declarations: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write wrappers: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Line(#[from] LineError),

    /// Keep-going mode: every failing line, in input order
    #[error("{} of {total} declarations failed", .errors.len())]
    Batch { errors: Vec<LineError>, total: usize },
}

impl RunError {
    /// The line-level failures carried by this error, if any
    pub fn line_errors(&self) -> &[LineError] {
        match self {
            RunError::Line(err) => std::slice::from_ref(err),
            RunError::Batch { errors, .. } => errors,
            RunError::Open { .. } | RunError::Read(_) | RunError::Write(_) => &[],
        }
    }
}
