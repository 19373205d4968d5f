//! Per-line pipeline and batch driver
//!
//! [`transcode_line`] runs one declaration through every stage:
//!
//! ```text
//! raw line → normalize → parse → map name → emit → wrapper line
//! ```
//!
//! [`Transcoder`] feeds an input source through it line by line, skipping
//! blanks and `#` comments, and hands each result to a [`WrapperSink`].
//! Lines are independent: nothing from one line influences another's
//! output.

pub mod errors;
pub mod sink;

use std::io::BufRead;

use rustc_hash::FxHashMap;
use tracing::{debug, error, info, warn};

use crate::codegen::{emit_wrapper, map_name, WrapperDecl};
use crate::parser::{normalize, parse_signature};
use errors::{LineError, RunError, TranscodeError};
use sink::WrapperSink;

/// Transcode one trimmed, non-comment declaration
pub fn transcode_line(line: &str) -> Result<WrapperDecl, TranscodeError> {
    let body = normalize(line)?;
    let signature = parse_signature(&body)?;
    let name = map_name(&signature.full_name)?;
    Ok(emit_wrapper(&signature, &name))
}

/// Blank lines and lines starting with `#` never reach the pipeline
pub fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TranscodeOptions {
    /// Report every failing line instead of stopping at the first
    pub keep_going: bool,
}

/// Counts for a completed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Drives a whole input through [`transcode_line`]
pub struct Transcoder<S: WrapperSink> {
    sink: S,
    options: TranscodeOptions,
    /// Wrapper name → input line that first declared it
    seen: FxHashMap<String, usize>,
    summary: BatchSummary,
}

impl<S: WrapperSink> Transcoder<S> {
    pub fn new(sink: S, options: TranscodeOptions) -> Self {
        Transcoder {
            sink,
            options,
            seen: FxHashMap::default(),
            summary: BatchSummary::default(),
        }
    }

    /// Process every line of `reader` in order.
    ///
    /// Stops at the first failing line unless keep-going is enabled; lines
    /// already emitted stay emitted.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<BatchSummary, RunError> {
        info!(keep_going = self.options.keep_going, "transcoding declarations");
        let mut failures = Vec::new();
        let mut total = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(RunError::Read)?;
            let number = index + 1;

            if is_skipped(&line) {
                self.summary.skipped += 1;
                continue;
            }
            total += 1;

            match self.process_line(number, line.trim())? {
                Ok(()) => {}
                Err(err) if self.options.keep_going => {
                    error!(line = err.line, "{}", err.source);
                    failures.push(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.sink.finish().map_err(RunError::Write)?;

        if !failures.is_empty() {
            return Err(RunError::Batch {
                errors: failures,
                total,
            });
        }

        info!(
            emitted = self.summary.emitted,
            skipped = self.summary.skipped,
            "transcoding finished"
        );
        Ok(self.summary)
    }

    /// Convenience wrapper around [`Transcoder::run`] for in-memory input
    pub fn run_str(&mut self, source: &str) -> Result<BatchSummary, RunError> {
        self.run(source.as_bytes())
    }

    /// Transcode and emit one line. The outer error is a sink failure,
    /// the inner one a problem with the declaration itself.
    fn process_line(
        &mut self,
        number: usize,
        text: &str,
    ) -> Result<Result<(), LineError>, RunError> {
        let decl = match transcode_line(text) {
            Ok(decl) => decl,
            Err(source) => {
                return Ok(Err(LineError {
                    line: number,
                    text: text.to_string(),
                    source,
                }));
            }
        };

        debug!(line = number, wrapper = %decl.name, "transcoded");
        if let Some(first) = self.seen.get(&decl.name) {
            warn!(
                wrapper = %decl.name,
                first_line = *first,
                line = number,
                "wrapper name declared twice"
            );
        } else {
            self.seen.insert(decl.name.clone(), number);
        }

        self.sink.emit(&decl.text).map_err(RunError::Write)?;
        self.summary.emitted += 1;
        Ok(Ok(()))
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::errors::ErrorKind;
    use super::sink::CapturedOutput;
    use super::*;

    #[test]
    fn test_transcode_line() {
        let decl = transcode_line("void lua_pop (lua_State *L, int n);").unwrap();
        assert_eq!(decl.text, "    void pop(int n) { lua_pop(L, n); }");

        let decl = transcode_line("int luaL_loadstring (lua_State *L, const char *s);").unwrap();
        assert_eq!(
            decl.text,
            "    int L_loadstring(cchar* s) { return luaL_loadstring(L, s); }"
        );
    }

    #[test]
    fn test_transcode_is_independent_of_history() {
        let line = "int lua_gettop (lua_State *L);";
        let first = transcode_line(line).unwrap();

        let mut transcoder = Transcoder::new(CapturedOutput::new(), TranscodeOptions::default());
        transcoder
            .run_str("void lua_pop (lua_State *L, int n);\nint lua_gettop (lua_State *L);\n")
            .unwrap();

        assert_eq!(transcoder.into_sink().lines[1], first.text);
    }

    #[test]
    fn test_is_skipped() {
        assert!(is_skipped(""));
        assert!(is_skipped("   \t"));
        assert!(is_skipped("# state manipulation"));
        assert!(is_skipped("   # indented comment"));
        assert!(!is_skipped("int lua_gettop (lua_State *L);"));
    }

    #[test]
    fn test_fail_fast_keeps_earlier_lines() {
        let mut transcoder = Transcoder::new(CapturedOutput::new(), TranscodeOptions::default());
        let err = transcoder
            .run_str("int lua_gettop (lua_State *L);\nint foo_bar (lua_State *L);\nvoid lua_pop (lua_State *L, int n);\n")
            .unwrap_err();

        let line_errors = err.line_errors();
        assert_eq!(line_errors.len(), 1);
        assert_eq!(line_errors[0].line, 2);
        assert_eq!(line_errors[0].kind(), ErrorKind::UnrecognizedName);
        assert_eq!(
            transcoder.into_sink().lines,
            vec!["    int gettop() { return lua_gettop(L); }"]
        );
    }

    #[test]
    fn test_keep_going_collects_every_failure() {
        let mut transcoder = Transcoder::new(
            CapturedOutput::new(),
            TranscodeOptions { keep_going: true },
        );
        let err = transcoder
            .run_str("int foo_bar (lua_State *L);\nint lua_gettop (lua_State *L\nvoid lua_pop (lua_State *L, int n);\n")
            .unwrap_err();

        match &err {
            RunError::Batch { errors, total } => {
                assert_eq!(*total, 3);
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].kind(), ErrorKind::UnrecognizedName);
                assert_eq!(errors[1].kind(), ErrorKind::MalformedLine);
                assert_eq!(errors[1].line, 2);
            }
            other => panic!("expected batch error, got {other:?}"),
        }
        assert_eq!(transcoder.summary().emitted, 1);
    }

    #[test]
    fn test_duplicate_names_still_emitted() {
        let mut transcoder = Transcoder::new(CapturedOutput::new(), TranscodeOptions::default());
        let summary = transcoder
            .run_str("int lua_gettop (lua_State *L);\nint (lua_gettop) (lua_State *L);\n")
            .unwrap();

        assert_eq!(summary.emitted, 2);
        let lines = transcoder.into_sink().lines;
        assert_eq!(lines[0], lines[1]);
    }
}
