// Destinations for generated wrapper lines

use std::io::{self, Write};

/// Receives generated lines in input order
pub trait WrapperSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Called once after the last line of a batch
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each line, newline-terminated, to any [`Write`] implementor
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WrapperSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// In-memory sink that keeps every emitted line
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput { lines: Vec::new() }
    }

    /// All lines joined with newlines, with a trailing newline when non-empty
    pub fn get_output(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }
}

impl WrapperSink for CapturedOutput {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

impl<S: WrapperSink + ?Sized> WrapperSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
