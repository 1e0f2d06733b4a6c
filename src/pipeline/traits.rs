//! Source and sink seams for the pipeline.
//!
//! The core never opens, buffers, or closes an underlying resource: the
//! caller supplies scoped access through these traits, acquired before the
//! run starts and released after it ends on every exit path. Implementations
//! are provided for `io::BufRead` readers, `io::Write` writers, and
//! in-memory collections used by tests and the parallel builder.

use std::io::{self, BufRead, Write};

// ============================================================================
// LineSource — abstract ordered source of input lines
// ============================================================================

/// An ordered, fallible source of text lines.
///
/// # Contract
///
/// - `next_line` returns `Ok(Some(line))` for each line in order, then
///   `Ok(None)` at end of input.
/// - The returned slice is only valid until the next call; callers that
///   need a line beyond that must copy it.
/// - An `Err` means the underlying source failed; the pipeline halts and
///   propagates the failure without recovery.
pub trait LineSource {
    /// Pull the next line, or `Ok(None)` at end of input.
    fn next_line(&mut self) -> io::Result<Option<&str>>;
}

/// Adapts any [`BufRead`] into a [`LineSource`], reusing one line buffer
/// across calls. Trailing `\n` / `\r\n` terminators are stripped.
#[derive(Debug)]
pub struct BufLineSource<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> BufLineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufLineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.as_str()))
    }
}

/// A [`LineSource`] over an in-memory slice of lines. Never fails.
#[derive(Debug)]
pub struct SliceSource<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> SliceSource<'a, S> {
    /// Wrap a slice of lines.
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }
}

impl<S: AsRef<str>> LineSource for SliceSource<'_, S> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        let Some(line) = self.lines.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(Some(line.as_ref()))
    }
}

// ============================================================================
// RowSink — abstract ordered sink for output rows
// ============================================================================

/// An ordered sink accepting formatted output rows.
///
/// # Contract
///
/// - `write_row` accepts one row (without a line terminator); the sink is
///   responsible for row separation.
/// - An `Err` means the sink failed; rows already accepted remain written
///   (no rollback), and the pipeline reports the run as incomplete.
pub trait RowSink {
    /// Accept one output row.
    fn write_row(&mut self, row: &str) -> io::Result<()>;
}

/// Adapts any [`Write`] into a [`RowSink`], terminating each row with `\n`.
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for WriteSink<W> {
    fn write_row(&mut self, row: &str) -> io::Result<()> {
        writeln!(self.writer, "{row}")
    }
}

/// A [`RowSink`] collecting rows in memory. Never fails.
#[derive(Debug, Default)]
pub struct VecSink {
    rows: Vec<String>,
}

impl VecSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows accepted so far, in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Consume the sink, returning its rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

impl RowSink for VecSink {
    fn write_row(&mut self, row: &str) -> io::Result<()> {
        self.rows.push(row.to_string());
        Ok(())
    }
}
