//! Output sinks
//!
//! Every command writes through a `Streams` value instead of printing
//! directly. `eval` is the stream the wrapping shell function evaluates and
//! only ever receives a single shell command line. Everything else goes to
//! `diag`.

use std::io::{self, Write};

pub struct Streams<'a> {
    pub eval: &'a mut dyn Write,
    pub diag: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(eval: &'a mut dyn Write, diag: &'a mut dyn Write) -> Self {
        Self { eval, diag }
    }

    /// Write one shell-evaluable line to the eval stream
    ///
    /// # Errors
    /// Returns an error if the stream cannot be written or flushed
    pub fn emit(&mut self, line: &[u8]) -> io::Result<()> {
        self.eval.write_all(line)?;
        self.eval.write_all(b"\n")?;
        self.eval.flush()
    }

    /// Write one line to the diagnostic stream
    ///
    /// # Errors
    /// Returns an error if the stream cannot be written
    pub fn note(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.diag, "{line}")
    }
}
