use crate::constants::{REPORT_HEADER, SIZE_COLUMN_GAP};
use std::io::{self, Write};

/// Tab-separated progress table written while targets are padded.
///
/// A row is split in two so the size-before column is visible before the
/// append loop runs; if the loop fails, the partial row shows which file
/// was being written.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Report { out }
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{REPORT_HEADER}")
    }

    pub fn begin_row(&mut self, index: usize, name: &str, size_before: u64) -> io::Result<()> {
        write!(self.out, "{index}\t{name}\t{size_before}{SIZE_COLUMN_GAP}")?;
        self.out.flush()
    }

    pub fn end_row(&mut self, size_after: u64) -> io::Result<()> {
        writeln!(self.out, "{size_after}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
