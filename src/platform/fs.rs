// logyear - platform/fs.rs
//
// Filesystem helpers for the line scan.
//
// The file handle lives inside the returned `LineReader`, so it is released
// on every exit path when the reader is dropped. Opening is the only
// pre-check: there is no separate existence test.

use crate::util::constants;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open `path` for buffered line reading.
pub fn open_lines(path: &Path) -> io::Result<LineReader<BufReader<File>>> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Opened file for line scan");
    Ok(LineReader::new(BufReader::with_capacity(
        constants::READ_BUFFER_SIZE,
        file,
    )))
}

/// Iterator over the lines of a reader, numbered from 1.
///
/// Unlike `BufRead::lines`, bytes that are not valid UTF-8 are decoded
/// lossily instead of ending the iteration, so a single stray byte in a
/// log file does not hide the rest of it.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. The terminator is kept
/// (`\r\n` is kept as `\r`); callers trim.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_number: u64,
    /// The previous line ended in `\r`; a `\n` right after it belongs to
    /// that terminator.
    pending_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_number: 0,
            pending_lf: false,
        }
    }

    /// Number of the line that the next read will produce.
    pub fn next_line_number(&self) -> u64 {
        self.line_number + 1
    }

    /// Fill `self.buf` with the next line's bytes. Leaves it empty at EOF.
    fn read_line_bytes(&mut self) -> io::Result<()> {
        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }

            if self.pending_lf {
                self.pending_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(idx) => {
                    let terminator = available[idx];
                    self.buf.extend_from_slice(&available[..=idx]);
                    self.inner.consume(idx + 1);
                    self.pending_lf = terminator == b'\r';
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<(u64, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        if let Err(e) = self.read_line_bytes() {
            return Some(Err(e));
        }
        if self.buf.is_empty() {
            return None;
        }
        self.line_number += 1;
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        Some(Ok((self.line_number, line)))
    }
}
