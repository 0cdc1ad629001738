//! Streaming roster file reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::fields::split_fields;
use crate::record::PersonRecord;

/// Default field delimiter for roster files.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Errors that can occur while reading rosters.
///
/// Malformed content is never an error: short lines are skipped and bad
/// year fields parse as 0, so only the I/O layer can fail.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

/// A streaming roster reader.
///
/// Yields one [`PersonRecord`] per usable line. Lines that split into
/// fewer than 3 fields (including the empty trailing line some files
/// end with) are skipped and counted, not surfaced. Lines are read into
/// a growable buffer, so long lines keep full fidelity rather than
/// being truncated at a fixed length. Reading is byte-oriented: bytes
/// that are not valid UTF-8 are replaced, never turned into an error,
/// so only genuine I/O failures surface as [`RosterError`].
pub struct RosterReader<R: Read> {
    reader: BufReader<R>,
    delimiter: u8,
    buffer: Vec<u8>,
    lines_read: usize,
    lines_skipped: usize,
}

impl RosterReader<File> {
    /// Open a roster file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> RosterReader<R> {
    /// Create a roster reader over any readable source.
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, DEFAULT_DELIMITER)
    }

    /// Create a roster reader with a custom field delimiter.
    pub fn with_delimiter(reader: R, delimiter: u8) -> Self {
        Self {
            reader: BufReader::new(reader),
            delimiter,
            buffer: Vec::with_capacity(256),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Lines consumed so far, usable or not.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Lines skipped for having fewer than 3 fields.
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Read the next usable record, skipping malformed lines.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_record(&mut self) -> Result<Option<PersonRecord>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            // Strip the line terminator; fields themselves are not trimmed.
            let bytes = self
                .buffer
                .strip_suffix(b"\n")
                .unwrap_or(&self.buffer);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

            // Invalid UTF-8 is replaced, not rejected; year fields are
            // ASCII digits so only name content can carry such bytes.
            let line = String::from_utf8_lossy(bytes);

            // Per-line field vector, dropped at the end of the iteration.
            let fields = split_fields(&line, self.delimiter);
            match PersonRecord::from_fields(&fields) {
                Some(record) => return Ok(Some(record)),
                None => {
                    self.lines_skipped += 1;
                    continue;
                }
            }
        }
    }

    /// Get an iterator over all records.
    pub fn records(self) -> RosterRecordIter<R> {
        RosterRecordIter { reader: self }
    }
}

/// Iterator over roster records.
pub struct RosterRecordIter<R: Read> {
    reader: RosterReader<R>,
}

impl<R: Read> Iterator for RosterRecordIter<R> {
    type Item = Result<PersonRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all records from a roster file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<PersonRecord>> {
    let reader = RosterReader::from_path(path)?;
    reader.records().collect()
}

/// Parse records from a string (useful for testing).
pub fn parse_records(content: &str) -> Result<Vec<PersonRecord>> {
    let reader = RosterReader::new(content.as_bytes());
    reader.records().collect()
}
