//! Menu reader
//!
//! Streams dishes out of a menu source: the first line is a header and is
//! skipped, blank lines are skipped, records are decoded in source order.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use bistro_menu::Dish;

use crate::error::{IngestError, RecordError};
use crate::record::parse_record;

/// Iterator of decoded dishes over a buffered reader
///
/// Lines with an unrecognized dish type are skipped silently; every other
/// failure is yielded so the caller can choose to skip or abort. A line that
/// is not valid UTF-8 is a bad record, not a failure of the source.
#[derive(Debug)]
pub struct MenuReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> MenuReader<R> {
    /// Wrap a reader positioned at the header line
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// 1-based number of the line read last
    #[inline]
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for MenuReader<R> {
    type Item = Result<Dish, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(IngestError::Read {
                        line: self.line_number + 1,
                        source,
                    }))
                }
            }
            self.line_number += 1;
            if self.line_number == 1 {
                continue;
            }

            let raw = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let Ok(line) = std::str::from_utf8(raw) else {
                return Some(Err(IngestError::InvalidRecord {
                    line: self.line_number,
                    reason: RecordError::InvalidUtf8,
                }));
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_record(line) {
                Ok(Some(dish)) => return Some(Ok(dish)),
                Ok(None) => continue,
                Err(reason) => {
                    return Some(Err(IngestError::InvalidRecord {
                        line: self.line_number,
                        reason,
                    }))
                }
            }
        }
    }
}

/// Reader over an in-memory menu
#[must_use]
pub fn read_menu_str(text: &str) -> MenuReader<Cursor<&str>> {
    MenuReader::new(Cursor::new(text))
}

/// Open a menu file
///
/// # Errors
/// Returns [`IngestError::Open`] if the file cannot be opened
pub fn read_menu_path(path: impl AsRef<Path>) -> Result<MenuReader<BufReader<File>>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    tracing::debug!(path = %path.display(), "opened menu");
    Ok(MenuReader::new(BufReader::new(file)))
}
