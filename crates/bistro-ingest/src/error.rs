//! Error types for menu ingestion
//!
//! Two layers:
//! - [`RecordError`]: why a single line failed to decode
//! - [`IngestError`]: a record error tied to its line, or an I/O failure

use std::path::PathBuf;

/// Why a record could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Fewer top-level fields than the record layout requires
    #[error("expected {expected} fields, found {found}")]
    MissingFields {
        /// Required field count
        expected: usize,
        /// Fields present
        found: usize,
    },

    /// Numeric field absent, malformed, negative or non-finite
    #[error("malformed {field}: '{value}'")]
    MalformedNumber {
        /// Field name
        field: &'static str,
        /// Text as found
        value: String,
    },

    /// Line bytes are not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl RecordError {
    /// Create malformed-number error
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedNumber {
            field,
            value: value.into(),
        }
    }
}

/// Errors while reading a menu source
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Source could not be opened
    #[error("io error opening {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Source failed part-way through
    #[error("io error reading line {line}: {source}")]
    Read {
        /// 1-based line being read
        line: usize,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A record failed to decode
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line of the record
        line: usize,
        /// Why it failed
        #[source]
        reason: RecordError,
    },
}

impl IngestError {
    /// Create open error for path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the source itself rather than of one record
    #[inline]
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Read { .. })
    }
}
