//! Reading input documents
//!
//! A document is opened once. The size limit is checked on the open handle,
//! then the whole file is read and the same bytes are checked for NUL and
//! decoded as UTF-8.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Largest document accepted, in bytes (50 MB)
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

/// Why a document could not be read as text
#[derive(Debug)]
pub enum DocumentError {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// Over [`MAX_DOCUMENT_BYTES`]
    TooLarge { bytes: u64 },
    /// A NUL byte at `offset`, taken as a sign of binary content
    Binary { offset: usize },
    /// Valid UTF-8 up to `valid_up_to`, then not
    NotUtf8 { valid_up_to: usize },
    Io(io::Error),
}

impl From<io::Error> for DocumentError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(e),
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no such file"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "path is a directory"),
            Self::TooLarge { bytes } => write!(
                f,
                "document is {:.1} MB, limit is {} MB",
                *bytes as f64 / (1024.0 * 1024.0),
                MAX_DOCUMENT_BYTES / (1024 * 1024)
            ),
            Self::Binary { offset } => write!(f, "binary content (NUL byte at {})", offset),
            Self::NotUtf8 { valid_up_to } => {
                write!(f, "not UTF-8 text (invalid byte at {})", valid_up_to)
            }
            Self::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Read the document at `path` as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let mut file = File::open(path)?;
    let metadata = file.metadata()?;

    if metadata.is_dir() {
        return Err(DocumentError::IsDirectory);
    }
    if metadata.len() > MAX_DOCUMENT_BYTES {
        return Err(DocumentError::TooLarge {
            bytes: metadata.len(),
        });
    }

    // The file may have grown since the metadata call
    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    let read = file
        .by_ref()
        .take(MAX_DOCUMENT_BYTES + 1)
        .read_to_end(&mut bytes)?;
    if read as u64 > MAX_DOCUMENT_BYTES {
        return Err(DocumentError::TooLarge { bytes: read as u64 });
    }

    decode(bytes)
}

fn decode(bytes: Vec<u8>) -> Result<String, DocumentError> {
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(DocumentError::Binary { offset });
    }
    String::from_utf8(bytes).map_err(|e| DocumentError::NotUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
