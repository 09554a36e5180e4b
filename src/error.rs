use std::fmt;
use std::path::PathBuf;

/// Custom error types for IGC processing
#[derive(Debug)]
pub enum IgcError {
    /// I/O errors while opening or reading a source
    Io(std::io::Error),
    /// Input path does not exist
    NotFound(PathBuf),
    /// Input file does not carry an `.igc` extension
    UnsupportedExtension(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for IgcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgcError::Io(err) => write!(f, "I/O error: {}", err),
            IgcError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            IgcError::UnsupportedExtension(ext) => write!(f, "Unsupported extension: {}", ext),
            IgcError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for IgcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IgcError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IgcError {
    fn from(err: std::io::Error) -> Self {
        IgcError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, IgcError>;
