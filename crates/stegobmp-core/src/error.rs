use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SteganoError>;

/// Errors of the bitmap container and the geometric transforms
#[derive(Error, Debug)]
pub enum BmpError {
    /// Represents a failure to allocate the pixel buffer of an image
    #[error("An error occurred during memory allocation.")]
    MemoryAllocation,

    /// Represents a short read, a failed seek or header data that cannot describe a 24-bit image
    #[error("An error occurred during reading input file.")]
    FileRead { source: std::io::Error },

    /// Represents a short write or a failed flush
    #[error("An error occurred during writing to output file.")]
    FileWrite { source: std::io::Error },

    /// Represents out of bounds coordinates or regions and invalid rotation modes
    #[error("Illegal arguments were passed to program.")]
    IllegalArguments,
}

/// Errors of the key driven LSB protocol
#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a key entry that addresses a pixel outside of the image
    #[error("Illegal arguments were passed to program.")]
    IllegalArguments,

    /// Represents an exhausted or malformed key stream while hiding a message
    #[error("An error occurred during reading file containing key.")]
    KeyRead,

    /// Represents any other failure when accessing the pixels of the carrier image
    #[error("An error occurred during reading bmp file.")]
    BitmapAccess(#[source] BmpError),

    /// Represents a failure to read the message that is about to be hidden
    #[error("An error occurred during reading message file.")]
    MessageRead { source: std::io::Error },

    /// Represents a failure to write an unveiled message
    #[error("An error occurred during writing to message file.")]
    MessageWrite { source: std::io::Error },
}

impl From<BmpError> for StegoError {
    fn from(e: BmpError) -> Self {
        match e {
            BmpError::IllegalArguments => StegoError::IllegalArguments,
            other => StegoError::BitmapAccess(other),
        }
    }
}

/// The file a command works on, used for reporting which one could not be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Output,
    Key,
    Message,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileRole::Input => "input",
            FileRole::Output => "output",
            FileRole::Key => "key",
            FileRole::Message => "msg",
        })
    }
}

#[derive(Error)]
pub enum SteganoError {
    /// Represents a file that could not be opened or created
    #[error("Could not open {role} file {path:?}.")]
    OpenFile {
        role: FileRole,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Bitmap(#[from] BmpError),

    #[error(transparent)]
    Stego(#[from] StegoError),

    #[error("API Error: No carrier image set")]
    CarrierNotSet,

    #[error("API Error: No target file set")]
    TargetNotSet,

    #[error("API Error: No key file set")]
    KeyNotSet,

    #[error("API Error: No message file set")]
    MessageNotSet,

    #[error("API Error: No crop region set")]
    RegionNotSet,
}

impl fmt::Debug for SteganoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `main` prints errors with Debug, keep it readable
        write!(f, "{self}")
    }
}
