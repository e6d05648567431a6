//! Error types for PBP parsing, packing and extraction

use thiserror::Error;

/// Result type for PBP operations
pub type Result<T> = std::result::Result<T, Error>;

/// PBP error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Signature bytes 1-3 were not `"PBP"`
    #[error("Invalid PBP signature: expected \"\\x00PBP\", got {0:?}")]
    InvalidSignature([u8; 4]),

    /// Version failed the format's validity rule
    #[error("Invalid version: {major}.{minor}")]
    InvalidVersion { major: u16, minor: u16 },

    /// Container shorter than its fixed header
    #[error("Truncated container: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: u64, actual: u64 },

    /// A section's stored offset and derived size fall outside the container
    #[error(
        "Section {name} is out of bounds: offset {offset}, size {size}, container length {total_len}"
    )]
    SectionOutOfBounds {
        name: &'static str,
        offset: u32,
        size: u64,
        total_len: u64,
    },

    /// Packed payload would overflow the 32-bit offset table
    #[error("Container too large: {size} bytes exceeds the offset field range")]
    ContainerTooLarge { size: u64 },
}
