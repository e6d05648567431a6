//! PBP (PlayStation Portable Bundle) container format library
//!
//! A PBP file is a fixed-layout archive: a 40-byte header followed by up
//! to 8 concatenated sub-files. The header stores only absolute offsets;
//! section sizes are derived from adjacent offsets and the file length.
//! This crate provides header parsing and serialization, the offset/size
//! layout resolver, and extraction/assembly of whole containers.

pub mod builder;
pub mod container;
pub mod error;
pub mod header;
pub mod section;

pub use builder::{PackSummary, PbpBuilder, SlotSource, pack};
pub use container::{ContainerInfo, UnpackSummary, inspect, unpack};
pub use error::{Error, Result};
pub use header::PbpHeader;
pub use section::{SectionEntry, SectionId, SectionLayout};

/// Expected value of signature bytes 1-3.
///
/// Byte 0 of the signature is conventionally `0x00` but is not part of
/// the magic check.
pub const PBP_MAGIC: [u8; 3] = *b"PBP";

/// Size of the fixed PBP header in bytes.
pub const HEADER_SIZE: usize = 40;

/// Number of section slots in a container.
pub const SECTION_COUNT: usize = 8;
