//! PBP header parsing and serialization
//!
//! The header is exactly 40 bytes, little-endian, with no padding:
//! 4 signature bytes, two u16 version fields stored `[minor, major]`,
//! and 8 u32 absolute section offsets.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use tracing::trace;

use crate::{Error, PBP_MAGIC, Result, SECTION_COUNT};

/// PBP container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PbpHeader {
    signature: [u8; 4],
    /// Stored order is `[minor, major]`.
    version: [u16; 2],
    offsets: [u32; SECTION_COUNT],
}

impl PbpHeader {
    /// Build a pack-side header: signature `{0x00,'P','B','P'}`,
    /// version 1.0, and the given offset table.
    pub const fn new(offsets: [u32; SECTION_COUNT]) -> Self {
        Self {
            signature: [0x00, b'P', b'B', b'P'],
            version: [0, 1],
            offsets,
        }
    }

    /// Parse a header from the reader's current position.
    ///
    /// Reads exactly 40 bytes. Performs no validation; call
    /// [`PbpHeader::validate`] before trusting the result.
    pub fn parse<R: Read>(f: &mut R) -> Result<Self> {
        let mut signature = [0u8; 4];
        f.read_exact(&mut signature)?;

        let mut version = [0u16; 2];
        f.read_u16_into::<LittleEndian>(&mut version)?;

        let mut offsets = [0u32; SECTION_COUNT];
        f.read_u32_into::<LittleEndian>(&mut offsets)?;

        trace!(
            "parsed header: version {}.{}, offsets {:?}",
            version[1], version[0], offsets
        );

        Ok(Self {
            signature,
            version,
            offsets,
        })
    }

    /// Serialize the header. Exact byte-level inverse of [`PbpHeader::parse`].
    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.signature)?;
        for v in self.version {
            w.write_u16::<LittleEndian>(v)?;
        }
        for offset in self.offsets {
            w.write_u32::<LittleEndian>(offset)?;
        }
        Ok(())
    }

    /// Check the signature and version fields.
    ///
    /// Signature byte 0 is not validated; bytes 1-3 must read `"PBP"`.
    ///
    /// The version rule is inherited from the original format tooling and
    /// is deliberately asymmetric: a header is rejected only when
    /// `major != 1` *and* `minor != 0` simultaneously, so e.g. versions
    /// 5.0 and 1.7 both pass. Known quirk, kept for compatibility with
    /// files in the wild.
    pub fn validate(&self) -> Result<()> {
        if self.signature[1..] != PBP_MAGIC {
            return Err(Error::InvalidSignature(self.signature));
        }
        if self.version[1] != 1 && self.version[0] != 0 {
            return Err(Error::InvalidVersion {
                major: self.version[1],
                minor: self.version[0],
            });
        }
        Ok(())
    }

    /// Raw signature bytes.
    pub const fn signature(&self) -> [u8; 4] {
        self.signature
    }

    /// Major version number.
    pub const fn major(&self) -> u16 {
        self.version[1]
    }

    /// Minor version number.
    pub const fn minor(&self) -> u16 {
        self.version[0]
    }

    /// Stored section offsets, absolute from the start of the container.
    pub const fn offsets(&self) -> &[u32; SECTION_COUNT] {
        &self.offsets
    }
}
