//! Assembling PBP containers
//!
//! Offsets are cumulative in slot order, starting right after the
//! header. An absent slot repeats the running offset, which is exactly
//! how readers derive a zero size for it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, HEADER_SIZE, PbpHeader, Result, SECTION_COUNT, SectionId};

/// Content source for one slot when packing from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSource {
    /// The slot has no content.
    Absent,
    /// Read the slot's content from this file.
    File(PathBuf),
}

/// Builder for assembling a container from in-memory section contents.
///
/// All slots start absent.
#[derive(Debug, Clone, Default)]
pub struct PbpBuilder {
    slots: [Option<Vec<u8>>; SECTION_COUNT],
}

impl PbpBuilder {
    /// Create a builder with every slot absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot's content, replacing any previous content.
    #[must_use]
    pub fn section(mut self, id: SectionId, data: Vec<u8>) -> Self {
        self.slots[id.index()] = Some(data);
        self
    }

    /// Compute the header's offset table from the slot contents.
    fn offsets(&self) -> Result<[u32; SECTION_COUNT]> {
        let mut offsets = [0u32; SECTION_COUNT];
        let mut cursor = HEADER_SIZE as u64;
        for (i, slot) in self.slots.iter().enumerate() {
            offsets[i] =
                u32::try_from(cursor).map_err(|_| Error::ContainerTooLarge { size: cursor })?;
            if let Some(data) = slot {
                cursor += data.len() as u64;
            }
        }
        if cursor > u64::from(u32::MAX) {
            return Err(Error::ContainerTooLarge { size: cursor });
        }
        Ok(offsets)
    }

    /// Total container size: header plus all slot contents.
    pub fn total_len(&self) -> u64 {
        HEADER_SIZE as u64
            + self
                .slots
                .iter()
                .flatten()
                .map(|data| data.len() as u64)
                .sum::<u64>()
    }

    /// Serialize the container: header followed by slot contents in
    /// slot order. Deterministic for identical inputs.
    pub fn build(&self) -> Result<Vec<u8>> {
        let header = PbpHeader::new(self.offsets()?);
        let mut out = Vec::with_capacity(self.total_len() as usize);
        header.write(&mut out)?;
        for data in self.slots.iter().flatten() {
            out.extend_from_slice(data);
        }
        Ok(out)
    }

    /// Stream the same bytes as [`PbpBuilder::build`] to a writer.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let header = PbpHeader::new(self.offsets()?);
        header.write(w)?;
        for data in self.slots.iter().flatten() {
            w.write_all(data)?;
        }
        Ok(())
    }
}

/// Result of a pack run.
#[derive(Debug, Clone, Copy)]
pub struct PackSummary {
    /// Number of slots with content.
    pub sections: usize,
    /// Total bytes written, header included.
    pub total_len: u64,
}

/// Assemble a container from up to 8 input files.
///
/// Input reads are all-or-nothing: any unreadable input aborts before
/// the output file is created. The full container is buffered in memory
/// and committed with a single write.
pub fn pack<P: AsRef<Path>>(
    output: P,
    sources: &[SlotSource; SECTION_COUNT],
) -> Result<PackSummary> {
    let mut builder = PbpBuilder::new();
    let mut sections = 0;

    for (id, source) in SectionId::ALL.into_iter().zip(sources) {
        match source {
            SlotSource::Absent => {}
            SlotSource::File(path) => {
                let data = fs::read(path)?;
                debug!("read '{}' ({} bytes) for {}", path.display(), data.len(), id.name());
                builder = builder.section(id, data);
                sections += 1;
            }
        }
    }

    let bytes = builder.build()?;
    fs::write(output, &bytes)?;

    Ok(PackSummary {
        sections,
        total_len: bytes.len() as u64,
    })
}
