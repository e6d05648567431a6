//! Section identities and the offset/size layout resolver
//!
//! A PBP header stores no sizes. A slot's size is derived from the next
//! slot's offset (or the container length for the last slot), and a slot
//! whose derived size is zero is absent. All derivation arithmetic runs
//! in 64 bits so adversarial 32-bit offsets cannot wrap.

use std::ops::Range;

use crate::{Error, HEADER_SIZE, PbpHeader, Result, SECTION_COUNT};

/// The eight fixed section slots of a PBP container, in storage order.
///
/// Section identity is purely positional; each slot is bound to a
/// canonical file name used when unpacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    ParamSfo,
    Icon0Png,
    Icon1Pmf,
    Pic0Png,
    Pic1Png,
    Snd0At3,
    DataPsp,
    DataPsar,
}

impl SectionId {
    /// All slots in storage order.
    pub const ALL: [Self; SECTION_COUNT] = [
        Self::ParamSfo,
        Self::Icon0Png,
        Self::Icon1Pmf,
        Self::Pic0Png,
        Self::Pic1Png,
        Self::Snd0At3,
        Self::DataPsp,
        Self::DataPsar,
    ];

    /// Canonical file name bound to this slot.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ParamSfo => "PARAM.SFO",
            Self::Icon0Png => "ICON0.PNG",
            Self::Icon1Pmf => "ICON1.PMF",
            Self::Pic0Png => "PIC0.PNG",
            Self::Pic1Png => "PIC1.PNG",
            Self::Snd0At3 => "SND0.AT3",
            Self::DataPsp => "DATA.PSP",
            Self::DataPsar => "DATA.PSAR",
        }
    }

    /// Index of this slot in the header's offset table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One slot's resolved placement within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    /// Stored offset, absolute from the start of the container.
    pub offset: u32,
    /// Derived size in bytes; 0 means the slot is absent.
    pub size: u64,
}

impl SectionEntry {
    /// Whether the slot has any content.
    pub const fn is_present(&self) -> bool {
        self.size > 0
    }

    /// Byte range of this section within the payload view of the
    /// container, i.e. `&container[HEADER_SIZE..]`.
    ///
    /// Rejects slots whose stored offset points before the end of the
    /// header or whose end runs past the container, so the returned
    /// range can always be sliced out of the payload.
    pub fn payload_range(&self, total_len: u64) -> Result<Range<usize>> {
        let corrected = i64::from(self.offset) - HEADER_SIZE as i64;
        let end = u64::from(self.offset).saturating_add(self.size);
        if corrected < 0 || end > total_len {
            return Err(Error::SectionOutOfBounds {
                name: self.id.name(),
                offset: self.offset,
                size: self.size,
                total_len,
            });
        }
        let start = corrected as usize;
        Ok(start..start + self.size as usize)
    }
}

/// Resolved layout of all 8 slots of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    entries: [SectionEntry; SECTION_COUNT],
}

impl SectionLayout {
    /// Derive every slot's size from the offset table and the container
    /// length.
    ///
    /// Slot `i` spans `offset[i+1] - offset[i]` bytes when the next
    /// offset is greater, else it is absent; the last slot runs to the
    /// end of the container.
    pub fn resolve(header: &PbpHeader, total_len: u64) -> Self {
        let offsets = header.offsets();
        let entries = SectionId::ALL.map(|id| {
            let i = id.index();
            let offset = offsets[i];
            let next = if i + 1 < SECTION_COUNT {
                u64::from(offsets[i + 1])
            } else {
                total_len
            };
            SectionEntry {
                id,
                offset,
                size: next.saturating_sub(u64::from(offset)),
            }
        });
        Self { entries }
    }

    /// Entry for one slot.
    pub const fn get(&self, id: SectionId) -> &SectionEntry {
        &self.entries[id.index()]
    }

    /// All entries in storage order.
    pub const fn entries(&self) -> &[SectionEntry; SECTION_COUNT] {
        &self.entries
    }

    /// Iterate entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry> {
        self.entries.iter()
    }
}
