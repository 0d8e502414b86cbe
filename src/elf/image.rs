// Fri Oct 16 2026 - Alex

use crate::elf::{DynamicSegment, DynamicSymbol, ElfError};
use goblin::container::{Container, Ctx};
use goblin::elf::program_header::{ProgramHeader, PT_DYNAMIC, PT_LOAD};
use goblin::elf::section_header::SectionHeader;
use goblin::elf::Elf;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An ELF file held in memory together with its parsed program and section
/// headers.
pub struct ElfImage {
    data: Vec<u8>,
    ctx: Ctx,
    program_headers: Vec<ProgramHeader>,
    section_headers: Vec<SectionHeader>,
}

impl ElfImage {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ElfError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ElfError> {
        let header = Elf::parse_header(&data)?;
        let ctx = Ctx::new(header.container()?, header.endianness()?);

        let program_headers =
            ProgramHeader::parse(&data, header.e_phoff as usize, header.e_phnum as usize, ctx)?;

        let section_headers = if header.e_shoff != 0 && header.e_shnum != 0 {
            SectionHeader::parse(&data, header.e_shoff as usize, header.e_shnum as usize, ctx)?
        } else {
            Vec::new()
        };

        Ok(Self {
            data,
            ctx,
            program_headers,
            section_headers,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn ctx(&self) -> Ctx {
        self.ctx
    }

    pub fn is_64(&self) -> bool {
        matches!(self.ctx.container, Container::Big)
    }

    pub(crate) fn program_headers(&self) -> &[ProgramHeader] {
        &self.program_headers
    }

    pub(crate) fn section_headers(&self) -> &[SectionHeader] {
        &self.section_headers
    }

    /// Translates a virtual address into a file offset through the PT_LOAD
    /// segments. The offset must lie inside the file.
    pub fn vm_to_offset(&self, vaddr: u64) -> Result<usize, ElfError> {
        self.program_headers
            .iter()
            .filter(|ph| ph.p_type == PT_LOAD)
            .find(|ph| vaddr >= ph.p_vaddr && vaddr - ph.p_vaddr < ph.p_filesz)
            .and_then(|ph| (vaddr - ph.p_vaddr).checked_add(ph.p_offset))
            .and_then(|offset| usize::try_from(offset).ok())
            .filter(|&offset| offset < self.data.len())
            .ok_or(ElfError::UnmappedAddress(vaddr))
    }

    /// File bytes covered by a program header.
    pub fn segment_data(&self, ph: &ProgramHeader) -> Result<&[u8], ElfError> {
        let truncated = || ElfError::Truncated {
            offset: ph.p_offset,
            size: ph.p_filesz,
        };
        let start = usize::try_from(ph.p_offset).map_err(|_| truncated())?;
        let size = usize::try_from(ph.p_filesz).map_err(|_| truncated())?;
        start
            .checked_add(size)
            .and_then(|end| self.data.get(start..end))
            .ok_or_else(truncated)
    }

    /// Parses every PT_DYNAMIC segment. Segments of other types are ignored.
    pub fn dynamic_segments(&self) -> Result<Vec<DynamicSegment<'_>>, ElfError> {
        self.program_headers
            .iter()
            .enumerate()
            .filter(|(_, ph)| ph.p_type == PT_DYNAMIC)
            .map(|(index, ph)| DynamicSegment::parse(self, index, ph))
            .collect()
    }

    /// All symbols of all dynamic segments, in file order. The tables are
    /// validated up front; the symbols themselves are decoded lazily.
    pub fn dynamic_symbols(&self) -> Result<impl Iterator<Item = DynamicSymbol> + '_, ElfError> {
        let segments = self.dynamic_segments()?;
        Ok(segments.into_iter().flat_map(DynamicSegment::into_symbols))
    }
}
