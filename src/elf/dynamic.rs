// Fri Oct 16 2026 - Alex

use crate::elf::{ElfError, ElfImage};
use goblin::elf::dynamic::{
    DT_GNU_HASH, DT_HASH, DT_NULL, DT_STRSZ, DT_STRTAB, DT_SYMENT, DT_SYMTAB,
};
use goblin::elf::program_header::ProgramHeader;
use goblin::elf::section_header::{SHN_UNDEF, SHT_DYNSYM};
use goblin::elf::sym::Symtab;
use goblin::strtab::Strtab;
use scroll::Pread;

/// One entry of a dynamic symbol table, with its name already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSymbol {
    pub name: String,
    pub st_type: u8,
    pub st_shndx: usize,
}

impl DynamicSymbol {
    pub fn new(name: impl Into<String>, st_type: u8, st_shndx: usize) -> Self {
        Self {
            name: name.into(),
            st_type,
            st_shndx,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.st_shndx != SHN_UNDEF as usize
    }
}

#[derive(Debug, Default, Clone)]
struct DynamicInfo {
    tags: Vec<(u64, u64)>,
    symtab: Option<u64>,
    strtab: Option<u64>,
    strsz: Option<u64>,
    syment: Option<u64>,
    hash: Option<u64>,
    gnu_hash: Option<u64>,
}

/// The symbol and string tables referenced by one PT_DYNAMIC segment.
pub struct DynamicSegment<'a> {
    count: usize,
    symtab: Symtab<'a>,
    strtab: Strtab<'a>,
}

impl<'a> DynamicSegment<'a> {
    /// Fails when the segment carries no DT_SYMTAB.
    pub fn parse(image: &'a ElfImage, index: usize, ph: &ProgramHeader) -> Result<Self, ElfError> {
        let info = read_dynamic_info(image, ph)?;

        let symtab_addr = info.symtab.ok_or(ElfError::MissingSymtab(index))?;
        let symtab_offset = image.vm_to_offset(symtab_addr)?;

        let count = symbol_count(image, &info, symtab_addr)?
            .ok_or(ElfError::UnknownSymbolCount(index))?;
        let symtab = Symtab::parse(image.data(), symtab_offset, count, image.ctx())?;

        let strtab = match info.strtab {
            Some(addr) => {
                let offset = image.vm_to_offset(addr)?;
                let len = info
                    .strsz
                    .and_then(|size| usize::try_from(size).ok())
                    .unwrap_or_else(|| image.data().len() - offset);
                Strtab::parse(image.data(), offset, len, 0x0)?
            }
            None => Strtab::parse(image.data(), 0, 0, 0x0)?,
        };

        log::debug!(
            "dynamic segment {}: {} symbols at 0x{:x}",
            index,
            count,
            symtab_offset
        );

        Ok(Self {
            count,
            symtab,
            strtab,
        })
    }

    /// Decodes symbols one at a time. Names that cannot be read come back
    /// empty.
    pub fn into_symbols(self) -> impl Iterator<Item = DynamicSymbol> + 'a {
        (0..self.count).filter_map(move |i| {
            let sym = self.symtab.get(i)?;
            let name = self.strtab.get_at(sym.st_name).unwrap_or_default();
            Some(DynamicSymbol::new(name, sym.st_type(), sym.st_shndx))
        })
    }
}

fn read_dynamic_info(image: &ElfImage, ph: &ProgramHeader) -> Result<DynamicInfo, ElfError> {
    let bytes = image.segment_data(ph)?;
    let le = image.ctx().le;
    let entry_size = if image.is_64() { 16 } else { 8 };

    let mut info = DynamicInfo::default();
    let mut offset = 0;

    while offset + entry_size <= bytes.len() {
        let (tag, val) = if image.is_64() {
            (
                bytes.pread_with::<u64>(offset, le)?,
                bytes.pread_with::<u64>(offset + 8, le)?,
            )
        } else {
            (
                bytes.pread_with::<u32>(offset, le)? as u64,
                bytes.pread_with::<u32>(offset + 4, le)? as u64,
            )
        };
        offset += entry_size;

        if tag == DT_NULL {
            break;
        }
        info.tags.push((tag, val));

        match tag {
            DT_SYMTAB => info.symtab = Some(val),
            DT_STRTAB => info.strtab = Some(val),
            DT_STRSZ => info.strsz = Some(val),
            DT_SYMENT => info.syment = Some(val),
            DT_HASH => info.hash = Some(val),
            DT_GNU_HASH => info.gnu_hash = Some(val),
            _ => {}
        }
    }

    Ok(info)
}

/// Symbol count, taken in order from DT_GNU_HASH, DT_HASH, a matching
/// SHT_DYNSYM section, and finally the distance from DT_SYMTAB to whatever
/// comes after it.
fn symbol_count(
    image: &ElfImage,
    info: &DynamicInfo,
    symtab_addr: u64,
) -> Result<Option<usize>, ElfError> {
    if let Some(addr) = info.gnu_hash {
        return gnu_hash_symbol_count(image, image.vm_to_offset(addr)?).map(Some);
    }

    if let Some(addr) = info.hash {
        return hash_symbol_count(image, image.vm_to_offset(addr)?).map(Some);
    }

    let from_section = image
        .section_headers()
        .iter()
        .find(|sh| sh.sh_type == SHT_DYNSYM && sh.sh_addr == symtab_addr && sh.sh_entsize != 0)
        .map(|sh| (sh.sh_size / sh.sh_entsize) as usize);
    if from_section.is_some() {
        return Ok(from_section);
    }

    Ok(table_extent_symbol_count(image, info, symtab_addr))
}

/// Without any count, the table is assumed to run up to the nearest dynamic
/// tag value above it, or else to the end of the segment holding it.
fn table_extent_symbol_count(
    image: &ElfImage,
    info: &DynamicInfo,
    symtab_addr: u64,
) -> Option<usize> {
    let entry_size = info.syment.unwrap_or(if image.is_64() { 24 } else { 16 });
    if entry_size == 0 {
        return None;
    }

    let nearest = info
        .tags
        .iter()
        .filter(|(tag, _)| *tag != DT_SYMENT)
        .map(|&(_, val)| val)
        .filter(|&val| val > symtab_addr)
        .min();

    let end = nearest.or_else(|| {
        image
            .program_headers()
            .iter()
            .filter_map(|ph| {
                let end = ph.p_vaddr.checked_add(ph.p_filesz)?;
                (ph.p_vaddr <= symtab_addr && symtab_addr <= end).then_some(end)
            })
            .last()
    })?;

    usize::try_from((end - symtab_addr) / entry_size).ok()
}

/// SysV hash: the chain count equals the number of symbols.
fn hash_symbol_count(image: &ElfImage, offset: usize) -> Result<usize, ElfError> {
    let nchain: u32 = image.data().pread_with(offset + 4, image.ctx().le)?;
    Ok(nchain as usize)
}

/// GNU hash has no symbol count; walk the chain of the highest bucket until
/// its terminator bit.
fn gnu_hash_symbol_count(image: &ElfImage, offset: usize) -> Result<usize, ElfError> {
    let data = image.data();
    let le = image.ctx().le;

    let nbuckets: u32 = data.pread_with(offset, le)?;
    let symoffset: u32 = data.pread_with(offset + 4, le)?;
    let bloom_size: u32 = data.pread_with(offset + 8, le)?;

    let word_size = if image.is_64() { 8 } else { 4 };
    let buckets = offset + 16 + bloom_size as usize * word_size;
    let chains = buckets + nbuckets as usize * 4;

    let mut max_index = 0u32;
    for i in 0..nbuckets as usize {
        let bucket: u32 = data.pread_with(buckets + i * 4, le)?;
        max_index = max_index.max(bucket);
    }

    if max_index < symoffset {
        return Ok(symoffset as usize);
    }

    loop {
        let hash: u32 = data.pread_with(chains + (max_index - symoffset) as usize * 4, le)?;
        if hash & 1 != 0 {
            return Ok(max_index as usize + 1);
        }
        max_index = max_index.checked_add(1).ok_or(scroll::Error::BadOffset(chains))?;
    }
}
