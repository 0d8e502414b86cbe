// Fri Oct 16 2026 - Alex

#![allow(dead_code)]

use goblin::elf::sym::{STT_FUNC, STT_OBJECT};
use prx_trampgen::{Config, NidTable};
use std::path::PathBuf;

pub const TEXT_SECTION: u16 = 9;
pub const DATA_SECTION: u16 = 14;

const PT_LOAD: u32 = 1;
const PT_DYNAMIC: u32 = 2;
const DT_NULL: u64 = 0;
const DT_HASH: u64 = 4;
const DT_STRTAB: u64 = 5;
const DT_SYMTAB: u64 = 6;
const DT_STRSZ: u64 = 10;
const DT_SYMENT: u64 = 11;
const DT_GNU_HASH: u64 = 0x6fff_fef5;
const SHT_DYNSYM: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCount {
    SysvHash,
    GnuHash,
    SectionHeader,
    /// No count anywhere; DT_STRTAB follows the symbol table.
    NearestTag,
    /// No count anywhere; the symbol table ends the file and its segment.
    SegmentEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Elf32,
    Elf64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

pub const LAYOUTS: [(Class, ByteOrder); 4] = [
    (Class::Elf64, ByteOrder::Little),
    (Class::Elf64, ByteOrder::Big),
    (Class::Elf32, ByteOrder::Little),
    (Class::Elf32, ByteOrder::Big),
];

impl Class {
    fn ehdr_size(self) -> usize {
        match self {
            Class::Elf32 => 52,
            Class::Elf64 => 64,
        }
    }

    fn phdr_size(self) -> usize {
        match self {
            Class::Elf32 => 32,
            Class::Elf64 => 56,
        }
    }

    fn sym_size(self) -> usize {
        match self {
            Class::Elf32 => 16,
            Class::Elf64 => 24,
        }
    }

    fn shdr_size(self) -> usize {
        match self {
            Class::Elf32 => 40,
            Class::Elf64 => 64,
        }
    }

    fn word_size(self) -> usize {
        match self {
            Class::Elf32 => 4,
            Class::Elf64 => 8,
        }
    }
}

/// Byte sink that writes in the class and byte order of the image.
struct Writer {
    out: Vec<u8>,
    class: Class,
    order: ByteOrder,
}

impl Writer {
    fn new(class: Class, order: ByteOrder) -> Self {
        Self {
            out: Vec::new(),
            class,
            order,
        }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    fn u16(&mut self, value: u16) {
        match self.order {
            ByteOrder::Little => self.bytes(&value.to_le_bytes()),
            ByteOrder::Big => self.bytes(&value.to_be_bytes()),
        }
    }

    fn u32(&mut self, value: u32) {
        match self.order {
            ByteOrder::Little => self.bytes(&value.to_le_bytes()),
            ByteOrder::Big => self.bytes(&value.to_be_bytes()),
        }
    }

    fn u64(&mut self, value: u64) {
        match self.order {
            ByteOrder::Little => self.bytes(&value.to_le_bytes()),
            ByteOrder::Big => self.bytes(&value.to_be_bytes()),
        }
    }

    /// Address-sized field: 4 bytes in ELF32, 8 in ELF64.
    fn word(&mut self, value: u64) {
        match self.class {
            Class::Elf32 => self.u32(value as u32),
            Class::Elf64 => self.u64(value),
        }
    }

    fn pad_to(&mut self, len: usize) {
        self.out.resize(len, 0);
    }

    fn phdr(&mut self, p_type: u32, offset: u64, size: u64) {
        self.u32(p_type);
        if self.class == Class::Elf64 {
            self.u32(6);
        }
        self.word(offset);
        self.word(offset);
        self.word(offset);
        self.word(size);
        self.word(size);
        if self.class == Class::Elf32 {
            self.u32(6);
        }
        self.word(8);
    }

    fn dyn_entry(&mut self, tag: u64, val: u64) {
        self.word(tag);
        self.word(val);
    }

    fn sym(&mut self, name: u32, st_type: u8, st_shndx: u16) {
        let info = 0x10 | st_type;
        self.u32(name);
        if self.class == Class::Elf32 {
            self.u32(0x1000);
            self.u32(16);
        }
        self.bytes(&[info, 0]);
        self.u16(st_shndx);
        if self.class == Class::Elf64 {
            self.u64(0x1000);
            self.u64(16);
        }
    }

    fn dynsym_section(&mut self, addr: u64, size: u64) {
        self.u32(0);
        self.u32(SHT_DYNSYM);
        self.word(2);
        self.word(addr);
        self.word(addr);
        self.word(size);
        self.u32(0);
        self.u32(1);
        self.word(8);
        self.word(self.class.sym_size() as u64);
    }
}

struct TestSymbol {
    name: String,
    st_type: u8,
    st_shndx: u16,
}

/// Builds a minimal shared object whose only contents are one PT_LOAD
/// covering the file and one PT_DYNAMIC describing a dynamic symbol table.
/// Virtual addresses equal file offsets. Defaults to little-endian ELF64.
pub struct ElfBuilder {
    symbols: Vec<TestSymbol>,
    count: SymbolCount,
    class: Class,
    order: ByteOrder,
    symtab_tag: bool,
    syment: Option<u64>,
}

impl ElfBuilder {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            count: SymbolCount::SysvHash,
            class: Class::Elf64,
            order: ByteOrder::Little,
            symtab_tag: true,
            syment: None,
        }
    }

    pub fn symbol(mut self, name: &str, st_type: u8, st_shndx: u16) -> Self {
        self.symbols.push(TestSymbol {
            name: name.to_string(),
            st_type,
            st_shndx,
        });
        self
    }

    pub fn function(self, name: &str) -> Self {
        self.symbol(name, STT_FUNC, TEXT_SECTION)
    }

    pub fn object(self, name: &str) -> Self {
        self.symbol(name, STT_OBJECT, DATA_SECTION)
    }

    pub fn count(mut self, count: SymbolCount) -> Self {
        self.count = count;
        self
    }

    pub fn layout(mut self, class: Class, order: ByteOrder) -> Self {
        self.class = class;
        self.order = order;
        self
    }

    /// Leaves DT_SYMTAB out of the dynamic segment.
    pub fn without_symtab(mut self) -> Self {
        self.symtab_tag = false;
        self
    }

    /// Overrides the DT_SYMENT value.
    pub fn syment(mut self, syment: u64) -> Self {
        self.syment = Some(syment);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let class = self.class;
        let sym_size = class.sym_size();
        let dyn_size = 2 * class.word_size();
        let nsyms = self.symbols.len() + 1;

        let mut strtab = vec![0u8];
        let mut name_offsets = Vec::new();
        for sym in &self.symbols {
            if sym.name.is_empty() {
                name_offsets.push(0u32);
            } else {
                name_offsets.push(strtab.len() as u32);
                strtab.extend_from_slice(sym.name.as_bytes());
                strtab.push(0);
            }
        }

        let hash = match self.count {
            SymbolCount::SysvHash => Some((DT_HASH, self.sysv_hash(nsyms))),
            SymbolCount::GnuHash => Some((DT_GNU_HASH, self.gnu_hash(self.symbols.len()))),
            _ => None,
        };

        let dyn_count = 4 + usize::from(self.symtab_tag) + usize::from(hash.is_some());
        let dyn_offset = class.ehdr_size() + 2 * class.phdr_size();
        let hash_offset = dyn_offset + dyn_count * dyn_size;
        let hash_len = hash.as_ref().map(|(_, table)| table.len()).unwrap_or(0);
        let tables_offset = align8(hash_offset + hash_len);

        let strtab_first = self.count == SymbolCount::SegmentEnd;
        let (symtab_offset, strtab_offset, end_of_tables) = if strtab_first {
            let symtab_offset = align8(tables_offset + strtab.len());
            (symtab_offset, tables_offset, symtab_offset + nsyms * sym_size)
        } else {
            let strtab_offset = tables_offset + nsyms * sym_size;
            (tables_offset, strtab_offset, align8(strtab_offset + strtab.len()))
        };

        let with_sections = self.count == SymbolCount::SectionHeader;
        let shoff = if with_sections { end_of_tables } else { 0 };
        let total = end_of_tables + if with_sections { 2 * class.shdr_size() } else { 0 };

        let mut w = Writer::new(class, self.order);

        // ELF header
        let ei_class = match class {
            Class::Elf32 => 1,
            Class::Elf64 => 2,
        };
        let ei_data = match self.order {
            ByteOrder::Little => 1,
            ByteOrder::Big => 2,
        };
        w.bytes(&[0x7f, b'E', b'L', b'F', ei_class, ei_data, 1, 0]);
        w.bytes(&[0u8; 8]);
        w.u16(3);
        w.u16(if class == Class::Elf64 { 62 } else { 3 });
        w.u32(1);
        w.word(0);
        w.word(class.ehdr_size() as u64);
        w.word(shoff as u64);
        w.u32(0);
        w.u16(class.ehdr_size() as u16);
        w.u16(class.phdr_size() as u16);
        w.u16(2);
        w.u16(class.shdr_size() as u16);
        w.u16(if with_sections { 2 } else { 0 });
        w.u16(0);

        w.phdr(PT_LOAD, 0, total as u64);
        w.phdr(PT_DYNAMIC, dyn_offset as u64, (dyn_count * dyn_size) as u64);

        w.dyn_entry(DT_STRTAB, strtab_offset as u64);
        if self.symtab_tag {
            w.dyn_entry(DT_SYMTAB, symtab_offset as u64);
        }
        w.dyn_entry(DT_STRSZ, strtab.len() as u64);
        w.dyn_entry(DT_SYMENT, self.syment.unwrap_or(sym_size as u64));
        if let Some((tag, _)) = &hash {
            w.dyn_entry(*tag, hash_offset as u64);
        }
        w.dyn_entry(DT_NULL, 0);

        if let Some((_, table)) = &hash {
            w.bytes(table);
        }
        w.pad_to(tables_offset);

        if strtab_first {
            w.bytes(&strtab);
            w.pad_to(symtab_offset);
        }

        w.bytes(&vec![0u8; sym_size]);
        for (sym, name) in self.symbols.iter().zip(&name_offsets) {
            w.sym(*name, sym.st_type, sym.st_shndx);
        }

        if !strtab_first {
            w.bytes(&strtab);
        }
        w.pad_to(end_of_tables);

        if with_sections {
            w.bytes(&vec![0u8; class.shdr_size()]);
            w.dynsym_section(symtab_offset as u64, (nsyms * sym_size) as u64);
        }

        assert_eq!(w.out.len(), total);
        w.out
    }

    fn sysv_hash(&self, nsyms: usize) -> Vec<u8> {
        let mut w = Writer::new(self.class, self.order);
        w.u32(1);
        w.u32(nsyms as u32);
        w.u32(0);
        for _ in 0..nsyms {
            w.u32(0);
        }
        w.out
    }

    /// One bucket holding every symbol after the null entry.
    fn gnu_hash(&self, defined: usize) -> Vec<u8> {
        let mut w = Writer::new(self.class, self.order);
        w.u32(1);
        w.u32(1);
        w.u32(1);
        w.u32(0);
        w.word(0);
        w.u32(if defined > 0 { 1 } else { 0 });
        for i in 0..defined {
            w.u32(if i + 1 == defined { 1 } else { 0 });
        }
        w.out
    }
}

fn align8(value: usize) -> usize {
    (value + 7) & !7
}

pub fn nids() -> NidTable {
    [
        ("AB12", "sceDoThing"),
        ("CD34", "sceKernelOpen"),
        ("EF56", "sceKernelClose"),
        ("GH78", "sceLibcHeap"),
    ]
    .into_iter()
    .collect()
}

pub fn config(library_index: &str) -> Config {
    Config::new(
        PathBuf::from("libkernel.sprx"),
        "5".to_string(),
        library_index.to_string(),
    )
    .with_nid_db(PathBuf::from("nid_db.xml"))
}
