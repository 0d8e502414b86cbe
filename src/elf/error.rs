// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Binary parse error: {0}")]
    Parse(#[from] goblin::error::Error),
    #[error("Read error: {0}")]
    Read(#[from] scroll::Error),
    #[error("Virtual address 0x{0:x} is not backed by any PT_LOAD segment")]
    UnmappedAddress(u64),
    #[error("Dynamic segment {0} does not contain DT_SYMTAB")]
    MissingSymtab(usize),
    #[error("Cannot determine symbol count of dynamic segment {0}")]
    UnknownSymbolCount(usize),
    #[error("Segment data 0x{offset:x}+0x{size:x} lies outside the file")]
    Truncated { offset: u64, size: u64 },
}
