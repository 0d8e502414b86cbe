// Fri Oct 16 2026 - Alex

use goblin::elf::sym::{STT_FUNC, STT_OBJECT};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Object,
}

impl SymbolKind {
    pub fn st_type(self) -> u8 {
        match self {
            SymbolKind::Function => STT_FUNC,
            SymbolKind::Object => STT_OBJECT,
        }
    }

    pub fn matches(self, st_type: u8) -> bool {
        self.st_type() == st_type
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Function => write!(f, "STT_FUNC"),
            SymbolKind::Object => write!(f, "STT_OBJECT"),
        }
    }
}
