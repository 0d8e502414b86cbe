// Fri Oct 16 2026 - Alex

use crate::elf::DynamicSymbol;
use crate::nid::NidTable;
use crate::symbol::{CompositeName, SymbolKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub scanned: usize,
    pub resolved: usize,
    pub unknown: usize,
    pub malformed: usize,
}

/// Lazily filters dynamic symbols down to the canonical names of one kind
/// exported by one library.
pub struct SymbolExtractor<'a, I> {
    symbols: I,
    kind: SymbolKind,
    library_index: &'a str,
    nids: &'a NidTable,
    stats: ExtractStats,
}

impl<'a, I> SymbolExtractor<'a, I>
where
    I: Iterator<Item = DynamicSymbol>,
{
    pub fn new(symbols: I, kind: SymbolKind, library_index: &'a str, nids: &'a NidTable) -> Self {
        Self {
            symbols,
            kind,
            library_index,
            nids,
            stats: ExtractStats::default(),
        }
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    fn resolve(&mut self, sym: &DynamicSymbol) -> Option<String> {
        if !self.kind.matches(sym.st_type) || !sym.is_defined() || sym.name.is_empty() {
            return None;
        }

        let composite = match CompositeName::parse(&sym.name) {
            Ok(composite) => composite,
            Err(e) => {
                log::warn!("skipping symbol: {}", e);
                self.stats.malformed += 1;
                return None;
            }
        };

        if composite.library_id != self.library_index {
            return None;
        }

        match self.nids.lookup(&composite.nid) {
            Some(name) => {
                self.stats.resolved += 1;
                Some(name.to_string())
            }
            None => {
                log::warn!("skipping unknown NID {}", composite.nid);
                self.stats.unknown += 1;
                None
            }
        }
    }
}

impl<'a, I> Iterator for SymbolExtractor<'a, I>
where
    I: Iterator<Item = DynamicSymbol>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(sym) = self.symbols.next() {
            self.stats.scanned += 1;
            if let Some(name) = self.resolve(&sym) {
                return Some(name);
            }
        }
        None
    }
}
