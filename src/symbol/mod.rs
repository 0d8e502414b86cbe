// Fri Oct 16 2026 - Alex

pub mod composite;
pub mod error;
pub mod extractor;
pub mod kind;

pub use composite::CompositeName;
pub use error::SymbolError;
pub use extractor::{ExtractStats, SymbolExtractor};
pub use kind::SymbolKind;

use crate::elf::{ElfError, ElfImage};
use crate::nid::NidTable;
use itertools::Itertools;

/// Resolves every matching symbol of `image` and returns the names sorted.
/// Duplicates are kept.
pub fn sorted_symbols(
    image: &ElfImage,
    kind: SymbolKind,
    library_index: &str,
    nids: &NidTable,
) -> Result<(Vec<String>, ExtractStats), ElfError> {
    let mut extractor = SymbolExtractor::new(image.dynamic_symbols()?, kind, library_index, nids);
    let names: Vec<String> = extractor.by_ref().sorted().collect();

    let stats = extractor.stats();
    log::debug!(
        "{}: {} of {} symbols resolved for library {}",
        kind,
        names.len(),
        stats.scanned,
        library_index
    );
    Ok((names, stats))
}
