// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::elf::{ElfError, ElfImage};
use crate::nid::NidTable;
use crate::output::{OutputError, TrampolineEmitter};
use crate::symbol::{self, ExtractStats, SymbolKind};
use std::io::Write;

/// Everything one run produces. `source` is only written out by the caller.
#[derive(Debug, Clone)]
pub struct Generation {
    pub source: String,
    pub functions: Vec<String>,
    pub objects: Vec<String>,
    pub function_stats: ExtractStats,
    pub object_stats: ExtractStats,
}

impl Generation {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        writer.write_all(self.source.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

pub fn generate(config: &Config, nids: &NidTable) -> Result<Generation, ElfError> {
    let image = ElfImage::load(&config.prx)?;
    generate_from_image(&image, config, nids)
}

pub fn generate_from_image(
    image: &ElfImage,
    config: &Config,
    nids: &NidTable,
) -> Result<Generation, ElfError> {
    let (functions, function_stats) =
        symbol::sorted_symbols(image, SymbolKind::Function, &config.library_index, nids)?;
    let (objects, object_stats) =
        symbol::sorted_symbols(image, SymbolKind::Object, &config.library_index, nids)?;

    log::debug!(
        "{}: {} functions, {} objects from {} dynamic symbols",
        config.prx.display(),
        functions.len(),
        objects.len(),
        function_stats.scanned
    );

    let source = TrampolineEmitter::new(&config.module_id, &config.stem()).render(&functions, &objects);

    Ok(Generation {
        source,
        functions,
        objects,
        function_stats,
        object_stats,
    })
}
