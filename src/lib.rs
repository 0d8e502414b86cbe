// Fri Oct 16 2026 - Alex

pub mod config;
pub mod elf;
pub mod nid;
pub mod output;
pub mod pipeline;
pub mod symbol;
pub mod ui;

pub use config::Config;
pub use elf::ElfImage;
pub use nid::NidTable;
pub use output::TrampolineEmitter;
pub use pipeline::{generate, Generation};
pub use symbol::{SymbolExtractor, SymbolKind};
