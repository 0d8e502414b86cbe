// Fri Oct 16 2026 - Alex

pub mod emitter;
pub mod error;
pub mod template;

pub use emitter::TrampolineEmitter;
pub use error::OutputError;
pub use template::LOADER_CONSTRUCTOR_PRIORITY;
