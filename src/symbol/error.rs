// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Malformed composite name {name:?}: expected 3 '#'-separated parts, found {parts}")]
    MalformedComposite { name: String, parts: usize },
}
