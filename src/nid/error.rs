// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("NID table already initialized")]
    AlreadyInitialized,
}
