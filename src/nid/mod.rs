// Fri Oct 16 2026 - Alex

pub mod error;
pub mod table;

pub use error::NidError;
pub use table::NidTable;

use once_cell::sync::OnceCell;
use std::path::Path;

static NID_TABLE: OnceCell<NidTable> = OnceCell::new();

/// Loads the NID database once for the lifetime of the process.
pub fn init<P: AsRef<Path>>(path: P) -> Result<&'static NidTable, NidError> {
    let table = NidTable::load(path)?;
    NID_TABLE
        .set(table)
        .map_err(|_| NidError::AlreadyInitialized)?;
    NID_TABLE.get().ok_or(NidError::AlreadyInitialized)
}
