// Fri Oct 16 2026 - Alex

use crate::symbol::SymbolError;
use std::fmt;
use std::str::FromStr;

pub const COMPOSITE_DELIMITER: char = '#';

/// A dynamic symbol name of the form `nid#library#module`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeName {
    pub nid: String,
    pub library_id: String,
    pub module_id: String,
}

impl CompositeName {
    pub fn parse(name: &str) -> Result<Self, SymbolError> {
        let parts: Vec<&str> = name.split(COMPOSITE_DELIMITER).collect();

        match parts.as_slice() {
            [nid, library_id, module_id] => Ok(Self {
                nid: nid.to_string(),
                library_id: library_id.to_string(),
                module_id: module_id.to_string(),
            }),
            _ => Err(SymbolError::MalformedComposite {
                name: name.to_string(),
                parts: parts.len(),
            }),
        }
    }
}

impl FromStr for CompositeName {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CompositeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}",
            self.nid,
            self.library_id,
            self.module_id,
            d = COMPOSITE_DELIMITER
        )
    }
}
