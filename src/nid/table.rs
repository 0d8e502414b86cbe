// Fri Oct 16 2026 - Alex

use crate::nid::NidError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct NidEntry {
    obf: String,
    sym: String,
}

#[derive(Debug, Deserialize)]
struct XmlEntry {
    #[serde(rename = "@obf")]
    obf: String,
    #[serde(rename = "@sym")]
    sym: String,
}

/// `<root><entry obf=".." sym=".."/>...</root>`
#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<XmlEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NidDocument {
    Entries(Vec<NidEntry>),
    Map(HashMap<String, String>),
}

/// Maps obfuscated NIDs to the symbol names they were hashed from.
#[derive(Debug, Clone, Default)]
pub struct NidTable {
    names: HashMap<String, String>,
}

impl NidTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NidError> {
        let content = fs::read_to_string(path.as_ref())?;
        let table = Self::parse(&content)?;
        log::debug!(
            "loaded {} NIDs from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Picks XML for documents starting with a tag, JSON otherwise.
    pub fn parse(content: &str) -> Result<Self, NidError> {
        if content.trim_start().starts_with('<') {
            Self::from_xml(content)
        } else {
            Self::from_json(content)
        }
    }

    pub fn from_xml(content: &str) -> Result<Self, NidError> {
        let document: XmlDocument = quick_xml::de::from_str(content)?;
        Ok(document
            .entries
            .into_iter()
            .map(|entry| (entry.obf, entry.sym))
            .collect())
    }

    pub fn from_json(content: &str) -> Result<Self, NidError> {
        let document: NidDocument = serde_json::from_str(content)?;

        let names = match document {
            NidDocument::Entries(entries) => entries
                .into_iter()
                .map(|entry| (entry.obf, entry.sym))
                .collect(),
            NidDocument::Map(map) => map,
        };

        Ok(Self { names })
    }

    pub fn insert(&mut self, nid: impl Into<String>, name: impl Into<String>) {
        self.names.insert(nid.into(), name.into());
    }

    pub fn lookup(&self, nid: &str) -> Option<&str> {
        self.names.get(nid).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NidTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (nid, name) in iter {
            table.insert(nid, name);
        }
        table
    }
}
