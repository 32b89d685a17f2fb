//! Display names for segment and company codes.
//!
//! Decoding never fails because a name is missing; these tables only add
//! labels to a verified record.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Source of human-readable names for codes found in the payload
pub trait NameLookup: Sync {
    /// Name of the segment with code `code`
    fn segment_name(&self, code: char) -> Option<&str>;
    /// Name of the company with the 4-digit identifier `id`
    fn company_name(&self, id: &str) -> Option<&str>;
}

const SEGMENTS: [(char, &str); 8] = [
    ('1', "Prefeituras"),
    ('2', "Saneamento"),
    ('3', "Energia Elétrica e Gás"),
    ('4', "Telecomunicações"),
    ('5', "Órgãos Governamentais"),
    ('6', "Carnês e Assemelhados"),
    ('7', "Multas de Trânsito"),
    ('9', "Uso Exclusivo do Banco"),
];

const COMPANIES: [(&str, &str); 1] = [("0109", "Live TIM")];

/// Compiled-in tables
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

static BUILTIN: BuiltinNames = BuiltinNames;

impl NameLookup for BuiltinNames {
    fn segment_name(&self, code: char) -> Option<&str> {
        SEGMENTS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    fn company_name(&self, id: &str) -> Option<&str> {
        COMPANIES
            .iter()
            .find(|(c, _)| *c == id)
            .map(|(_, name)| *name)
    }
}

/// Failure while loading a company table file
#[derive(Debug, Error)]
pub enum LookupError {
    /// The file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A non-blank line is not a valid entry
    #[error("line {line}: {message}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        message: String,
    },
}

/// Company names loaded at runtime, layered over [`BuiltinNames`]
#[derive(Debug, Clone, Default)]
pub struct CompanyTable {
    companies: HashMap<String, String>,
}

impl CompanyTable {
    /// Empty table; lookups fall through to the built-ins
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one company name
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.companies.insert(id.into(), name.into());
    }

    /// Number of loaded entries, built-ins excluded
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// True when nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Read a table file: one `id<TAB>name` or `id=name` entry per line,
    /// blank lines and `#` comments ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse table text in the format accepted by [`CompanyTable::load`].
    pub fn parse(content: &str) -> Result<Self, LookupError> {
        let mut table = Self::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (id, name) = line
                .split_once('\t')
                .or_else(|| line.split_once('='))
                .ok_or_else(|| LookupError::Malformed {
                    line: idx + 1,
                    message: "expected `id<TAB>name` or `id=name`".to_string(),
                })?;
            let (id, name) = (id.trim(), name.trim());
            if id.len() != 4 || !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LookupError::Malformed {
                    line: idx + 1,
                    message: format!("company id {id:?} is not 4 digits"),
                });
            }
            if name.is_empty() {
                return Err(LookupError::Malformed {
                    line: idx + 1,
                    message: format!("company {id} has no name"),
                });
            }
            table.insert(id, name);
        }
        Ok(table)
    }
}

impl NameLookup for CompanyTable {
    fn segment_name(&self, code: char) -> Option<&str> {
        BUILTIN.segment_name(code)
    }

    fn company_name(&self, id: &str) -> Option<&str> {
        self.companies
            .get(id)
            .map(String::as_str)
            .or_else(|| BUILTIN.company_name(id))
    }
}
