//! Platform section editing
//!
//! This module handles:
//! - The platform entry model (id, display name, enabled flag)
//! - Locating and decoding the `platforms:` list (via parser module)
//! - Re-encoding the list and splicing it back into the file (via serializer module)
//! - The catalog of well-known platform ids (via registry module)
//!
//! A disabled platform is one whose lines are commented out with `#`; it
//! stays in the file so it can be re-enabled later without retyping it.

use serde::{Deserialize, Serialize};

pub mod parser;
pub mod registry;
pub mod serializer;


/// Header of the section holding the platform list.
pub const SECTION_HEADER: &str = "platforms:";

/// Name given to an item that has no `name:` line.
pub const UNKNOWN_NAME: &str = "unknown";

/// One entry of the platform list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    /// Platform identifier (e.g., "weibo", "zhihu")
    pub id: String,

    /// Display name (e.g., "微博")
    pub name: String,

    /// Whether the entry is active (not commented out)
    pub enabled: bool,

    /// Raw lines the entry was decoded from; discarded on rewrite
    #[serde(skip)]
    pub source_lines: Vec<String>,
}

impl PlatformEntry {
    /// Create a new enabled entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            source_lines: Vec::new(),
        }
    }

    /// Mark the entry disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Problems found while decoding the section.
///
/// Decoding never fails; these record what was skipped or suspicious so the
/// caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnostic {
    /// An item line matched `- id:` but carried no id; the item was dropped.
    EmptyId { line: usize },
    /// An id seen earlier in the section appeared again; both entries kept.
    DuplicateId { id: String, line: usize },
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseDiagnostic::EmptyId { line } => {
                write!(f, "line {}: platform item without an id was skipped", line + 1)
            }
            ParseDiagnostic::DuplicateId { id, line } => {
                write!(f, "line {}: platform id '{id}' appears more than once", line + 1)
            }
        }
    }
}

/// Decoded `platforms:` section and the line span it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSection {
    /// Entries in file order
    pub entries: Vec<PlatformEntry>,

    /// Index of the `platforms:` header line
    pub start_line: usize,

    /// Index of the first line after the section (or the buffer length)
    pub end_line: usize,

    /// What the parser skipped or flagged
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl PlatformSection {
    /// Whether an entry with this id exists
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Append an entry at the end of the list
    pub fn append(&mut self, entry: PlatformEntry) {
        self.entries.push(entry);
    }

    /// Remove entries by 0-based index.
    ///
    /// Out-of-range and repeated indices are ignored. Returns the removed
    /// entries in list order.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<PlatformEntry> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for (idx, entry) in std::mem::take(&mut self.entries).into_iter().enumerate() {
            if indices.contains(&idx) {
                removed.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        removed
    }

    /// Flip the enabled flag of one entry, returning the new state
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.enabled = !entry.enabled;
        Some(entry.enabled)
    }
}
