//! The scraper's editable files
//!
//! ```text
//! /app/config/
//! ├── config.yaml           # platforms section, notification keys, push window
//! ├── frequency_words.txt   # keyword groups
//! └── crontab               # single schedule line
//! ```
//!
//! Every operation reads the file fresh, transforms it in memory and writes
//! it back whole. Nothing is cached between operations, so edits made in an
//! external editor are always picked up.

use std::path::Path;

use tracing::{debug, warn};

use crate::buffer::LineBuffer;
use crate::common::fs::{read_text, write_atomic};
use crate::error::{self, Result};
use crate::keywords::KeywordDocument;
use crate::platform::{PlatformSection, SECTION_HEADER};
use crate::schedule;
use crate::settings::Settings;

/// The file set described by [`Settings`]
#[derive(Debug, Clone)]
pub struct Workspace {
    pub settings: Settings,
}

impl Workspace {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn config_path(&self) -> &Path {
        &self.settings.config_path
    }

    pub fn keywords_path(&self) -> &Path {
        &self.settings.keywords_path
    }

    pub fn crontab_path(&self) -> &Path {
        &self.settings.crontab_path
    }

    pub fn load_config(&self) -> Result<LineBuffer> {
        Ok(LineBuffer::from_text(&read_text(self.config_path())?))
    }

    pub fn save_config(&self, buffer: &LineBuffer) -> Result<()> {
        write_atomic(self.config_path(), &buffer.to_text())
    }

    /// Read the config file and parse its platforms section.
    ///
    /// Parse diagnostics are logged; a missing section is an error.
    pub fn load_platforms(&self) -> Result<(LineBuffer, PlatformSection)> {
        let buffer = self.load_config()?;
        let section = PlatformSection::parse(&buffer).ok_or_else(|| {
            error::section::not_found(
                SECTION_HEADER.trim_end_matches(':'),
                self.config_path().display().to_string(),
            )
        })?;
        for diagnostic in &section.diagnostics {
            warn!(path = %self.config_path().display(), "{diagnostic}");
        }
        Ok((buffer, section))
    }

    /// Splice an edited section into `buffer` and write it.
    pub fn save_platforms(&self, section: PlatformSection, buffer: &LineBuffer) -> Result<()> {
        debug!(entries = section.entries.len(), "saving platforms");
        self.save_config(&section.splice_into(buffer))
    }

    pub fn load_keywords(&self) -> Result<KeywordDocument> {
        Ok(KeywordDocument::decode(&read_text(self.keywords_path())?))
    }

    pub fn save_keywords(&self, document: &KeywordDocument) -> Result<()> {
        write_atomic(self.keywords_path(), &document.encode())
    }

    /// Current cron expression, `None` when the crontab is empty or missing
    pub fn schedule(&self) -> Result<Option<String>> {
        let content = read_text(self.crontab_path())?;
        Ok(schedule::current(&content, &self.settings.workdir))
    }

    pub fn set_schedule(&self, expression: &str) -> Result<()> {
        let content = schedule::render(expression, &self.settings.workdir, &self.settings.runner);
        write_atomic(self.crontab_path(), &content)
    }
}
