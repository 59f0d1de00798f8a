//! Loaded source files.

use std::path::Path;

use mag_ir::SourceMap;

use crate::Error;

/// A source text plus the label used for it in messages.
#[derive(Clone, Debug)]
pub struct SourceFile {
    label: String,
    source: SourceMap,
}

impl SourceFile {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            label: label.into(),
            source: SourceMap::new(text.into()),
        }
    }

    /// Read a file from disk, labelled with its path as given.
    pub fn read(path: &str) -> Result<Self, Error> {
        let text = std::fs::read_to_string(Path::new(path)).map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(SourceFile::new(path, text))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        self.source.text()
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source
    }
}
