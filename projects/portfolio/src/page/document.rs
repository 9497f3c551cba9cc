use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::{Element, Page};
use crate::selector::Selector;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl PageElement {
    pub fn new(tag: &str, id: Option<&str>, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            text: text.to_string(),
        }
    }
}

impl Element for PageElement {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// In-memory page. Serialized as a bare JSON array of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub elements: Vec<PageElement>,
}

impl Document {
    pub fn new(elements: Vec<PageElement>) -> Self {
        Self { elements }
    }

    /// First element carrying `id`, if any.
    pub fn by_id(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id() == Some(id))
    }

    pub fn read_from(path: &Path) -> Result<Self, PageFileError> {
        let raw = fs::read_to_string(path).map_err(|source| PageFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| PageFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, PageFileError> {
        serde_json::to_string_pretty(self).map_err(|source| PageFileError::Serialize { source })
    }

    pub fn write_to(&self, path: &Path) -> Result<(), PageFileError> {
        let mut json = self.to_json()?;
        json.push('\n');

        fs::write(path, json).map_err(|source| PageFileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Page for Document {
    type Element = PageElement;

    fn select_mut(&mut self, selector: &Selector) -> Vec<&mut PageElement> {
        self.elements
            .iter_mut()
            .filter(|element| selector.matches(&**element))
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum PageFileError {
    #[error("Read: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse: {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialize: {source}")]
    Serialize {
        source: serde_json::Error,
    },

    #[error("Write: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
