use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edge::EdgeDescriptor;
use crate::error::{MirrorBoxError, Result};
use crate::grid::MirrorBox;

/// A box description as read from JSON.
///
/// ```json
/// { "width": 5, "height": 5, "mirrors": ["CC/", "AB\\"], "entries": [">C"] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub mirrors: Vec<String>,
    #[serde(default)]
    pub entries: Vec<String>,
}

impl BoxConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MirrorBoxError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Describes an existing box, without entries.
    pub fn from_box(mirror_box: &MirrorBox) -> Self {
        Self {
            width: mirror_box.width(),
            height: mirror_box.height(),
            mirrors: mirror_box.mirrors().map(|m| m.to_string()).collect(),
            entries: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<MirrorBox> {
        MirrorBox::parse(self.width, self.height, self.mirrors.as_slice())
    }

    /// Parses the configured entries, validated against `mirror_box`.
    pub fn entry_descriptors(&self, mirror_box: &MirrorBox) -> Result<Vec<EdgeDescriptor>> {
        self.entries
            .iter()
            .map(|text| -> Result<EdgeDescriptor> {
                let entry: EdgeDescriptor = text.parse()?;
                entry.validate(mirror_box)?;
                Ok(entry)
            })
            .collect()
    }
}
