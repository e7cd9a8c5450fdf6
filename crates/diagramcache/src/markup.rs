//! Content-addressed diagram built from markup source
//!
//! The ID is the SHA-256 of the JSON form of the diagram's description
//! (`kind`, `source`, `attributes`). The rendered `output` is not part of the
//! ID, so a bare description finds its rendered counterpart in a cache.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::diagram::Diagram;

/// A diagram described by markup text, optionally carrying its rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupDiagram {
    /// Diagram type, e.g. `flowchart` or `sequence`
    pub kind: String,

    /// Markup source
    pub source: String,

    /// Rendering options that change the output
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,

    /// Rendered result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<u8>>,
}

/// Fields that make up a diagram's identity
#[derive(Serialize)]
struct Identity<'a> {
    kind: &'a str,
    source: &'a str,
    attributes: &'a BTreeMap<String, serde_json::Value>,
}

impl MarkupDiagram {
    /// Create a description with no attributes and no output
    pub fn new(kind: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            source: source.into(),
            attributes: BTreeMap::new(),
            output: None,
        }
    }

    /// Set a rendering attribute
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attach a rendered result
    pub fn with_output(mut self, output: impl Into<Vec<u8>>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Same description without the rendered result
    pub fn description(&self) -> Self {
        Self {
            output: None,
            ..self.clone()
        }
    }

    /// Check whether a rendered result is attached
    pub fn is_rendered(&self) -> bool {
        self.output.is_some()
    }
}

impl Diagram for MarkupDiagram {
    type Error = serde_json::Error;

    fn id(&self) -> Result<String, Self::Error> {
        let identity = serde_json::to_vec(&Identity {
            kind: &self.kind,
            source: &self.source,
            attributes: &self.attributes,
        })?;

        let digest = Sha256::digest(&identity);
        let mut id = String::with_capacity(digest.len() * 2);
        for byte in digest {
            // Writing to a String cannot fail
            let _ = write!(id, "{:02x}", byte);
        }
        Ok(id)
    }
}
