//! Document assembly.
//!
//! A [`Document`] is the root container element plus the single subtree
//! projected from the AST root:
//!
//! ```text
//! <Compilation Version="0.1" Language="SQL" Source="SELECT 1">
//!   <SelectStatement StartLine="1" StartColumn="1">
//!     ...
//! ```

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::ast::Node;
use crate::config::ProjectorConfig;
use crate::engine::Projector;
use crate::error::ProjectionResult;
use crate::tree::Element;

pub const VERSION_ATTRIBUTE: &str = "Version";
pub const LANGUAGE_ATTRIBUTE: &str = "Language";
pub const SOURCE_ATTRIBUTE: &str = "Source";

/// A finished projection. Owns its whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    version: String,
    language: String,
    source: Option<String>,
    root: Element,
}

impl Document {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The source text, if it was recorded on the container.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The root container element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The element projected from the AST root.
    pub fn tree(&self) -> &Element {
        // The container is built with exactly one child.
        &self.root.children()[0]
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl Projector {
    /// Build a document for `root`, recording `source` when configured to.
    pub fn assemble(&self, root: &Node, source: Option<&str>) -> ProjectionResult<Document> {
        let settings = &self.config().document;
        let source = source.filter(|_| settings.include_source);

        let mut container = Element::new(&settings.root_element)
            .with_attribute(VERSION_ATTRIBUTE, &settings.version)?
            .with_attribute(LANGUAGE_ATTRIBUTE, &settings.language)?;
        if let Some(text) = source {
            container.set_attribute(SOURCE_ATTRIBUTE, text)?;
        }

        let root = self.walk(container, root)?;
        debug!(
            root = root.name(),
            language = %settings.language,
            with_source = source.is_some(),
            "document assembled"
        );

        Ok(Document {
            version: settings.version.clone(),
            language: settings.language.clone(),
            source: source.map(str::to_owned),
            root,
        })
    }
}

/// Assemble a document with default settings and the given language tag.
pub fn assemble(root: &Node, source: Option<&str>, language: &str) -> ProjectionResult<Document> {
    let config = ProjectorConfig::builder().language(language).build();
    Projector::from_config(config).assemble(root, source)
}
