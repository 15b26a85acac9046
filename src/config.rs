//! Projection and output configuration.
//!
//! Settings come from a TOML file with three optional sections:
//!
//! ```toml
//! [document]
//! version = "0.1"
//! language = "SQL"
//! root_element = "Compilation"
//! include_source = true
//!
//! [traversal]
//! max_depth = 4096
//!
//! [output]
//! format = "xml"      # or "json"
//! indent = 2          # 0 = compact
//! declaration = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ProjectionError, ProjectionResult};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "sqlxml.toml";

/// Full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub document: DocumentConfig,
    pub traversal: TraversalConfig,
    pub output: OutputConfig,
}

/// Root container metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Value of the `Version` attribute.
    pub version: String,
    /// Value of the `Language` attribute.
    pub language: String,
    /// Name of the root container element.
    pub root_element: String,
    /// Emit the `Source` attribute when source text is available.
    pub include_source: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            language: "SQL".to_string(),
            root_element: "Compilation".to_string(),
            include_source: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    /// Abort when an AST is nested deeper than this.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
    /// Emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Xml,
            indent: 2,
            declaration: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl Config {
    pub fn from_toml(content: &str) -> ProjectionResult<Self> {
        toml::from_str(content).map_err(|e| ProjectionError::Config(e.to_string()))
    }

    /// Load a configuration file. A missing file is an error.
    pub fn load(path: &Path) -> ProjectionResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ProjectionError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path wins. Otherwise the first existing file from
    /// [`Config::search_paths`] is used, and defaults apply when none exists.
    pub fn discover(explicit: Option<&Path>) -> ProjectionResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Candidate configuration files, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlxml").join("config.toml"));
        }
        paths
    }

    /// The subset of settings the projector needs.
    pub fn projector(&self) -> ProjectorConfig {
        ProjectorConfig {
            document: self.document.clone(),
            traversal: self.traversal.clone(),
        }
    }
}

/// Settings that affect the projected tree itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectorConfig {
    pub document: DocumentConfig,
    pub traversal: TraversalConfig,
}

impl ProjectorConfig {
    pub fn builder() -> ProjectorConfigBuilder {
        ProjectorConfigBuilder::default()
    }
}

/// Builder for [`ProjectorConfig`].
#[derive(Debug, Default)]
pub struct ProjectorConfigBuilder {
    config: ProjectorConfig,
}

impl ProjectorConfigBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.document.version = version.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.document.language = language.into();
        self
    }

    pub fn root_element(mut self, name: impl Into<String>) -> Self {
        self.config.document.root_element = name.into();
        self
    }

    pub fn include_source(mut self, include: bool) -> Self {
        self.config.document.include_source = include;
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config.traversal.max_depth = Some(limit);
        self
    }

    pub fn build(self) -> ProjectorConfig {
        self.config
    }
}
