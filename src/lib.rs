//! # sqlxml — SQL syntax trees as attributed documents
//!
//! Projects a parsed SQL syntax tree into a generic, XML-shaped tree for
//! tooling, diffing and visualization.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use sqlxml::prelude::*;
//!
//! let output = ParserOutput::from_json(&parser_json)?;
//! let document = sqlxml::project(&output.ast.unwrap())?;
//! println!("{}", document.to_xml());
//! // <Compilation Version="0.1" Language="SQL">
//! //   <SelectStatement StartLine="1" StartColumn="1">
//! //   ...
//! ```
//!
//! ## Pipeline
//!
//! | Stage        | Module         | Output                       |
//! |--------------|----------------|------------------------------|
//! | Intake       | [`extractor`]  | `ParserOutput` / diagnostics |
//! | Node model   | [`ast`]        | `Node`                       |
//! | Extraction   | [`attributes`] | ordered attributes per kind  |
//! | Traversal    | [`engine`]     | `Element` tree               |
//! | Assembly     | [`document`]   | `Document`                   |
//! | Rendering    | [`xml`]        | XML text                     |

pub mod ast;
pub mod attributes;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod tree;
pub mod xml;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::{Config, OutputFormat, ProjectorConfig};
    pub use crate::document::{assemble, Document};
    pub use crate::engine::Projector;
    pub use crate::error::*;
    pub use crate::extractor::{
        Diagnostic, Extraction, LanguageExtractor, ParseError, ParserOutput, TsqlExtractor,
    };
    pub use crate::tree::{Attribute, Element};
    pub use crate::xml::{ToXml, XmlOptions};
}

/// Project an AST into a document with default settings.
///
/// # Example
///
/// ```
/// use sqlxml::ast::{Node, NodeKind};
///
/// let ast = Node::at(1, 8, NodeKind::IntegerLiteral { value: "1".into() });
/// let document = sqlxml::project(&ast).unwrap();
/// assert_eq!(document.root().name(), "Compilation");
/// assert_eq!(document.tree().attribute("Value"), Some("1"));
/// ```
pub fn project(root: &ast::Node) -> error::ProjectionResult<document::Document> {
    engine::Projector::new().assemble(root, None)
}
