//! Parser output intake and diagnostics.
//!
//! The external parser hands over either a bare AST node or an envelope:
//!
//! ```json
//! { "errors": [{ "number": 46010, "line": 1, "column": 8, "message": "..." }],
//!   "ast": null }
//! ```
//!
//! When the parser reported errors no document is produced; the errors are
//! turned into [`Diagnostic`]s instead.

use std::fmt;
use std::io::Read;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::ast::Node;
use crate::config::ProjectorConfig;
use crate::document::Document;
use crate::engine::Projector;
use crate::error::{ProjectionError, ProjectionResult};

/// One error reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParseError {
    pub number: i32,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

/// Everything the parser produced for one source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserOutput {
    pub ast: Option<Node>,
    pub errors: Vec<ParseError>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    #[serde(default)]
    ast: Option<Node>,
    #[serde(default)]
    errors: Vec<ParseError>,
}

impl ParserOutput {
    pub fn from_ast(ast: Node) -> Self {
        Self {
            ast: Some(ast),
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<ParseError>) -> Self {
        Self { ast: None, errors }
    }

    /// Read parser output from JSON text. Nesting depth is not limited.
    pub fn from_json(input: &str) -> ProjectionResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(input);
        Self::read_unbounded(&mut deserializer)
    }

    pub fn from_reader(reader: impl Read) -> ProjectionResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        Self::read_unbounded(&mut deserializer)
    }

    fn read_unbounded<'de, R>(deserializer: &mut serde_json::Deserializer<R>) -> ProjectionResult<Self>
    where
        R: serde_json::de::Read<'de>,
    {
        deserializer.disable_recursion_limit();
        let output = Self::deserialize(serde_stacker::Deserializer::new(&mut *deserializer))?;
        deserializer.end()?;
        Ok(output)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("kind").is_some() {
            return Node::from_value(value).map(Self::from_ast);
        }
        let envelope: Envelope = serde_json::from_value(value)?;
        Ok(Self {
            ast: envelope.ast,
            errors: envelope.errors,
        })
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<'de> Deserialize<'de> for ParserOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ParserOutput::from_value(value).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("Error"),
            Severity::Warning => f.write_str("Warning"),
        }
    }
}

/// A parser error in editor-friendly form. The span covers one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub id: i32,
    pub message: String,
    pub severity: Severity,
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        Self {
            line: error.line,
            column: error.column,
            end_line: error.line,
            end_column: error.column.saturating_add(1),
            id: error.number,
            message: error.message.clone(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

/// Outcome of one extraction: a document, or the reasons there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub document: Option<Document>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn is_success(&self) -> bool {
        self.document.is_some()
    }
}

/// Static description of a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMetadata {
    pub name: &'static str,
    pub extension: &'static str,
    pub version: &'static str,
    /// A short script exercising common constructs.
    pub sample: &'static str,
}

/// A language front end: parser output in, document or diagnostics out.
pub trait LanguageExtractor {
    fn metadata(&self) -> &LanguageMetadata;

    fn extract(&self, source: Option<&str>, output: ParserOutput) -> ProjectionResult<Extraction>;
}

pub const TSQL: LanguageMetadata = LanguageMetadata {
    name: "TSQL",
    extension: "sql",
    version: "1.0.0",
    sample: "CREATE TABLE T1\n(\n    Id INT NOT NULL,\n    Name VARCHAR(20),\n    PRIMARY KEY(Id)\n)\n",
};

/// Extractor for T-SQL parser output.
#[derive(Debug, Clone, Default)]
pub struct TsqlExtractor {
    projector: Projector,
}

impl TsqlExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ProjectorConfig) -> Self {
        Self::with_projector(Projector::from_config(config))
    }

    pub fn with_projector(projector: Projector) -> Self {
        Self { projector }
    }
}

impl LanguageExtractor for TsqlExtractor {
    fn metadata(&self) -> &LanguageMetadata {
        &TSQL
    }

    fn extract(&self, source: Option<&str>, output: ParserOutput) -> ProjectionResult<Extraction> {
        if output.has_errors() {
            debug!(errors = output.errors.len(), "parser reported errors, skipping projection");
            return Ok(Extraction {
                document: None,
                diagnostics: output.errors.iter().map(Diagnostic::from).collect(),
            });
        }

        let ast = output
            .ast
            .ok_or_else(|| ProjectionError::malformed("parser output has neither an AST nor errors"))?;
        let document = self.projector.assemble(&ast, source)?;
        Ok(Extraction {
            document: Some(document),
            diagnostics: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_errors() {
        let output = ParserOutput::from_value(json!({
            "errors": [{ "number": 46010, "line": 2, "column": 5, "message": "Incorrect syntax near 'FORM'." }]
        }))
        .unwrap();
        assert!(output.ast.is_none());
        assert!(output.has_errors());

        let diagnostic = Diagnostic::from(&output.errors[0]);
        assert_eq!(diagnostic.end_line, 2);
        assert_eq!(diagnostic.end_column, 6);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.to_string(), "46010: Incorrect syntax near 'FORM'.");
    }

    #[test]
    fn test_bare_node() {
        let output = ParserOutput::from_json(
            r#"{"kind": "NullLiteral", "start_line": 1, "start_column": 8}"#,
        )
        .unwrap();
        assert!(!output.has_errors());
        assert_eq!(output.ast.unwrap().name(), "NullLiteral");
    }

    #[test]
    fn test_errors_suppress_document() {
        let output = ParserOutput {
            ast: Some(Node::at(1, 1, crate::ast::NodeKind::NullLiteral {})),
            errors: vec![ParseError {
                number: 102,
                line: 1,
                column: 1,
                message: "Incorrect syntax.".into(),
            }],
        };
        let extraction = TsqlExtractor::new().extract(Some("SELEC NULL"), output).unwrap();
        assert!(!extraction.is_success());
        assert_eq!(extraction.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_output_is_malformed() {
        let err = TsqlExtractor::new()
            .extract(None, ParserOutput::default())
            .unwrap_err();
        assert!(matches!(err, ProjectionError::MalformedAst(_)));
    }

    #[test]
    fn test_metadata() {
        let extractor = TsqlExtractor::new();
        assert_eq!(extractor.metadata().name, "TSQL");
        assert_eq!(extractor.metadata().extension, "sql");
        assert_eq!(extractor.metadata().version, "1.0.0");
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let err = ParserOutput::from_json(
            r#"{"kind": "NullLiteral", "start_line": 1, "start_column": 1} {}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProjectionError::Json(_)));
    }

    #[test]
    fn test_reader_input() {
        let json = br#"{"errors": [], "ast": {"kind": "DefaultLiteral", "start_line": 1, "start_column": 1}}"#;
        let output = ParserOutput::from_reader(&json[..]).unwrap();
        assert_eq!(output.ast.unwrap().name(), "DefaultLiteral");
    }
}
