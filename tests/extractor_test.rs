use pretty_assertions::assert_eq;

use sqlxml::extractor::{Diagnostic, Severity, TSQL};
use sqlxml::prelude::*;

const SELECT_ONE_JSON: &str = r#"{
    "errors": [],
    "ast": {
        "kind": "Microsoft.SqlServer.TransactSql.ScriptDom.SelectStatement",
        "start_line": 1,
        "start_column": 1,
        "optimizer_hints": [],
        "query_expression": {
            "kind": "QuerySpecification",
            "start_line": 1,
            "start_column": 1,
            "unique_row_filter": "NotSpecified",
            "select_elements": [{
                "kind": "SelectScalarExpression",
                "start_line": 1,
                "start_column": 8,
                "expression": {
                    "kind": "IntegerLiteral",
                    "start_line": 1,
                    "start_column": 8,
                    "value": "1"
                },
                "column_name": null
            }]
        }
    }
}"#;

#[test]
fn test_extract_from_json_envelope() {
    let output = ParserOutput::from_json(SELECT_ONE_JSON).unwrap();
    let extraction = TsqlExtractor::new().extract(Some("SELECT 1"), output).unwrap();
    assert!(extraction.diagnostics.is_empty());

    let document = extraction.document.unwrap();
    assert_eq!(document.source(), Some("SELECT 1"));
    let names: Vec<_> = document.root().descendants().map(|e| e.name()).collect();
    assert_eq!(
        names,
        [
            "Compilation",
            "SelectStatement",
            "QuerySpecification",
            "SelectScalarExpression",
            "IntegerLiteral"
        ]
    );
}

#[test]
fn test_bare_node_equals_envelope() {
    let envelope = ParserOutput::from_json(SELECT_ONE_JSON).unwrap();
    let value: serde_json::Value = serde_json::from_str(SELECT_ONE_JSON).unwrap();
    let bare = ParserOutput::from_json(&value["ast"].to_string()).unwrap();
    assert_eq!(bare, envelope);
}

#[test]
fn test_parse_errors_become_diagnostics() {
    let output = ParserOutput::from_json(
        r#"{
            "errors": [
                { "number": 102, "line": 1, "column": 8, "message": "Incorrect syntax near 'FORM'." },
                { "number": 319, "line": 3, "column": 1, "message": "Incorrect syntax near the keyword 'with'." }
            ]
        }"#,
    )
    .unwrap();
    let extraction = TsqlExtractor::new()
        .extract(Some("SELECT * FORM t"), output)
        .unwrap();

    assert!(extraction.document.is_none());
    assert_eq!(
        extraction.diagnostics[0],
        Diagnostic {
            line: 1,
            column: 8,
            end_line: 1,
            end_column: 9,
            id: 102,
            message: "Incorrect syntax near 'FORM'.".into(),
            severity: Severity::Error,
        }
    );
    let rendered: Vec<_> = extraction.diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "102: Incorrect syntax near 'FORM'.",
            "319: Incorrect syntax near the keyword 'with'."
        ]
    );
}

#[test]
fn test_missing_required_child_is_rejected() {
    let err = ParserOutput::from_json(
        r#"{ "ast": { "kind": "SelectStatement", "start_line": 1, "start_column": 1, "optimizer_hints": [] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ProjectionError::Json(_)));
}

#[test]
fn test_extractor_honours_config() {
    let config = ProjectorConfig::builder()
        .language("TSQL")
        .include_source(false)
        .build();
    let output = ParserOutput::from_json(SELECT_ONE_JSON).unwrap();
    let document = TsqlExtractor::from_config(config)
        .extract(Some("SELECT 1"), output)
        .unwrap()
        .document
        .unwrap();
    assert_eq!(document.language(), "TSQL");
    assert_eq!(document.root().attribute("Source"), None);
}

#[test]
fn test_metadata() {
    assert_eq!(TsqlExtractor::new().metadata(), &TSQL);
    assert_eq!(TSQL.version, "1.0.0");
    assert!(TSQL.sample.starts_with("CREATE TABLE T1\n"));
}

/// `WHERE @a = 1 OR @a = 2 OR ...` as a left-deep chain of `terms` comparisons.
fn or_chain_json(terms: usize) -> String {
    let comparison = |i: usize| {
        format!(
            r#"{{"kind":"BooleanComparisonExpression","start_line":1,"start_column":{i},"comparison_type":"Equals","first_expression":{{"kind":"VariableReference","start_line":1,"start_column":{i},"name":"@a"}},"second_expression":{{"kind":"IntegerLiteral","start_line":1,"start_column":{i},"value":"{i}"}}}}"#
        )
    };
    let mut json = String::new();
    for _ in 1..terms {
        json.push_str(
            r#"{"kind":"BooleanBinaryExpression","start_line":1,"start_column":1,"binary_expression_type":"Or","first_expression":"#,
        );
    }
    json.push_str(&comparison(1));
    for i in 2..=terms {
        json.push_str(r#","second_expression":"#);
        json.push_str(&comparison(i));
        json.push('}');
    }
    format!(r#"{{"errors":[],"ast":{json}}}"#)
}

#[test]
fn test_deep_or_chain_from_json() {
    let output = ParserOutput::from_json(&or_chain_json(1_000)).unwrap();
    let document = TsqlExtractor::new().extract(None, output).unwrap().document.unwrap();

    let tree = document.tree();
    assert_eq!(tree.name(), "BooleanBinaryExpression");
    assert_eq!(tree.attribute("BinaryExpressionType"), Some("Or"));
    let count = |name: &str| document.root().descendants().filter(|e| e.name() == name).count();
    assert_eq!(count("BooleanBinaryExpression"), 999);
    assert_eq!(count("BooleanComparisonExpression"), 1_000);
    assert_eq!(document.root().depth(), 1_002);
}

#[test]
fn test_deep_or_chain_from_reader() {
    let json = or_chain_json(300);
    let output = ParserOutput::from_reader(json.as_bytes()).unwrap();
    let ast = output.ast.unwrap();
    assert_eq!(ast.children()[1].name(), "BooleanComparisonExpression");
}

#[test]
fn test_invalid_kind_name_rejected_at_intake() {
    let err = ParserOutput::from_json(
        r#"{ "ast": { "kind": "Ns.", "start_line": 1, "start_column": 1 } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ProjectionError::Json(_)));
    assert!(err.to_string().contains("not a valid element name"));
}
