//! AST builders shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use sqlxml::ast::*;
use sqlxml::tree::Element;

pub fn ident(line: u32, column: u32, value: &str) -> Node {
    Node::at(
        line,
        column,
        NodeKind::Identifier {
            value: value.into(),
            quote_type: QuoteType::NotQuoted,
        },
    )
}

pub fn int(line: u32, column: u32, value: &str) -> Node {
    Node::at(line, column, NodeKind::IntegerLiteral { value: value.into() })
}

pub fn column(line: u32, column: u32, parts: &[&str]) -> Node {
    let identifiers = parts
        .iter()
        .enumerate()
        .map(|(i, part)| ident(line, column + 4 * i as u32, part))
        .collect();
    Node::at(
        line,
        column,
        NodeKind::ColumnReferenceExpression {
            multi_part_identifier: Some(Box::new(Node::at(
                line,
                column,
                NodeKind::MultiPartIdentifier { identifiers },
            ))),
            collation: None,
            column_type: ColumnType::Regular,
        },
    )
}

pub fn select_item(expression: Node) -> Node {
    let position = expression.position;
    Node::new(
        NodeKind::SelectScalarExpression {
            expression: Box::new(expression),
            column_name: None,
        },
        position,
    )
}

pub fn query(select_elements: Vec<Node>, from: Option<Node>, filter: Option<Node>) -> Node {
    Node::at(
        1,
        1,
        NodeKind::QuerySpecification {
            top_row_filter: None,
            select_elements,
            from_clause: from.map(Box::new),
            where_clause: filter.map(Box::new),
            group_by_clause: None,
            having_clause: None,
            order_by_clause: None,
            offset_clause: None,
            for_clause: None,
            unique_row_filter: UniqueRowFilter::NotSpecified,
        },
    )
}

pub fn select(query_expression: Node) -> Node {
    Node::at(
        1,
        1,
        NodeKind::SelectStatement {
            with_ctes_and_xml_namespaces: None,
            query_expression: Box::new(query_expression),
            into: None,
            on: None,
            optimizer_hints: vec![],
        },
    )
}

/// `SELECT 1`
pub fn select_one() -> Node {
    select(query(vec![select_item(int(1, 8, "1"))], None, None))
}

/// `SELECT a, b FROM dbo.t WHERE a = 1` wrapped in a script and batch.
pub fn filtered_script() -> Node {
    let table = Node::at(
        1,
        20,
        NodeKind::NamedTableReference {
            schema_object: Box::new(Node::at(
                1,
                20,
                NodeKind::SchemaObjectName {
                    server_identifier: None,
                    database_identifier: None,
                    schema_identifier: Some(Box::new(ident(1, 20, "dbo"))),
                    base_identifier: Some(Box::new(ident(1, 24, "t"))),
                },
            )),
            table_sample_clause: None,
            alias: None,
            table_hints: vec![],
            for_path: false,
        },
    );
    let from = Node::at(1, 15, NodeKind::FromClause { table_references: vec![table] });
    let comparison = Node::at(
        1,
        32,
        NodeKind::BooleanComparisonExpression {
            first_expression: Box::new(column(1, 32, &["a"])),
            second_expression: Box::new(int(1, 36, "1")),
            comparison_type: BooleanComparisonType::Equals,
        },
    );
    let filter = Node::at(
        1,
        26,
        NodeKind::WhereClause {
            search_condition: Some(Box::new(comparison)),
            cursor: None,
        },
    );
    let statement = select(query(
        vec![
            select_item(column(1, 8, &["a"])),
            select_item(column(1, 11, &["b"])),
        ],
        Some(from),
        Some(filter),
    ));

    Node::at(
        1,
        1,
        NodeKind::TSqlScript {
            batches: vec![Node::at(
                1,
                1,
                NodeKind::TSqlBatch {
                    statements: vec![statement],
                },
            )],
        },
    )
}

pub fn object_name(line: u32, column: u32, base: &str) -> Node {
    Node::at(
        line,
        column,
        NodeKind::SchemaObjectName {
            server_identifier: None,
            database_identifier: None,
            schema_identifier: None,
            base_identifier: Some(Box::new(ident(line, column, base))),
        },
    )
}

pub fn data_type(line: u32, column: u32, name: &str, option: SqlDataTypeOption, parameters: Vec<Node>) -> Node {
    Node::at(
        line,
        column,
        NodeKind::SqlDataTypeReference {
            name: Some(Box::new(object_name(line, column, name))),
            parameters,
            sql_data_type_option: option,
        },
    )
}

pub fn column_definition(line: u32, name: &str, data_type: Node, constraints: Vec<Node>) -> Node {
    Node::at(
        line,
        5,
        NodeKind::ColumnDefinition {
            column_identifier: Box::new(ident(line, 5, name)),
            data_type: Some(Box::new(data_type)),
            collation: None,
            computed_column_expression: None,
            default_constraint: None,
            identity_options: None,
            constraints,
            is_persisted: false,
            is_row_guid_col: false,
            is_hidden: false,
            is_masked: false,
        },
    )
}

/// The T-SQL sample script:
///
/// ```sql
/// CREATE TABLE T1
/// (
///     Id INT NOT NULL,
///     Name VARCHAR(20),
///     PRIMARY KEY(Id)
/// )
/// ```
pub fn create_table() -> Node {
    let not_null = Node::at(
        3,
        12,
        NodeKind::NullableConstraintDefinition {
            constraint_identifier: None,
            nullable: false,
        },
    );
    let id = column_definition(3, "Id", data_type(3, 8, "INT", SqlDataTypeOption::Int, vec![]), vec![not_null]);
    let name = column_definition(
        4,
        "Name",
        data_type(4, 10, "VARCHAR", SqlDataTypeOption::VarChar, vec![int(4, 18, "20")]),
        vec![],
    );
    let primary_key = Node::at(
        5,
        5,
        NodeKind::UniqueConstraintDefinition {
            constraint_identifier: None,
            columns: vec![Node::at(
                5,
                17,
                NodeKind::ColumnWithSortOrder {
                    column: Box::new(column(5, 17, &["Id"])),
                    sort_order: SortOrder::NotSpecified,
                },
            )],
            is_primary_key: true,
            clustered: None,
        },
    );
    let statement = Node::at(
        1,
        1,
        NodeKind::CreateTableStatement {
            schema_object_name: Box::new(object_name(1, 14, "T1")),
            definition: Some(Box::new(Node::at(
                2,
                1,
                NodeKind::TableDefinition {
                    column_definitions: vec![id, name],
                    table_constraints: vec![primary_key],
                    indexes: vec![],
                },
            ))),
            select_statement: None,
            on_file_group_or_partition_scheme: None,
            as_edge: false,
            as_node: false,
            as_file_table: false,
        },
    );

    Node::at(
        1,
        1,
        NodeKind::TSqlScript {
            batches: vec![Node::at(
                1,
                1,
                NodeKind::TSqlBatch {
                    statements: vec![statement],
                },
            )],
        },
    )
}

/// Every multi-statement fixture.
pub fn scripts() -> Vec<Node> {
    vec![filtered_script(), create_table()]
}

/// Number of AST nodes per kind name.
pub fn ast_kind_counts(root: &Node) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        *counts.entry(node.name().to_owned()).or_default() += 1;
        stack.extend(node.children());
    }
    counts
}

/// Number of output elements per name.
pub fn element_kind_counts(root: &Element) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for element in root.descendants() {
        *counts.entry(element.name().to_owned()).or_default() += 1;
    }
    counts
}

/// Walk an AST and its projection side by side.
pub fn zip_walk<'a>(node: &'a Node, element: &'a Element, mut visit: impl FnMut(&'a Node, &'a Element)) {
    let mut stack = vec![(node, element)];
    while let Some((node, element)) = stack.pop() {
        visit(node, element);
        let children = node.children();
        assert_eq!(
            children.len(),
            element.children().len(),
            "child count differs under <{}>",
            element.name()
        );
        stack.extend(children.into_iter().zip(element.children()));
    }
}
