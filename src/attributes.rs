//! Which node properties become attributes, and in what order.
//!
//! The table is one exhaustive `match` over [`NodeKind`], so a new kind
//! cannot be added without deciding its attributes. Identity and subtype
//! discriminators come first, incidental flags after. `StartLine` and
//! `StartColumn` are appended to every element, including kinds that only
//! reach the [`NodeKind::Other`] fallback.

use std::fmt::Display;

use crate::ast::{Node, NodeKind};
use crate::tree::Attribute;

/// Position attribute names, emitted last on every element.
pub const START_LINE: &str = "StartLine";
pub const START_COLUMN: &str = "StartColumn";

/// Ordered attribute list under construction.
#[derive(Debug, Default)]
struct Attrs(Vec<Attribute>);

impl Attrs {
    /// Mandatory property: always emitted.
    fn always(mut self, name: &str, value: impl Display) -> Self {
        self.0.push(Attribute::new(name, value.to_string()));
        self
    }

    /// Nullable property: emitted only when a value is present.
    fn present<T: Display>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.always(name, value),
            None => self,
        }
    }
}

/// Whether `kind` has a dedicated extraction rule.
pub fn has_rule(kind: &NodeKind) -> bool {
    !matches!(kind, NodeKind::Other(_))
}

/// The attributes for `node`, kind-specific ones first, then the position.
pub fn attributes_for(node: &Node) -> Vec<Attribute> {
    kind_attributes(&node.kind, Attrs::default())
        .always(START_LINE, node.position.line)
        .always(START_COLUMN, node.position.column)
        .0
}

fn kind_attributes(kind: &NodeKind, a: Attrs) -> Attrs {
    use NodeKind::*;

    match kind {
        Identifier { value, quote_type } => a.always("Value", value).always("QuoteType", quote_type),
        MultiPartIdentifier { identifiers } => a.always("Count", identifiers.len()),
        IdentifierOrValueExpression { value, .. } => a.present("Value", value.as_deref()),

        IntegerLiteral { value }
        | NumericLiteral { value }
        | RealLiteral { value }
        | MoneyLiteral { value } => a.always("Value", value),
        BinaryLiteral { value, is_large_object } => {
            a.always("Value", value).always("IsLargeObject", is_large_object)
        }
        StringLiteral { value, is_national, is_large_object } => a
            .always("Value", value)
            .always("IsNational", is_national)
            .always("IsLargeObject", is_large_object),
        OdbcLiteral { odbc_literal_type, is_national, value } => a
            .always("OdbcLiteralType", odbc_literal_type)
            .always("Value", value)
            .always("IsNational", is_national),
        IdentifierLiteral { value, quote_type } => {
            a.always("Value", value).always("QuoteType", quote_type)
        }
        VariableReference { name } | GlobalVariableExpression { name } => a.always("Name", name),
        ParameterlessCall { parameterless_call_type } => {
            a.always("ParameterlessCallType", parameterless_call_type)
        }
        ColumnReferenceExpression { column_type, .. } => a.always("ColumnType", column_type),

        BinaryExpression { binary_expression_type, .. } => {
            a.always("BinaryExpressionType", binary_expression_type)
        }
        UnaryExpression { unary_expression_type, .. } => {
            a.always("UnaryExpressionType", unary_expression_type)
        }
        FunctionCall { unique_row_filter, .. } => a.always("UniqueRowFilter", unique_row_filter),
        OdbcFunctionCall { parameters_called, .. } => a.always("ParametersCalled", parameters_called),
        WindowFrameClause { window_frame_type, .. } => a.always("WindowFrameType", window_frame_type),
        WindowDelimiter { window_delimiter_type, .. } => {
            a.always("WindowDelimiterType", window_delimiter_type)
        }

        BooleanComparisonExpression { comparison_type, .. } => {
            a.always("ComparisonType", comparison_type)
        }
        BooleanBinaryExpression { binary_expression_type, .. } => {
            a.always("BinaryExpressionType", binary_expression_type)
        }
        BooleanIsNullExpression { is_not, .. } | DistinctPredicate { is_not, .. } => {
            a.always("IsNot", is_not)
        }
        BooleanTernaryExpression { ternary_expression_type, .. } => {
            a.always("TernaryExpressionType", ternary_expression_type)
        }
        InPredicate { not_defined, .. } => a.always("NotDefined", not_defined),
        LikePredicate { not_defined, odbc_escape, .. } => {
            a.always("NotDefined", not_defined).always("OdbcEscape", odbc_escape)
        }
        SubqueryComparisonPredicate {
            comparison_type,
            subquery_comparison_predicate_type,
            ..
        } => a
            .always("SubqueryComparisonPredicateType", subquery_comparison_predicate_type)
            .always("ComparisonType", comparison_type),
        FullTextPredicate { full_text_function_type, .. } => {
            a.always("FullTextFunctionType", full_text_function_type)
        }

        QuerySpecification { unique_row_filter, .. } => {
            a.always("UniqueRowFilter", unique_row_filter)
        }
        BinaryQueryExpression { binary_query_expression_type, all, .. } => a
            .always("BinaryQueryExpressionType", binary_query_expression_type)
            .always("All", all),
        SelectSetVariable { assignment_kind, .. } => a.always("AssignmentKind", assignment_kind),
        TopRowFilter { percent, with_ties, .. } => {
            a.always("Percent", percent).always("WithTies", with_ties)
        }
        GroupByClause { group_by_option, all, .. } => {
            a.always("GroupByOption", group_by_option).always("All", all)
        }
        ExpressionGroupingSpecification { distributed_aggregation, .. } => {
            a.always("DistributedAggregation", distributed_aggregation)
        }
        ExpressionWithSortOrder { sort_order, .. } | ColumnWithSortOrder { sort_order, .. } => {
            a.always("SortOrder", sort_order)
        }
        XmlForClauseOption { option_kind, .. } => a.always("OptionKind", option_kind),
        JsonForClauseOption { option_kind, .. } => a.always("OptionKind", option_kind),
        OptimizerHint { hint_kind } | LiteralOptimizerHint { hint_kind, .. } => {
            a.always("HintKind", hint_kind)
        }

        NamedTableReference { for_path, .. } => a.always("ForPath", for_path),
        QualifiedJoin { qualified_join_type, join_hint, .. } => a
            .always("QualifiedJoinType", qualified_join_type)
            .always("JoinHint", join_hint),
        UnqualifiedJoin { unqualified_join_type, .. } => {
            a.always("UnqualifiedJoinType", unqualified_join_type)
        }
        UnpivotedTableReference { null_handling, .. } => a.always("NullHandling", null_handling),
        TableHint { hint_kind } | IndexTableHint { hint_kind, .. } => a.always("HintKind", hint_kind),
        TableSampleClause { system, table_sample_clause_option, .. } => a
            .always("TableSampleClauseOption", table_sample_clause_option)
            .always("System", system),

        InsertSpecification { insert_option, .. } => a.always("InsertOption", insert_option),
        ValuesInsertSource { is_default_values, .. } => {
            a.always("IsDefaultValues", is_default_values)
        }
        AssignmentSetClause { assignment_kind, .. } => a.always("AssignmentKind", assignment_kind),
        BulkInsertOption { option_kind } | LiteralBulkInsertOption { option_kind, .. } => {
            a.always("OptionKind", option_kind)
        }
        MergeActionClause { condition, .. } => a.always("Condition", condition),

        CreateTableStatement { as_edge, as_node, as_file_table, .. } => a
            .always("AsEdge", as_edge)
            .always("AsNode", as_node)
            .always("AsFileTable", as_file_table),
        ColumnDefinition { is_persisted, is_row_guid_col, is_hidden, is_masked, .. } => a
            .always("IsPersisted", is_persisted)
            .always("IsRowGuidCol", is_row_guid_col)
            .always("IsHidden", is_hidden)
            .always("IsMasked", is_masked),
        SqlDataTypeReference { sql_data_type_option, .. } => {
            a.always("SqlDataTypeOption", sql_data_type_option)
        }
        XmlDataTypeReference { xml_data_type_option, .. } => {
            a.always("XmlDataTypeOption", xml_data_type_option)
        }
        IdentityOptions { is_identity_not_for_replication, .. } => {
            a.always("IsIdentityNotForReplication", is_identity_not_for_replication)
        }
        NullableConstraintDefinition { nullable, .. } => a.always("Nullable", nullable),
        UniqueConstraintDefinition { is_primary_key, clustered, .. } => a
            .always("IsPrimaryKey", is_primary_key)
            .present("Clustered", *clustered),
        DefaultConstraintDefinition { with_values, .. } => a.always("WithValues", with_values),
        CheckConstraintDefinition { not_for_replication, .. } => {
            a.always("NotForReplication", not_for_replication)
        }
        ForeignKeyConstraintDefinition {
            delete_action,
            update_action,
            not_for_replication,
            ..
        } => a
            .always("DeleteAction", delete_action)
            .always("UpdateAction", update_action)
            .always("NotForReplication", not_for_replication),
        IndexDefinition { unique, clustered, .. } | CreateIndexStatement { unique, clustered, .. } => {
            a.always("Unique", unique).present("Clustered", *clustered)
        }
        DropTableStatement { is_if_exists, .. }
        | DropViewStatement { is_if_exists, .. }
        | DropProcedureStatement { is_if_exists, .. }
        | DropFunctionStatement { is_if_exists, .. }
        | DropIndexStatement { is_if_exists, .. }
        | DropSequenceStatement { is_if_exists, .. } => a.always("IsIfExists", is_if_exists),
        DropSchemaStatement { drop_behavior, is_if_exists, .. } => a
            .always("DropBehavior", drop_behavior)
            .always("IsIfExists", is_if_exists),
        DropTriggerStatement { trigger_scope, is_if_exists, .. } => a
            .always("TriggerScope", trigger_scope)
            .always("IsIfExists", is_if_exists),
        AlterTableAddTableElementStatement { existing_row_check_enforcement, .. } => {
            a.always("ExistingRowCheckEnforcement", existing_row_check_enforcement)
        }
        AlterTableDropTableElement { table_element_type, is_if_exists, .. } => a
            .always("TableElementType", table_element_type)
            .always("IsIfExists", is_if_exists),
        AlterTableAlterColumnStatement { alter_table_alter_column_option, is_masked, .. } => a
            .always("AlterTableAlterColumnOption", alter_table_alter_column_option)
            .always("IsMasked", is_masked),

        CreateViewStatement { with_check_option, is_materialized, .. }
        | AlterViewStatement { with_check_option, is_materialized, .. }
        | CreateOrAlterViewStatement { with_check_option, is_materialized, .. } => a
            .always("IsMaterialized", is_materialized)
            .always("WithCheckOption", with_check_option),
        ViewOption { option_kind } => a.always("OptionKind", option_kind),
        CreateProcedureStatement { is_for_replication, .. }
        | AlterProcedureStatement { is_for_replication, .. }
        | CreateOrAlterProcedureStatement { is_for_replication, .. } => {
            a.always("IsForReplication", is_for_replication)
        }
        ProcedureParameter { is_varying, modifier, nullable, .. } => a
            .always("Modifier", modifier)
            .always("IsVarying", is_varying)
            .present("Nullable", *nullable),
        ProcedureOption { option_kind } => a.always("OptionKind", option_kind),
        FunctionOption { option_kind } => a.always("OptionKind", option_kind),
        SequenceOption { option_kind, no_value }
        | DataTypeSequenceOption { option_kind, no_value, .. }
        | ScalarExpressionSequenceOption { option_kind, no_value, .. } => {
            a.always("OptionKind", option_kind).always("NoValue", no_value)
        }
        CreateTriggerStatement { trigger_type, with_append, is_not_for_replication, .. }
        | AlterTriggerStatement { trigger_type, with_append, is_not_for_replication, .. }
        | CreateOrAlterTriggerStatement { trigger_type, with_append, is_not_for_replication, .. } => a
            .always("TriggerType", trigger_type)
            .always("WithAppend", with_append)
            .always("IsNotForReplication", is_not_for_replication),
        TriggerObject { trigger_scope, .. } => a.always("TriggerScope", trigger_scope),
        TriggerAction { trigger_action_type } => a.always("TriggerActionType", trigger_action_type),
        TriggerOption { option_kind } => a.always("OptionKind", option_kind),

        LabelStatement { value } => a.always("Value", value),
        WaitForStatement { wait_for_option, .. } => a.always("WaitForOption", wait_for_option),
        RaiseErrorStatement { raise_error_options, .. } => {
            a.always("RaiseErrorOptions", raise_error_options)
        }
        DeclareVariableElement { nullable, .. } => a.present("Nullable", *nullable),
        DeclareTableVariableBody { as_defined, .. } => a.always("AsDefined", as_defined),
        SetVariableStatement { assignment_kind, .. } => a.always("AssignmentKind", assignment_kind),
        ExecuteParameter { is_output, .. } => a.always("IsOutput", is_output),
        ExecuteAsStatement { with_no_revert, .. } => a.always("WithNoRevert", with_no_revert),
        ExecuteContext { execute_as_option, .. } => a.always("Kind", execute_as_option),
        PredicateSetStatement { options, is_on } => a.always("Options", options).always("IsOn", is_on),
        SetTransactionIsolationLevelStatement { level } => a.always("Level", level),

        BeginTransactionStatement { distributed, mark_defined, .. } => a
            .always("Distributed", distributed)
            .always("MarkDefined", mark_defined),
        CommitTransactionStatement { delayed_durability_option, .. } => {
            a.always("DelayedDurabilityOption", delayed_durability_option)
        }

        CursorOption { option_kind } => a.always("OptionKind", option_kind),
        CursorId { is_global, .. } => a.always("IsGlobal", is_global),
        FetchType { orientation, .. } => a.always("Orientation", orientation),

        GrantStatement { with_grant_option, .. } => a.always("WithGrantOption", with_grant_option),
        DenyStatement { cascade_option, .. } => a.always("CascadeOption", cascade_option),
        RevokeStatement { grant_option_for, cascade_option, .. } => a
            .always("GrantOptionFor", grant_option_for)
            .always("CascadeOption", cascade_option),
        SecurityPrincipal { principal_type, .. } => a.always("PrincipalType", principal_type),
        SecurityTargetObject { object_kind, .. } => a.always("ObjectKind", object_kind),

        // Purely structural kinds: position attributes only.
        TSqlScript { .. }
        | TSqlBatch { .. }
        | StatementList { .. }
        | SchemaObjectName { .. }
        | NullLiteral {}
        | DefaultLiteral {}
        | MaxLiteral {}
        | ParenthesisExpression { .. }
        | ExpressionCallTarget { .. }
        | MultiPartIdentifierCallTarget { .. }
        | LeftFunctionCall { .. }
        | RightFunctionCall { .. }
        | CastCall { .. }
        | TryCastCall { .. }
        | IdentityFunctionCall { .. }
        | PartitionFunctionCall { .. }
        | ExtractFromExpression { .. }
        | ConvertCall { .. }
        | TryConvertCall { .. }
        | ParseCall { .. }
        | AtTimeZoneCall { .. }
        | CoalesceExpression { .. }
        | NullIfExpression { .. }
        | IIfCall { .. }
        | SearchedCaseExpression { .. }
        | SimpleCaseExpression { .. }
        | SearchedWhenClause { .. }
        | SimpleWhenClause { .. }
        | ScalarSubquery { .. }
        | NextValueForExpression { .. }
        | OverClause { .. }
        | WithinGroupClause { .. }
        | BooleanNotExpression { .. }
        | BooleanParenthesisExpression { .. }
        | ExistsPredicate { .. }
        | SelectStatement { .. }
        | QueryParenthesisExpression { .. }
        | SelectScalarExpression { .. }
        | SelectStarExpression { .. }
        | FromClause { .. }
        | WhereClause { .. }
        | RollupGroupingSpecification { .. }
        | CubeGroupingSpecification { .. }
        | GroupingSetsGroupingSpecification { .. }
        | CompositeGroupingSpecification { .. }
        | GrandTotalGroupingSpecification {}
        | HavingClause { .. }
        | OrderByClause { .. }
        | OffsetClause { .. }
        | XmlForClause { .. }
        | JsonForClause { .. }
        | BrowseForClause {}
        | ReadOnlyForClause {}
        | WithCtesAndXmlNamespaces { .. }
        | CommonTableExpression { .. }
        | JoinParenthesisTableReference { .. }
        | QueryDerivedTable { .. }
        | InlineDerivedTable { .. }
        | SchemaObjectFunctionTableReference { .. }
        | VariableTableReference { .. }
        | PivotedTableReference { .. }
        | RowValue { .. }
        | InsertStatement { .. }
        | SelectInsertSource { .. }
        | ExecuteInsertSource { .. }
        | UpdateStatement { .. }
        | UpdateSpecification { .. }
        | FunctionCallSetClause { .. }
        | DeleteStatement { .. }
        | DeleteSpecification { .. }
        | MergeStatement { .. }
        | MergeSpecification { .. }
        | UpdateMergeAction { .. }
        | DeleteMergeAction {}
        | InsertMergeAction { .. }
        | OutputClause { .. }
        | OutputIntoClause { .. }
        | TruncateTableStatement { .. }
        | BulkInsertStatement { .. }
        | TableDefinition { .. }
        | UserDataTypeReference { .. }
        | DropIndexClause { .. }
        | AlterTableDropTableElementStatement { .. }
        | ProcedureReference { .. }
        | CreateFunctionStatement { .. }
        | AlterFunctionStatement { .. }
        | CreateOrAlterFunctionStatement { .. }
        | ScalarFunctionReturnType { .. }
        | SelectFunctionReturnType { .. }
        | TableValuedFunctionReturnType { .. }
        | CreateSchemaStatement { .. }
        | CreateSequenceStatement { .. }
        | AlterSequenceStatement { .. }
        | RevertStatement { .. }
        | BeginEndBlockStatement { .. }
        | IfStatement { .. }
        | WhileStatement { .. }
        | ReturnStatement { .. }
        | BreakStatement {}
        | ContinueStatement {}
        | GoToStatement { .. }
        | TryCatchStatement { .. }
        | ThrowStatement { .. }
        | PrintStatement { .. }
        | DeclareVariableStatement { .. }
        | DeclareTableVariableStatement { .. }
        | ExecuteStatement { .. }
        | ExecuteSpecification { .. }
        | ExecutableProcedureReference { .. }
        | ExecutableStringList { .. }
        | UseStatement { .. }
        | SetRowCountStatement { .. }
        | RollbackTransactionStatement { .. }
        | SaveTransactionStatement { .. }
        | DeclareCursorStatement { .. }
        | CursorDefinition { .. }
        | OpenCursorStatement { .. }
        | CloseCursorStatement { .. }
        | DeallocateCursorStatement { .. }
        | FetchCursorStatement { .. }
        | Permission { .. }
        | SecurityTargetObjectName { .. } => a,

        Other(_) => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn names(attributes: &[Attribute]) -> Vec<&str> {
        attributes.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_position_attributes_come_last() {
        let node = Node::at(
            3,
            7,
            NodeKind::Identifier {
                value: "orders".into(),
                quote_type: QuoteType::SquareBracket,
            },
        );
        let attributes = attributes_for(&node);
        assert_eq!(names(&attributes), ["Value", "QuoteType", "StartLine", "StartColumn"]);
        assert_eq!(attributes[1].value, "SquareBracket");
        assert_eq!(attributes[2].value, "3");
        assert_eq!(attributes[3].value, "7");
    }

    #[test]
    fn test_optional_property_omitted_when_absent() {
        let constraint = |clustered| {
            Node::at(
                1,
                1,
                NodeKind::UniqueConstraintDefinition {
                    constraint_identifier: None,
                    columns: vec![],
                    is_primary_key: true,
                    clustered,
                },
            )
        };
        let absent = attributes_for(&constraint(None));
        assert_eq!(names(&absent), ["IsPrimaryKey", "StartLine", "StartColumn"]);

        let present = attributes_for(&constraint(Some(false)));
        assert_eq!(
            names(&present),
            ["IsPrimaryKey", "Clustered", "StartLine", "StartColumn"]
        );
        assert_eq!(present[1].value, "false");
    }

    #[test]
    fn test_discriminator_precedes_flags() {
        let node = Node::at(
            1,
            1,
            NodeKind::BinaryQueryExpression {
                first_query_expression: Box::new(Node::at(1, 1, NodeKind::NullLiteral {})),
                second_query_expression: Box::new(Node::at(1, 10, NodeKind::NullLiteral {})),
                order_by_clause: None,
                offset_clause: None,
                for_clause: None,
                binary_query_expression_type: BinaryQueryExpressionType::Union,
                all: true,
            },
        );
        let attributes = attributes_for(&node);
        assert_eq!(attributes[0].name, "BinaryQueryExpressionType");
        assert_eq!(attributes[0].value, "Union");
        assert_eq!(attributes[1].name, "All");
    }

    #[test]
    fn test_fallback_is_position_only() {
        let node = Node::at(4, 2, NodeKind::Other(OtherNode::new("Future.Kind", vec![])));
        assert!(!has_rule(&node.kind));
        let attributes = attributes_for(&node);
        assert_eq!(names(&attributes), [START_LINE, START_COLUMN]);
    }

    #[test]
    fn test_multi_part_identifier_count() {
        let part = |column, value: &str| {
            Node::at(
                1,
                column,
                NodeKind::Identifier {
                    value: value.into(),
                    quote_type: QuoteType::NotQuoted,
                },
            )
        };
        let node = Node::at(
            1,
            1,
            NodeKind::MultiPartIdentifier {
                identifiers: vec![part(1, "dbo"), part(5, "t")],
            },
        );
        assert!(has_rule(&node.kind));
        assert_eq!(attributes_for(&node)[0].value, "2");
    }

    #[test]
    fn test_drop_statements_report_if_exists() {
        let name = || Node::at(1, 22, NodeKind::NullLiteral {});
        let sequence = Node::at(
            1,
            1,
            NodeKind::DropSequenceStatement {
                objects: vec![name()],
                is_if_exists: true,
            },
        );
        assert_eq!(names(&attributes_for(&sequence)), ["IsIfExists", "StartLine", "StartColumn"]);

        let trigger = Node::at(
            1,
            1,
            NodeKind::DropTriggerStatement {
                objects: vec![name()],
                trigger_scope: TriggerScope::Database,
                is_if_exists: false,
            },
        );
        let attributes = attributes_for(&trigger);
        assert_eq!(
            names(&attributes),
            ["TriggerScope", "IsIfExists", "StartLine", "StartColumn"]
        );
        assert_eq!(attributes[0].value, "Database");
        assert_eq!(attributes[1].value, "false");

        let schema = Node::at(
            1,
            1,
            NodeKind::DropSchemaStatement {
                schema: Box::new(name()),
                drop_behavior: DropSchemaBehavior::None,
                is_if_exists: true,
            },
        );
        assert_eq!(attributes_for(&schema)[1].value, "true");
    }

    #[test]
    fn test_alter_trigger_matches_create_trigger() {
        let node = Node::at(
            1,
            1,
            NodeKind::CreateOrAlterTriggerStatement {
                name: Box::new(Node::at(1, 27, NodeKind::NullLiteral {})),
                trigger_object: Box::new(Node::at(1, 33, NodeKind::NullLiteral {})),
                options: vec![],
                trigger_actions: vec![],
                statement_list: None,
                trigger_type: TriggerType::After,
                with_append: false,
                is_not_for_replication: true,
            },
        );
        let attributes = attributes_for(&node);
        assert_eq!(
            names(&attributes),
            ["TriggerType", "WithAppend", "IsNotForReplication", "StartLine", "StartColumn"]
        );
        assert_eq!(attributes[0].value, "After");
    }

    #[test]
    fn test_flag_set_attributes() {
        let node = Node::at(
            1,
            1,
            NodeKind::PredicateSetStatement {
                options: Flags::new(vec![SetOptions::AnsiNulls, SetOptions::QuotedIdentifier]),
                is_on: true,
            },
        );
        let attributes = attributes_for(&node);
        assert_eq!(attributes[0].value, "AnsiNulls, QuotedIdentifier");
        assert_eq!(attributes[1].value, "true");
    }

    #[test]
    fn test_execute_as_self_renders_raw_value() {
        let context = Node::at(
            1,
            12,
            NodeKind::ExecuteContext {
                principal: None,
                execute_as_option: ExecuteAsOption::from_name("Self"),
            },
        );
        let attributes = attributes_for(&context);
        assert_eq!(attributes[0].name, "Kind");
        assert_eq!(attributes[0].value, "Self");
    }

    #[test]
    fn test_routine_and_call_kinds_are_modelled() {
        for name in [
            "AlterFunctionStatement",
            "CreateOrAlterFunctionStatement",
            "AlterTriggerStatement",
            "CreateOrAlterTriggerStatement",
            "DropTriggerStatement",
            "DropSchemaStatement",
            "DropSequenceStatement",
            "AlterSequenceStatement",
            "ExecuteAsStatement",
            "RevertStatement",
            "BulkInsertStatement",
            "IdentityFunctionCall",
            "PartitionFunctionCall",
            "ExtractFromExpression",
            "OdbcFunctionCall",
        ] {
            assert!(NodeKind::is_known(name), "{name}");
        }

        let call = Node::at(
            1,
            8,
            NodeKind::OdbcFunctionCall {
                name: Box::new(Node::at(1, 13, NodeKind::NullLiteral {})),
                parameters: vec![],
                parameters_called: true,
            },
        );
        assert_eq!(names(&attributes_for(&call)), ["ParametersCalled", "StartLine", "StartColumn"]);
    }
}
