//! Node kind declarations.
//!
//! One entry per kind: child slots in `{}`, scalar properties in `[]`.
//! Names follow the T-SQL script DOM so projected documents line up with
//! existing tooling.

use serde::Deserialize;

use super::enums::*;
use super::{ChildSlot, Node, OtherNode};

type One = Box<Node>;
type Opt = Option<Box<Node>>;
type Many = Vec<Node>;

node_kinds! {
    // Scripts and batches
    TSqlScript { batches: Many } []
    TSqlBatch { statements: Many } []
    StatementList { statements: Many } []

    // Names
    Identifier {} [value: String, quote_type: QuoteType]
    MultiPartIdentifier { identifiers: Many } []
    SchemaObjectName {
        server_identifier: Opt,
        database_identifier: Opt,
        schema_identifier: Opt,
        base_identifier: Opt,
    } []
    IdentifierOrValueExpression { identifier: Opt, value_expression: Opt } [value: Option<String>]

    // Literals and leaf expressions
    IntegerLiteral {} [value: String]
    NumericLiteral {} [value: String]
    RealLiteral {} [value: String]
    MoneyLiteral {} [value: String]
    BinaryLiteral {} [value: String, is_large_object: bool]
    StringLiteral {} [value: String, is_national: bool, is_large_object: bool]
    NullLiteral {} []
    DefaultLiteral {} []
    MaxLiteral {} []
    OdbcLiteral {} [odbc_literal_type: OdbcLiteralType, is_national: bool, value: String]
    IdentifierLiteral {} [value: String, quote_type: QuoteType]
    VariableReference {} [name: String]
    GlobalVariableExpression {} [name: String]
    ParameterlessCall {} [parameterless_call_type: ParameterlessCallType]
    ColumnReferenceExpression { multi_part_identifier: Opt, collation: Opt } [column_type: ColumnType]

    // Scalar expressions
    BinaryExpression { first_expression: One, second_expression: One } [
        binary_expression_type: BinaryExpressionType,
    ]
    UnaryExpression { expression: One } [unary_expression_type: UnaryExpressionType]
    ParenthesisExpression { expression: One } []
    FunctionCall {
        call_target: Opt,
        function_name: One,
        parameters: Many,
        within_group_clause: Opt,
        over_clause: Opt,
    } [unique_row_filter: UniqueRowFilter]
    ExpressionCallTarget { expression: One } []
    MultiPartIdentifierCallTarget { multi_part_identifier: One } []
    LeftFunctionCall { parameters: Many } []
    RightFunctionCall { parameters: Many } []
    CastCall { data_type: One, parameter: One, collation: Opt } []
    TryCastCall { data_type: One, parameter: One, collation: Opt } []
    IdentityFunctionCall { data_type: One, seed: Opt, increment: Opt } []
    PartitionFunctionCall { database_name: Opt, function_name: One, parameters: Many } []
    ExtractFromExpression { expression: One, extraction_function: One } []
    OdbcFunctionCall { name: One, parameters: Many } [parameters_called: bool]
    ConvertCall { data_type: One, parameter: One, style: Opt, collation: Opt } []
    TryConvertCall { data_type: One, parameter: One, style: Opt, collation: Opt } []
    ParseCall { string_value: One, data_type: One, culture: Opt } []
    AtTimeZoneCall { date_value: One, time_zone: One } []
    CoalesceExpression { expressions: Many } []
    NullIfExpression { first_expression: One, second_expression: One } []
    IIfCall { predicate: One, then_expression: One, else_expression: One } []
    SearchedCaseExpression { when_clauses: Many, else_expression: Opt } []
    SimpleCaseExpression { input_expression: One, when_clauses: Many, else_expression: Opt } []
    SearchedWhenClause { when_expression: One, then_expression: One } []
    SimpleWhenClause { when_expression: One, then_expression: One } []
    ScalarSubquery { query_expression: One } []
    NextValueForExpression { sequence_name: One, over_clause: Opt } []
    OverClause { partitions: Many, order_by_clause: Opt, window_frame_clause: Opt } []
    WindowFrameClause { top: One, bottom: Opt } [window_frame_type: WindowFrameType]
    WindowDelimiter { offset_value: Opt } [window_delimiter_type: WindowDelimiterType]
    WithinGroupClause { order_by_clause: One } []

    // Boolean expressions and predicates
    BooleanComparisonExpression { first_expression: One, second_expression: One } [
        comparison_type: BooleanComparisonType,
    ]
    BooleanBinaryExpression { first_expression: One, second_expression: One } [
        binary_expression_type: BooleanBinaryExpressionType,
    ]
    BooleanNotExpression { expression: One } []
    BooleanParenthesisExpression { expression: One } []
    BooleanIsNullExpression { expression: One } [is_not: bool]
    BooleanTernaryExpression {
        first_expression: One,
        second_expression: One,
        third_expression: One,
    } [ternary_expression_type: BooleanTernaryExpressionType]
    DistinctPredicate { first_expression: One, second_expression: One } [is_not: bool]
    InPredicate { expression: One, subquery: Opt, values: Many } [not_defined: bool]
    LikePredicate { first_expression: One, second_expression: One, escape_expression: Opt } [
        not_defined: bool,
        odbc_escape: bool,
    ]
    ExistsPredicate { subquery: One } []
    SubqueryComparisonPredicate { expression: One, subquery: One } [
        comparison_type: BooleanComparisonType,
        subquery_comparison_predicate_type: SubqueryComparisonPredicateType,
    ]
    FullTextPredicate { columns: Many, value: One, language_term: Opt } [
        full_text_function_type: FullTextFunctionType,
    ]

    // Queries
    SelectStatement {
        with_ctes_and_xml_namespaces: Opt,
        query_expression: One,
        into: Opt,
        on: Opt,
        optimizer_hints: Many,
    } []
    QuerySpecification {
        top_row_filter: Opt,
        select_elements: Many,
        from_clause: Opt,
        where_clause: Opt,
        group_by_clause: Opt,
        having_clause: Opt,
        order_by_clause: Opt,
        offset_clause: Opt,
        for_clause: Opt,
    } [unique_row_filter: UniqueRowFilter]
    BinaryQueryExpression {
        first_query_expression: One,
        second_query_expression: One,
        order_by_clause: Opt,
        offset_clause: Opt,
        for_clause: Opt,
    } [binary_query_expression_type: BinaryQueryExpressionType, all: bool]
    QueryParenthesisExpression {
        query_expression: One,
        order_by_clause: Opt,
        offset_clause: Opt,
    } []
    SelectScalarExpression { expression: One, column_name: Opt } []
    SelectStarExpression { qualifier: Opt } []
    SelectSetVariable { variable: One, expression: One } [assignment_kind: AssignmentKind]
    TopRowFilter { expression: One } [percent: bool, with_ties: bool]
    FromClause { table_references: Many } []
    WhereClause { search_condition: Opt, cursor: Opt } []
    GroupByClause { grouping_specifications: Many } [group_by_option: GroupByOption, all: bool]
    ExpressionGroupingSpecification { expression: One } [distributed_aggregation: bool]
    RollupGroupingSpecification { arguments: Many } []
    CubeGroupingSpecification { arguments: Many } []
    GroupingSetsGroupingSpecification { sets: Many } []
    CompositeGroupingSpecification { items: Many } []
    GrandTotalGroupingSpecification {} []
    HavingClause { search_condition: One } []
    OrderByClause { order_by_elements: Many } []
    ExpressionWithSortOrder { expression: One } [sort_order: SortOrder]
    OffsetClause { offset_expression: One, fetch_expression: Opt } []
    XmlForClause { options: Many } []
    XmlForClauseOption { value: Opt } [option_kind: XmlForClauseOptions]
    JsonForClause { options: Many } []
    JsonForClauseOption { value: Opt } [option_kind: JsonForClauseOptions]
    BrowseForClause {} []
    ReadOnlyForClause {} []
    WithCtesAndXmlNamespaces { common_table_expressions: Many, change_tracking_context: Opt } []
    CommonTableExpression { expression_name: One, columns: Many, query_expression: One } []
    OptimizerHint {} [hint_kind: OptimizerHintKind]
    LiteralOptimizerHint { value: One } [hint_kind: OptimizerHintKind]

    // Table sources
    NamedTableReference {
        schema_object: One,
        table_sample_clause: Opt,
        alias: Opt,
        table_hints: Many,
    } [for_path: bool]
    QualifiedJoin {
        first_table_reference: One,
        second_table_reference: One,
        search_condition: One,
    } [qualified_join_type: QualifiedJoinType, join_hint: JoinHint]
    UnqualifiedJoin { first_table_reference: One, second_table_reference: One } [
        unqualified_join_type: UnqualifiedJoinType,
    ]
    JoinParenthesisTableReference { join: One } []
    QueryDerivedTable { query_expression: One, alias: Opt, columns: Many } []
    InlineDerivedTable { row_values: Many, alias: Opt, columns: Many } []
    SchemaObjectFunctionTableReference {
        schema_object: One,
        parameters: Many,
        alias: Opt,
        columns: Many,
    } []
    VariableTableReference { variable: One, alias: Opt } []
    PivotedTableReference {
        table_reference: One,
        aggregate_function_identifier: One,
        value_columns: Many,
        pivot_column: One,
        in_columns: Many,
        alias: Opt,
    } []
    UnpivotedTableReference {
        table_reference: One,
        value_column: One,
        pivot_column: One,
        in_columns: Many,
        alias: Opt,
    } [null_handling: UnpivotNullHandling]
    TableHint {} [hint_kind: TableHintKind]
    IndexTableHint { index_values: Many } [hint_kind: TableHintKind]
    TableSampleClause { sample_number: One, repeat_seed: Opt } [
        system: bool,
        table_sample_clause_option: TableSampleClauseOption,
    ]
    RowValue { column_values: Many } []

    // Data modification
    InsertStatement {
        with_ctes_and_xml_namespaces: Opt,
        insert_specification: One,
        optimizer_hints: Many,
    } []
    InsertSpecification {
        top_row_filter: Opt,
        target: One,
        columns: Many,
        output_clause: Opt,
        output_into_clause: Opt,
        insert_source: One,
    } [insert_option: InsertOption]
    ValuesInsertSource { row_values: Many } [is_default_values: bool]
    SelectInsertSource { select: One } []
    ExecuteInsertSource { execute: One } []
    UpdateStatement {
        with_ctes_and_xml_namespaces: Opt,
        update_specification: One,
        optimizer_hints: Many,
    } []
    UpdateSpecification {
        top_row_filter: Opt,
        target: One,
        set_clauses: Many,
        output_clause: Opt,
        output_into_clause: Opt,
        from_clause: Opt,
        where_clause: Opt,
    } []
    AssignmentSetClause { variable: Opt, column: Opt, new_value: Opt } [assignment_kind: AssignmentKind]
    FunctionCallSetClause { mutator_function: One } []
    DeleteStatement {
        with_ctes_and_xml_namespaces: Opt,
        delete_specification: One,
        optimizer_hints: Many,
    } []
    DeleteSpecification {
        top_row_filter: Opt,
        target: One,
        output_clause: Opt,
        output_into_clause: Opt,
        from_clause: Opt,
        where_clause: Opt,
    } []
    MergeStatement {
        with_ctes_and_xml_namespaces: Opt,
        merge_specification: One,
        optimizer_hints: Many,
    } []
    MergeSpecification {
        top_row_filter: Opt,
        target: One,
        table_alias: Opt,
        table_reference: One,
        search_condition: One,
        action_clauses: Many,
        output_clause: Opt,
        output_into_clause: Opt,
    } []
    MergeActionClause { search_condition: Opt, action: One } [condition: MergeCondition]
    UpdateMergeAction { set_clauses: Many } []
    DeleteMergeAction {} []
    InsertMergeAction { columns: Many, source: One } []
    OutputClause { select_columns: Many } []
    OutputIntoClause { select_columns: Many, into_table: One, into_table_columns: Many } []
    TruncateTableStatement { table_name: One, partition_ranges: Many } []
    BulkInsertStatement { to: One, from: One, options: Many } []
    BulkInsertOption {} [option_kind: BulkInsertOptionKind]
    LiteralBulkInsertOption { value: One } [option_kind: BulkInsertOptionKind]

    // Tables, columns and constraints
    CreateTableStatement {
        schema_object_name: One,
        definition: Opt,
        select_statement: Opt,
        on_file_group_or_partition_scheme: Opt,
    } [as_edge: bool, as_node: bool, as_file_table: bool]
    TableDefinition { column_definitions: Many, table_constraints: Many, indexes: Many } []
    ColumnDefinition {
        column_identifier: One,
        data_type: Opt,
        collation: Opt,
        computed_column_expression: Opt,
        default_constraint: Opt,
        identity_options: Opt,
        constraints: Many,
    } [is_persisted: bool, is_row_guid_col: bool, is_hidden: bool, is_masked: bool]
    SqlDataTypeReference { name: Opt, parameters: Many } [sql_data_type_option: SqlDataTypeOption]
    UserDataTypeReference { name: One, parameters: Many } []
    XmlDataTypeReference { name: Opt, xml_schema_collection: Opt } [
        xml_data_type_option: XmlDataTypeOption,
    ]
    IdentityOptions { identity_seed: Opt, identity_increment: Opt } [
        is_identity_not_for_replication: bool,
    ]
    NullableConstraintDefinition { constraint_identifier: Opt } [nullable: bool]
    UniqueConstraintDefinition { constraint_identifier: Opt, columns: Many } [
        is_primary_key: bool,
        clustered: Option<bool>,
    ]
    DefaultConstraintDefinition { constraint_identifier: Opt, expression: One, column: Opt } [
        with_values: bool,
    ]
    CheckConstraintDefinition { constraint_identifier: Opt, check_condition: One } [
        not_for_replication: bool,
    ]
    ForeignKeyConstraintDefinition {
        constraint_identifier: Opt,
        columns: Many,
        reference_table_name: One,
        referenced_table_columns: Many,
    } [
        delete_action: DeleteUpdateAction,
        update_action: DeleteUpdateAction,
        not_for_replication: bool,
    ]
    ColumnWithSortOrder { column: One } [sort_order: SortOrder]
    IndexDefinition { name: One, columns: Many, filter_predicate: Opt } [
        unique: bool,
        clustered: Option<bool>,
    ]
    CreateIndexStatement {
        name: One,
        on_name: One,
        columns: Many,
        included_columns: Many,
        filter_predicate: Opt,
    } [unique: bool, clustered: Option<bool>]
    DropTableStatement { objects: Many } [is_if_exists: bool]
    DropViewStatement { objects: Many } [is_if_exists: bool]
    DropProcedureStatement { objects: Many } [is_if_exists: bool]
    DropFunctionStatement { objects: Many } [is_if_exists: bool]
    DropIndexStatement { drop_index_clauses: Many } [is_if_exists: bool]
    DropIndexClause { index: One, object: One } []
    AlterTableAddTableElementStatement { schema_object_name: One, definition: One } [
        existing_row_check_enforcement: ConstraintEnforcement,
    ]
    AlterTableDropTableElementStatement {
        schema_object_name: One,
        alter_table_drop_table_elements: Many,
    } []
    AlterTableDropTableElement { name: One } [table_element_type: TableElementType, is_if_exists: bool]
    AlterTableAlterColumnStatement {
        schema_object_name: One,
        column_identifier: One,
        data_type: Opt,
        collation: Opt,
    } [alter_table_alter_column_option: AlterTableAlterColumnOption, is_masked: bool]

    // Views, routines and other schema objects
    CreateViewStatement {
        schema_object_name: One,
        columns: Many,
        view_options: Many,
        select_statement: One,
    } [with_check_option: bool, is_materialized: bool]
    AlterViewStatement {
        schema_object_name: One,
        columns: Many,
        view_options: Many,
        select_statement: One,
    } [with_check_option: bool, is_materialized: bool]
    CreateOrAlterViewStatement {
        schema_object_name: One,
        columns: Many,
        view_options: Many,
        select_statement: One,
    } [with_check_option: bool, is_materialized: bool]
    ViewOption {} [option_kind: ViewOptionKind]
    CreateProcedureStatement {
        procedure_reference: One,
        parameters: Many,
        options: Many,
        statement_list: Opt,
    } [is_for_replication: bool]
    AlterProcedureStatement {
        procedure_reference: One,
        parameters: Many,
        options: Many,
        statement_list: Opt,
    } [is_for_replication: bool]
    CreateOrAlterProcedureStatement {
        procedure_reference: One,
        parameters: Many,
        options: Many,
        statement_list: Opt,
    } [is_for_replication: bool]
    ProcedureReference { name: One, number: Opt } []
    ProcedureParameter { variable_name: One, data_type: One, value: Opt } [
        is_varying: bool,
        modifier: ParameterModifier,
        nullable: Option<bool>,
    ]
    ProcedureOption {} [option_kind: ProcedureOptionKind]
    CreateFunctionStatement {
        name: One,
        parameters: Many,
        return_type: One,
        options: Many,
        statement_list: Opt,
    } []
    AlterFunctionStatement {
        name: One,
        parameters: Many,
        return_type: One,
        options: Many,
        statement_list: Opt,
    } []
    CreateOrAlterFunctionStatement {
        name: One,
        parameters: Many,
        return_type: One,
        options: Many,
        statement_list: Opt,
    } []
    ScalarFunctionReturnType { data_type: One } []
    SelectFunctionReturnType { select_statement: One } []
    TableValuedFunctionReturnType { declare_table_variable_body: One } []
    FunctionOption {} [option_kind: FunctionOptionKind]
    CreateSchemaStatement { name: One, owner: Opt, statements: Opt } []
    DropSchemaStatement { schema: One } [drop_behavior: DropSchemaBehavior, is_if_exists: bool]
    CreateSequenceStatement { name: One, sequence_options: Many } []
    AlterSequenceStatement { name: One, sequence_options: Many } []
    DropSequenceStatement { objects: Many } [is_if_exists: bool]
    SequenceOption {} [option_kind: SequenceOptionKind, no_value: bool]
    DataTypeSequenceOption { data_type: One } [option_kind: SequenceOptionKind, no_value: bool]
    ScalarExpressionSequenceOption { option_value: Opt } [
        option_kind: SequenceOptionKind,
        no_value: bool,
    ]
    CreateTriggerStatement {
        name: One,
        trigger_object: One,
        options: Many,
        trigger_actions: Many,
        statement_list: Opt,
    } [trigger_type: TriggerType, with_append: bool, is_not_for_replication: bool]
    AlterTriggerStatement {
        name: One,
        trigger_object: One,
        options: Many,
        trigger_actions: Many,
        statement_list: Opt,
    } [trigger_type: TriggerType, with_append: bool, is_not_for_replication: bool]
    CreateOrAlterTriggerStatement {
        name: One,
        trigger_object: One,
        options: Many,
        trigger_actions: Many,
        statement_list: Opt,
    } [trigger_type: TriggerType, with_append: bool, is_not_for_replication: bool]
    DropTriggerStatement { objects: Many } [trigger_scope: TriggerScope, is_if_exists: bool]
    TriggerObject { name: Opt } [trigger_scope: TriggerScope]
    TriggerAction {} [trigger_action_type: TriggerActionType]
    TriggerOption {} [option_kind: TriggerOptionKind]

    // Control flow
    BeginEndBlockStatement { statement_list: One } []
    IfStatement { predicate: One, then_statement: One, else_statement: Opt } []
    WhileStatement { predicate: One, statement: One } []
    ReturnStatement { expression: Opt } []
    BreakStatement {} []
    ContinueStatement {} []
    GoToStatement { label_name: One } []
    LabelStatement {} [value: String]
    WaitForStatement { parameter: Opt, timeout: Opt, statement: Opt } [wait_for_option: WaitForOption]
    TryCatchStatement { try_statements: One, catch_statements: One } []
    ThrowStatement { error_number: Opt, message: Opt, state: Opt } []
    RaiseErrorStatement {
        first_parameter: One,
        second_parameter: One,
        third_parameter: One,
        optional_parameters: Many,
    } [raise_error_options: Flags<RaiseErrorOptions>]
    PrintStatement { expression: One } []

    // Variables and execution
    DeclareVariableStatement { declarations: Many } []
    DeclareVariableElement { variable_name: One, data_type: One, value: Opt } [nullable: Option<bool>]
    DeclareTableVariableStatement { body: One } []
    DeclareTableVariableBody { variable_name: Opt, definition: One } [as_defined: bool]
    SetVariableStatement { variable: One, expression: Opt } [assignment_kind: AssignmentKind]
    ExecuteStatement { execute_specification: One, options: Many } []
    ExecuteSpecification {
        variable: Opt,
        linked_server: Opt,
        executable_entity: One,
    } []
    ExecutableProcedureReference { procedure_reference: One, parameters: Many } []
    ExecutableStringList { strings: Many, parameters: Many } []
    ExecuteParameter { variable: Opt, parameter_value: One } [is_output: bool]
    ExecuteAsStatement { cookie: Opt, execute_context: One } [with_no_revert: bool]
    ExecuteContext { principal: Opt } [execute_as_option: ExecuteAsOption]
    RevertStatement { cookie: Opt } []
    UseStatement { database_name: One } []
    PredicateSetStatement {} [options: Flags<SetOptions>, is_on: bool]
    SetRowCountStatement { number_rows: One } []
    SetTransactionIsolationLevelStatement {} [level: IsolationLevel]

    // Transactions
    BeginTransactionStatement { name: Opt, mark_description: Opt } [distributed: bool, mark_defined: bool]
    CommitTransactionStatement { name: Opt } [delayed_durability_option: OptionState]
    RollbackTransactionStatement { name: Opt } []
    SaveTransactionStatement { name: One } []

    // Cursors
    DeclareCursorStatement { name: One, cursor_definition: One } []
    CursorDefinition { options: Many, select: One } []
    CursorOption {} [option_kind: CursorOptionKind]
    CursorId { name: One } [is_global: bool]
    OpenCursorStatement { cursor: One } []
    CloseCursorStatement { cursor: One } []
    DeallocateCursorStatement { cursor: One } []
    FetchCursorStatement { fetch_type: Opt, cursor: One, into_variables: Many } []
    FetchType { row_offset: Opt } [orientation: FetchOrientation]

    // Security
    GrantStatement {
        permissions: Many,
        security_target_object: Opt,
        principals: Many,
        as_clause: Opt,
    } [with_grant_option: bool]
    DenyStatement {
        permissions: Many,
        security_target_object: Opt,
        principals: Many,
        as_clause: Opt,
    } [cascade_option: bool]
    RevokeStatement {
        permissions: Many,
        security_target_object: Opt,
        principals: Many,
        as_clause: Opt,
    } [grant_option_for: bool, cascade_option: bool]
    Permission { identifiers: Many, columns: Many } []
    SecurityPrincipal { identifier: Opt } [principal_type: PrincipalType]
    SecurityTargetObject { object_name: Opt, columns: Many } [object_kind: SecurityObjectKind]
    SecurityTargetObjectName { multi_part_identifier: One } []
}
