//! Scalar enumerations carried by node kinds.
//!
//! Every enumeration renders as its PascalCase variant name, which is also
//! the spelling accepted on input. Values outside the modelled variants are
//! kept verbatim in `Unrecognized` and rendered unchanged.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

/// An enumeration read from and rendered as its variant name.
pub trait SqlEnum: Sized {
    /// The variant called `name`, or `Unrecognized` holding it.
    fn from_name(name: &str) -> Self;

    /// The variant name as emitted in attribute values.
    fn as_str(&self) -> &str;
}

macro_rules! sql_enum {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),* $(,)? }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub enum $name {
                $($variant,)*
                /// A value without a modelled variant, spelled as received.
                Unrecognized(String),
            }

            impl $name {
                pub fn from_name(name: &str) -> Self {
                    $(
                        if name == stringify!($variant) {
                            return $name::$variant;
                        }
                    )*
                    $name::Unrecognized(name.to_owned())
                }

                /// The variant name as emitted in attribute values.
                pub fn as_str(&self) -> &str {
                    match self {
                        $($name::$variant => stringify!($variant),)*
                        $name::Unrecognized(raw) => raw.as_str(),
                    }
                }
            }

            impl SqlEnum for $name {
                fn from_name(name: &str) -> Self {
                    $name::from_name(name)
                }

                fn as_str(&self) -> &str {
                    $name::as_str(self)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let name = String::deserialize(deserializer)?;
                    Ok($name::from_name(&name))
                }
            }
        )*
    };
}

/// A set of flag values, such as `SET ANSI_NULLS, QUOTED_IDENTIFIER ON`.
///
/// Reads either a comma-separated string (`"AnsiNulls, QuotedIdentifier"`)
/// or an array of names, and renders as the names joined by `", "` in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flags<T>(Vec<T>);

impl<T> Flags<T> {
    pub fn new(flags: Vec<T>) -> Self {
        Self(flags)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, flag: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.contains(flag)
    }
}

impl<T: SqlEnum> Flags<T> {
    /// Parse `"A, B"`. Blank segments are ignored.
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(T::from_name)
                .collect(),
        )
    }
}

impl<T> Default for Flags<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<T> for Flags<T> {
    fn from(flag: T) -> Self {
        Self(vec![flag])
    }
}

impl<T> FromIterator<T> for Flags<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: SqlEnum> fmt::Display for Flags<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(flag.as_str())?;
        }
        Ok(())
    }
}

impl<'de, T: SqlEnum> Deserialize<'de> for Flags<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagsVisitor(PhantomData))
    }
}

struct FlagsVisitor<T>(PhantomData<T>);

impl<'de, T: SqlEnum> Visitor<'de> for FlagsVisitor<T> {
    type Value = Flags<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a comma-separated flag string or an array of flag names")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        Ok(Flags::parse(text))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut flags = Vec::new();
        while let Some(name) = seq.next_element::<String>()? {
            flags.extend(Flags::<T>::parse(&name).0);
        }
        Ok(Flags(flags))
    }
}

sql_enum! {
    /// How an identifier was delimited in source.
    QuoteType { NotQuoted, SquareBracket, DoubleQuote }

    ColumnType {
        Regular,
        IdentityCol,
        RowGuidCol,
        Wildcard,
        PseudoColumnIdentity,
        PseudoColumnRowGuid,
        PseudoColumnAction,
        PseudoColumnCuid,
        PseudoColumnGraphNodeId,
        PseudoColumnGraphEdgeId,
        PseudoColumnGraphFromId,
        PseudoColumnGraphToId,
    }

    /// `ALL` / `DISTINCT` on selects and aggregate calls.
    UniqueRowFilter { NotSpecified, All, Distinct }

    BinaryExpressionType {
        Add,
        Subtract,
        Multiply,
        Divide,
        Modulo,
        BitwiseAnd,
        BitwiseOr,
        BitwiseXor,
        LeftShift,
        RightShift,
    }

    UnaryExpressionType { Positive, Negative, BitwiseNot }

    BooleanComparisonType {
        Equals,
        GreaterThan,
        LessThan,
        GreaterThanOrEqualTo,
        LessThanOrEqualTo,
        NotEqualToBrackets,
        NotEqualToExclamation,
        NotLessThan,
        NotGreaterThan,
        LeftOuterJoin,
        RightOuterJoin,
    }

    BooleanBinaryExpressionType { And, Or }

    BooleanTernaryExpressionType { Between, NotBetween }

    SubqueryComparisonPredicateType { None, Any, All }

    FullTextFunctionType { None, Contains, FreeText }

    BinaryQueryExpressionType { Union, Except, Intersect }

    QualifiedJoinType { Inner, LeftOuter, RightOuter, FullOuter }

    UnqualifiedJoinType { CrossJoin, CrossApply, OuterApply }

    JoinHint { None, Loop, Hash, Merge, Remote }

    SortOrder { NotSpecified, Ascending, Descending }

    GroupByOption { None, Cube, Rollup }

    AssignmentKind {
        Equals,
        AddEquals,
        SubtractEquals,
        MultiplyEquals,
        DivideEquals,
        ModEquals,
        BitwiseAndEquals,
        BitwiseOrEquals,
        BitwiseXorEquals,
        ConcatEquals,
    }

    ParameterlessCallType { User, CurrentUser, SessionUser, SystemUser, CurrentTimestamp }

    OdbcLiteralType { Time, Date, Timestamp, Guid }

    InsertOption { None, Into, Over }

    MergeCondition { NotSpecified, Matched, NotMatched, NotMatchedByTarget, NotMatchedBySource }

    TableHintKind {
        None,
        FastFirstRow,
        HoldLock,
        NoLock,
        NoWait,
        PagLock,
        ReadCommitted,
        ReadCommittedLock,
        ReadPast,
        ReadUncommitted,
        RepeatableRead,
        RowLock,
        Serializable,
        TabLock,
        TabLockX,
        UpdLock,
        XLock,
        Index,
        ForceSeek,
        ForceScan,
        Snapshot,
        NoExpand,
        KeepIdentity,
        KeepDefaults,
        IgnoreConstraints,
        IgnoreTriggers,
        SpatialWindowMaxCells,
    }

    TableSampleClauseOption { NotSpecified, Percent, Rows }

    UnpivotNullHandling { None, ExcludeNulls, IncludeNulls }

    OptimizerHintKind {
        Unspecified,
        HashGroup,
        OrderGroup,
        MergeJoin,
        HashJoin,
        LoopJoin,
        ConcatUnion,
        HashUnion,
        MergeUnion,
        KeepUnion,
        ForceOrder,
        Recompile,
        MaxDop,
        MaxRecursion,
        Fast,
        OptimizeFor,
        KeepPlan,
        ExpandViews,
    }

    XmlForClauseOptions {
        None,
        Raw,
        Auto,
        Explicit,
        Path,
        ElementName,
        Elements,
        ElementsXsiNil,
        ElementsAbsent,
        XmlData,
        XmlSchema,
        Root,
        Type,
        BinaryBase64,
    }

    JsonForClauseOptions { None, Auto, Path, Root, IncludeNullValues, WithoutArrayWrapper }

    WindowFrameType { Rows, Range }

    WindowDelimiterType {
        UnboundedPreceding,
        ValuePreceding,
        CurrentRow,
        ValueFollowing,
        UnboundedFollowing,
    }

    /// Built-in SQL data types.
    #[allow(non_camel_case_types)]
    SqlDataTypeOption {
        None,
        BigInt,
        Int,
        SmallInt,
        TinyInt,
        Bit,
        Decimal,
        Numeric,
        Money,
        SmallMoney,
        Float,
        Real,
        DateTime,
        SmallDateTime,
        Char,
        VarChar,
        Text,
        NChar,
        NVarChar,
        NText,
        Binary,
        VarBinary,
        Image,
        Cursor,
        Table,
        Timestamp,
        UniqueIdentifier,
        Date,
        Time,
        DateTime2,
        DateTimeOffset,
        Rowversion,
        Sql_Variant,
        Xml,
    }

    XmlDataTypeOption { None, Content, Document }

    DeleteUpdateAction { NotSpecified, Cascade, SetNull, SetDefault, NoAction }

    ConstraintEnforcement { NotSpecified, Check, NoCheck }

    TableElementType { NotSpecified, Constraint, Column, Index, Period }

    AlterTableAlterColumnOption {
        NoOptionDefined,
        AddRowGuidCol,
        DropRowGuidCol,
        Null,
        NotNull,
        AddPersisted,
        DropPersisted,
        AddNotForReplication,
        DropNotForReplication,
        AddSparse,
        DropSparse,
        AddMaskingFunction,
        DropMaskingFunction,
        AddHidden,
        DropHidden,
    }

    ViewOptionKind { Encryption, SchemaBinding, ViewMetadata }

    ProcedureOptionKind { Recompile, Encryption, ExecuteAs, NativeCompilation, SchemaBinding }

    FunctionOptionKind {
        Encryption,
        SchemaBinding,
        ReturnsNullOnNullInput,
        CalledOnNullInput,
        ExecuteAs,
        NativeCompilation,
        Inline,
    }

    ParameterModifier { None, Output, ReadOnly }

    SequenceOptionKind { As, Start, Increment, MinValue, MaxValue, Cycle, Cache }

    WaitForOption { Delay, Time, Statement }

    /// Session options toggled by `SET <option>, ... ON|OFF`. Combined as
    /// [`Flags`] on the statement.
    SetOptions {
        None,
        QuotedIdentifier,
        ConcatNullYieldsNull,
        CursorCloseOnCommit,
        ArithIgnore,
        FmtOnly,
        NumericRoundAbort,
        ParseOnly,
        AnsiDefaults,
        AnsiNullDfltOff,
        AnsiNullDfltOn,
        ForcePlan,
        ShowPlanAll,
        ShowPlanText,
        ImplicitTransactions,
        RemoteProcTransactions,
        NoBrowseTable,
        AnsiNulls,
        AnsiPadding,
        AnsiWarnings,
        ArithAbort,
        NoCount,
        NoExec,
        XactAbort,
        ShowPlanXml,
        StatisticsIo,
        StatisticsTime,
    }

    IsolationLevel { None, ReadCommitted, ReadUncommitted, RepeatableRead, Serializable, Snapshot }

    OptionState { NotSet, On, Off }

    /// `RAISERROR ... WITH` options. Combined as [`Flags`] on the statement.
    RaiseErrorOptions { None, Log, NoWait, SetError }

    CursorOptionKind {
        Local,
        Global,
        ForwardOnly,
        Scroll,
        Static,
        Keyset,
        Dynamic,
        FastForward,
        ReadOnly,
        ScrollLocks,
        Optimistic,
        TypeWarning,
        Insensitive,
    }

    FetchOrientation { None, First, Next, Prior, Last, Relative, Absolute }

    PrincipalType { Null, Public, Identifier }

    SecurityObjectKind {
        NotSpecified,
        ApplicationRole,
        Assembly,
        AsymmetricKey,
        Certificate,
        Database,
        Login,
        Object,
        Role,
        Schema,
        Server,
        Type,
        User,
        XmlSchemaCollection,
    }

    TriggerType { Unknown, For, After, InsteadOf }

    TriggerActionType { Delete, Insert, Update, Event }

    TriggerScope { Normal, AllServer, Database }

    TriggerOptionKind { Encryption, ExecuteAsClause, NativeCompile, SchemaBinding }

    DropSchemaBehavior { None, Cascade, Restrict }

    /// `EXECUTE AS` targets. `SELF` has no Rust spelling and arrives as
    /// `Unrecognized("Self")`, which renders unchanged.
    ExecuteAsOption { Caller, Owner, String, Login, User }

    BulkInsertOptionKind {
        None,
        BatchSize,
        CheckConstraints,
        CodePage,
        DataFileType,
        FieldTerminator,
        FirstRow,
        FireTriggers,
        FormatFile,
        KeepIdentity,
        KeepNulls,
        KilobytesPerBatch,
        LastRow,
        MaxErrors,
        RowTerminator,
        RowsPerBatch,
        TabLock,
        ErrorFile,
        Format,
        FieldQuote,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(QualifiedJoinType::LeftOuter.to_string(), "LeftOuter");
        assert_eq!(JoinHint::None.as_str(), "None");
    }

    #[test]
    fn test_deserialize_from_variant_name() {
        let kind: BooleanComparisonType = serde_json::from_str("\"GreaterThanOrEqualTo\"").unwrap();
        assert_eq!(kind, BooleanComparisonType::GreaterThanOrEqualTo);
        let hint: TableHintKind = serde_json::from_str("\"NoExpand\"").unwrap();
        assert_eq!(hint, TableHintKind::NoExpand);
    }

    #[test]
    fn test_unrecognized_value_is_kept_verbatim() {
        let order: SortOrder = serde_json::from_str("\"Sideways\"").unwrap();
        assert_eq!(order, SortOrder::Unrecognized("Sideways".into()));
        assert_eq!(order.to_string(), "Sideways");

        let option: SqlDataTypeOption = serde_json::from_str("\"HierarchyId\"").unwrap();
        assert_eq!(option.as_str(), "HierarchyId");
        assert!(serde_json::from_str::<SortOrder>("3").is_err());
    }

    #[test]
    fn test_flags_from_comma_separated_text() {
        let options: Flags<SetOptions> =
            serde_json::from_str("\"AnsiNulls, QuotedIdentifier\"").unwrap();
        assert_eq!(options.len(), 2);
        assert!(options.contains(&SetOptions::AnsiNulls));
        assert!(options.contains(&SetOptions::QuotedIdentifier));
        assert_eq!(options.to_string(), "AnsiNulls, QuotedIdentifier");
    }

    #[test]
    fn test_flags_from_array() {
        let options: Flags<RaiseErrorOptions> =
            serde_json::from_str(r#"["Log", "NoWait", "Future"]"#).unwrap();
        assert_eq!(
            options,
            Flags::new(vec![
                RaiseErrorOptions::Log,
                RaiseErrorOptions::NoWait,
                RaiseErrorOptions::Unrecognized("Future".into()),
            ])
        );
        assert_eq!(options.to_string(), "Log, NoWait, Future");
    }

    #[test]
    fn test_single_flag_renders_alone() {
        let options = Flags::from(RaiseErrorOptions::None);
        assert_eq!(options.to_string(), "None");
        assert_eq!(Flags::<SetOptions>::parse(" , ").to_string(), "");
    }
}
