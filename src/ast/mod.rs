//! The SQL syntax tree consumed by the projection.
//!
//! Trees are produced by an external parser. This module only describes
//! their shape: every node has a [`NodeKind`] carrying typed children and
//! scalar properties, plus the [`Position`] it started at in the source.
//!
//! Children come in three slot shapes:
//!
//! | Slot                 | Meaning                         |
//! |----------------------|---------------------------------|
//! | `Box<Node>`          | required single child           |
//! | `Option<Box<Node>>`  | optional child, absent = `None` |
//! | `Vec<Node>`          | ordered sequence                |

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::{Map, Value};

use crate::tree::is_element_name;

pub mod enums;

pub use enums::*;
pub use kinds::NodeKind;

/// Declares every node kind once and derives the kind model from it.
///
/// Each entry lists the child slots in `{}` (declaration order is traversal
/// order) and the scalar properties in `[]`.
macro_rules! node_kinds {
    ($(
        $(#[$meta:meta])*
        $kind:ident {
            $($child:ident: $slot:ty),* $(,)?
        } [
            $($prop:ident: $pty:ty),* $(,)?
        ]
    )*) => {
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        #[serde(tag = "kind")]
        pub enum NodeKind {
            $(
                $(#[$meta])*
                $kind {
                    $($child: $slot,)*
                    $($prop: $pty,)*
                },
            )*
            /// A node kind without a typed model.
            #[serde(skip)]
            Other(OtherNode),
        }

        impl NodeKind {
            /// Names of every kind with a typed model.
            pub const KNOWN: &'static [&'static str] = &[$(stringify!($kind)),*];

            /// The element name for this kind.
            pub fn name(&self) -> &str {
                match self {
                    $(NodeKind::$kind { .. } => stringify!($kind),)*
                    NodeKind::Other(other) => &other.name,
                }
            }

            /// Structural children in declaration order. Absent optional
            /// children are skipped.
            pub fn children(&self) -> Vec<&Node> {
                let mut children = Vec::new();
                match self {
                    $(
                        NodeKind::$kind { $($child,)* .. } => {
                            $(ChildSlot::collect_into($child, &mut children);)*
                        }
                    )*
                    NodeKind::Other(other) => children.extend(other.children.iter()),
                }
                children
            }
        }
    };
}

mod kinds;

/// Intake recurses once per nesting level. Below this much remaining stack a
/// new segment is allocated, so parser output of any depth can be read.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Where a node starts in the source text. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Shorthand for `Node::new(kind, Position::new(line, column))`.
    pub fn at(line: u32, column: u32, kind: NodeKind) -> Self {
        Self::new(kind, Position::new(line, column))
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn children(&self) -> Vec<&Node> {
        self.kind.children()
    }

    /// Build a node from its JSON form.
    ///
    /// Kind names may be namespace-qualified; only the last segment is kept.
    /// Names outside [`NodeKind::KNOWN`] become [`NodeKind::Other`] and must
    /// be usable as element names.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || Self::from_json_object(value))
    }

    fn from_json_object(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(mut object) = value else {
            return Err(serde_json::Error::custom("expected an AST node object"));
        };

        let qualified = object
            .get("kind")
            .and_then(Value::as_str)
            .ok_or_else(|| serde_json::Error::missing_field("kind"))?;
        let name = strip_namespace(qualified).to_owned();
        let position = Position::new(
            position_field(&object, "start_line")?,
            position_field(&object, "start_column")?,
        );

        let kind = if NodeKind::is_known(&name) {
            object.insert("kind".to_owned(), Value::String(name));
            NodeKind::deserialize(serde_stacker::Deserializer::new(Value::Object(object)))?
        } else if is_element_name(&name) {
            NodeKind::Other(OtherNode::from_fields(name, object)?)
        } else {
            return Err(serde_json::Error::custom(format!(
                "malformed AST: node kind {qualified:?} at {position} is not a valid element name"
            )));
        };

        Ok(Self { kind, position })
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(serde_stacker::Deserializer::new(deserializer))?;
        Node::from_value(value).map_err(D::Error::custom)
    }
}

impl NodeKind {
    pub fn is_known(name: &str) -> bool {
        Self::KNOWN.contains(&name)
    }
}

/// A node whose kind has no typed model. Only its name and children survive.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherNode {
    pub name: String,
    pub children: Vec<Node>,
}

impl OtherNode {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        let name: String = name.into();
        Self {
            name: strip_namespace(&name).to_owned(),
            children,
        }
    }

    /// Every node-shaped field value becomes a child, in field order.
    fn from_fields(name: String, fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut children = Vec::new();
        for (key, value) in fields {
            if matches!(key.as_str(), "kind" | "start_line" | "start_column") {
                continue;
            }
            match value {
                Value::Object(object) if object.contains_key("kind") => {
                    children.push(Node::from_value(Value::Object(object))?);
                }
                Value::Array(items) => {
                    for item in items {
                        if item.get("kind").is_some() {
                            children.push(Node::from_value(item)?);
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(Self { name, children })
    }
}

/// Drop any `Namespace.` prefix from a kind name.
pub fn strip_namespace(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn position_field(object: &Map<String, Value>, key: &'static str) -> Result<u32, serde_json::Error> {
    let raw = object
        .get(key)
        .ok_or_else(|| serde_json::Error::missing_field(key))?;
    raw.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| serde_json::Error::custom(format!("`{key}` must be a non-negative integer")))
}

/// One child slot of a node kind.
trait ChildSlot {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Node>);
}

impl ChildSlot for Box<Node> {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
    }
}

impl ChildSlot for Option<Box<Node>> {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Node>) {
        if let Some(node) = self.as_deref() {
            out.push(node);
        }
    }
}

impl ChildSlot for Vec<Node> {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.extend(self.iter());
    }
}
