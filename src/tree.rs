//! The generic attributed tree produced by a projection.
//!
//! An [`Element`] has a name, an ordered list of uniquely named attributes
//! and an ordered list of child elements. Nothing here knows about SQL or
//! about any concrete text format.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{ProjectionError, ProjectionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append an attribute. Names must be unique within the element.
    pub fn push_attribute(&mut self, attribute: Attribute) -> ProjectionResult<()> {
        if self.attribute(&attribute.name).is_some() {
            return Err(ProjectionError::duplicate(&self.name, attribute.name));
        }
        self.attributes.push(attribute);
        Ok(())
    }

    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ProjectionResult<()> {
        self.push_attribute(Attribute::new(name, value))
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ProjectionResult<Self> {
        self.set_attribute(name, value)?;
        Ok(self)
    }

    pub fn into_children(self) -> Vec<Element> {
        self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    /// Pre-order walk over this element and everything below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of elements in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.descendants().count()
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((element, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(element.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

/// Whether `name` can be written as an XML element name.
///
/// Starts with a letter or `_`; continues with letters, digits, `_`, `-`
/// or `.`. Colons are excluded since documents carry no namespaces.
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
        _ => false,
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Element", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("attributes", &AttributeMap(&self.attributes))?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// Attributes serialize as a map in insertion order.
struct AttributeMap<'a>(&'a [Attribute]);

impl Serialize for AttributeMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, &a.value)))
    }
}
