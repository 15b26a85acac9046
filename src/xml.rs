//! XML text rendering for projected trees.

use crate::config::OutputConfig;
use crate::document::Document;
use crate::tree::Element;

pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Trait for rendering a tree as XML text.
pub trait ToXml {
    /// Render with [`XmlOptions::default`].
    fn to_xml(&self) -> String {
        self.to_xml_with(&XmlOptions::default())
    }

    fn to_xml_with(&self, options: &XmlOptions) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level. Zero puts the whole document on one line.
    pub indent: usize,
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

impl XmlOptions {
    pub fn compact() -> Self {
        Self {
            indent: 0,
            declaration: false,
        }
    }
}

impl From<&OutputConfig> for XmlOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            indent: config.indent,
            declaration: config.declaration,
        }
    }
}

impl ToXml for Element {
    fn to_xml_with(&self, options: &XmlOptions) -> String {
        let mut out = String::new();
        if options.declaration {
            out.push_str(DECLARATION);
            newline(&mut out, options);
        }
        write_tree(&mut out, self, options);
        out
    }
}

impl ToXml for Document {
    fn to_xml_with(&self, options: &XmlOptions) -> String {
        self.root().to_xml_with(options)
    }
}

enum Step<'a> {
    Open(&'a Element, usize),
    Close(&'a Element, usize),
}

fn write_tree(out: &mut String, root: &Element, options: &XmlOptions) {
    let mut steps = vec![Step::Open(root, 0)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Open(element, level) => {
                pad(out, options, level);
                out.push('<');
                out.push_str(element.name());
                for attribute in element.attributes() {
                    out.push(' ');
                    out.push_str(&attribute.name);
                    out.push_str("=\"");
                    escape_into(out, &attribute.value);
                    out.push('"');
                }
                if element.children().is_empty() {
                    out.push_str(" />");
                    newline(out, options);
                    continue;
                }
                out.push('>');
                newline(out, options);
                steps.push(Step::Close(element, level));
                steps.extend(
                    element
                        .children()
                        .iter()
                        .rev()
                        .map(|child| Step::Open(child, level + 1)),
                );
            }
            Step::Close(element, level) => {
                pad(out, options, level);
                out.push_str("</");
                out.push_str(element.name());
                out.push('>');
                newline(out, options);
            }
        }
    }
}

fn pad(out: &mut String, options: &XmlOptions, level: usize) {
    out.extend(std::iter::repeat_n(' ', options.indent * level));
}

fn newline(out: &mut String, options: &XmlOptions) {
    if options.indent > 0 {
        out.push('\n');
    }
}

/// Escape an attribute value. Line breaks and tabs become character
/// references so they survive attribute-value normalization.
pub fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            _ => out.push(c),
        }
    }
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    escape_into(&mut out, value);
    out
}
