//! Traversal engine.
//!
//! Walks an AST depth-first and builds one [`Element`] per visited node.
//! The walk keeps its own stack of open frames on the heap, so arbitrarily
//! deep expression trees never touch the call stack.
//!
//! ```rust,ignore
//! let projector = Projector::from_config(config.projector());
//! let document = projector.assemble(&ast, Some(source))?;
//! ```

use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::vec;

use tracing::{debug, trace};

use crate::ast::Node;
use crate::attributes::{attributes_for, has_rule};
use crate::config::ProjectorConfig;
use crate::error::{ProjectionError, ProjectionResult};
use crate::tree::{Element, is_element_name};

/// Projects AST nodes into attributed trees.
///
/// A `Projector` holds no per-run state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: ProjectorConfig,
    cancel: Option<Arc<AtomicBool>>,
}

/// An open element and the children still waiting to be visited.
struct Frame<'a> {
    element: Element,
    pending: vec::IntoIter<&'a Node>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ProjectorConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Check `flag` before entering each node; once it is set the run
    /// stops with [`ProjectionError::Cancelled`].
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Project a subtree without a document container.
    pub fn project_node(&self, root: &Node) -> ProjectionResult<Element> {
        self.walk(Element::new(root.name()), root)?
            .into_children()
            .pop()
            .ok_or_else(|| ProjectionError::malformed("projection produced no element"))
    }

    /// Walk `root` and attach its projection under `container`.
    ///
    /// The open-frame stack is `ancestors` plus `current`; its height is the
    /// depth of the node being visited, and `current` is always the element
    /// the next child attaches to.
    pub(crate) fn walk(&self, container: Element, root: &Node) -> ProjectionResult<Element> {
        let mut current = Frame {
            element: container,
            pending: vec![root].into_iter(),
        };
        let mut ancestors: Vec<Frame<'_>> = Vec::new();
        let mut entered = 0usize;
        let mut deepest = 0usize;

        loop {
            // enter
            if let Some(node) = current.pending.next() {
                self.check_cancelled()?;
                let depth = ancestors.len() + 1;
                let limit = self.config.traversal.max_depth;
                if let Some(limit) = limit.filter(|&limit| depth > limit) {
                    return Err(ProjectionError::DepthExceeded { limit });
                }

                let child = Frame {
                    element: self.enter(node)?,
                    pending: node.children().into_iter(),
                };
                entered += 1;
                deepest = deepest.max(depth);
                ancestors.push(mem::replace(&mut current, child));
                continue;
            }

            // exit
            match ancestors.pop() {
                Some(mut parent) => {
                    parent.element.push_child(current.element);
                    current = parent;
                }
                None => {
                    debug!(elements = entered, max_depth = deepest, "projection complete");
                    return Ok(current.element);
                }
            }
        }
    }

    fn enter(&self, node: &Node) -> ProjectionResult<Element> {
        trace!(kind = node.name(), position = %node.position, "enter");
        if !has_rule(&node.kind) {
            if !is_element_name(node.name()) {
                return Err(ProjectionError::malformed(format!(
                    "node kind {:?} at {} is not a valid element name",
                    node.name(),
                    node.position
                )));
            }
            debug!(
                kind = node.name(),
                line = node.position.line,
                column = node.position.column,
                "no extraction rule, emitting position attributes only"
            );
        }

        let mut element = Element::new(node.name());
        for attribute in attributes_for(node) {
            element.push_attribute(attribute)?;
        }
        Ok(element)
    }

    fn check_cancelled(&self) -> ProjectionResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(ProjectionError::Cancelled),
            _ => Ok(()),
        }
    }
}
