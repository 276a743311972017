use std::rc::Rc;

use kuchiki::{ElementData, Node, NodeDataRef, NodeRef};
use markup5ever::local_name;

use crate::toc::text::{derive_id, normalize_text};
use crate::toc::types::HeadingLevel;

/// A heading element inside a parsed document
#[derive(Clone)]
pub struct HeadingElement {
    element: NodeDataRef<ElementData>,
    level: HeadingLevel,
}

impl HeadingElement {
    /// Wrap an element, or `None` if it is not `h1`..`h6`
    pub fn from_element(element: NodeDataRef<ElementData>) -> Option<Self> {
        let level = HeadingLevel::from_tag_name(&element.name.local)?;
        Some(Self { element, level })
    }

    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    /// Normalized visible text
    pub fn text(&self) -> String {
        normalize_text(&self.element.as_node().text_contents())
    }

    /// The current `id` attribute, if present and non-empty
    pub fn id(&self) -> Option<String> {
        self.element
            .attributes
            .borrow()
            .get(local_name!("id"))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    /// Return the heading's id, deriving and storing one from its text first if needed
    pub fn ensure_id(&self) -> String {
        if let Some(id) = self.id() {
            return id;
        }
        let id = derive_id(&self.text());
        self.element
            .attributes
            .borrow_mut()
            .insert(local_name!("id"), id.clone());
        id
    }

    pub fn node(&self) -> &NodeRef {
        self.element.as_node()
    }

    /// Identity of the underlying DOM node, for set membership
    pub(crate) fn node_key(&self) -> *const Node {
        Rc::as_ptr(&self.node().0)
    }
}

/// Index cursor over a heading sequence, with one step of pushback
pub struct HeadingCursor<'a> {
    headings: &'a [HeadingElement],
    position: usize,
}

impl<'a> HeadingCursor<'a> {
    pub fn new(headings: &'a [HeadingElement]) -> Self {
        Self { headings, position: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.headings.len()
    }

    /// Consume the next heading
    pub fn next(&mut self) -> Option<&'a HeadingElement> {
        let heading = self.headings.get(self.position)?;
        self.position += 1;
        Some(heading)
    }

    /// Step back so the last consumed heading is returned again by `next`
    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}
