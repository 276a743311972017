//! Thin layer over the kuchiki DOM: parsing, serialization and element construction.

use kuchiki::traits::*;
use kuchiki::{Attribute, ExpandedName, NodeRef};
use markup5ever::{local_name, namespace_url, ns, LocalName, QualName};

use crate::toc::types::NestedList;
use crate::utils::error::TocError;

/// Parse a full HTML document
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Serialize a document back to an HTML string
pub fn serialize_document(document: &NodeRef) -> Result<String, TocError> {
    let mut out = Vec::new();
    document
        .serialize(&mut out)
        .map_err(|e| TocError::Serialize(e.to_string()))?;
    String::from_utf8(out).map_err(|e| TocError::Serialize(e.to_string()))
}

/// Create a detached HTML element
pub fn new_element(tag: &str, attributes: Vec<(&str, String)>) -> NodeRef {
    NodeRef::new_element(
        QualName::new(None, ns!(html), LocalName::from(tag)),
        attributes.into_iter().map(|(name, value)| {
            (
                ExpandedName::new("", name),
                Attribute { prefix: None, value },
            )
        }),
    )
}

/// Detach every child of `node`
pub fn remove_children(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
}

/// Remove every attribute of an element and give it a single class
pub fn reset_attributes(node: &NodeRef, class: &str) {
    if let Some(element) = node.as_element() {
        let mut attributes = element.attributes.borrow_mut();
        attributes.map.clear();
        attributes.insert(local_name!("class"), class.to_string());
    }
}

/// Build the DOM for a generated list: `<ul><li><a href="#id">Label</a><ul>...</ul></li></ul>`
pub fn list_to_node(list: &NestedList) -> NodeRef {
    let list_node = new_element(list.list_type.tag_name(), Vec::new());
    for item in &list.items {
        let anchor = new_element("a", vec![("href", item.href.clone())]);
        anchor.append(NodeRef::new_text(item.label.clone()));

        let list_item = new_element("li", Vec::new());
        list_item.append(anchor);
        if let Some(sublist) = &item.sublist {
            list_item.append(list_to_node(sublist));
        }
        list_node.append(list_item);
    }
    list_node
}
