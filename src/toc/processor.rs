use std::time::Instant;

use kuchiki::traits::*;
use kuchiki::NodeRef;
use log::{debug, error, warn};

use crate::config::TocSettings;
use crate::toc::document::{list_to_node, parse_document, remove_children, reset_attributes, serialize_document};
use crate::toc::resolver::{resolve_placeholders, table_of_contents, Placeholder};
use crate::toc::types::{NestedList, ProcessOptions, RenderMode};
use crate::utils::error::TocError;

/// Cheap check for whether a page may hold a TOC placeholder
pub fn contains_placeholder(html: &str, settings: &TocSettings) -> bool {
    html.contains(settings.placeholder_class.as_str())
}

/// Generate the TOC for every placeholder in `html` and serialize the result
///
/// When `options.contains_toc` is false the input is returned unchanged
/// without being parsed.
pub fn process_document(
    html: &str,
    options: &ProcessOptions,
    settings: &TocSettings,
) -> Result<String, TocError> {
    if !options.contains_toc {
        return Ok(html.to_string());
    }

    let started = Instant::now();
    let document = parse_document(html);

    let placeholders = resolve_placeholders(&document, settings);
    for placeholder in &placeholders {
        let list = table_of_contents(&document, &placeholder.config);
        splice(placeholder, list.as_ref(), options.mode, settings);
    }

    let output = serialize_document(&document)?;
    debug!(
        "Processed {} TOC placeholders in {:?}",
        placeholders.len(),
        started.elapsed()
    );
    Ok(output)
}

/// Like [`process_document`], but returns the original content on failure
pub fn filter_content(html: &str, options: &ProcessOptions, settings: &TocSettings) -> String {
    match process_document(html, options, settings) {
        Ok(output) => output,
        Err(e) => {
            error!("TOC generation failed, returning original content: {}", e);
            html.to_string()
        }
    }
}

/// Replace a placeholder's content with its list
///
/// The placeholder is emptied and marked with the content class even when no
/// list was built.
fn splice(placeholder: &Placeholder, list: Option<&NestedList>, mode: RenderMode, settings: &TocSettings) {
    let node = &placeholder.node;
    remove_children(node);
    reset_attributes(node, &settings.content_class);

    let Some(list) = list else {
        return;
    };
    node.append(list_to_node(list));

    if mode.is_authoring() {
        remove_template_placeholders(node, settings);
    }
}

/// Drop the authoring hint next to a placeholder that now has content
fn remove_template_placeholders(node: &NodeRef, settings: &TocSettings) {
    let Some(parent) = node.parent() else {
        return;
    };

    let selector = format!(".{}", settings.template_placeholder_class);
    let matches = match parent.inclusive_descendants().select(&selector) {
        Ok(matches) => matches,
        Err(()) => {
            warn!("Invalid template placeholder selector: {}", selector);
            return;
        }
    };

    let templates: Vec<NodeRef> = matches.map(|element| element.as_node().clone()).collect();
    for template in templates {
        template.detach();
    }
}
