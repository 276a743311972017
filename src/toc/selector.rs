use std::collections::HashSet;

use kuchiki::NodeRef;
use log::{debug, warn};

use crate::toc::heading::HeadingElement;
use crate::toc::types::{HeadingLevel, TocConfig};
use crate::utils::error::TocError;

/// Split a comma separated class list attribute, dropping empty entries
pub fn split_classes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .map(str::to_string)
        .collect()
}

/// Selector for every heading tag in the level range, e.g. `h2,h3`
pub fn heading_tags_selector(start: HeadingLevel, stop: HeadingLevel) -> String {
    HeadingLevel::range(start, stop)
        .map(|level| level.tag_name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Selector matching headings in range that carry a class or sit below an element carrying it
///
/// Each class contributes `.class hN` and `hN.class` for every level, so a class
/// may mark either a container or the heading itself. Returns an empty string
/// for an empty class list.
pub fn class_selector(classes: &[String], start: HeadingLevel, stop: HeadingLevel) -> String {
    let mut selectors = Vec::new();
    for class in classes {
        for level in HeadingLevel::range(start, stop) {
            let tag = level.tag_name();
            selectors.push(format!(".{} {}", class, tag));
            selectors.push(format!("{}.{}", tag, class));
        }
    }
    selectors.join(",")
}

/// Selector for the headings a placeholder wants listed
pub fn include_selector(config: &TocConfig) -> String {
    if config.include_classes.is_empty() {
        heading_tags_selector(config.start_level, config.stop_level)
    } else {
        class_selector(&config.include_classes, config.start_level, config.stop_level)
    }
}

/// All headings in `document` matching `selector`, in document order
///
/// A selector that does not parse matches nothing.
pub fn select_elements(document: &NodeRef, selector: &str) -> Vec<HeadingElement> {
    if selector.is_empty() {
        return Vec::new();
    }
    match document.select(selector) {
        Ok(matches) => matches.filter_map(HeadingElement::from_element).collect(),
        Err(()) => {
            warn!("{}, matching nothing", TocError::Selector(selector.to_string()));
            Vec::new()
        }
    }
}

/// Headings a placeholder's TOC is built from, in document order
///
/// Without ignore classes the include matches are returned as they are. With
/// ignore classes, headings matching the ignore selector and headings with no
/// text are dropped.
pub fn select_headings(document: &NodeRef, config: &TocConfig) -> Vec<HeadingElement> {
    let included = select_elements(document, &include_selector(config));

    if config.ignore_classes.is_empty() {
        debug!("Selected {} headings", included.len());
        return included;
    }

    let ignore_selector = class_selector(&config.ignore_classes, config.start_level, config.stop_level);
    let ignored: HashSet<_> = select_elements(document, &ignore_selector)
        .iter()
        .map(HeadingElement::node_key)
        .collect();

    let selected: Vec<HeadingElement> = included
        .into_iter()
        .filter(|heading| !ignored.contains(&heading.node_key()) && !heading.text().is_empty())
        .collect();

    debug!("Selected {} headings, {} ignored by class", selected.len(), ignored.len());
    selected
}
