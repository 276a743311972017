use kuchiki::{Attributes, NodeRef};
use log::{debug, warn};

use crate::config::TocSettings;
use crate::toc::builder::build_table_of_contents;
use crate::toc::selector::{select_headings, split_classes};
use crate::toc::types::{
    HeadingLevel, ListType, NestedList, TocConfig, ATTR_IGNORE_CLASSES, ATTR_INCLUDE_CLASSES,
    ATTR_LIST_TYPE, ATTR_START_LEVEL, ATTR_STOP_LEVEL, DEFAULT_START_LEVEL, DEFAULT_STOP_LEVEL,
};

/// A placeholder node together with the configuration read from it
pub struct Placeholder {
    pub node: NodeRef,
    pub config: TocConfig,
}

/// Every placeholder in `document`, in document order
pub fn resolve_placeholders(document: &NodeRef, settings: &TocSettings) -> Vec<Placeholder> {
    let selector = format!(".{}", settings.placeholder_class);
    let matches = match document.select(&selector) {
        Ok(matches) => matches,
        Err(()) => {
            warn!("Invalid placeholder selector: {}", selector);
            return Vec::new();
        }
    };

    let placeholders: Vec<Placeholder> = matches
        .map(|element| {
            let config = config_from_attributes(&element.attributes.borrow(), settings);
            Placeholder {
                node: element.as_node().clone(),
                config,
            }
        })
        .collect();

    debug!("Found {} TOC placeholders", placeholders.len());
    placeholders
}

/// Read a placeholder's configuration, falling back to the configured defaults
pub fn config_from_attributes(attributes: &Attributes, settings: &TocSettings) -> TocConfig {
    let default_start = HeadingLevel::new(settings.default_start_level).unwrap_or(DEFAULT_START_LEVEL);
    let default_stop = HeadingLevel::new(settings.default_stop_level).unwrap_or(DEFAULT_STOP_LEVEL);

    let list_type = attributes
        .get(ATTR_LIST_TYPE)
        .and_then(|value| {
            let parsed = ListType::from_attr(value);
            if parsed.is_none() {
                debug!("Unknown TOC list type '{}', using default", value);
            }
            parsed
        })
        .unwrap_or(settings.default_list_type);

    let start_level = attributes
        .get(ATTR_START_LEVEL)
        .map_or(default_start, |value| HeadingLevel::from_str_or(value, default_start));
    let stop_level = attributes
        .get(ATTR_STOP_LEVEL)
        .map_or(default_stop, |value| HeadingLevel::from_str_or(value, default_stop));

    let include_classes = attributes
        .get(ATTR_INCLUDE_CLASSES)
        .map(split_classes)
        .unwrap_or_default();
    let ignore_classes = attributes
        .get(ATTR_IGNORE_CLASSES)
        .map(split_classes)
        .unwrap_or_default();

    TocConfig {
        list_type,
        start_level,
        stop_level,
        include_classes,
        ignore_classes,
    }
}

/// Build the TOC for one placeholder configuration
///
/// Returns `None` for an invalid level range (logged as a warning) or when no
/// heading qualifies.
pub fn table_of_contents(document: &NodeRef, config: &TocConfig) -> Option<NestedList> {
    if let Err(e) = config.validate() {
        warn!("{}", e);
        return None;
    }

    let headings = select_headings(document, config);
    let list = build_table_of_contents(config.list_type, &headings)?;
    debug!("Built TOC with {} entries, {} levels deep", list.entry_count(), list.depth());
    Some(list)
}
