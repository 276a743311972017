use serde::{Serialize, Deserialize};

use crate::utils::error::TocError;

/// Placeholder attribute holding the list type
pub const ATTR_LIST_TYPE: &str = "data-cmp-toc-list-type";
/// Placeholder attribute holding the start level
pub const ATTR_START_LEVEL: &str = "data-cmp-toc-start-level";
/// Placeholder attribute holding the stop level
pub const ATTR_STOP_LEVEL: &str = "data-cmp-toc-stop-level";
/// Placeholder attribute holding comma separated include classes
pub const ATTR_INCLUDE_CLASSES: &str = "data-cmp-toc-include-classes";
/// Placeholder attribute holding comma separated ignore classes
pub const ATTR_IGNORE_CLASSES: &str = "data-cmp-toc-ignore-classes";

/// Start level used when neither the placeholder nor the settings provide one
pub const DEFAULT_START_LEVEL: HeadingLevel = HeadingLevel(2);
/// Stop level used when neither the placeholder nor the settings provide one
pub const DEFAULT_STOP_LEVEL: HeadingLevel = HeadingLevel(4);

/// Kind of list the TOC is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Unordered,
    Ordered,
}

impl ListType {
    /// Parse the value of a list type attribute
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unordered" => Some(ListType::Unordered),
            "ordered" => Some(ListType::Ordered),
            _ => None,
        }
    }

    /// HTML tag name for this list type
    pub fn tag_name(&self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }
}

/// Heading level between 1 (`h1`) and 6 (`h6`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(HeadingLevel(level))
    }

    /// Parse an attribute value, falling back to `default` when it is not a level
    pub fn from_str_or(value: &str, default: HeadingLevel) -> Self {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(HeadingLevel::new)
            .unwrap_or(default)
    }

    /// Level of a heading tag name such as `h3`
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        let digit = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
        if digit.len() != 1 {
            return None;
        }
        digit.parse::<u8>().ok().and_then(HeadingLevel::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tag_name(&self) -> String {
        format!("h{}", self.0)
    }

    /// All levels from `start` to `stop`, inclusive
    pub fn range(start: HeadingLevel, stop: HeadingLevel) -> impl Iterator<Item = HeadingLevel> {
        (start.0..=stop.0).map(HeadingLevel)
    }
}

/// Page render mode, as reported by the authoring environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Disabled,
    Edit,
    Preview,
    Design,
    Analytics,
    ReadOnly,
}

impl RenderMode {
    /// Parse a mode name; absent or unknown names mean `Disabled`
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("edit") => RenderMode::Edit,
            Some("preview") => RenderMode::Preview,
            Some("design") => RenderMode::Design,
            Some("analytics") => RenderMode::Analytics,
            Some("read_only") | Some("readonly") => RenderMode::ReadOnly,
            _ => RenderMode::Disabled,
        }
    }

    /// Whether authoring hints are shown on the page
    pub fn is_authoring(&self) -> bool {
        matches!(self, RenderMode::Edit | RenderMode::Preview)
    }
}

/// Per-document inputs supplied by whoever produced the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessOptions {
    /// Whether the page contains any TOC placeholder at all
    pub contains_toc: bool,
    pub mode: RenderMode,
}

impl ProcessOptions {
    pub fn new(contains_toc: bool, mode: RenderMode) -> Self {
        Self { contains_toc, mode }
    }
}

/// Configuration of a single placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocConfig {
    pub list_type: ListType,
    pub start_level: HeadingLevel,
    pub stop_level: HeadingLevel,
    pub include_classes: Vec<String>,
    pub ignore_classes: Vec<String>,
}

impl TocConfig {
    pub fn validate(&self) -> Result<(), TocError> {
        if self.start_level > self.stop_level {
            return Err(TocError::InvalidLevels {
                start: self.start_level.value(),
                stop: self.stop_level.value(),
            });
        }
        Ok(())
    }
}

/// A generated TOC list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedList {
    pub list_type: ListType,
    pub items: Vec<ListItem>,
}

/// Entry of a TOC list, linking to one heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub href: String,
    pub label: String,
    pub sublist: Option<NestedList>,
}

impl NestedList {
    pub fn new(list_type: ListType) -> Self {
        Self { list_type, items: Vec::new() }
    }

    /// Number of list levels, counting this one
    pub fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.sublist.as_ref())
            .map(NestedList::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of entries at every level
    pub fn entry_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.sublist.as_ref().map_or(0, NestedList::entry_count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> HeadingLevel {
        HeadingLevel::new(n).unwrap()
    }

    #[test]
    fn test_list_type_parsing() {
        assert_eq!(ListType::from_attr("ordered"), Some(ListType::Ordered));
        assert_eq!(ListType::from_attr(" Unordered "), Some(ListType::Unordered));
        assert_eq!(ListType::from_attr("numbered"), None);
        assert_eq!(ListType::Ordered.tag_name(), "ol");
        assert_eq!(ListType::default().tag_name(), "ul");
    }

    #[test]
    fn test_heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_none());
        assert!(HeadingLevel::new(7).is_none());
        assert_eq!(HeadingLevel::from_tag_name("h3"), Some(level(3)));
        assert_eq!(HeadingLevel::from_tag_name("h7"), None);
        assert_eq!(HeadingLevel::from_tag_name("h10"), None);
        assert_eq!(HeadingLevel::from_tag_name("hr"), None);
        assert_eq!(level(5).tag_name(), "h5");
    }

    #[test]
    fn test_level_attribute_falls_back_to_default() {
        assert_eq!(HeadingLevel::from_str_or("3", level(2)), level(3));
        assert_eq!(HeadingLevel::from_str_or("9", level(2)), level(2));
        assert_eq!(HeadingLevel::from_str_or("h3", level(2)), level(2));
        assert_eq!(HeadingLevel::from_str_or("", level(4)), level(4));
    }

    #[test]
    fn test_render_mode() {
        assert_eq!(RenderMode::from_param(Some("EDIT")), RenderMode::Edit);
        assert_eq!(RenderMode::from_param(Some("preview")), RenderMode::Preview);
        assert_eq!(RenderMode::from_param(Some("bogus")), RenderMode::Disabled);
        assert_eq!(RenderMode::from_param(None), RenderMode::Disabled);
        assert!(RenderMode::Edit.is_authoring());
        assert!(!RenderMode::Design.is_authoring());
    }

    #[test]
    fn test_config_validation() {
        let mut config = TocConfig {
            list_type: ListType::Unordered,
            start_level: level(2),
            stop_level: level(2),
            include_classes: Vec::new(),
            ignore_classes: Vec::new(),
        };
        assert!(config.validate().is_ok());

        config.start_level = level(4);
        assert!(matches!(
            config.validate(),
            Err(TocError::InvalidLevels { start: 4, stop: 2 })
        ));
    }

    #[test]
    fn test_nested_list_metrics() {
        let leaf = |label: &str| ListItem {
            href: format!("#{}", label),
            label: label.to_string(),
            sublist: None,
        };
        let mut inner = NestedList::new(ListType::Unordered);
        inner.items.push(leaf("b"));
        let mut outer = NestedList::new(ListType::Unordered);
        outer.items.push(ListItem { sublist: Some(inner), ..leaf("a") });
        outer.items.push(leaf("c"));

        assert_eq!(outer.depth(), 2);
        assert_eq!(outer.entry_count(), 3);
    }
}
