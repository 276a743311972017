use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::toc::ListType;

/// Settings for the HTTP adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Only request paths starting with this prefix are filtered
    #[serde(default = "defaults::default_path_prefix")]
    pub path_prefix: String,

    /// Upper bound on a buffered response body, in bytes
    #[serde(default = "defaults::default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            path_prefix: defaults::default_path_prefix(),
            max_body_bytes: defaults::default_max_body_bytes(),
        }
    }
}

/// Table of contents settings shared by every placeholder on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocSettings {
    /// Class marking a TOC placeholder node
    #[serde(default = "defaults::default_placeholder_class")]
    pub placeholder_class: String,

    /// Class set on a placeholder once it has been processed
    #[serde(default = "defaults::default_content_class")]
    pub content_class: String,

    /// Class of the authoring hint shown next to an empty TOC in edit and preview mode
    #[serde(default = "defaults::default_template_placeholder_class")]
    pub template_placeholder_class: String,

    /// List type used when a placeholder has no list type attribute
    #[serde(default)]
    pub default_list_type: ListType,

    /// Start level used when a placeholder has no usable start level attribute
    #[serde(default = "defaults::default_start_level")]
    pub default_start_level: u8,

    /// Stop level used when a placeholder has no usable stop level attribute
    #[serde(default = "defaults::default_stop_level")]
    pub default_stop_level: u8,

    #[serde(default)]
    pub server: ServerSettings,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            placeholder_class: defaults::default_placeholder_class(),
            content_class: defaults::default_content_class(),
            template_placeholder_class: defaults::default_template_placeholder_class(),
            default_list_type: ListType::default(),
            default_start_level: defaults::default_start_level(),
            default_stop_level: defaults::default_stop_level(),
            server: ServerSettings::default(),
        }
    }
}
