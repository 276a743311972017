/// Default placeholder marker class
pub fn default_placeholder_class() -> String {
    "cmp-toc__placeholder".to_string()
}

/// Default class for a processed placeholder
pub fn default_content_class() -> String {
    "cmp-toc__content".to_string()
}

/// Default class of the edit mode template placeholder
pub fn default_template_placeholder_class() -> String {
    "cmp-toc__template-placeholder".to_string()
}

/// Default first heading level in a TOC
pub fn default_start_level() -> u8 {
    2
}

/// Default last heading level in a TOC
pub fn default_stop_level() -> u8 {
    4
}

/// Default path prefix filtered by the server
pub fn default_path_prefix() -> String {
    "/".to_string()
}

/// Default response body limit (16 MiB)
pub fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}
