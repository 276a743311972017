//! Table of contents generation for rendered HTML pages.
//!
//! Placeholders are resolved to a `TocConfig`, matching headings are
//! selected from the document, and a `NestedList` mirroring their levels is
//! spliced into each placeholder.

mod builder;
mod document;
mod heading;
mod processor;
mod resolver;
mod selector;
mod text;
mod types;

pub use processor::{contains_placeholder, filter_content};
pub use types::{ListType, ProcessOptions, RenderMode};
