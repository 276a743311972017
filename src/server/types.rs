use std::error::Error;

/// Common result type for server operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Response extension carrying the upstream decision on whether a page needs TOC generation
///
/// When a handler inserts it, the TOC middleware trusts it instead of scanning
/// the body for a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocGate(pub bool);
