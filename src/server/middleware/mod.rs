pub mod toc;

pub use toc::toc_middleware;
