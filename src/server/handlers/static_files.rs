use std::path::{Path, PathBuf};

use axum::Router;
use log::debug;
use tower_http::services::{ServeDir, ServeFile};

/// Name of the page served for unknown paths, when present in the root
const NOT_FOUND_PAGE: &str = "404.html";

/// Create a router serving static files from a directory
///
/// Directory requests resolve to their `index.html`. A `404.html` in the
/// root is served with a 404 status for paths that do not exist.
pub fn create_static_files_handler(directory: PathBuf) -> Router {
    let serve_dir = ServeDir::new(&directory).append_index_html_on_directories(true);

    match custom_not_found(&directory) {
        Some(page) => {
            debug!("Using custom 404 page: {}", page.display());
            Router::new().fallback_service(serve_dir.not_found_service(ServeFile::new(page)))
        }
        None => Router::new().fallback_service(serve_dir),
    }
}

fn custom_not_found(directory: &Path) -> Option<PathBuf> {
    let page = directory.join(NOT_FOUND_PAGE);
    page.is_file().then_some(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_index_and_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "home").unwrap();
        std::fs::write(dir.path().join("about.html"), "about").unwrap();

        let router = create_static_files_handler(dir.path().to_path_buf());
        assert_eq!(get(router.clone(), "/").await, (StatusCode::OK, "home".to_string()));
        assert_eq!(get(router, "/about.html").await, (StatusCode::OK, "about".to_string()));
    }

    #[tokio::test]
    async fn test_custom_not_found_page() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("404.html"), "missing").unwrap();

        let router = create_static_files_handler(dir.path().to_path_buf());
        assert_eq!(get(router, "/nope.html").await, (StatusCode::NOT_FOUND, "missing".to_string()));
    }

    #[tokio::test]
    async fn test_plain_not_found() {
        let dir = TempDir::new().unwrap();
        let router = create_static_files_handler(dir.path().to_path_buf());
        let (status, _) = get(router, "/nope.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
