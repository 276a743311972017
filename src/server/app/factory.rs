use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};

use crate::config::TocSettings;
use crate::server::config::ServerConfig;
use crate::server::handlers::create_static_files_handler;
use crate::server::middleware::toc_middleware;

/// Create the router serving the configured root with TOC generation applied
pub fn create_app(config: &ServerConfig, settings: Arc<TocSettings>) -> Router {
    create_static_files_handler(config.root.clone())
        .layer(from_fn_with_state(settings, toc_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_static_page_gets_toc() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<div class=\"cmp-toc__placeholder\"></div><h2>Welcome</h2>",
        )
        .unwrap();

        let config = ServerConfig::new("127.0.0.1", 0, dir.path().to_path_buf());
        let app = create_app(&config, Arc::new(TocSettings::default()));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let length: usize = response.headers()[header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(length, body.len());

        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<a href=\"#welcome\">Welcome</a>"));
        assert!(body.contains("<h2 id=\"welcome\">Welcome</h2>"));
    }

    #[tokio::test]
    async fn test_page_over_body_limit_is_served_unchanged() {
        let dir = TempDir::new().unwrap();
        let page = format!(
            "<div class=\"cmp-toc__placeholder\"></div>{}",
            "<h2>Section</h2><p>filler text</p>".repeat(50)
        );
        std::fs::write(dir.path().join("index.html"), &page).unwrap();

        let mut settings = TocSettings::default();
        settings.server.max_body_bytes = 256;
        let config = ServerConfig::new("127.0.0.1", 0, dir.path().to_path_buf());
        let app = create_app(&config, Arc::new(settings));

        let request = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), page);
    }
}
