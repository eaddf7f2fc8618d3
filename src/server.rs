use std::path::Path;

use axum::Router;
use http::{header::CONTENT_DISPOSITION, HeaderValue};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower::ServiceBuilder;
use tower_http::{services::ServeFile, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{
    app::{shell, App},
    content::RESUME_PATH,
};

const RESUME_DISPOSITION: &str = "attachment; filename=\"Chevhin Porto.pdf\"";

/// Serves the résumé as an attachment, for clients that ignore the `download` attribute.
pub fn resume_routes<S>(site_root: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let file = site_root.join(RESUME_PATH.trim_start_matches('/'));
    let service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_DISPOSITION,
            HeaderValue::from_static(RESUME_DISPOSITION),
        ))
        .service(ServeFile::new(file));
    Router::new().route_service(RESUME_PATH, service)
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    let site_root = Path::new(&*leptos_options.site_root).to_path_buf();

    Router::new()
        .merge(resume_routes(&site_root))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RESUME_FILENAME;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    fn site_root(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("should be able to create site root");
        dir
    }

    #[test]
    fn test_disposition_names_resume() {
        assert!(RESUME_DISPOSITION.starts_with("attachment;"));
        assert!(RESUME_DISPOSITION.contains(&format!("filename=\"{RESUME_FILENAME}\"")));
    }

    #[tokio::test]
    async fn test_resume_is_an_attachment() {
        let root = site_root("resume");
        std::fs::write(root.join("Chevhin-porto.pdf"), b"%PDF-1.4 test").unwrap();

        let app: Router = resume_routes(&root);
        let res = app
            .oneshot(Request::get(RESUME_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(CONTENT_DISPOSITION).unwrap(),
            RESUME_DISPOSITION
        );
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"%PDF-1.4 test");

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_missing_resume_is_plain_404() {
        let root = site_root("missing");
        let app: Router = resume_routes(&root);
        let res = app
            .oneshot(Request::get(RESUME_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        std::fs::remove_dir_all(root).ok();
    }
}
