mod assets;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Path as RoutePath, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use assets::Assets;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

/// Build the full application router.
fn build_app(assets: Arc<Assets>) -> Router {
    // Static file routers are stateless — merge them before adding app state
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(Path::new("assets"), CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(Path::new("dist"), CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(Path::new("dist/assets"), CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_root))
        .route("/region/{slug}", get(serve_region))
        .with_state(assets)
        .merge(static_files)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

async fn serve_root() -> Html<String> {
    serve_index()
}

/// Deep link into a region: serve the app shell for known active regions,
/// 404 for anything else.
async fn serve_region(
    RoutePath(slug): RoutePath<String>,
    State(assets): State<Arc<Assets>>,
) -> Result<Html<String>, StatusCode> {
    match assets.find_by_slug(&slug) {
        Some(region) if region.active => Ok(serve_index()),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

fn serve_index() -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match std::fs::read_to_string("dist/index.html") {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Region Atlas</title></head>
<body>
<h1>Region Atlas</h1>
<p>Frontend not built yet. The region catalog is served at <a href="/static/regions.json">/static/regions.json</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let assets_dir =
        PathBuf::from(std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()));
    let loaded = Assets::load(&assets_dir)
        .unwrap_or_else(|e| panic!("Failed to load region catalog: {}", e));
    let assets = Arc::new(loaded);

    let app = build_app(assets);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server running at http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
