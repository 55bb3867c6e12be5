//! Development server
//!
//! Pages are rendered in-memory per request; nothing has to be generated
//! to disk first.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content;
use crate::error::SiteError;
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Site;

/// Server state
struct ServerState {
    renderer: TemplateRenderer,
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        renderer: TemplateRenderer::new(&site.config)?,
    });

    let app = Router::new()
        .route("/css/style.css", get(stylesheet_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    // Open browser if requested
    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback handler that maps the request path onto the page set
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let page = match content::find(uri.path()) {
        Ok(page) => page,
        Err(SiteError::PageNotFound(ident)) => {
            tracing::debug!("No such page: {}", ident);
            return (StatusCode::NOT_FOUND, "Not found").into_response();
        }
        Err(e) => {
            tracing::error!("Lookup failed for {}: {}", uri.path(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response();
        }
    };

    match state.renderer.render_page(page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render failed for {:?}: {}", page.id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// Serve the embedded stylesheet
async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
