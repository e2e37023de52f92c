//! HTTP request handlers for the JurisIntel web server

pub mod analysis;
pub mod health;
pub mod prompt;
pub mod report;
pub mod types;

// Re-export all handler functions to keep route definitions short
pub use analysis::*;
pub use health::*;
pub use prompt::*;
pub use report::*;
pub use types::*;

use axum::response::Html;

/// Fallback page pointing at the API surface.
pub async fn spa_fallback() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>JurisIntel API</title></head>
<body>
  <h1>JurisIntel API</h1>
  <p>Endpoints disponíveis em <code>/api</code>:</p>
  <ul>
    <li><code>GET /api/health</code></li>
    <li><code>POST /api/analysis</code></li>
    <li><code>GET /api/analysis</code></li>
    <li><code>GET /api/report/{format}</code> (html | markdown)</li>
    <li><code>POST /api/prompt</code></li>
    <li><code>GET /api/openapi.json</code></li>
  </ul>
</body>
</html>"#,
    )
}
