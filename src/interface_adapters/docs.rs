// Generated API description and the interactive documentation page.

use crate::domain::{SportsMatch, User};
use crate::interface_adapters::handlers::{matches, users};
use crate::interface_adapters::protocol::{CreateMatchRequest, CreateUserRequest, ErrorResponse};
use axum::{Json, response::Html};
use utoipa::OpenApi;

/// OpenAPI document assembled from the per-handler path metadata.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API with live match feed",
        version = "1.0.0",
        description = "Documentation for the REST API and the WebSocket match feed"
    ),
    paths(
        users::list_users,
        users::get_user,
        users::create_user,
        matches::create_match,
    ),
    components(schemas(
        User,
        SportsMatch,
        CreateUserRequest,
        CreateMatchRequest,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

// Swagger UI shell pointed at the generated document. Assets come from the
// swagger-ui distribution on unpkg, so no bundling step is needed.
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>REST API with live match feed</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.onload = () => {
        SwaggerUIBundle({
          url: "/api-docs/openapi.json",
          dom_id: "#swagger-ui",
        });
      };
    </script>
  </body>
</html>
"##;

// Serve the interactive documentation page.
pub async fn docs_page() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

// Serve the machine-readable OpenAPI document.
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
