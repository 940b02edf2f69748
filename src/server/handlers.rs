use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Error;
use crate::rendering::raster::render_png;

use super::ServerState;

pub type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

fn bad_request(msg: impl Into<String>) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": msg.into() })))
}

fn internal_error(msg: impl Into<String>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": msg.into() })),
    )
}

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
    endpoints: EndpointIndex,
}

#[derive(Serialize)]
struct EndpointIndex {
    generate_image: &'static str,
    health: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn handle_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Pagination Image Generator API",
        endpoints: EndpointIndex {
            generate_image: "/pagination/{page_number}",
            health: "/health",
        },
    })
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn handle_pagination(
    State(state): State<ServerState>,
    Path(page_number): Path<String>,
) -> ApiResult<Response> {
    // Parse by hand so a non-integer path segment gets the same JSON error
    // shape as an out-of-range page.
    let page: i64 = page_number
        .parse()
        .map_err(|_| bad_request(format!("Invalid page number: {page_number}")))?;

    let image = render_png(page, &state.fonts).map_err(|e| match e {
        Error::InvalidPage(_) => bad_request(e.to_string()),
        other => internal_error(format!("Error generating image: {other}")),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=page_{page}.png"),
            ),
        ],
        image.png_data,
    )
        .into_response())
}
