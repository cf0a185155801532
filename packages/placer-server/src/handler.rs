use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use bytes::Bytes;

use crate::AppState;
use crate::page::MAIN_PAGE;
use crate::routes::{Captures, Endpoint};
use placer_core::{IMAGE_QUALITY, ImageError, encode_jpeg, generate, parse_dimension};

const PAGE_NOT_FOUND: &str = "page not found";

/// 全リクエストの入口。ルーティングテーブルを登録順に評価する
///
/// パターンはパーセントデコード後のパスに対して照合する。
pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let Ok(path) = urlencoding::decode(uri.path()) else {
        tracing::debug!(method = %method, path = %uri.path(), "path is not valid UTF-8");
        return AppError::NotFound.into_response();
    };

    let Some(matched) = state.routes.resolve(&method, &path) else {
        tracing::debug!(method = %method, path = %path, "no route matched");
        return AppError::NotFound.into_response();
    };

    match matched.endpoint {
        Endpoint::MainPage => main_page().await.into_response(),
        Endpoint::Image => image(&matched.captures).await.into_response(),
    }
}

pub async fn main_page() -> impl IntoResponse {
    Html(MAIN_PAGE)
}

/// 単色の JPEG 画像を生成して返す
async fn image(captures: &Captures<'_>) -> Result<Response, AppError> {
    let width = parse_dimension(captures.get("width"))?;
    let height = parse_dimension(captures.get("height"))?;

    // 生成とエンコードは CPU を占有するためブロッキングスレッドで実行
    let body = tokio::task::spawn_blocking(move || render(width, height))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (header::CONTENT_LENGTH, body.len().to_string()),
        ],
        body,
    )
        .into_response())
}

fn render(width: i64, height: i64) -> Result<Bytes, ImageError> {
    let canvas = generate(width, height)?;
    tracing::info!(
        w = %width,
        h = %height,
        canvas_w = canvas.width(),
        canvas_h = canvas.height(),
        "generating placeholder image"
    );

    Ok(Bytes::from(encode_jpeg(canvas, IMAGE_QUALITY)?))
}

#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    EncodingFailed(String),
    Internal(String),
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::InvalidDimension => {
                tracing::warn!(error = %err, "invalid dimension");
                AppError::BadRequest(err.to_string())
            }
            ImageError::InvalidValue(ref e) => {
                tracing::warn!(error = %e, "failed to parse dimension");
                AppError::BadRequest(err.to_string())
            }
            ImageError::ResolutionTooLarge { width, height } => {
                tracing::warn!(width = %width, height = %height, "image resolution too large");
                AppError::BadRequest(err.to_string())
            }
            ImageError::EncodingFailed(msg) => {
                tracing::error!(error = %msg, "image encoding failed");
                AppError::EncodingFailed(msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 未検出も入力エラーも 400 で返す
        let message = match self {
            AppError::NotFound => PAGE_NOT_FOUND.to_string(),
            AppError::BadRequest(msg) => msg,
            AppError::EncodingFailed(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "image task failed");
                msg
            }
        };

        let body = serde_json::json!({ "error": message });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
