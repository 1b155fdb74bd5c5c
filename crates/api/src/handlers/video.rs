//! Handlers for the video collection, mounted at the root path.

use archive_core::error::CoreError;
use archive_core::types::RecordId;
use archive_db::models::video::{CreateVideo, UpdateVideo, Video};
use archive_db::repositories::VideoRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Parse a path identifier.
///
/// A malformed id can never match a stored record, so it is reported as the
/// same 404 a well-formed but unknown id gets.
fn parse_id(raw: &str) -> AppResult<RecordId> {
    RecordId::parse(raw).map_err(|_| AppError::from(CoreError::video_not_found(raw)))
}

/// POST /
#[utoipa::path(
    post,
    path = "/",
    tag = "videos",
    request_body = CreateVideo,
    responses(
        (status = 201, description = "Video created", body = Video),
        (status = 422, description = "Invalid request body", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateVideo>,
) -> AppResult<(StatusCode, Json<Video>)> {
    let id = RecordId::generate();
    let video = VideoRepo::create(state.store.as_ref(), id.clone(), &input)
        .await?
        .ok_or_else(|| CoreError::video_not_found(id.as_str()))?;

    tracing::info!(
        video_id = %video.id,
        platform = %video.platform,
        "Video created",
    );

    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /
///
/// Returns at most 1000 records.
#[utoipa::path(
    get,
    path = "/",
    tag = "videos",
    responses(
        (status = 200, description = "Stored videos", body = [Video]),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Video>>> {
    let videos = VideoRepo::list(state.store.as_ref()).await?;
    Ok(Json(videos))
}

/// GET /{id}
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Record id (24 hex digits)")),
    responses(
        (status = 200, description = "The video", body = Video),
        (status = 404, description = "Video not found", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Video>> {
    let id = parse_id(&raw_id)?;
    let video = VideoRepo::find_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| CoreError::video_not_found(raw_id))?;
    Ok(Json(video))
}

/// PUT /{id}
///
/// Writing values identical to the stored ones is not an error; the
/// unchanged record is returned.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Record id (24 hex digits)")),
    request_body = UpdateVideo,
    responses(
        (status = 200, description = "Updated video", body = Video),
        (status = 404, description = "Video not found", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateVideo>,
) -> AppResult<Json<Video>> {
    let id = parse_id(&raw_id)?;
    let video = VideoRepo::update(state.store.as_ref(), &id, &input)
        .await?
        .ok_or_else(|| CoreError::video_not_found(raw_id))?;

    tracing::info!(video_id = %id, fields = input.changes().len(), "Video updated");

    Ok(Json(video))
}

/// DELETE /{id}
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Record id (24 hex digits)")),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 404, description = "Video not found", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if VideoRepo::delete(state.store.as_ref(), &id).await? {
        tracing::info!(video_id = %id, "Video deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::from(CoreError::video_not_found(raw_id)))
    }
}
