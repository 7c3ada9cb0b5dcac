pub mod model;
pub mod upload;

use crate::AppState;
use crate::config::MAX_UPLOAD_BYTES;
use crate::database::Affected;
use crate::domain::CatPic;
use crate::error::AppError;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use model::{CatPicInfo, CreatedCatPic, NOT_FOUND_MESSAGE, UPDATED_MESSAGE};
use tracing::instrument;
use upload::read_catpic_field;

pub fn catpics_router() -> Router<AppState> {
    Router::new()
        .route(
            "/catpics",
            post(create_catpic_handler).get(list_catpics_handler),
        )
        .route(
            "/catpics/{id}",
            get(get_catpic_handler)
                .put(update_catpic_handler)
                .delete(delete_catpic_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

#[instrument(skip_all)]
async fn create_catpic_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<CreatedCatPic>), AppError> {
    let data = read_catpic_field(multipart, "File too large").await?;

    let pic = CatPic::new(data);
    state.repo.insert(&pic.id, &pic.data).await?;

    tracing::info!(catpic = %pic, "stored new catpic");

    Ok((StatusCode::CREATED, Json(CreatedCatPic { id: pic.id })))
}

#[instrument(skip(state))]
async fn get_catpic_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repo.fetch_data(&id).await {
        Ok(Some(data)) => ([(header::CONTENT_TYPE, "image/jpeg")], data).into_response(),

        // bare not-found, this endpoint never speaks json on success either
        Ok(None) => (StatusCode::NOT_FOUND, "404 page not found").into_response(),

        Err(e) => AppError::from(e).into_response(),
    }
}

#[instrument(skip_all)]
async fn list_catpics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatPicInfo>>, AppError> {
    let pics = state
        .repo
        .list_ids()
        .await?
        .into_iter()
        .map(|id| CatPicInfo { id })
        .collect();

    Ok(Json(pics))
}

#[instrument(skip(state, multipart))]
async fn update_catpic_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<&'static str>, AppError> {
    let data = read_catpic_field(multipart, "File too large or invalid").await?;

    match state.repo.replace_data(&id, &data).await? {
        Affected::Applied => {
            tracing::info!(bytes = data.len(), "replaced catpic data");
            Ok(Json(UPDATED_MESSAGE))
        }
        Affected::NotFound => Err(AppError::NotFound(NOT_FOUND_MESSAGE)),
    }
}

#[instrument(skip(state))]
async fn delete_catpic_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    match state.repo.delete(&id).await? {
        Affected::Applied => {
            tracing::info!("deleted catpic");
            Ok(StatusCode::NO_CONTENT)
        }
        Affected::NotFound => Err(AppError::NotFound(NOT_FOUND_MESSAGE)),
    }
}
