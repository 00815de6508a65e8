/**
 * Bookmark Handlers
 *
 * HTTP handlers for `/bookmarks`. All of them sit behind `require_auth` and
 * take the caller from `AuthUser`; none accept an owner from the client.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::backend::bookmarks::db::{Bookmark, BookmarkPatch, NewBookmark};
use crate::backend::bookmarks::service::BookmarkService;
use crate::backend::error::{ApiError, ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;

/// Create bookmark request
///
/// Unknown fields, including any attempt to set an owner, are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Edit bookmark request; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(req: CreateBookmarkRequest) -> Self {
        Self {
            title: req.title,
            link: req.link,
            description: req.description,
        }
    }
}

impl From<EditBookmarkRequest> for BookmarkPatch {
    fn from(req: EditBookmarkRequest) -> Self {
        Self {
            title: req.title,
            link: req.link,
            description: req.description,
        }
    }
}

/// GET /bookmarks
pub async fn list_bookmarks(
    State(bookmarks): State<BookmarkService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    Ok(Json(bookmarks.list(user.id).await?))
}

/// GET /bookmarks/{id}
pub async fn get_bookmark(
    State(bookmarks): State<BookmarkService>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Bookmark>, ApiError> {
    Ok(Json(bookmarks.get_by_id(user.id, id).await?))
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(bookmarks): State<BookmarkService>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    let bookmark = bookmarks.create(user.id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// PATCH /bookmarks/{id}
pub async fn edit_bookmark(
    State(bookmarks): State<BookmarkService>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    Ok(Json(bookmarks.update(user.id, id, request.into()).await?))
}

/// DELETE /bookmarks/{id}
///
/// `204 No Content` on success.
pub async fn delete_bookmark(
    State(bookmarks): State<BookmarkService>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    bookmarks.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
