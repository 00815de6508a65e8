/**
 * Bookmark Service
 *
 * Ownership-scoped CRUD. Every operation takes the caller's `UserId` first;
 * the store applies it as part of the lookup predicate, so "not yours" and
 * "does not exist" both come back as `BookmarkError::NotFound`.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::users::UserId;
use crate::backend::bookmarks::db::{Bookmark, BookmarkPatch, BookmarkStore, NewBookmark};
use crate::backend::db::StoreError;
use crate::shared::validation::{validate_link, validate_not_blank};
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Absent, or owned by someone else
    #[error("bookmark not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
    page_size: u32,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>, page_size: u32) -> Self {
        Self { store, page_size }
    }

    /// First page of the owner's bookmarks, oldest first
    pub async fn list(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.store.list(owner, self.page_size).await?)
    }

    pub async fn get_by_id(&self, owner: UserId, id: i64) -> Result<Bookmark, BookmarkError> {
        self.store
            .find(owner, id)
            .await?
            .ok_or(BookmarkError::NotFound)
    }

    /// Create a bookmark owned by `owner`
    pub async fn create(&self, owner: UserId, new: NewBookmark) -> Result<Bookmark, BookmarkError> {
        validate_not_blank("title", &new.title)?;
        validate_link(&new.link)?;

        let bookmark = self.store.insert(owner, new).await?;
        tracing::info!(user_id = %owner, bookmark_id = bookmark.id, "Bookmark created");
        Ok(bookmark)
    }

    /// Apply a partial update; only fields present in `patch` change
    pub async fn update(
        &self,
        owner: UserId,
        id: i64,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, BookmarkError> {
        if let Some(title) = &patch.title {
            validate_not_blank("title", title)?;
        }
        if let Some(link) = &patch.link {
            validate_link(link)?;
        }

        self.store
            .update(owner, id, &patch)
            .await?
            .ok_or(BookmarkError::NotFound)
    }

    pub async fn delete(&self, owner: UserId, id: i64) -> Result<(), BookmarkError> {
        if !self.store.delete(owner, id).await? {
            return Err(BookmarkError::NotFound);
        }
        tracing::info!(user_id = %owner, bookmark_id = id, "Bookmark deleted");
        Ok(())
    }
}
