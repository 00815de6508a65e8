/**
 * Bookmark Model and Database Operations
 *
 * Every query here carries the owner in its predicate. There is no way to
 * read, change, or delete a bookmark without naming its owner, so a record
 * owned by someone else looks exactly like a missing one.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::auth::users::UserId;
use crate::backend::db::StoreError;

/// Bookmark struct representing a row in the `bookmarks` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    /// Owner; set on insert and never changed
    pub user_id: UserId,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new bookmark. The owner is supplied separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial bookmark update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Persistence port for bookmarks, scoped by owner
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Owner's bookmarks in insertion order, at most `limit`
    async fn list(&self, owner: UserId, limit: u32) -> Result<Vec<Bookmark>, StoreError>;

    async fn find(&self, owner: UserId, id: i64) -> Result<Option<Bookmark>, StoreError>;

    async fn insert(&self, owner: UserId, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// `None` when no bookmark matches both `id` and `owner`
    async fn update(
        &self,
        owner: UserId,
        id: i64,
        patch: &BookmarkPatch,
    ) -> Result<Option<Bookmark>, StoreError>;

    /// `false` when no bookmark matches both `id` and `owner`
    async fn delete(&self, owner: UserId, id: i64) -> Result<bool, StoreError>;
}

/// `BookmarkStore` backed by the `bookmarks` table
#[derive(Clone)]
pub struct SqliteBookmarkStore {
    pool: SqlitePool,
}

impl SqliteBookmarkStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for SqliteBookmarkStore {
    async fn list(&self, owner: UserId, limit: u32) -> Result<Vec<Bookmark>, StoreError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE user_id = ?
            ORDER BY id
            LIMIT ?
            "#,
        )
        .bind(owner)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(user_id = %owner, count = bookmarks.len(), "Listed bookmarks");
        Ok(bookmarks)
    }

    async fn find(&self, owner: UserId, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn insert(&self, owner: UserId, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let now = Utc::now();

        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, title, link, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(&new.title)
        .bind(&new.link)
        .bind(new.description.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(user_id = %owner, bookmark_id = bookmark.id, "Inserted bookmark");
        Ok(bookmark)
    }

    async fn update(
        &self,
        owner: UserId,
        id: i64,
        patch: &BookmarkPatch,
    ) -> Result<Option<Bookmark>, StoreError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
            SET title = COALESCE(?, title),
                link = COALESCE(?, link),
                description = COALESCE(?, description),
                updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.link.as_deref())
        .bind(patch.description.as_deref())
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn delete(&self, owner: UserId, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
