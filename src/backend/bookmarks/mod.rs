//! Bookmarks Module
//!
//! A signed-in user's personal collection of links.
//!
//! # Module Structure
//!
//! ```text
//! bookmarks/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Bookmark model and `BookmarkStore`
//! ├── service.rs   - Ownership-scoped operations
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod service;

pub use db::{Bookmark, BookmarkPatch, BookmarkStore, NewBookmark, SqliteBookmarkStore};
pub use service::{BookmarkError, BookmarkService};
