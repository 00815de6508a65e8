//! API integration tests

mod auth_test;
mod bookmarks_test;
mod users_test;
