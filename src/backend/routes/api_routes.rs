/**
 * API Route Handlers
 *
 * This module registers the API endpoints on the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/sign_up` - User registration
 * - `POST /auth/sign_in` - User login
 *
 * ## Protected (bearer token)
 * - `GET /users/me` - Current user's profile
 * - `PATCH /users` - Edit current user's profile
 * - `GET /bookmarks`, `POST /bookmarks`
 * - `GET /bookmarks/{id}`, `PATCH /bookmarks/{id}`, `DELETE /bookmarks/{id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{sign_in, sign_up};
use crate::backend::bookmarks::handlers::{
    create_bookmark, delete_bookmark, edit_bookmark, get_bookmark, list_bookmarks,
};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{edit_user, get_me};

/// Configure public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/sign_up", post(sign_up))
        .route("/auth/sign_in", post(sign_in))
}

/// Configure routes that require a signed-in user
///
/// `require_auth` is attached with `route_layer`, so it only runs for
/// requests that matched one of these routes; unknown paths still 404.
pub fn configure_protected_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
        .route_layer(from_fn_with_state(app_state.tokens.clone(), require_auth));

    router.merge(protected)
}
