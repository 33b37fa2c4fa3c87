use crate::handlers::{health, list, signup, unregister};
use crate::state::AppState;
use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

pub fn build(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/health", get(health::health))
        .route("/activities", get(list::list))
        .route("/activities/{name}/signup", post(signup::signup))
        .route(
            "/activities/{name}/participants",
            delete(unregister::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
