use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod favorites;
mod health;
mod index;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub recipe_query: recipebook_recipe::Query,
    pub favorite_command: recipebook_recipe::favorite::Command,
    pub user_query: recipebook_user::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: recipebook_shared::State) -> Self {
        Self {
            config,
            recipe_query: recipebook_recipe::Query(state.clone()),
            favorite_command: recipebook_recipe::favorite::Command(state.clone()),
            user_query: recipebook_user::Query(state.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/recipes", get(recipes::index))
        .route("/recipes/{id}", get(recipes::detail))
        .route("/favorites", get(favorites::index))
        .route("/favorites/stats", get(favorites::stats))
        .route("/favorites/{recipe_id}/add", post(favorites::add))
        .route("/favorites/{recipe_id}/remove", post(favorites::remove))
        .with_state(app_state)
}
