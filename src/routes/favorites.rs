use axum::{
    Json,
    extract::{Path, State},
};
use recipebook_recipe::{FavoriteStats, RecipeSummary};
use serde::Serialize;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct FavoritesPage {
    pub count: usize,
    pub recipes: Vec<RecipeSummary>,
}

pub async fn index(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
) -> Result<Json<FavoritesPage>, AppError> {
    let recipes = app.favorite_command.list(&user.id).await?;

    Ok(Json(FavoritesPage {
        count: recipes.len(),
        recipes,
    }))
}

/// Chart series, `null` when there is nothing to show.
pub async fn stats(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
) -> Json<Option<FavoriteStats>> {
    Json(app.favorite_command.stats(&user.id).await)
}

#[derive(Serialize)]
pub struct Outcome {
    pub recipe_id: String,
    pub is_favorite: bool,
    pub changed: bool,
    pub message: &'static str,
}

pub async fn add(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Outcome>, AppError> {
    let added = app.favorite_command.add(&user.id, &recipe_id).await?;
    let message = if added.created {
        "Recipe added to your favorites"
    } else {
        "Recipe is already in your favorites"
    };

    Ok(Json(Outcome {
        recipe_id,
        is_favorite: true,
        changed: added.created,
        message,
    }))
}

pub async fn remove(
    AuthUser(user): AuthUser,
    State(app): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Outcome>, AppError> {
    let removed = app.favorite_command.remove(&user.id, &recipe_id).await?;
    let message = if removed.removed {
        "Recipe removed from your favorites"
    } else {
        "Recipe was not in your favorites"
    };

    Ok(Json(Outcome {
        recipe_id,
        is_favorite: false,
        changed: removed.removed,
        message,
    }))
}
