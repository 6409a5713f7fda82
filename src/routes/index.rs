use axum::{Json, extract::State};
use recipebook_recipe::{Category, RecipeSummary};
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

const FEATURED: u64 = 6;
const PER_CATEGORY: u64 = 3;

#[derive(Serialize)]
pub struct HomePage {
    pub featured: Vec<RecipeSummary>,
    pub breakfast: Vec<RecipeSummary>,
    pub dinner: Vec<RecipeSummary>,
    pub dessert: Vec<RecipeSummary>,
    pub total_recipes: u32,
}

pub async fn page(State(app): State<AppState>) -> Result<Json<HomePage>, AppError> {
    let query = &app.recipe_query;
    let (featured, breakfast, dinner, dessert, total_recipes) = tokio::try_join!(
        query.latest(FEATURED, None),
        query.latest(PER_CATEGORY, Some(Category::Breakfast)),
        query.latest(PER_CATEGORY, Some(Category::Dinner)),
        query.latest(PER_CATEGORY, Some(Category::Dessert)),
        query.count(),
    )?;

    Ok(Json(HomePage {
        featured,
        breakfast,
        dinner,
        dessert,
        total_recipes,
    }))
}
