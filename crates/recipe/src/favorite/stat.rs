use std::collections::HashMap;

use recipebook_db::table::{Favorite, Ingredient, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

use crate::{Category, FavoriteRecipe, FavoriteStats};

#[derive(FromRow)]
struct FavoriteRow {
    id: String,
    category: sqlx::types::Text<Category>,
    prep_time: u32,
    cooking_time: u32,
}

#[derive(FromRow)]
struct IngredientRow {
    recipe_id: String,
    name: String,
}

impl super::Command {
    /// Chart series of a user's favorites. Never fails: errors are logged
    /// and reported as no statistics.
    pub async fn stats(&self, user_id: impl Into<String>) -> Option<FavoriteStats> {
        let user_id = user_id.into();

        match self.favorite_recipes(&user_id).await {
            Ok(recipes) => FavoriteStats::from_recipes(&recipes),
            Err(err) => {
                tracing::error!(user = user_id, err = %err, "Failed to compute favorite stats");
                None
            }
        }
    }

    async fn favorite_recipes(&self, user_id: &str) -> anyhow::Result<Vec<FavoriteRecipe>> {
        let statement = sea_query::Query::select()
            .columns([
                (Recipe::Table, Recipe::Id),
                (Recipe::Table, Recipe::Category),
                (Recipe::Table, Recipe::PrepTime),
                (Recipe::Table, Recipe::CookingTime),
            ])
            .from(Favorite::Table)
            .inner_join(
                Recipe::Table,
                Expr::col((Recipe::Table, Recipe::Id))
                    .equals((Favorite::Table, Favorite::RecipeId)),
            )
            .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(user_id))
            .order_by((Favorite::Table, Favorite::CreatedAt), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let favorites = sqlx::query_as_with::<_, FavoriteRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let statement = sea_query::Query::select()
            .column((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .column((Ingredient::Table, Ingredient::Name))
            .from(Favorite::Table)
            .inner_join(
                RecipeIngredient::Table,
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .equals((Favorite::Table, Favorite::RecipeId)),
            )
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut ingredients: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            ingredients.entry(row.recipe_id).or_default().push(row.name);
        }

        Ok(favorites
            .into_iter()
            .map(|f| FavoriteRecipe {
                category: f.category.0,
                total_time: f.prep_time + f.cooking_time,
                ingredients: ingredients.remove(&f.id).unwrap_or_default(),
            })
            .collect())
    }
}
