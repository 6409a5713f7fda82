use recipebook_db::table::{Ingredient, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{Category, Difficulty, RecipeSummary};

#[derive(Debug, FromRow)]
struct DetailRow {
    id: String,
    name: String,
    description: String,
    instructions: String,
    category: sqlx::types::Text<Category>,
    prep_time: u32,
    cooking_time: u32,
    servings: u32,
    image: Option<String>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub category: Category,
    pub category_label: &'static str,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cooking_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl super::Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<RecipeDetail>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([
                Recipe::Id,
                Recipe::Name,
                Recipe::Description,
                Recipe::Instructions,
                Recipe::Category,
                Recipe::PrepTime,
                Recipe::CookingTime,
                Recipe::Servings,
                Recipe::Image,
                Recipe::CreatedAt,
                Recipe::UpdatedAt,
            ])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, DetailRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let ingredients = self.ingredient_names(&id).await?;
        let category = row.category.0;
        let total_time = row.prep_time + row.cooking_time;

        Ok(Some(RecipeDetail {
            id: row.id,
            name: row.name,
            description: row.description,
            instructions: row.instructions,
            category,
            category_label: category.label(),
            difficulty: Difficulty::classify(total_time, ingredients.len() as u32),
            prep_time: row.prep_time,
            cooking_time: row.cooking_time,
            total_time,
            servings: row.servings,
            ingredients,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }

    /// Ingredient names of a recipe, sorted.
    pub async fn ingredient_names(&self, id: impl Into<String>) -> anyhow::Result<Vec<String>> {
        let statement = sea_query::Query::select()
            .column((Ingredient::Table, Ingredient::Name))
            .from(RecipeIngredient::Table)
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId)).eq(id.into()),
            )
            .order_by((Ingredient::Table, Ingredient::Name), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let names = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(names)
    }

    /// Other recipes of the same category, by name.
    pub async fn related(
        &self,
        id: impl Into<String>,
        category: Category,
        limit: u64,
    ) -> anyhow::Result<Vec<RecipeSummary>> {
        let statement = super::summary_statement()
            .and_where(Expr::col((Recipe::Table, Recipe::Category)).eq(category.to_string()))
            .and_where(Expr::col((Recipe::Table, Recipe::Id)).ne(id.into()))
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .limit(limit)
            .to_owned();

        super::fetch_summaries(&self.read_db, &statement).await
    }
}
