mod create;
mod delete;
mod update;

use std::ops::Deref;

use recipebook_db::table::{Ingredient, RecipeIngredient};
use recipebook_shared::State;
use sea_query::{Expr, ExprTrait, OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::{Sqlite, Transaction};
use validator::{Validate, ValidationError};

use crate::{Category, query::search_key};

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub category: Category,
    #[validate(range(max = 1440))]
    #[serde(default)]
    pub prep_time: u32,
    #[validate(range(max = 1440))]
    #[serde(default)]
    pub cooking_time: u32,
    #[validate(range(min = 1))]
    pub servings: u32,
    #[validate(custom(function = "validate_ingredient_names"))]
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[validate(length(max = 255))]
    pub image: Option<String>,
}

fn validate_ingredient_names(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(ValidationError::new("ingredient_name")
            .with_message("Ingredient names cannot be empty".into()));
    }

    if names.iter().any(|n| n.trim().chars().count() > 100) {
        return Err(ValidationError::new("ingredient_name")
            .with_message("Ingredient names are limited to 100 characters".into()));
    }

    Ok(())
}

impl CreateInput {
    /// Trimmed ingredient names, first occurrence wins.
    pub fn ingredient_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.ingredients.len());
        for name in self.ingredients.iter().map(|n| n.trim()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        names
    }
}

/// Links each ingredient to the recipe, creating ingredients by name when
/// they don't exist yet.
async fn attach_ingredients(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: &str,
    names: &[&str],
) -> anyhow::Result<()> {
    for name in names {
        let statement = sea_query::Query::insert()
            .into_table(Ingredient::Table)
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::SearchName])
            .values_panic([
                ulid::Ulid::new().to_string().into(),
                (*name).into(),
                search_key(name).into(),
            ])
            .on_conflict(OnConflict::column(Ingredient::Name).do_nothing().to_owned())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut **tx).await?;

        let statement = sea_query::Query::select()
            .column(Ingredient::Id)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Name).eq(*name))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ingredient_id = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_one(&mut **tx)
            .await?;

        let statement = sea_query::Query::insert()
            .into_table(RecipeIngredient::Table)
            .columns([RecipeIngredient::RecipeId, RecipeIngredient::IngredientId])
            .values_panic([recipe_id.into(), ingredient_id.into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut **tx).await?;
    }

    Ok(())
}
