mod detail;
mod list;
mod search;

use std::ops::Deref;

use recipebook_db::table::{Recipe, RecipeIngredient};
use recipebook_shared::State;
use sea_query::{Alias, Expr, ExprTrait, Func, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{Category, Difficulty};

pub use detail::RecipeDetail;
pub use list::CategoryCount;
pub use search::{SearchInput, SearchResult};

const DESCRIPTION_MAX_LEN: usize = 100;

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct SummaryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: sqlx::types::Text<Category>,
    pub prep_time: u32,
    pub cooking_time: u32,
    pub servings: u32,
    pub image: Option<String>,
    pub ingredient_count: u32,
}

/// Recipe as shown in a list of results.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub category_label: &'static str,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cooking_time: u32,
    pub total_time: u32,
    pub servings: u32,
    pub ingredient_count: u32,
    pub description: String,
    pub image: Option<String>,
}

impl From<SummaryRow> for RecipeSummary {
    fn from(row: SummaryRow) -> Self {
        let category = row.category.0;
        let total_time = row.prep_time + row.cooking_time;

        Self {
            id: row.id,
            name: row.name,
            category,
            category_label: category.label(),
            difficulty: Difficulty::classify(total_time, row.ingredient_count),
            prep_time: row.prep_time,
            cooking_time: row.cooking_time,
            total_time,
            servings: row.servings,
            ingredient_count: row.ingredient_count,
            description: truncate_description(&row.description),
            image: row.image,
        }
    }
}

/// Cuts a description down to 100 characters, ending with "..." when cut.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_MAX_LEN {
        return description.to_owned();
    }

    let mut truncated = description
        .chars()
        .take(DESCRIPTION_MAX_LEN - 3)
        .collect::<String>();

    truncated.push_str("...");
    truncated
}

/// Lowercased form stored next to recipe and ingredient names. Substring
/// search runs against it since SQLite `LIKE` only folds ASCII.
pub(crate) fn search_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// One row per recipe with its ingredient count. Callers add filters and
/// ordering.
pub(crate) fn summary_statement() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (Recipe::Table, Recipe::Id),
            (Recipe::Table, Recipe::Name),
            (Recipe::Table, Recipe::Description),
            (Recipe::Table, Recipe::Category),
            (Recipe::Table, Recipe::PrepTime),
            (Recipe::Table, Recipe::CookingTime),
            (Recipe::Table, Recipe::Servings),
            (Recipe::Table, Recipe::Image),
        ])
        .expr_as(
            Func::count(Expr::col((
                RecipeIngredient::Table,
                RecipeIngredient::IngredientId,
            ))),
            Alias::new("ingredient_count"),
        )
        .from(Recipe::Table)
        .left_join(
            RecipeIngredient::Table,
            Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                .equals((Recipe::Table, Recipe::Id)),
        )
        .group_by_col((Recipe::Table, Recipe::Id))
        .to_owned()
}

pub(crate) async fn fetch_summaries(
    pool: &sqlx::SqlitePool,
    statement: &SelectStatement,
) -> anyhow::Result<Vec<RecipeSummary>> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, SummaryRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short"), "short");

        let exact = "a".repeat(100);
        assert_eq!(truncate_description(&exact), exact);

        let long = "b".repeat(101);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 100);
        assert!(truncated.ends_with("bbb..."));

        let accents = "é".repeat(150);
        assert_eq!(truncate_description(&accents).chars().count(), 100);
    }
}
