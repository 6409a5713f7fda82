use recipebook_db::table::Recipe;
use sea_query::{Alias, Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{Category, RecipeSummary};

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    category: sqlx::types::Text<Category>,
    total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: u32,
}

impl super::Query {
    /// Newest recipes first, optionally within one category.
    pub async fn latest(
        &self,
        limit: u64,
        category: Option<Category>,
    ) -> anyhow::Result<Vec<RecipeSummary>> {
        let mut statement = super::summary_statement();

        if let Some(category) = category {
            statement
                .and_where(Expr::col((Recipe::Table, Recipe::Category)).eq(category.to_string()));
        }

        statement
            .order_by((Recipe::Table, Recipe::CreatedAt), Order::Desc)
            .order_by_expr(Expr::cust("\"recipe\".\"rowid\""), Order::Desc)
            .limit(limit);

        super::fetch_summaries(&self.read_db, &statement).await
    }

    pub async fn category_counts(&self) -> anyhow::Result<Vec<CategoryCount>> {
        let statement = sea_query::Query::select()
            .column(Recipe::Category)
            .expr_as(Func::count(Expr::col(Recipe::Id)), Alias::new("total"))
            .from(Recipe::Table)
            .group_by_col(Recipe::Category)
            .order_by(Recipe::Category, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, CategoryCountRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryCount {
                category: row.category.0,
                label: row.category.0.label(),
                count: row.total,
            })
            .collect())
    }

    pub async fn count(&self) -> anyhow::Result<u32> {
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let total = sqlx::query_scalar_with::<_, u32, _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(total)
    }
}
