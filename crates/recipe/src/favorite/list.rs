use recipebook_db::table::{Favorite, Recipe};
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::RecipeSummary;

impl super::Command {
    /// Saved recipes, most recently saved first.
    pub async fn list(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<RecipeSummary>> {
        let statement = crate::query::summary_statement()
            .inner_join(
                Favorite::Table,
                Expr::col((Favorite::Table, Favorite::RecipeId))
                    .equals((Recipe::Table, Recipe::Id)),
            )
            .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(user_id.into()))
            .order_by((Favorite::Table, Favorite::CreatedAt), Order::Desc)
            .order_by_expr(Expr::cust("\"favorite\".\"rowid\""), Order::Desc)
            .to_owned();

        crate::query::fetch_summaries(&self.read_db, &statement).await
    }

    pub async fn is_favorite(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> anyhow::Result<bool> {
        let statement = sea_query::Query::select()
            .expr(Expr::val(1))
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id.into()))
            .and_where(Expr::col(Favorite::RecipeId).eq(recipe_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn count(&self, user_id: impl Into<String>) -> anyhow::Result<u32> {
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(Favorite::RecipeId)))
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let total = sqlx::query_scalar_with::<_, u32, _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(total)
    }
}
