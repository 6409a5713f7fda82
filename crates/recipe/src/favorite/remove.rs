use recipebook_db::table::Favorite;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::Removed;

impl super::Command {
    /// Removing a recipe that was never saved is not an error.
    pub async fn remove(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> recipebook_shared::Result<Removed> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();
        let statement = sea_query::Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(&user_id))
            .and_where(Expr::col(Favorite::RecipeId).eq(&recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        let removed = result.rows_affected() == 1;
        if removed {
            tracing::info!(user = user_id, recipe = recipe_id, "Favorite removed");
        }

        Ok(Removed { removed })
    }
}
