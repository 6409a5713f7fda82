use recipebook_db::table::Recipe;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deletes a recipe with its ingredient links and favorites.
    pub async fn delete(&self, id: impl Into<String>) -> recipebook_shared::Result<()> {
        let id = id.into();
        let statement = sea_query::Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(recipebook_shared::Error::NotFound);
        }

        tracing::info!(recipe = id, "Recipe deleted");

        Ok(())
    }
}
