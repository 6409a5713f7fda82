use recipebook_db::table::Favorite;
use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::Added;

impl super::Command {
    /// Saves a recipe for a user. Adding it twice is not an error.
    pub async fn add(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> recipebook_shared::Result<Added> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();
        let statement = sea_query::Query::insert()
            .into_table(Favorite::Table)
            .columns([Favorite::UserId, Favorite::RecipeId, Favorite::CreatedAt])
            .values_panic([
                user_id.as_str().into(),
                recipe_id.as_str().into(),
                recipebook_shared::now().into(),
            ])
            .on_conflict(
                OnConflict::columns([Favorite::UserId, Favorite::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = match sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
        {
            Ok(result) => result,
            Err(sqlx::Error::Database(err)) if err.is_foreign_key_violation() => {
                return Err(recipebook_shared::Error::NotFound);
            }
            Err(err) => return Err(err.into()),
        };

        let created = result.rows_affected() == 1;
        if created {
            tracing::info!(user = user_id, recipe = recipe_id, "Favorite added");
        }

        Ok(Added { created })
    }
}
