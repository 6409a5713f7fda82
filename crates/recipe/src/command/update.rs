use recipebook_db::table::{Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::{CreateInput, attach_ingredients};
use crate::query::search_key;

impl super::Command {
    /// Replaces every field and the ingredient set of a recipe.
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: CreateInput,
    ) -> recipebook_shared::Result<()> {
        input.validate()?;

        let id = id.into();
        let statement = sea_query::Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Name, input.name.trim().into()),
                (Recipe::SearchName, search_key(&input.name).into()),
                (Recipe::Description, input.description.to_owned().into()),
                (Recipe::Instructions, input.instructions.to_owned().into()),
                (Recipe::Category, input.category.to_string().into()),
                (Recipe::PrepTime, input.prep_time.into()),
                (Recipe::CookingTime, input.cooking_time.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::Image, input.image.to_owned().into()),
                (Recipe::UpdatedAt, recipebook_shared::now().into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(recipebook_shared::Error::NotFound);
        }

        let statement = sea_query::Query::delete()
            .from_table(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        attach_ingredients(&mut tx, &id, &input.ingredient_names()).await?;

        tx.commit().await?;

        tracing::info!(recipe = id, "Recipe updated");

        Ok(())
    }
}
