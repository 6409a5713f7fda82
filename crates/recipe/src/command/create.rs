use recipebook_db::table::Recipe;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::{CreateInput, attach_ingredients};
use crate::query::search_key;

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> recipebook_shared::Result<String> {
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let now = recipebook_shared::now();
        let statement = sea_query::Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::Name,
                Recipe::SearchName,
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
            .values_panic([
                id.as_str().into(),
                input.name.trim().into(),
                search_key(&input.name).into(),
                input.description.to_owned().into(),
                input.instructions.to_owned().into(),
                input.category.to_string().into(),
                input.prep_time.into(),
                input.cooking_time.into(),
                input.servings.into(),
                input.image.to_owned().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        attach_ingredients(&mut tx, &id, &input.ingredient_names()).await?;

        tx.commit().await?;

        tracing::info!(recipe = id, name = input.name, "Recipe created");

        Ok(id)
    }
}
