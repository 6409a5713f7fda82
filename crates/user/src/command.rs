use std::ops::Deref;

use recipebook_db::table::User;
use recipebook_shared::State;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

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
    #[validate(length(min = 3, max = 30))]
    pub username: String,
}

impl Command {
    /// Registers a user and returns its id. Usernames are unique.
    pub async fn create(&self, input: CreateInput) -> recipebook_shared::Result<String> {
        let input = CreateInput {
            username: input.username.trim().to_owned(),
        };
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let statement = sea_query::Query::insert()
            .into_table(User::Table)
            .columns([User::Id, User::Username, User::CreatedAt])
            .values_panic([
                id.as_str().into(),
                input.username.as_str().into(),
                recipebook_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "username",
                    ValidationError::new("taken").with_message("Username already used".into()),
                );
                return Err(errors.into());
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user = id, username = input.username, "User created");

        Ok(id)
    }

    /// Removes a user. Their favorites go with them.
    pub async fn delete(&self, id: impl Into<String>) -> recipebook_shared::Result<()> {
        let id = id.into();
        let statement = sea_query::Query::delete()
            .from_table(User::Table)
            .and_where(Expr::col(User::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(recipebook_shared::Error::NotFound);
        }

        tracing::info!(user = id, "User deleted");

        Ok(())
    }
}
