use std::ops::Deref;

use recipebook_db::table::User;
use recipebook_shared::State;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub created_at: i64,
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<UserRow>> {
        self.find_by(Expr::col(User::Id).eq(id.into())).await
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> anyhow::Result<Option<UserRow>> {
        self.find_by(Expr::col(User::Username).eq(username.into()))
            .await
    }

    async fn find_by(&self, condition: Expr) -> anyhow::Result<Option<UserRow>> {
        let statement = sea_query::Query::select()
            .columns([User::Id, User::Username, User::CreatedAt])
            .from(User::Table)
            .and_where(condition)
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
