#![allow(dead_code)]

use recipebook_recipe::{Category, CreateInput};
use recipebook_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipebook_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub fn recipe(
    name: &str,
    category: Category,
    prep_time: u32,
    cooking_time: u32,
    servings: u32,
    ingredients: &[&str],
) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        description: format!("{name} description"),
        instructions: "Mix and serve".to_owned(),
        category,
        prep_time,
        cooking_time,
        servings,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        image: None,
    }
}

pub async fn create_user(state: &State, username: &str) -> anyhow::Result<String> {
    Ok(recipebook_user::Command(state.clone())
        .create(recipebook_user::CreateInput {
            username: username.to_owned(),
        })
        .await?)
}
