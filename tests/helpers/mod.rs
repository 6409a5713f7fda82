//! Test app backed by a migrated SQLite database in a temp directory.

#![allow(dead_code)]

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use recipebook::config::{
    AuthConfig, Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig,
};
use recipebook_recipe::{Category, CreateInput};
use recipebook_shared::State;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: State,
    pub config: Config,
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
            issuer: "recipebook".to_string(),
            audience: "recipebook-web".to_string(),
        },
        auth: AuthConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let config = test_config(url);

    let pool = recipebook::create_pool(&config.database.url, 2).await?;
    recipebook::migrate(&pool).await?;

    let state = State::single(pool);
    let router = recipebook::router(recipebook::AppState::new(config.clone(), state.clone()));

    Ok(TestApp {
        router,
        state,
        config,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn create_user(&self, username: &str) -> anyhow::Result<String> {
        Ok(recipebook_user::Command(self.state.clone())
            .create(recipebook_user::CreateInput {
                username: username.to_owned(),
            })
            .await?)
    }

    pub fn token(&self, user_id: &str) -> String {
        recipebook::auth::generate_token(&self.config.jwt, user_id).unwrap()
    }

    pub async fn create_recipe(
        &self,
        name: &str,
        category: Category,
        prep_time: u32,
        cooking_time: u32,
        ingredients: &[&str],
    ) -> anyhow::Result<String> {
        Ok(recipebook_recipe::Command(self.state.clone())
            .create(CreateInput {
                name: name.to_owned(),
                description: format!("{name} description"),
                instructions: "Cook it".to_owned(),
                category,
                prep_time,
                cooking_time,
                servings: 2,
                ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
                image: None,
            })
            .await?)
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("cookie", format!("auth_token={token}"));
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

pub async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
