use std::convert::Infallible;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::{
    TypedHeader,
    extract::CookieJar,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::routes::AppState;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

/// Signs a token for `sub` (a user id) valid for `expiration_days`.
pub fn generate_token(config: &JwtConfig, sub: impl Into<String>) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: sub.into(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the subject of a valid token.
pub fn validate_token(config: &JwtConfig, token: &str) -> anyhow::Result<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims.sub)
}

/// Token from the `auth_token` cookie, or else a bearer header.
async fn extract_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    let jar = CookieJar::from_request_parts(parts, state).await.ok()?;
    if let Some(cookie) = jar.get(AUTH_COOKIE_NAME) {
        return Some(cookie.value().to_owned());
    }

    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()?;

    Some(bearer.token().to_owned())
}

async fn resolve_user(parts: &mut Parts, state: &AppState) -> Option<recipebook_user::UserRow> {
    let token = extract_token(parts, state).await?;
    let user_id = match validate_token(&state.config.jwt, &token) {
        Ok(sub) => sub,
        Err(err) => {
            tracing::debug!(err = %err, "Rejected auth token");
            return None;
        }
    };

    match state.user_query.find(&user_id).await {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(user = user_id, err = %err, "Failed to load authenticated user");
            None
        }
    }
}

/// Authenticated user. Anonymous requests are redirected to the login page.
pub struct AuthUser(pub recipebook_user::UserRow);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_user(parts, state).await {
            Some(user) => Ok(AuthUser(user)),
            None => Err(Redirect::to(&state.config.auth.login_url)),
        }
    }
}

/// User when the request carries a valid token, anonymous otherwise.
pub struct MaybeUser(pub Option<recipebook_user::UserRow>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve_user(parts, state).await))
    }
}
