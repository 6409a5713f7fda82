use recipebook::Config;

async fn state(config: &Config) -> anyhow::Result<recipebook_shared::State> {
    let pool = recipebook::create_pool(&config.database.url, 1).await?;

    Ok(recipebook_shared::State::single(pool))
}

#[tracing::instrument(skip(config))]
pub async fn create(config: &Config, username: String) -> anyhow::Result<()> {
    let command = recipebook_user::Command(state(config).await?);
    let id = command
        .create(recipebook_user::CreateInput { username })
        .await?;

    println!("{id}");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn token(config: &Config, username: String) -> anyhow::Result<()> {
    let query = recipebook_user::Query(state(config).await?);

    let Some(user) = query.find_by_username(&username).await? else {
        anyhow::bail!("user {username} not found");
    };

    println!("{}", recipebook::auth::generate_token(&config.jwt, user.id)?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn delete(config: &Config, username: String) -> anyhow::Result<()> {
    let state = state(config).await?;

    let Some(user) = recipebook_user::Query(state.clone())
        .find_by_username(&username)
        .await?
    else {
        anyhow::bail!("user {username} not found");
    };

    recipebook_user::Command(state).delete(user.id).await?;

    tracing::info!(username, "User deleted with their favorites");

    Ok(())
}
