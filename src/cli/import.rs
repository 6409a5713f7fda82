use recipebook::Config;
use recipebook_recipe::CreateInput;

/// Creates every recipe of a JSON array. Invalid entries are logged and
/// skipped.
#[tracing::instrument(skip(config))]
pub async fn import(config: &Config, file: String) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&file).await?;
    let recipes: Vec<CreateInput> = serde_json::from_str(&content)?;

    let pool = recipebook::create_pool(&config.database.url, 1).await?;
    let command = recipebook_recipe::Command(recipebook_shared::State::single(pool));

    let total = recipes.len();
    let mut imported = 0;

    for input in recipes {
        let name = input.name.to_owned();
        match command.create(input).await {
            Ok(id) => {
                imported += 1;
                tracing::debug!(recipe = id, name, "Recipe imported");
            }
            Err(err) => {
                tracing::error!(name, err = %err, "Failed to import recipe");
            }
        }
    }

    tracing::info!(imported, total, "Import finished");

    Ok(())
}
